#![forbid(unsafe_code)]

//! Polled timer handles: debounce and auto-advance.
//!
//! Both handles are owned by a component instance and polled from the event
//! loop's tick; there are no background threads. Time is always injected so
//! tests can drive the clock.
//!
//! # Invariants
//!
//! 1. A [`Debouncer`] fires at most once per quiet window, and only after the
//!    most recent `trigger` — re-triggering restarts the window, effectively
//!    cancelling the pending fire.
//! 2. An [`AutoAdvance`] never fires while paused, and resuming schedules the
//!    next fire a full period ahead (no catch-up bursts).

use std::time::Duration;

use web_time::Instant;

/// Collapses a rapidly repeating event into one deferred firing.
///
/// Call [`trigger`](Self::trigger) on every occurrence of the noisy event and
/// [`poll`](Self::poll) on every tick; `poll` returns `true` exactly once,
/// after a full quiet window has elapsed since the last trigger.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Quiet window used for resize debouncing.
    pub const RESIZE_QUIET: Duration = Duration::from_millis(250);

    /// Create a debouncer with the given quiet window.
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Record an occurrence of the event, restarting the quiet window.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    /// Whether a firing is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the quiet window has elapsed since the last trigger.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Repeating deadline with pause/resume, used for carousel auto-advance.
///
/// This is a simple pause/resume handle, not a cancellable-task abstraction:
/// one instance is one timer.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    period: Duration,
    next_due: Option<Instant>,
}

impl AutoAdvance {
    /// Period used by carousel auto-advance.
    pub const CAROUSEL_PERIOD: Duration = Duration::from_secs(5);

    /// Create a paused timer with the given period.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Create a running timer whose first fire is one period from `now`.
    #[must_use]
    pub fn started(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: Some(now + period),
        }
    }

    /// Whether the timer is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Stop firing until resumed (pointer entered the carousel).
    pub fn pause(&mut self) {
        self.next_due = None;
    }

    /// Resume with a fresh full period (pointer left the carousel).
    pub fn resume(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Fire if the period has elapsed, scheduling the next fire.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn debouncer_fires_after_quiet_window() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(250));
        debouncer.trigger(t0);
        assert!(!debouncer.poll(t0));
        assert!(!debouncer.poll(t0 + ms(249)));
        assert!(debouncer.poll(t0 + ms(250)));
        // One-shot: does not fire again.
        assert!(!debouncer.poll(t0 + ms(500)));
    }

    #[test]
    fn debouncer_retrigger_restarts_window() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(250));
        debouncer.trigger(t0);
        debouncer.trigger(t0 + ms(200));
        // Original deadline passed, but the retrigger moved it.
        assert!(!debouncer.poll(t0 + ms(300)));
        assert!(debouncer.poll(t0 + ms(450)));
    }

    #[test]
    fn debouncer_idle_never_fires() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(250));
        assert!(!debouncer.poll(t0 + ms(10_000)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn debouncer_cancel_drops_pending() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(ms(250));
        debouncer.trigger(t0);
        debouncer.cancel();
        assert!(!debouncer.poll(t0 + ms(300)));
    }

    #[test]
    fn auto_advance_fires_every_period() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::started(ms(100), t0);
        assert!(!timer.poll(t0 + ms(99)));
        assert!(timer.poll(t0 + ms(100)));
        assert!(!timer.poll(t0 + ms(150)));
        assert!(timer.poll(t0 + ms(200)));
    }

    #[test]
    fn auto_advance_pause_suppresses_firing() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::started(ms(100), t0);
        timer.pause();
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + ms(1_000)));
    }

    #[test]
    fn auto_advance_resume_schedules_full_period() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::started(ms(100), t0);
        timer.pause();
        timer.resume(t0 + ms(500));
        assert!(!timer.poll(t0 + ms(599)));
        assert!(timer.poll(t0 + ms(600)));
    }

    #[test]
    fn auto_advance_new_starts_paused() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::new(ms(100));
        assert!(!timer.is_running());
        assert!(!timer.poll(t0 + ms(1_000)));
    }
}
