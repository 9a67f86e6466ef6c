//! Cycling title typewriter.
//!
//! Types a title one character at a time, holds it, deletes it faster than it
//! was typed, pauses briefly, then moves to the next title, forever. All
//! timing is injected-clock so tests can drive the phases deterministically.

use std::time::Duration;

use web_time::Instant;

const TYPE_INTERVAL: Duration = Duration::from_millis(100);
const DELETE_INTERVAL: Duration = Duration::from_millis(50);
const FULL_PAUSE: Duration = Duration::from_millis(1500);
const EMPTY_PAUSE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    HoldingFull,
    Deleting,
    HoldingEmpty,
}

/// Typewriter state machine over a fixed title list.
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    title_index: usize,
    shown: usize,
    phase: Phase,
    next_due: Instant,
}

impl Typewriter {
    /// Create a typewriter over `titles`, starting empty.
    #[must_use]
    pub fn new(titles: impl IntoIterator<Item = impl Into<String>>, now: Instant) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            title_index: 0,
            shown: 0,
            phase: Phase::Typing,
            next_due: now + TYPE_INTERVAL,
        }
    }

    /// Currently displayed prefix of the active title.
    #[must_use]
    pub fn text(&self) -> String {
        match self.titles.get(self.title_index) {
            Some(title) => title.chars().take(self.shown).collect(),
            None => String::new(),
        }
    }

    fn current_len(&self) -> usize {
        self.titles
            .get(self.title_index)
            .map_or(0, |title| title.chars().count())
    }

    /// Advance the state machine; returns `true` when the text changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.titles.is_empty() || now < self.next_due {
            return false;
        }
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= self.current_len() {
                    self.phase = Phase::HoldingFull;
                    self.next_due = now + FULL_PAUSE;
                } else {
                    self.next_due = now + TYPE_INTERVAL;
                }
                true
            }
            Phase::HoldingFull => {
                self.phase = Phase::Deleting;
                self.next_due = now + DELETE_INTERVAL;
                false
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::HoldingEmpty;
                    self.next_due = now + EMPTY_PAUSE;
                } else {
                    self.next_due = now + DELETE_INTERVAL;
                }
                true
            }
            Phase::HoldingEmpty => {
                self.title_index = (self.title_index + 1) % self.titles.len();
                self.phase = Phase::Typing;
                self.next_due = now + TYPE_INTERVAL;
                false
            }
        }
    }
}
