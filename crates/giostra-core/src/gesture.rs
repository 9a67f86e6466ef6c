#![forbid(unsafe_code)]

//! Horizontal swipe recognition from raw mouse events.
//!
//! [`SwipeTracker`] is a stateful processor that watches mouse-down → drag →
//! mouse-up sequences and emits a [`Swipe`] when the pointer travelled far
//! enough horizontally. Carousels feed it their container's mouse events to
//! get swipe navigation.
//!
//! # Invariants
//!
//! 1. A swipe is emitted at most once per down/up interaction, on the up.
//! 2. Releases below the distance threshold emit nothing (treated as a
//!    click, which the hit grid handles separately).
//! 3. After [`cancel`](SwipeTracker::cancel) (e.g. Escape mid-drag) the
//!    in-flight interaction is discarded and the next down starts fresh.

use crate::event::{MouseButton, MouseEvent, MouseEventKind};

/// Direction the pointer travelled during a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer moved left (content should advance).
    Left,
    /// Pointer moved right (content should retreat).
    Right,
}

/// A completed horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swipe {
    pub direction: SwipeDirection,
    /// Horizontal distance in cells.
    pub distance: u16,
}

/// Thresholds for swipe recognition.
#[derive(Debug, Clone, Copy)]
pub struct SwipeConfig {
    /// Minimum horizontal distance (cells) before a release counts as a swipe.
    pub distance_threshold: u16,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct DragTracker {
    start_x: u16,
    last_x: u16,
}

/// Stateful swipe recognizer.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    config: SwipeConfig,
    drag: Option<DragTracker>,
}

impl SwipeTracker {
    /// Create a tracker with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SwipeConfig::default())
    }

    /// Create a tracker with explicit thresholds.
    #[must_use]
    pub fn with_config(config: SwipeConfig) -> Self {
        Self { config, drag: None }
    }

    /// Whether a drag is currently in flight.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Feed a mouse event; returns a swipe when one completes.
    pub fn process(&mut self, event: &MouseEvent) -> Option<Swipe> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag = Some(DragTracker {
                    start_x: event.x,
                    last_x: event.x,
                });
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(drag) = &mut self.drag {
                    drag.last_x = event.x;
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let drag = self.drag.take()?;
                let end_x = event.x;
                let (direction, distance) = if end_x < drag.start_x {
                    (SwipeDirection::Left, drag.start_x - end_x)
                } else {
                    (SwipeDirection::Right, end_x - drag.start_x)
                };
                if distance >= self.config.distance_threshold {
                    Some(Swipe {
                        direction,
                        distance,
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Discard any in-flight drag (Escape, focus loss).
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(x: u16) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, 0)
    }

    fn drag(x: u16) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Drag(MouseButton::Left), x, 0)
    }

    fn up(x: u16) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Up(MouseButton::Left), x, 0)
    }

    #[test]
    fn leftward_drag_emits_left_swipe() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.process(&down(20)), None);
        assert_eq!(tracker.process(&drag(15)), None);
        let swipe = tracker.process(&up(10)).unwrap();
        assert_eq!(swipe.direction, SwipeDirection::Left);
        assert_eq!(swipe.distance, 10);
    }

    #[test]
    fn rightward_drag_emits_right_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.process(&down(5));
        let swipe = tracker.process(&up(12)).unwrap();
        assert_eq!(swipe.direction, SwipeDirection::Right);
        assert_eq!(swipe.distance, 7);
    }

    #[test]
    fn short_release_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.process(&down(10));
        assert_eq!(tracker.process(&up(12)), None);
    }

    #[test]
    fn up_without_down_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.process(&up(10)), None);
    }

    #[test]
    fn cancel_discards_in_flight_drag() {
        let mut tracker = SwipeTracker::new();
        tracker.process(&down(0));
        assert!(tracker.is_dragging());
        tracker.cancel();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.process(&up(30)), None);
    }

    #[test]
    fn one_swipe_per_interaction() {
        let mut tracker = SwipeTracker::new();
        tracker.process(&down(20));
        assert!(tracker.process(&up(0)).is_some());
        // Second up with no new down emits nothing.
        assert_eq!(tracker.process(&up(0)), None);
    }

    #[test]
    fn right_button_is_ignored() {
        let mut tracker = SwipeTracker::new();
        let event = MouseEvent::new(MouseEventKind::Down(MouseButton::Right), 0, 0);
        tracker.process(&event);
        assert!(!tracker.is_dragging());
    }
}
