#![forbid(unsafe_code)]

//! Shared mouse handling result type.

/// Outcome of routing a mouse event to a widget's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event was not for this widget.
    Ignored,
    /// A new index was selected.
    Selected(usize),
    /// The already-selected index was clicked again.
    Activated(usize),
}
