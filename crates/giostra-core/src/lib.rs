#![forbid(unsafe_code)]

//! Core: input events, geometry, viewport breakpoints, timers, and gestures.
//!
//! # Role in giostra
//! `giostra-core` is the input layer. It owns the canonical event types the
//! widget layer consumes, the geometric primitives everything renders with,
//! and the polled timer handles that drive debounce and auto-advance.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, mouse, resize, focus, tick).
//! - **Viewport**: breakpoint classification of a viewport width.
//! - **Timer**: polled debounce and auto-advance deadline handles.
//! - **Gesture**: horizontal drag/swipe recognition from raw mouse events.
//!
//! # How it fits in the system
//! `giostra-widgets` consumes `Event` values and owns timer/gesture handles
//! per component instance. The render kernel (`giostra-render`) is
//! independent of input, so this crate is the bridge between terminal I/O
//! and the deterministic render pipeline.

pub mod event;
pub mod geometry;
pub mod gesture;
pub mod timer;
pub mod viewport;
