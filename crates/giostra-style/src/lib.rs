#![forbid(unsafe_code)]

//! Style types for giostra with cascading merge semantics.
//!
//! # Role in giostra
//! `giostra-style` is the shared vocabulary for colors and styling. Widgets
//! and the render kernel use these types to stay visually consistent without
//! dragging in rendering or runtime dependencies.

pub mod color;
pub mod style;

pub use color::Color;
pub use style::{Style, StyleFlags};
