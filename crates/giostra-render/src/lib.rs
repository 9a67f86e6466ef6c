#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames, and ANSI presentation.
//!
//! # Role in giostra
//! `giostra-render` is the deterministic rendering engine. Widgets draw into
//! a [`frame::Frame`], whose [`buffer::Buffer`] is then written to the
//! terminal by the [`presenter::Presenter`].
//!
//! # Primary responsibilities
//! - **Cell/Buffer**: 2D grid of single-glyph styled cells.
//! - **Frame**: rendering surface with an optional mouse hit grid.
//! - **Presenter**: ANSI emitter onto any `io::Write`.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod presenter;
