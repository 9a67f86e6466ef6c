//! Showcase screens.
//!
//! Both carousel screens instantiate the same engine with terminal-scale
//! breakpoints and metrics; nothing about the position arithmetic is
//! duplicated between them.

pub mod experience;
pub mod testimonials;

use giostra_core::viewport::Breakpoints;
use giostra_widgets::carousel::{CardMetrics, CarouselConfig};

/// Breakpoints in terminal columns: 120+ is wide, 80+ is medium.
#[must_use]
pub fn terminal_breakpoints() -> Breakpoints {
    Breakpoints::new(120, 80)
}

/// Card metrics in cell units for the showcase carousels.
#[must_use]
pub fn terminal_metrics() -> CardMetrics {
    CardMetrics {
        card_width: 28.0,
        gap: 2.0,
        narrow_margins: None,
    }
}

/// Shared engine configuration for both showcase carousels.
#[must_use]
pub fn carousel_config() -> CarouselConfig {
    CarouselConfig {
        breakpoints: terminal_breakpoints(),
        metrics: terminal_metrics(),
        ..CarouselConfig::default()
    }
}
