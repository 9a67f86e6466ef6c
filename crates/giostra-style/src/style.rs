#![forbid(unsafe_code)]

//! Style values with cascading merge semantics.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// A text style: optional foreground, background, and attribute flags.
///
/// Unset fields inherit from whatever the style is merged over, giving
/// CSS-like cascade behavior: `a.merge(&b)` keeps `a`'s fields where set and
/// falls back to `b`'s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style (inherits everything).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Add bold to the attribute flags.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flag(StyleFlags::BOLD)
    }

    /// Add dim to the attribute flags.
    #[must_use]
    pub fn dim(self) -> Self {
        self.with_flag(StyleFlags::DIM)
    }

    /// Add reverse-video to the attribute flags.
    #[must_use]
    pub fn reversed(self) -> Self {
        self.with_flag(StyleFlags::REVERSE)
    }

    fn with_flag(mut self, flag: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | flag);
        self
    }

    /// Cascade: this style's set fields win, unset fields fall back to `base`.
    #[must_use]
    pub fn merge(&self, base: &Style) -> Style {
        Style {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            attrs: self.attrs.or(base.attrs),
        }
    }
}
