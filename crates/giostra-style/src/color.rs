#![forbid(unsafe_code)]

//! Terminal color values.

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default color.
    #[default]
    Reset,
    /// One of the 256 indexed palette colors (0-15 are the classic ANSI set).
    Ansi(u8),
    /// 24-bit truecolor.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Create a truecolor value.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    pub const BLACK: Self = Self::Ansi(0);
    pub const RED: Self = Self::Ansi(1);
    pub const GREEN: Self = Self::Ansi(2);
    pub const YELLOW: Self = Self::Ansi(3);
    pub const BLUE: Self = Self::Ansi(4);
    pub const MAGENTA: Self = Self::Ansi(5);
    pub const CYAN: Self = Self::Ansi(6);
    pub const WHITE: Self = Self::Ansi(7);
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn default_is_reset() {
        assert_eq!(Color::default(), Color::Reset);
    }

    #[test]
    fn rgb_constructor() {
        assert_eq!(Color::rgb(1, 2, 3), Color::Rgb(1, 2, 3));
    }
}
