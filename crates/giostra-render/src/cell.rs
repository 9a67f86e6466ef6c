#![forbid(unsafe_code)]

//! A single screen cell.

use giostra_style::Style;

/// What a cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Content {
    /// Nothing drawn yet; presents as a space.
    #[default]
    Empty,
    /// A single glyph.
    Glyph(char),
}

impl Content {
    /// The glyph, if one has been drawn.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Glyph(ch) => Some(ch),
        }
    }
}

/// One cell of the screen grid: a glyph plus its resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub content: Content,
    pub style: Style,
}

impl Cell {
    /// Create an unstyled cell from a glyph.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            content: Content::Glyph(ch),
            style: Style::new(),
        }
    }

    /// Create a styled cell.
    #[must_use]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self {
            content: Content::Glyph(ch),
            style,
        }
    }

    /// Whether nothing has been drawn into this cell.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.content, Content::Empty)
    }

    /// Replace the cell's style, keeping its glyph.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giostra_style::Color;

    #[test]
    fn empty_cell_has_no_char() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.content.as_char(), None);
    }

    #[test]
    fn glyph_round_trip() {
        let cell = Cell::from_char('x');
        assert!(!cell.is_empty());
        assert_eq!(cell.content.as_char(), Some('x'));
    }

    #[test]
    fn with_style_keeps_glyph() {
        let cell = Cell::from_char('y').with_style(Style::new().fg(Color::RED));
        assert_eq!(cell.content.as_char(), Some('y'));
        assert_eq!(cell.style.fg, Some(Color::RED));
    }
}
