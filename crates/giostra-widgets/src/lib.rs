#![forbid(unsafe_code)]

//! Core widgets for giostra.

pub mod carousel;
pub mod dots;
pub mod modal;
pub mod mouse;

use giostra_core::geometry::Rect;
use giostra_render::buffer::Buffer;
use giostra_render::cell::Cell;
use giostra_render::frame::Frame;
use giostra_style::Style;
use unicode_width::UnicodeWidthChar;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Draw a text span starting at (x, y), clipped at `clip_right`.
///
/// Returns the x coordinate one past the last cell written. Wide glyphs
/// occupy their display width; a wide glyph that would straddle the clip
/// edge is not drawn.
pub fn draw_text_span(
    frame: &mut Frame,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
    clip_right: u16,
) -> u16 {
    let mut cursor = x;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0) as u16;
        if width == 0 {
            continue;
        }
        if cursor >= clip_right || clip_right - cursor < width {
            break;
        }
        frame.buffer.set(cursor, y, Cell::styled(ch, style));
        // Blank the continuation cell of a wide glyph.
        for offset in 1..width {
            frame
                .buffer
                .set(cursor + offset, y, Cell::styled(' ', style));
        }
        cursor += width;
    }
    cursor
}

/// Merge a style over every cell in `area`.
pub fn set_style_area(buffer: &mut Buffer, area: Rect, style: Style) {
    buffer.set_style_area(area, style);
}
