#![forbid(unsafe_code)]

//! ANSI presentation of a buffer onto any `io::Write`.
//!
//! The presenter repaints whole frames: it addresses each row, emits SGR
//! sequences only when the style changes along a run, and resets attributes
//! at the end. There is no frame diffing; the showcase repaints on every
//! tick and terminals handle full repaints of these sizes comfortably.

use std::io::{self, Write};

use giostra_style::{Color, Style, StyleFlags};

use crate::buffer::Buffer;
use crate::frame::Frame;

/// Stateful ANSI emitter.
#[derive(Debug, Default)]
pub struct Presenter {
    current: Option<Style>,
}

impl Presenter {
    /// Create a presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a full frame to `out`, positioning the cursor afterwards.
    pub fn present<W: Write>(&mut self, frame: &Frame, out: &mut W) -> io::Result<()> {
        self.present_buffer(&frame.buffer, out)?;
        match frame.cursor_position {
            Some((x, y)) => {
                write!(out, "\x1b[{};{}H\x1b[?25h", y + 1, x + 1)?;
            }
            None => {
                write!(out, "\x1b[?25l")?;
            }
        }
        out.flush()
    }

    /// Write every row of `buffer` to `out`.
    pub fn present_buffer<W: Write>(&mut self, buffer: &Buffer, out: &mut W) -> io::Result<()> {
        self.current = None;
        for y in 0..buffer.height() {
            // 1-indexed cursor addressing.
            write!(out, "\x1b[{};1H", y + 1)?;
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                if self.current != Some(cell.style) {
                    write_sgr(out, &cell.style)?;
                    self.current = Some(cell.style);
                }
                let ch = cell.content.as_char().unwrap_or(' ');
                write!(out, "{ch}")?;
            }
        }
        write!(out, "\x1b[0m")?;
        self.current = None;
        Ok(())
    }
}

fn write_sgr<W: Write>(out: &mut W, style: &Style) -> io::Result<()> {
    // Reset, then rebuild. Correct over minimal at the cost of a few bytes.
    write!(out, "\x1b[0m")?;
    if let Some(attrs) = style.attrs {
        if attrs.contains(StyleFlags::BOLD) {
            write!(out, "\x1b[1m")?;
        }
        if attrs.contains(StyleFlags::DIM) {
            write!(out, "\x1b[2m")?;
        }
        if attrs.contains(StyleFlags::ITALIC) {
            write!(out, "\x1b[3m")?;
        }
        if attrs.contains(StyleFlags::UNDERLINE) {
            write!(out, "\x1b[4m")?;
        }
        if attrs.contains(StyleFlags::REVERSE) {
            write!(out, "\x1b[7m")?;
        }
    }
    if let Some(fg) = style.fg {
        write_color(out, fg, true)?;
    }
    if let Some(bg) = style.bg {
        write_color(out, bg, false)?;
    }
    Ok(())
}

fn write_color<W: Write>(out: &mut W, color: Color, foreground: bool) -> io::Result<()> {
    match color {
        Color::Reset => {
            let code = if foreground { 39 } else { 49 };
            write!(out, "\x1b[{code}m")
        }
        Color::Ansi(n) if n < 8 => {
            let base = if foreground { 30 } else { 40 };
            write!(out, "\x1b[{}m", base + n as u16)
        }
        Color::Ansi(n) => {
            let selector = if foreground { 38 } else { 48 };
            write!(out, "\x1b[{selector};5;{n}m")
        }
        Color::Rgb(r, g, b) => {
            let selector = if foreground { 38 } else { 48 };
            write!(out, "\x1b[{selector};2;{r};{g};{b}m")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    fn render_to_string(buffer: &Buffer) -> String {
        let mut out = Vec::new();
        Presenter::new()
            .present_buffer(buffer, &mut out)
            .expect("write to vec");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn glyphs_appear_in_output() {
        let mut buf = Buffer::new(3, 1);
        buf.set(0, 0, Cell::from_char('h'));
        buf.set(1, 0, Cell::from_char('i'));
        let out = render_to_string(&buf);
        assert!(out.contains("hi "));
    }

    #[test]
    fn empty_cells_present_as_spaces() {
        let buf = Buffer::new(2, 1);
        let out = render_to_string(&buf);
        assert!(out.contains("  "));
    }

    #[test]
    fn style_change_emits_sgr() {
        let mut buf = Buffer::new(2, 1);
        buf.set(
            0,
            0,
            Cell::styled('a', Style::new().fg(Color::Ansi(1)).bold()),
        );
        let out = render_to_string(&buf);
        assert!(out.contains("\x1b[1m"), "bold attribute missing: {out:?}");
        assert!(out.contains("\x1b[31m"), "red foreground missing: {out:?}");
    }

    #[test]
    fn rgb_colors_use_truecolor_sequence() {
        let mut buf = Buffer::new(1, 1);
        buf.set(0, 0, Cell::styled('x', Style::new().fg(Color::rgb(1, 2, 3))));
        let out = render_to_string(&buf);
        assert!(out.contains("\x1b[38;2;1;2;3m"));
    }

    #[test]
    fn output_ends_with_reset() {
        let buf = Buffer::new(1, 1);
        let out = render_to_string(&buf);
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn unchanged_style_does_not_repeat_sgr() {
        let mut buf = Buffer::new(3, 1);
        let style = Style::new().fg(Color::Ansi(2));
        for x in 0..3 {
            buf.set(x, 0, Cell::styled('g', style));
        }
        let out = render_to_string(&buf);
        // One SGR for the run, not one per cell.
        assert_eq!(out.matches("\x1b[32m").count(), 1);
    }

    #[test]
    fn present_hides_cursor_when_unset() {
        let frame = Frame::new(2, 1);
        let mut out = Vec::new();
        Presenter::new().present(&frame, &mut out).expect("present");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("\x1b[?25l"));
    }

    #[test]
    fn present_places_cursor_when_set() {
        let mut frame = Frame::new(5, 2);
        frame.set_cursor(Some((3, 1)));
        let mut out = Vec::new();
        Presenter::new().present(&frame, &mut out).expect("present");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("\x1b[2;4H"));
        assert!(text.contains("\x1b[?25h"));
    }
}
