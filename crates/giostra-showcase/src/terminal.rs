//! Terminal session: raw mode, alternate screen, and event translation.
//!
//! The session is RAII: constructing it claims the terminal and dropping it
//! restores cooked mode even on panic unwind. Errors during teardown are
//! swallowed; there is nowhere sensible to report them from `drop`.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, KeyEventKind, MouseEventKind as CtMouseKind,
};
use crossterm::{cursor, execute, terminal};
use giostra_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// An exclusive claim on the terminal for the app's lifetime.
#[derive(Debug)]
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self { out })
    }

    /// Current terminal size in (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for the next input event.
    ///
    /// Returns `None` on timeout (the caller treats that as a tick) and for
    /// terminal events the app has no use for.
    pub fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(convert(event::read()?))
    }

    /// Writer for the presenter.
    pub fn writer(&mut self) -> &mut impl Write {
        &mut self.out
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn convert(raw: event::Event) -> Option<Event> {
    match raw {
        event::Event::Key(key) => {
            if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                return None;
            }
            let code = convert_key_code(key.code)?;
            Some(Event::Key(
                KeyEvent::new(code).with_modifiers(convert_modifiers(key.modifiers)),
            ))
        }
        event::Event::Mouse(mouse) => {
            let kind = convert_mouse_kind(mouse.kind)?;
            let mut converted = MouseEvent::new(kind, mouse.column, mouse.row);
            converted.modifiers = convert_modifiers(mouse.modifiers);
            Some(Event::Mouse(converted))
        }
        event::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        event::Event::FocusGained => Some(Event::Focus(true)),
        event::Event::FocusLost => Some(Event::Focus(false)),
        _ => None,
    }
}

fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
    match code {
        event::KeyCode::Char(ch) => Some(KeyCode::Char(ch)),
        event::KeyCode::Enter => Some(KeyCode::Enter),
        event::KeyCode::Esc => Some(KeyCode::Escape),
        event::KeyCode::Backspace => Some(KeyCode::Backspace),
        event::KeyCode::Tab | event::KeyCode::BackTab => Some(KeyCode::Tab),
        event::KeyCode::Up => Some(KeyCode::Up),
        event::KeyCode::Down => Some(KeyCode::Down),
        event::KeyCode::Left => Some(KeyCode::Left),
        event::KeyCode::Right => Some(KeyCode::Right),
        event::KeyCode::Home => Some(KeyCode::Home),
        event::KeyCode::End => Some(KeyCode::End),
        _ => None,
    }
}

fn convert_modifiers(raw: event::KeyModifiers) -> Modifiers {
    let mut modifiers = Modifiers::NONE;
    if raw.contains(event::KeyModifiers::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    if raw.contains(event::KeyModifiers::ALT) {
        modifiers |= Modifiers::ALT;
    }
    if raw.contains(event::KeyModifiers::CONTROL) {
        modifiers |= Modifiers::CTRL;
    }
    modifiers
}

fn convert_mouse_kind(kind: CtMouseKind) -> Option<MouseEventKind> {
    match kind {
        CtMouseKind::Down(button) => Some(MouseEventKind::Down(convert_button(button)?)),
        CtMouseKind::Up(button) => Some(MouseEventKind::Up(convert_button(button)?)),
        CtMouseKind::Drag(button) => Some(MouseEventKind::Drag(convert_button(button)?)),
        CtMouseKind::Moved => Some(MouseEventKind::Moved),
        CtMouseKind::ScrollUp => Some(MouseEventKind::ScrollUp),
        CtMouseKind::ScrollDown => Some(MouseEventKind::ScrollDown),
        CtMouseKind::ScrollLeft => Some(MouseEventKind::ScrollLeft),
        CtMouseKind::ScrollRight => Some(MouseEventKind::ScrollRight),
    }
}

fn convert_button(button: event::MouseButton) -> Option<MouseButton> {
    match button {
        event::MouseButton::Left => Some(MouseButton::Left),
        event::MouseButton::Right => Some(MouseButton::Right),
        event::MouseButton::Middle => Some(MouseButton::Middle),
    }
}
