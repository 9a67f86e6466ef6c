//! Application event loop.
//!
//! A single loop: wait briefly for input, translate it, tick every polled
//! timer, then repaint the whole frame. There is no diffing and no partial
//! redraw; the presenter repaints everything each pass.

use std::io;
use std::time::Duration;

use giostra_core::event::{Event, KeyCode};
use giostra_core::geometry::Rect;
use giostra_render::frame::Frame;
use giostra_render::presenter::Presenter;
use giostra_style::Style;
use giostra_widgets::draw_text_span;
use web_time::Instant;

use crate::celebration::Celebration;
use crate::contact::{ContactForm, Field};
use crate::data::typewriter_titles;
use crate::screens::experience::ExperienceScreen;
use crate::screens::testimonials::TestimonialsScreen;
use crate::terminal::TerminalSession;
use crate::typewriter::Typewriter;

const TICK: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Testimonials,
    Experience,
    Contact,
}

impl Screen {
    fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Home),
            '2' => Some(Self::Testimonials),
            '3' => Some(Self::Experience),
            '4' => Some(Self::Contact),
            _ => None,
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    typewriter: Typewriter,
    celebration: Celebration,
    testimonials: TestimonialsScreen,
    experience: ExperienceScreen,
    contact: ContactForm,
    width: u16,
    height: u16,
    should_quit: bool,
}

impl App {
    /// Create the app for an initial terminal size.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let now = Instant::now();
        let mut celebration = Celebration::new();
        celebration.maybe_start_today(width, height);
        Self {
            screen: Screen::Home,
            typewriter: Typewriter::new(typewriter_titles().iter().copied(), now),
            celebration,
            testimonials: TestimonialsScreen::new(u32::from(width), now),
            experience: ExperienceScreen::new(u32::from(width), now),
            contact: ContactForm::new(),
            width,
            height,
            should_quit: false,
        }
    }

    fn handle_event(&mut self, event: &Event, frame: &Frame) {
        let now = Instant::now();
        if let Event::Resize { width, height } = *event {
            self.width = width;
            self.height = height;
            self.testimonials.notify_resize(now);
            self.experience.notify_resize(now);
            return;
        }

        // The open modal captures everything, including quit keys.
        if self.screen == Screen::Experience && self.experience.modal_open() {
            self.experience.handle_event(event, frame, now);
            return;
        }

        if let Event::Key(key) = event {
            if key.is_char('c') && key.ctrl() {
                self.should_quit = true;
                return;
            }
            // The contact form owns printable input while it is active.
            if self.screen == Screen::Contact {
                if key.code == KeyCode::Escape {
                    self.screen = Screen::Home;
                } else {
                    self.contact.handle_key(key, now);
                }
                return;
            }
            if key.is_char('q') {
                self.should_quit = true;
                return;
            }
            if let KeyCode::Char(digit) = key.code
                && let Some(screen) = Screen::from_digit(digit)
            {
                self.screen = screen;
                return;
            }
        }

        match self.screen {
            Screen::Testimonials => {
                self.testimonials.handle_event(event, frame, now);
            }
            Screen::Experience => {
                self.experience.handle_event(event, frame, now);
            }
            Screen::Home | Screen::Contact => {}
        }
    }

    fn tick(&mut self) {
        let now = Instant::now();
        let width = u32::from(self.width);
        self.typewriter.poll(now);
        self.celebration.tick();
        self.testimonials.tick(now, width);
        self.experience.tick(now, width);
        self.contact.poll(now);
    }

    fn render(&mut self, frame: &mut Frame) {
        let bounds = frame.bounds();
        if bounds.is_empty() {
            return;
        }
        self.render_header(frame, bounds);
        let body = Rect::new(
            bounds.x,
            bounds.y + 2,
            bounds.width,
            bounds.height.saturating_sub(2),
        );
        match self.screen {
            Screen::Home => self.render_home(frame, body),
            Screen::Testimonials => self.testimonials.render(body, frame),
            Screen::Experience => self.experience.render(body, frame),
            Screen::Contact => self.render_contact(frame, body),
        }
    }

    fn render_header(&self, frame: &mut Frame, bounds: Rect) {
        let labels = [
            (Screen::Home, "1 Home"),
            (Screen::Testimonials, "2 Testimonials"),
            (Screen::Experience, "3 Experience"),
            (Screen::Contact, "4 Contact"),
        ];
        let mut x = bounds.x + 1;
        for (screen, label) in labels {
            let style = if screen == self.screen {
                Style::new().bold().reversed()
            } else {
                Style::new()
            };
            x = draw_text_span(frame, x, bounds.y, label, style, bounds.right());
            x = x.saturating_add(3);
        }
        draw_text_span(
            frame,
            bounds.x + 1,
            bounds.y + 1,
            "q quits (except while typing), Esc leaves the contact form",
            Style::new().dim(),
            bounds.right(),
        );
    }

    fn render_home(&self, frame: &mut Frame, body: Rect) {
        if body.height < 4 {
            return;
        }
        draw_text_span(
            frame,
            body.x + 1,
            body.y + 1,
            "Hi, I'm a teacher.",
            Style::new().bold(),
            body.right(),
        );
        let typed = format!("{}_", self.typewriter.text());
        draw_text_span(frame, body.x + 1, body.y + 2, &typed, Style::new(), body.right());
        draw_text_span(
            frame,
            body.x + 1,
            body.y + 4,
            "Browse testimonials and experience with the keys above.",
            Style::new().dim(),
            body.right(),
        );
        self.celebration.render(body, frame);
    }

    fn render_contact(&self, frame: &mut Frame, body: Rect) {
        let fields = [Field::Name, Field::Email, Field::Subject, Field::Message];
        let mut y = body.y + 1;
        for field in fields {
            if y + 1 >= body.bottom() {
                return;
            }
            let focused = self.contact.focus() == field;
            let marker = if focused { "> " } else { "  " };
            let label = format!("{marker}{}:", field.label());
            let style = if focused {
                Style::new().bold()
            } else {
                Style::new()
            };
            draw_text_span(frame, body.x + 1, y, &label, style, body.right());
            let value_x = body.x + 12;
            let shown = draw_text_span(
                frame,
                value_x,
                y,
                self.contact.value(field),
                Style::new(),
                body.right().saturating_sub(1),
            );
            if focused && !self.contact.is_submitting() {
                frame.set_cursor(Some((shown, y)));
            }
            y += 2;
        }
        if y < body.bottom() {
            let style = if self.contact.is_submitting() {
                Style::new().dim()
            } else {
                Style::new().bold().reversed()
            };
            draw_text_span(
                frame,
                body.x + 1,
                y,
                &format!("[ {} ]", self.contact.submit_label()),
                style,
                body.right(),
            );
        }
        if let Some(notice) = self.contact.notice()
            && y + 2 < body.bottom()
        {
            draw_text_span(frame, body.x + 1, y + 2, notice, Style::new().bold(), body.right());
        }
    }
}

/// Run the showcase until the user quits.
pub fn run() -> io::Result<()> {
    let mut session = TerminalSession::new()?;
    let (width, height) = session.size()?;
    let mut app = App::new(width, height);
    let mut frame = Frame::with_hit_grid(width, height);
    let mut presenter = Presenter::new();

    while !app.should_quit {
        if let Some(event) = session.next_event(TICK)? {
            app.handle_event(&event, &frame);
        }
        app.tick();
        if (app.width, app.height) != (frame.width(), frame.height()) {
            frame = Frame::with_hit_grid(app.width, app.height);
        }
        frame.clear();
        app.render(&mut frame);
        presenter.present(&frame, session.writer())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use giostra_core::event::{KeyEvent, Modifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn digit_keys_switch_screens() {
        let mut app = App::new(130, 40);
        let frame = Frame::with_hit_grid(130, 40);
        app.handle_event(&key(KeyCode::Char('3')), &frame);
        assert_eq!(app.screen, Screen::Experience);
        app.handle_event(&key(KeyCode::Char('2')), &frame);
        assert_eq!(app.screen, Screen::Testimonials);
    }

    #[test]
    fn q_quits_outside_the_contact_form() {
        let mut app = App::new(130, 40);
        let frame = Frame::with_hit_grid(130, 40);
        app.handle_event(&key(KeyCode::Char('q')), &frame);
        assert!(app.should_quit);
    }

    #[test]
    fn typing_q_in_the_contact_form_does_not_quit() {
        let mut app = App::new(130, 40);
        let frame = Frame::with_hit_grid(130, 40);
        app.handle_event(&key(KeyCode::Char('4')), &frame);
        app.handle_event(&key(KeyCode::Char('q')), &frame);
        assert!(!app.should_quit);
        assert_eq!(app.contact.value(Field::Name), "q");
        // Ctrl-C still quits.
        let ctrl_c =
            Event::Key(KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL));
        app.handle_event(&ctrl_c, &frame);
        assert!(app.should_quit);
    }

    #[test]
    fn escape_leaves_the_contact_form() {
        let mut app = App::new(130, 40);
        let frame = Frame::with_hit_grid(130, 40);
        app.handle_event(&key(KeyCode::Char('4')), &frame);
        app.handle_event(&key(KeyCode::Escape), &frame);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn resize_reaches_both_carousels() {
        let mut app = App::new(130, 40);
        let frame = Frame::with_hit_grid(130, 40);
        app.handle_event(
            &Event::Resize {
                width: 70,
                height: 20,
            },
            &frame,
        );
        assert_eq!(app.width, 70);
        // Debounced: the narrow class lands only after the quiet window.
        assert_eq!(app.testimonials.state().visible_count(), 3);
        let later = Instant::now() + Duration::from_millis(300);
        app.testimonials.tick(later, 70);
        app.experience.tick(later, 70);
        assert_eq!(app.testimonials.state().visible_count(), 1);
        assert_eq!(app.experience.state().visible_count(), 1);
    }

    #[test]
    fn render_smoke_test() {
        let mut app = App::new(130, 40);
        let mut frame = Frame::with_hit_grid(130, 40);
        for digit in ['1', '2', '3', '4'] {
            app.handle_event(&key(KeyCode::Char(digit)), &frame);
            frame.clear();
            app.render(&mut frame);
        }
    }
}
