//! Experience screen: carousel of experience cards plus the detail modal.
//!
//! Clicking a card opens the modal for that entry; while the modal is open it
//! captures every event, which is what keeps the page underneath from
//! scrolling.

use giostra_core::event::{Event, MouseEventKind};
use giostra_core::geometry::Rect;
use giostra_render::frame::{Frame, HitId};
use giostra_style::Style;
use giostra_widgets::carousel::{CARD_HIT, Card, Carousel, CarouselState};
use giostra_widgets::modal::{DetailModal, DetailModalState, ModalAction};
use giostra_widgets::mouse::MouseResult;
use giostra_widgets::{StatefulWidget, draw_text_span};
use web_time::Instant;

use crate::data::{ExperienceLibrary, experience_library};
use crate::screens::carousel_config;

const HIT_ID: HitId = HitId::new(2);
const MODAL_HIT_ID: HitId = HitId::new(3);

/// Experience screen state.
#[derive(Debug)]
pub struct ExperienceScreen {
    library: ExperienceLibrary,
    state: CarouselState,
    modal: DetailModalState,
    open_entry: Option<usize>,
    area: Rect,
    hovered: bool,
}

impl ExperienceScreen {
    /// Create the screen for a viewport width in columns.
    #[must_use]
    pub fn new(viewport_width: u32, now: Instant) -> Self {
        let library = experience_library();
        let state =
            CarouselState::with_config(library.len(), viewport_width, carousel_config(), now);
        Self {
            library,
            state,
            modal: DetailModalState::new(),
            open_entry: None,
            area: Rect::default(),
            hovered: false,
        }
    }

    /// Carousel engine state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Whether the detail modal is open (and capturing input).
    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Record a viewport resize for debounced reconfiguration.
    pub fn notify_resize(&mut self, now: Instant) {
        self.state.notify_resize(now);
    }

    /// Drive timers and animation.
    pub fn tick(&mut self, now: Instant, viewport_width: u32) -> bool {
        self.state.tick(now, viewport_width)
    }

    /// Open the modal for the entry at `index`; unknown indices do nothing.
    pub fn open_modal(&mut self, index: usize) {
        let Some(entry) = self.library.by_index(index) else {
            return;
        };
        self.modal.open(entry.slides.len());
        self.open_entry = Some(index);
    }

    /// Handle an input event; returns `true` when the screen changed.
    pub fn handle_event(&mut self, event: &Event, frame: &Frame, now: Instant) -> bool {
        if self.modal.is_open() {
            return self.handle_modal_event(event, frame);
        }
        match event {
            Event::Key(key) => self.state.handle_key(key),
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved) {
                    let inside = self.area.contains(mouse.x, mouse.y);
                    if inside != self.hovered {
                        self.hovered = inside;
                        if inside {
                            self.state.pointer_entered();
                        } else {
                            self.state.pointer_left(now);
                        }
                    }
                    return false;
                }
                let hit = frame.hit_test(mouse.x, mouse.y);
                if let Some((id, region, data)) = hit
                    && id == HIT_ID
                    && region == CARD_HIT
                    && matches!(
                        mouse.kind,
                        MouseEventKind::Down(giostra_core::event::MouseButton::Left)
                    )
                {
                    self.open_modal(data as usize);
                    return true;
                }
                self.state.handle_mouse(mouse, hit, HIT_ID) != MouseResult::Ignored
            }
            _ => false,
        }
    }

    fn handle_modal_event(&mut self, event: &Event, frame: &Frame) -> bool {
        let action = match event {
            Event::Key(key) => self.modal.handle_key(key),
            Event::Mouse(mouse) => {
                let hit = frame.hit_test(mouse.x, mouse.y);
                self.modal.handle_mouse(mouse, hit, MODAL_HIT_ID)
            }
            _ => ModalAction::Ignored,
        };
        if action == ModalAction::Closed {
            self.open_entry = None;
        }
        // The open modal consumes everything so the page cannot scroll.
        !matches!(action, ModalAction::Ignored) || self.modal.is_open()
    }

    /// Render the screen, with the modal layered over the carousel.
    pub fn render(&mut self, area: Rect, frame: &mut Frame) {
        if area.height < 3 {
            return;
        }
        draw_text_span(
            frame,
            area.x + 1,
            area.y,
            "Experience (click a card for details)",
            Style::new().bold(),
            area.right(),
        );
        let carousel_area = Rect::new(
            area.x,
            area.y + 2,
            area.width,
            area.height.saturating_sub(2),
        );
        self.area = carousel_area;
        let cards = self
            .library
            .entries()
            .iter()
            .map(|entry| Card::new(entry.title).body(entry.description));
        Carousel::new(cards)
            .hit_id(HIT_ID)
            .render(carousel_area, frame, &mut self.state);

        if self.modal.is_open()
            && let Some(entry) = self.open_entry.and_then(|index| self.library.by_index(index))
        {
            let slides = entry.slides.iter().map(|slide| (*slide).to_string());
            DetailModal::new(entry.title, slides)
                .hit_id(MODAL_HIT_ID)
                .render(area, frame, &mut self.modal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giostra_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent};

    fn screen() -> ExperienceScreen {
        ExperienceScreen::new(130, Instant::now())
    }

    #[test]
    fn unknown_entry_index_does_not_open_modal() {
        let mut screen = screen();
        screen.open_modal(99);
        assert!(!screen.modal_open());
    }

    #[test]
    fn card_click_opens_modal_for_that_entry() {
        let mut screen = screen();
        let mut frame = Frame::with_hit_grid(130, 14);
        screen.render(Rect::new(0, 0, 130, 14), &mut frame);
        // Find a cell registered to a card and click it.
        let mut card_cell = None;
        'search: for y in 0..14 {
            for x in 0..130 {
                if let Some((id, region, _)) = frame.hit_test(x, y)
                    && id == HIT_ID
                    && region == CARD_HIT
                {
                    card_cell = Some((x, y));
                    break 'search;
                }
            }
        }
        let (x, y) = card_cell.expect("a card hit region");
        let event = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            x,
            y,
        ));
        assert!(screen.handle_event(&event, &frame, Instant::now()));
        assert!(screen.modal_open());
        assert_eq!(screen.modal.slide(), 0);
    }

    #[test]
    fn open_modal_captures_keys_and_escape_closes() {
        let mut screen = screen();
        screen.open_modal(0);
        let frame = Frame::with_hit_grid(130, 14);
        let now = Instant::now();
        // Arrow keys go to the modal, not the carousel.
        screen.handle_event(&Event::Key(KeyEvent::new(KeyCode::Right)), &frame, now);
        assert_eq!(screen.state().position(), 0);
        assert_eq!(screen.modal.slide(), 1);
        screen.handle_event(&Event::Key(KeyEvent::new(KeyCode::Escape)), &frame, now);
        assert!(!screen.modal_open());
    }
}
