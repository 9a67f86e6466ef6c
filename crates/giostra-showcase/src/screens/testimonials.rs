//! Testimonials screen: one carousel of quotes.

use giostra_core::event::{Event, MouseEventKind};
use giostra_core::geometry::Rect;
use giostra_render::frame::{Frame, HitId};
use giostra_style::Style;
use giostra_widgets::carousel::{Card, Carousel, CarouselState};
use giostra_widgets::mouse::MouseResult;
use giostra_widgets::{StatefulWidget, draw_text_span};
use web_time::Instant;

use crate::data::{Testimonial, testimonials};
use crate::screens::carousel_config;

const HIT_ID: HitId = HitId::new(1);

/// Testimonials screen state.
#[derive(Debug)]
pub struct TestimonialsScreen {
    entries: &'static [Testimonial],
    state: CarouselState,
    area: Rect,
    hovered: bool,
}

impl TestimonialsScreen {
    /// Create the screen for a viewport width in columns.
    #[must_use]
    pub fn new(viewport_width: u32, now: Instant) -> Self {
        let entries = testimonials();
        Self {
            entries,
            state: CarouselState::with_config(
                entries.len(),
                viewport_width,
                carousel_config(),
                now,
            ),
            area: Rect::default(),
            hovered: false,
        }
    }

    /// Carousel engine state.
    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Record a viewport resize for debounced reconfiguration.
    pub fn notify_resize(&mut self, now: Instant) {
        self.state.notify_resize(now);
    }

    /// Drive timers and animation.
    pub fn tick(&mut self, now: Instant, viewport_width: u32) -> bool {
        self.state.tick(now, viewport_width)
    }

    /// Handle an input event; returns `true` when the screen changed.
    pub fn handle_event(&mut self, event: &Event, frame: &Frame, now: Instant) -> bool {
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
                self.state.handle_mouse(mouse, hit, HIT_ID) != MouseResult::Ignored
            }
            _ => false,
        }
    }

    /// Render the screen, caching the carousel area for hover tracking.
    pub fn render(&mut self, area: Rect, frame: &mut Frame) {
        if area.height < 3 {
            return;
        }
        draw_text_span(
            frame,
            area.x + 1,
            area.y,
            "What parents say",
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
            .entries
            .iter()
            .map(|entry| Card::new(entry.author).body(entry.quote));
        Carousel::new(cards)
            .hit_id(HIT_ID)
            .render(carousel_area, frame, &mut self.state);
    }
}
