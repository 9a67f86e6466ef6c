#![forbid(unsafe_code)]

//! Detail modal with a nested slide carousel.
//!
//! The modal overlays the whole screen: a dimmed backdrop with a centered
//! panel showing one entry's detail slides. While it is open the host routes
//! all input here, which is what locks scrolling underneath.
//!
//! Three paths close it and converge on the same state change: the close
//! button, a click on the backdrop, and the Escape key.
//!
//! Unlike the page carousel, slide navigation here is circular in both
//! directions rather than clamped: stepping past the last slide lands on the
//! first and stepping before the first lands on the last.

use giostra_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use giostra_core::geometry::{Rect, Sides};
use giostra_render::frame::{Frame, HitData, HitId, HitRegion};
use giostra_style::Style;

use crate::dots::Dots;
use crate::{StatefulWidget, Widget, draw_text_span, set_style_area};

/// Hit region tag for the dimmed backdrop.
pub const MODAL_HIT_BACKDROP: HitRegion = HitRegion::Custom(1);
/// Hit region tag for the panel body.
pub const MODAL_HIT_CONTENT: HitRegion = HitRegion::Custom(2);

/// Hit data for the close button.
pub const MODAL_CLOSE: HitData = 0;
/// Hit data for the previous-slide chevron.
pub const MODAL_PREV: HitData = 1;
/// Hit data for the next-slide chevron.
pub const MODAL_NEXT: HitData = 2;

/// Outcome of routing an event to an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Event was not for the modal.
    Ignored,
    /// Event was consumed without changing the slide.
    Handled,
    /// The displayed slide changed.
    SlideChanged(usize),
    /// The modal closed.
    Closed,
}

/// State for a [`DetailModal`].
#[derive(Debug, Clone)]
pub struct DetailModalState {
    open: bool,
    slide: usize,
    slide_count: usize,
    close_on_escape: bool,
    close_on_backdrop: bool,
}

impl Default for DetailModalState {
    fn default() -> Self {
        Self {
            open: false,
            slide: 0,
            slide_count: 0,
            close_on_escape: true,
            close_on_backdrop: true,
        }
    }
}

impl DetailModalState {
    /// Create a closed modal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable closing via Escape.
    #[must_use]
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Disable closing via backdrop click.
    #[must_use]
    pub fn close_on_backdrop(mut self, close: bool) -> Self {
        self.close_on_backdrop = close;
        self
    }

    /// Whether the modal is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the displayed slide.
    #[must_use]
    pub fn slide(&self) -> usize {
        self.slide
    }

    /// Number of slides in the opened entry.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Open the modal for an entry with `slide_count` slides.
    ///
    /// Always resets to the first slide, so reopening never shows a stale
    /// position from the previous entry.
    pub fn open(&mut self, slide_count: usize) {
        self.open = true;
        self.slide = 0;
        self.slide_count = slide_count;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "modal.open", slide_count);
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.open = false;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "modal.close");
    }

    /// Show a slide, wrapping circularly in both directions.
    ///
    /// `-1` lands on the last slide and `slide_count` lands on the first, so
    /// chevron stepping cycles forever.
    pub fn go_to_slide(&mut self, index: isize) {
        if self.slide_count == 0 {
            return;
        }
        let count = self.slide_count as isize;
        self.slide = index.rem_euclid(count) as usize;
    }

    /// Step forward one slide, wrapping.
    pub fn next_slide(&mut self) {
        self.go_to_slide(self.slide as isize + 1);
    }

    /// Step back one slide, wrapping.
    pub fn prev_slide(&mut self) {
        self.go_to_slide(self.slide as isize - 1);
    }

    /// Handle a key event while open.
    pub fn handle_key(&mut self, key: &KeyEvent) -> ModalAction {
        if !self.open {
            return ModalAction::Ignored;
        }
        match key.code {
            KeyCode::Escape if self.close_on_escape => {
                self.close();
                ModalAction::Closed
            }
            KeyCode::Left if self.slide_count > 0 => {
                self.prev_slide();
                ModalAction::SlideChanged(self.slide)
            }
            KeyCode::Right if self.slide_count > 0 => {
                self.next_slide();
                ModalAction::SlideChanged(self.slide)
            }
            _ => ModalAction::Ignored,
        }
    }

    /// Route a mouse event using the last rendered frame's hit data.
    ///
    /// Backdrop clicks close (unless disabled); panel clicks are consumed so
    /// they never fall through to what is underneath.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
    ) -> ModalAction {
        if !self.open {
            return ModalAction::Ignored;
        }
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return ModalAction::Ignored;
        }
        let Some((id, region, data)) = hit else {
            return ModalAction::Ignored;
        };
        if id != expected_id {
            return ModalAction::Ignored;
        }
        match region {
            MODAL_HIT_BACKDROP => {
                if self.close_on_backdrop {
                    self.close();
                    ModalAction::Closed
                } else {
                    ModalAction::Handled
                }
            }
            HitRegion::Button if data == MODAL_CLOSE => {
                self.close();
                ModalAction::Closed
            }
            HitRegion::Button if data == MODAL_PREV => {
                self.prev_slide();
                ModalAction::SlideChanged(self.slide)
            }
            HitRegion::Button if data == MODAL_NEXT => {
                self.next_slide();
                ModalAction::SlideChanged(self.slide)
            }
            HitRegion::Content => {
                let index = data as usize;
                if index < self.slide_count && index != self.slide {
                    self.go_to_slide(index as isize);
                    ModalAction::SlideChanged(self.slide)
                } else {
                    ModalAction::Handled
                }
            }
            MODAL_HIT_CONTENT => ModalAction::Handled,
            _ => ModalAction::Ignored,
        }
    }
}

/// Detail modal widget: dimmed backdrop plus a centered slide panel.
#[derive(Debug, Clone, Default)]
pub struct DetailModal {
    title: String,
    slides: Vec<String>,
    backdrop_style: Style,
    panel_style: Style,
    hit_id: Option<HitId>,
}

impl DetailModal {
    /// Create a modal for an entry with the given title and slide texts.
    #[must_use]
    pub fn new(title: impl Into<String>, slides: impl IntoIterator<Item = String>) -> Self {
        Self {
            title: title.into(),
            slides: slides.into_iter().collect(),
            backdrop_style: Style::new().dim(),
            panel_style: Style::default(),
            hit_id: None,
        }
    }

    /// Set backdrop style (defaults to dimmed).
    #[must_use]
    pub fn backdrop_style(mut self, style: Style) -> Self {
        self.backdrop_style = style;
        self
    }

    /// Set panel style.
    #[must_use]
    pub fn panel_style(mut self, style: Style) -> Self {
        self.panel_style = style;
        self
    }

    /// Set hit id for mouse interactions.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn panel_rect(area: Rect) -> Rect {
        let width = (area.width.saturating_sub(4)).min(48).max(10);
        let height = (area.height.saturating_sub(2)).min(12).max(4);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl StatefulWidget for DetailModal {
    type State = DetailModalState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if !state.is_open() || area.is_empty() {
            return;
        }
        let panel = Self::panel_rect(area);
        if panel.is_empty() {
            return;
        }

        // Backdrop: dim everything, register first so the panel wins on
        // overlap (registrations are last-writer-wins).
        set_style_area(&mut frame.buffer, area, self.backdrop_style);
        if let Some(id) = self.hit_id {
            frame.register_hit(area, id, MODAL_HIT_BACKDROP, 0);
        }

        // Blank the panel so backdrop content does not bleed through.
        for y in panel.top()..panel.bottom() {
            for x in panel.left()..panel.right() {
                frame
                    .buffer
                    .set(x, y, giostra_render::cell::Cell::styled(' ', self.panel_style));
            }
        }
        if let Some(id) = self.hit_id {
            frame.register_hit(panel, id, MODAL_HIT_CONTENT, 0);
        }

        // Title row with the close button at the panel's top-right corner.
        draw_text_span(
            frame,
            panel.x + 1,
            panel.y,
            &self.title,
            self.panel_style.bold(),
            panel.right().saturating_sub(2),
        );
        let close_x = panel.right() - 1;
        draw_text_span(frame, close_x, panel.y, "✕", self.panel_style, panel.right());
        if let Some(id) = self.hit_id {
            frame.register_hit(
                Rect::new(close_x, panel.y, 1, 1),
                id,
                HitRegion::Button,
                MODAL_CLOSE,
            );
        }

        // Current slide body, wrapped into the panel interior.
        let body = panel.inner(Sides {
            top: 1,
            right: 2,
            bottom: 1,
            left: 2,
        });
        if let Some(text) = self.slides.get(state.slide()) {
            let width = body.width as usize;
            let mut y = body.top();
            let mut line = String::new();
            for word in text.split_whitespace() {
                if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                    draw_text_span(frame, body.x, y, &line, self.panel_style, body.right());
                    line.clear();
                    y += 1;
                    if y >= body.bottom() {
                        break;
                    }
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
            }
            if !line.is_empty() && y < body.bottom() {
                draw_text_span(frame, body.x, y, &line, self.panel_style, body.right());
            }
        }

        // Slide chevrons on the panel's side edges.
        let chevron_y = panel.y + panel.height / 2;
        draw_text_span(frame, panel.x, chevron_y, "‹", self.panel_style, panel.right());
        draw_text_span(
            frame,
            panel.right() - 1,
            chevron_y,
            "›",
            self.panel_style,
            panel.right(),
        );
        if let Some(id) = self.hit_id {
            frame.register_hit(
                Rect::new(panel.x, chevron_y, 1, 1),
                id,
                HitRegion::Button,
                MODAL_PREV,
            );
            frame.register_hit(
                Rect::new(panel.right() - 1, chevron_y, 1, 1),
                id,
                HitRegion::Button,
                MODAL_NEXT,
            );
        }

        // Nested slide dots on the panel's bottom row.
        let dot_count = self.slides.len();
        let dots_width = Dots::width_for(dot_count);
        if dots_width > 0 && dots_width <= panel.width {
            let dots_x = panel.x + (panel.width - dots_width) / 2;
            let mut dots = Dots::new(dot_count, state.slide())
                .style(self.panel_style)
                .active_style(self.panel_style.bold());
            if let Some(id) = self.hit_id {
                dots = dots.hit_id(id);
            }
            dots.render(
                Rect::new(dots_x, panel.bottom() - 1, dots_width, 1),
                frame,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state(slide_count: usize) -> DetailModalState {
        let mut state = DetailModalState::new();
        state.open(slide_count);
        state
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    #[test]
    fn open_resets_to_first_slide() {
        let mut state = open_state(4);
        state.go_to_slide(3);
        state.close();
        state.open(2);
        assert!(state.is_open());
        assert_eq!(state.slide(), 0);
        assert_eq!(state.slide_count(), 2);
    }

    #[test]
    fn slides_wrap_circularly_both_ways() {
        let mut state = open_state(3);
        state.go_to_slide(-1);
        assert_eq!(state.slide(), 2);
        state.go_to_slide(3);
        assert_eq!(state.slide(), 0);
        state.prev_slide();
        assert_eq!(state.slide(), 2);
        state.next_slide();
        assert_eq!(state.slide(), 0);
    }

    #[test]
    fn zero_slides_never_moves() {
        let mut state = open_state(0);
        state.go_to_slide(-1);
        state.next_slide();
        assert_eq!(state.slide(), 0);
    }

    #[test]
    fn escape_closes() {
        let mut state = open_state(3);
        let action = state.handle_key(&KeyEvent::new(KeyCode::Escape));
        assert_eq!(action, ModalAction::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn escape_respects_opt_out() {
        let mut state = DetailModalState::new().close_on_escape(false);
        state.open(3);
        assert_eq!(
            state.handle_key(&KeyEvent::new(KeyCode::Escape)),
            ModalAction::Ignored
        );
        assert!(state.is_open());
    }

    #[test]
    fn arrow_keys_cycle_slides() {
        let mut state = open_state(3);
        assert_eq!(
            state.handle_key(&KeyEvent::new(KeyCode::Left)),
            ModalAction::SlideChanged(2)
        );
        assert_eq!(
            state.handle_key(&KeyEvent::new(KeyCode::Right)),
            ModalAction::SlideChanged(0)
        );
    }

    #[test]
    fn backdrop_click_closes() {
        let mut state = open_state(3);
        let id = HitId::new(5);
        let hit = Some((id, MODAL_HIT_BACKDROP, 0));
        assert_eq!(
            state.handle_mouse(&click(0, 0), hit, id),
            ModalAction::Closed
        );
        assert!(!state.is_open());
    }

    #[test]
    fn backdrop_click_respects_opt_out() {
        let mut state = DetailModalState::new().close_on_backdrop(false);
        state.open(3);
        let id = HitId::new(5);
        let hit = Some((id, MODAL_HIT_BACKDROP, 0));
        assert_eq!(
            state.handle_mouse(&click(0, 0), hit, id),
            ModalAction::Handled
        );
        assert!(state.is_open());
    }

    #[test]
    fn close_button_closes() {
        let mut state = open_state(3);
        let id = HitId::new(5);
        let hit = Some((id, HitRegion::Button, MODAL_CLOSE));
        assert_eq!(
            state.handle_mouse(&click(40, 5), hit, id),
            ModalAction::Closed
        );
    }

    #[test]
    fn panel_click_is_consumed_without_closing() {
        let mut state = open_state(3);
        let id = HitId::new(5);
        let hit = Some((id, MODAL_HIT_CONTENT, 0));
        assert_eq!(
            state.handle_mouse(&click(20, 10), hit, id),
            ModalAction::Handled
        );
        assert!(state.is_open());
    }

    #[test]
    fn chevron_clicks_wrap() {
        let mut state = open_state(3);
        let id = HitId::new(5);
        let prev = Some((id, HitRegion::Button, MODAL_PREV));
        assert_eq!(
            state.handle_mouse(&click(0, 5), prev, id),
            ModalAction::SlideChanged(2)
        );
        let next = Some((id, HitRegion::Button, MODAL_NEXT));
        assert_eq!(
            state.handle_mouse(&click(40, 5), next, id),
            ModalAction::SlideChanged(0)
        );
    }

    #[test]
    fn dot_click_jumps_to_slide() {
        let mut state = open_state(3);
        let id = HitId::new(5);
        let hit = Some((id, HitRegion::Content, 2));
        assert_eq!(
            state.handle_mouse(&click(20, 12), hit, id),
            ModalAction::SlideChanged(2)
        );
        // Clicking the active dot is consumed but changes nothing.
        assert_eq!(
            state.handle_mouse(&click(20, 12), hit, id),
            ModalAction::Handled
        );
    }

    #[test]
    fn closed_modal_ignores_everything() {
        let mut state = DetailModalState::new();
        assert_eq!(
            state.handle_key(&KeyEvent::new(KeyCode::Escape)),
            ModalAction::Ignored
        );
        let id = HitId::new(5);
        let hit = Some((id, MODAL_HIT_BACKDROP, 0));
        assert_eq!(
            state.handle_mouse(&click(0, 0), hit, id),
            ModalAction::Ignored
        );
    }

    #[test]
    fn render_registers_backdrop_and_panel_regions() {
        let modal = DetailModal::new("Details", vec!["one two three".to_string()])
            .hit_id(HitId::new(9));
        let mut state = open_state(1);
        let mut frame = Frame::with_hit_grid(60, 20);
        modal.render(Rect::new(0, 0, 60, 20), &mut frame, &mut state);

        // Corner is backdrop; center is panel content.
        assert_eq!(
            frame.hit_test(0, 0),
            Some((HitId::new(9), MODAL_HIT_BACKDROP, 0))
        );
        let panel = DetailModal::panel_rect(Rect::new(0, 0, 60, 20));
        assert_eq!(
            frame.hit_test(panel.x + 3, panel.y + 1),
            Some((HitId::new(9), MODAL_HIT_CONTENT, 0))
        );
        // Close button sits at the panel's top-right corner.
        assert_eq!(
            frame.hit_test(panel.right() - 1, panel.y),
            Some((HitId::new(9), HitRegion::Button, MODAL_CLOSE))
        );
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let modal = DetailModal::new("Details", Vec::new()).hit_id(HitId::new(9));
        let mut state = DetailModalState::new();
        let mut frame = Frame::with_hit_grid(60, 20);
        modal.render(Rect::new(0, 0, 60, 20), &mut frame, &mut state);
        assert!(frame.hit_test(0, 0).is_none());
    }
}
