#![forbid(unsafe_code)]

//! Indicator dot row.
//!
//! One dot per valid carousel position; exactly one dot is active at a time.
//! Each dot registers a hit region carrying its position index, so a click
//! jumps directly to that position.

use giostra_core::event::{MouseButton, MouseEvent, MouseEventKind};
use giostra_core::geometry::Rect;
use giostra_render::frame::{Frame, HitData, HitId, HitRegion};
use giostra_style::Style;

use crate::mouse::MouseResult;
use crate::{Widget, draw_text_span};

/// Glyph for the active dot.
pub const ACTIVE_DOT: &str = "●";
/// Glyph for inactive dots.
pub const INACTIVE_DOT: &str = "○";

/// A horizontal row of position indicator dots.
#[derive(Debug, Clone)]
pub struct Dots {
    count: usize,
    active: usize,
    style: Style,
    active_style: Style,
    hit_id: Option<HitId>,
}

impl Dots {
    /// Create a dot row; `active` is clamped into range at render time.
    #[must_use]
    pub fn new(count: usize, active: usize) -> Self {
        Self {
            count,
            active,
            style: Style::default(),
            active_style: Style::default(),
            hit_id: None,
        }
    }

    /// Set base dot style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set active dot style.
    #[must_use]
    pub fn active_style(mut self, style: Style) -> Self {
        self.active_style = style;
        self
    }

    /// Set hit id for mouse interactions.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Width in cells of a rendered row of `count` dots.
    #[must_use]
    pub fn width_for(count: usize) -> u16 {
        if count == 0 {
            0
        } else {
            (count * 2 - 1) as u16
        }
    }

    /// Route a mouse event using the frame's hit data.
    ///
    /// Hit data convention: each dot registers `data = position as u64`.
    pub fn handle_mouse(
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
        count: usize,
        active: usize,
    ) -> MouseResult {
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return MouseResult::Ignored;
        }
        let Some((id, HitRegion::Content, data)) = hit else {
            return MouseResult::Ignored;
        };
        if id != expected_id {
            return MouseResult::Ignored;
        }
        let index = data as usize;
        if index >= count {
            return MouseResult::Ignored;
        }
        if index == active {
            MouseResult::Activated(index)
        } else {
            MouseResult::Selected(index)
        }
    }
}

impl Widget for Dots {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() || self.count == 0 {
            return;
        }
        let active = self.active.min(self.count - 1);
        let mut x = area.x;
        for index in 0..self.count {
            if x >= area.right() {
                break;
            }
            let (glyph, style) = if index == active {
                (ACTIVE_DOT, self.active_style.merge(&self.style))
            } else {
                (INACTIVE_DOT, self.style)
            };
            let before = x;
            x = draw_text_span(frame, x, area.y, glyph, style, area.right());
            if let Some(id) = self.hit_id {
                let width = x.saturating_sub(before).max(1);
                frame.register_hit(
                    Rect::new(before, area.y, width, 1),
                    id,
                    HitRegion::Content,
                    index as u64,
                );
            }
            // Gap between dots.
            x = x.saturating_add(1);
        }
    }
}
