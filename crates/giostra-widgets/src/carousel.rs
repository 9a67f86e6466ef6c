#![forbid(unsafe_code)]

//! Carousel widget.
//!
//! A horizontally scrolling card strip with position indicator dots,
//! prev/next chevrons, swipe navigation, debounced resize reconfiguration,
//! and a pausable auto-advance timer.
//!
//! The engine is split the way the rest of this crate splits widgets:
//! [`CarouselState`] owns all position arithmetic (clamping, wraparound,
//! stride math, scroll synchronization) and is testable without a render
//! surface; [`Carousel`] renders a state snapshot into a frame and registers
//! hit regions.
//!
//! # Invariants
//!
//! 1. `position <= max_position` at all times.
//! 2. `max_position == card_count.saturating_sub(visible_count)`.
//! 3. One indicator dot exists per valid position (`max_position + 1`),
//!    reconciled on every reconfigure; a zero-card carousel has none.
//! 4. Once scrolling settles, `scroll_offset == position * card_stride`.
//! 5. Direct jumps clamp; prev/next wrap around.

use std::time::Duration;

use giostra_core::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use giostra_core::gesture::{SwipeConfig, SwipeDirection, SwipeTracker};
use giostra_core::geometry::{Rect, Sides};
use giostra_core::timer::{AutoAdvance, Debouncer};
use giostra_core::viewport::{Breakpoints, WidthClass};
use giostra_render::frame::{Frame, HitData, HitId, HitRegion};
use giostra_style::Style;
use web_time::Instant;

use crate::dots::Dots;
use crate::mouse::MouseResult;
use crate::{StatefulWidget, Widget, draw_text_span};

/// Hit region tag for a carousel card body.
pub const CARD_HIT: HitRegion = HitRegion::Custom(3);

/// Hit data values for the chevron buttons.
pub const CHEVRON_PREV: HitData = 0;
pub const CHEVRON_NEXT: HitData = 1;

/// Horizontal measurements of one card, in abstract scroll units.
///
/// The stride between consecutive card start positions is the card width
/// plus the inter-card gap; narrow layouts that give each card its own
/// horizontal margins use those instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    /// Rendered card width.
    pub card_width: f32,
    /// Fixed gap between adjacent cards.
    pub gap: f32,
    /// Per-card (left, right) margins used in the narrow width class.
    pub narrow_margins: Option<(f32, f32)>,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            card_width: 300.0,
            gap: 30.0,
            narrow_margins: None,
        }
    }
}

impl CardMetrics {
    /// Distance between consecutive card start positions.
    #[must_use]
    pub fn stride(&self, class: WidthClass) -> f32 {
        match (class, self.narrow_margins) {
            (WidthClass::Narrow, Some((left, right))) => self.card_width + left + right,
            _ => self.card_width + self.gap,
        }
    }
}

/// Carousel engine configuration.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    pub metrics: CardMetrics,
    /// Auto-advance period; the timer runs only in Medium/Wide classes.
    pub auto_advance_period: Duration,
    pub swipe: SwipeConfig,
    /// Quiet window for resize debouncing.
    pub resize_quiet: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            metrics: CardMetrics::default(),
            auto_advance_period: AutoAdvance::CAROUSEL_PERIOD,
            swipe: SwipeConfig::default(),
            resize_quiet: Debouncer::RESIZE_QUIET,
        }
    }
}

/// State for a [`Carousel`] widget.
///
/// One instance per carousel; two carousels on one page never share state.
#[derive(Debug, Clone)]
pub struct CarouselState {
    config: CarouselConfig,
    card_count: usize,
    width_class: WidthClass,
    visible_count: usize,
    card_stride: f32,
    position: usize,
    max_position: usize,
    dot_count: usize,
    scroll_offset: f32,
    scroll_target: f32,
    animating: bool,
    auto_advance: AutoAdvance,
    resize_debounce: Debouncer,
    swipe: SwipeTracker,
    hovered: bool,
}

impl CarouselState {
    /// Create an engine with default configuration.
    ///
    /// A zero-card carousel is valid and inert: every operation is a silent
    /// no-op, mirroring a page where the carousel markup is absent.
    #[must_use]
    pub fn new(card_count: usize, viewport_width: u32, now: Instant) -> Self {
        Self::with_config(card_count, viewport_width, CarouselConfig::default(), now)
    }

    /// Create an engine with explicit configuration.
    #[must_use]
    pub fn with_config(
        card_count: usize,
        viewport_width: u32,
        config: CarouselConfig,
        now: Instant,
    ) -> Self {
        let width_class = config.breakpoints.classify(viewport_width);
        let visible_count = width_class.visible_cards();
        let card_stride = config.metrics.stride(width_class);
        let max_position = card_count.saturating_sub(visible_count);
        let dot_count = if card_count == 0 { 0 } else { max_position + 1 };

        let auto_advance = if card_count > 0 && width_class != WidthClass::Narrow {
            AutoAdvance::started(config.auto_advance_period, now)
        } else {
            AutoAdvance::new(config.auto_advance_period)
        };

        let resize_quiet = config.resize_quiet;
        let swipe = SwipeTracker::with_config(config.swipe);
        Self {
            config,
            card_count,
            width_class,
            visible_count,
            card_stride,
            position: 0,
            max_position,
            dot_count,
            scroll_offset: 0.0,
            scroll_target: 0.0,
            animating: false,
            auto_advance,
            resize_debounce: Debouncer::new(resize_quiet),
            swipe,
            hovered: false,
        }
    }

    /// Number of cards in the strip.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// How many cards are visible side by side.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Distance between consecutive card start positions.
    #[must_use]
    pub fn card_stride(&self) -> f32 {
        self.card_stride
    }

    /// Current position (index of the leftmost anchored card).
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Largest valid position.
    #[must_use]
    pub fn max_position(&self) -> usize {
        self.max_position
    }

    /// Number of indicator dots (one per valid position).
    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.dot_count
    }

    /// Current width class.
    #[must_use]
    pub fn width_class(&self) -> WidthClass {
        self.width_class
    }

    /// Current scroll offset in stride units.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Whether a smooth scroll is still settling.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether the auto-advance timer is currently running.
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_running()
    }

    /// Auto-advance policy: enabled in Medium/Wide, disabled in Narrow.
    #[must_use]
    pub fn auto_advance_enabled(&self) -> bool {
        self.width_class != WidthClass::Narrow && self.card_count > 0
    }

    fn inert(&self) -> bool {
        self.card_count == 0
    }

    /// Jump to a position, clamped into `[0, max_position]`.
    ///
    /// Direct jumps never wrap. Side effect only: the scroll command is the
    /// updated target (smooth or instant per `animate`) and the active dot
    /// follows `position`.
    pub fn go_to(&mut self, target: usize, animate: bool) {
        if self.inert() {
            return;
        }
        #[cfg(feature = "tracing")]
        let from = self.position;
        self.position = target.min(self.max_position);
        self.scroll_target = self.position as f32 * self.card_stride;
        if animate {
            self.animating = true;
        } else {
            self.scroll_offset = self.scroll_target;
            self.animating = false;
        }
        #[cfg(feature = "tracing")]
        Self::log_move("go_to", from, self.position);
    }

    /// Step to the next position, wrapping past the end to 0.
    pub fn advance(&mut self) {
        if self.inert() {
            return;
        }
        if self.position < self.max_position {
            self.go_to(self.position + 1, true);
        } else {
            self.go_to(0, true);
        }
    }

    /// Step to the previous position, wrapping before 0 to the end.
    pub fn retreat(&mut self) {
        if self.inert() {
            return;
        }
        if self.position > 0 {
            self.go_to(self.position - 1, true);
        } else {
            self.go_to(self.max_position, true);
        }
    }

    /// Adopt a user-driven scroll offset.
    ///
    /// The implied position is `round(offset / stride)`; it is adopted only
    /// if it differs from the tracked position and lies in range, and no
    /// scroll command is re-issued — user scrolling cancels any in-flight
    /// smooth scroll instead of fighting it.
    pub fn sync_scroll(&mut self, offset: f32) {
        if self.inert() || self.card_stride <= 0.0 {
            return;
        }
        self.scroll_offset = offset;
        self.scroll_target = offset;
        self.animating = false;
        let implied = (offset / self.card_stride).round();
        if implied < 0.0 {
            return;
        }
        let implied = implied as usize;
        if implied != self.position && implied <= self.max_position {
            #[cfg(feature = "tracing")]
            Self::log_move("sync_scroll", self.position, implied);
            self.position = implied;
        }
    }

    /// Scroll by a delta in stride units, as a mouse wheel does, clamped to
    /// the strip's extent, then adopt the implied position.
    pub fn scroll_by(&mut self, delta: f32) {
        if self.inert() {
            return;
        }
        let limit = self.max_position as f32 * self.card_stride;
        let offset = (self.scroll_offset + delta).clamp(0.0, limit);
        self.sync_scroll(offset);
    }

    /// Record a viewport resize; the reconfiguration itself runs from
    /// [`tick`](Self::tick) once the quiet window elapses.
    pub fn notify_resize(&mut self, now: Instant) {
        self.resize_debounce.trigger(now);
    }

    /// Recompute the layout-derived fields for a new viewport width.
    ///
    /// Reconciles the dot count to `max_position + 1` and, if the current
    /// position fell out of range, clamps it and resynchronizes the scroll
    /// offset without an animation flash.
    pub fn reconfigure(&mut self, viewport_width: u32, now: Instant) {
        if self.inert() {
            return;
        }
        self.width_class = self.config.breakpoints.classify(viewport_width);
        self.visible_count = self.width_class.visible_cards();
        self.card_stride = self.config.metrics.stride(self.width_class);
        self.max_position = self.card_count.saturating_sub(self.visible_count);
        self.dot_count = self.max_position + 1;

        if self.position > self.max_position {
            self.go_to(self.max_position, false);
        } else {
            // Stride may have changed; realign the settled target.
            self.scroll_target = self.position as f32 * self.card_stride;
            if !self.animating {
                self.scroll_offset = self.scroll_target;
            }
        }

        if self.auto_advance_enabled() {
            if !self.auto_advance.is_running() && !self.hovered {
                self.auto_advance.resume(now);
            }
        } else {
            self.auto_advance.pause();
        }
    }

    /// Pointer entered the strip: pause auto-advance.
    pub fn pointer_entered(&mut self) {
        self.hovered = true;
        self.auto_advance.pause();
    }

    /// Pointer left the strip: resume auto-advance (where policy allows).
    pub fn pointer_left(&mut self, now: Instant) {
        self.hovered = false;
        if self.auto_advance_enabled() {
            self.auto_advance.resume(now);
        }
    }

    /// Drive timers and the scroll animation; returns `true` when anything
    /// changed and a repaint is warranted.
    pub fn tick(&mut self, now: Instant, viewport_width: u32) -> bool {
        let mut changed = false;
        if self.resize_debounce.poll(now) {
            self.reconfigure(viewport_width, now);
            changed = true;
        }
        if self.auto_advance.poll(now) {
            self.advance();
            changed = true;
        }
        if self.step_scroll() {
            changed = true;
        }
        changed
    }

    /// Move the scroll offset one step toward its target.
    fn step_scroll(&mut self) -> bool {
        if !self.animating {
            return false;
        }
        let delta = self.scroll_target - self.scroll_offset;
        if delta.abs() < 0.5 {
            self.scroll_offset = self.scroll_target;
            self.animating = false;
        } else {
            self.scroll_offset += delta * 0.3;
        }
        true
    }

    /// Handle keyboard navigation (`Left`/`Right`, `Home`/`End`); Escape
    /// discards an in-flight drag so the release no longer navigates.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.inert() {
            return false;
        }
        match key.code {
            KeyCode::Escape => {
                let dragging = self.swipe.is_dragging();
                self.swipe.cancel();
                dragging
            }
            KeyCode::Left => {
                self.retreat();
                true
            }
            KeyCode::Right => {
                self.advance();
                true
            }
            KeyCode::Home => {
                self.go_to(0, true);
                true
            }
            KeyCode::End => {
                self.go_to(self.max_position, true);
                true
            }
            _ => false,
        }
    }

    /// Route a mouse event using the last rendered frame's hit data.
    ///
    /// Handles chevron clicks, dot clicks, wheel scrolling, and swipe
    /// completion. Hit data conventions: chevrons register
    /// `HitRegion::Button` with [`CHEVRON_PREV`]/[`CHEVRON_NEXT`]; dots
    /// register `HitRegion::Content` with their position index.
    pub fn handle_mouse(
        &mut self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
        expected_id: HitId,
    ) -> MouseResult {
        if self.inert() {
            return MouseResult::Ignored;
        }

        if let Some(swipe) = self.swipe.process(event) {
            match swipe.direction {
                SwipeDirection::Left => self.advance(),
                SwipeDirection::Right => self.retreat(),
            }
            return MouseResult::Selected(self.position);
        }

        match event.kind {
            MouseEventKind::ScrollRight => {
                self.scroll_by(self.card_stride);
                MouseResult::Selected(self.position)
            }
            MouseEventKind::ScrollLeft => {
                self.scroll_by(-self.card_stride);
                MouseResult::Selected(self.position)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((id, region, data)) = hit else {
                    return MouseResult::Ignored;
                };
                if id != expected_id {
                    return MouseResult::Ignored;
                }
                match region {
                    HitRegion::Button if data == CHEVRON_PREV => {
                        self.retreat();
                        MouseResult::Selected(self.position)
                    }
                    HitRegion::Button if data == CHEVRON_NEXT => {
                        self.advance();
                        MouseResult::Selected(self.position)
                    }
                    HitRegion::Content => {
                        let result = Dots::handle_mouse(
                            event,
                            hit,
                            expected_id,
                            self.dot_count,
                            self.position,
                        );
                        if let MouseResult::Selected(index) = result {
                            self.go_to(index, true);
                        }
                        result
                    }
                    _ => MouseResult::Ignored,
                }
            }
            _ => MouseResult::Ignored,
        }
    }

    #[cfg(feature = "tracing")]
    fn log_move(reason: &str, from: usize, to: usize) {
        tracing::debug!(message = "carousel.move", reason, from, to);
    }
}

/// A single carousel card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    title: String,
    body: String,
    style: Style,
}

impl Card {
    /// Create a card with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            style: Style::default(),
        }
    }

    /// Set the card body text (wrapped naively at render time).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set style for this card.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Card title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Carousel widget.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    cards: Vec<Card>,
    style: Style,
    card_style: Style,
    chevron_style: Style,
    gap_cells: u16,
    hit_id: Option<HitId>,
}

impl Carousel {
    /// Create a carousel from an iterator of cards.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            style: Style::default(),
            card_style: Style::default(),
            chevron_style: Style::default(),
            gap_cells: 2,
            hit_id: None,
        }
    }

    /// Set base style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set per-card style merged under each card's own style.
    #[must_use]
    pub fn card_style(mut self, style: Style) -> Self {
        self.card_style = style;
        self
    }

    /// Set chevron style.
    #[must_use]
    pub fn chevron_style(mut self, style: Style) -> Self {
        self.chevron_style = style;
        self
    }

    /// Set the gap between rendered cards, in cells.
    #[must_use]
    pub fn gap_cells(mut self, gap: u16) -> Self {
        self.gap_cells = gap;
        self
    }

    /// Set hit id for mouse interactions.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Immutable card slice.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn draw_card(
        &self,
        frame: &mut Frame,
        card: &Card,
        index: usize,
        x: i32,
        strip: Rect,
        card_width: u16,
    ) {
        let right = strip.right().min((x + card_width as i32).max(0) as u16);
        let left = strip.left().max(x.max(0) as u16);
        if left >= right {
            return;
        }
        let style = card.style.merge(&self.card_style);

        // Title row, then body rows wrapped to the card width.
        let skip = (left as i32 - x).max(0) as usize;
        let mut y = strip.top();
        let title: String = card.title.chars().skip(skip).collect();
        draw_text_span(frame, left, y, &title, style.bold(), right);
        y += 1;

        let width = card_width as usize;
        let mut line = String::new();
        let mut lines = Vec::new();
        for word in card.body.split_whitespace() {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            lines.push(line);
        }
        for text in lines {
            if y >= strip.bottom() {
                break;
            }
            let visible: String = text.chars().skip(skip).collect();
            draw_text_span(frame, left, y, &visible, style, right);
            y += 1;
        }

        if let Some(id) = self.hit_id {
            let rect = Rect::new(left, strip.y, right - left, strip.height);
            frame.register_hit(rect, id, CARD_HIT, index as u64);
        }
    }
}

impl StatefulWidget for Carousel {
    type State = CarouselState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() || area.height < 2 || self.cards.is_empty() {
            return;
        }
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "carousel.render",
            card_count = self.cards.len(),
            position = state.position(),
            visible = state.visible_count(),
        )
        .entered();

        let dots_y = area.bottom() - 1;
        // Chevron gutters left and right, dot row below.
        let strip = area.inner(Sides {
            top: 0,
            right: 2,
            bottom: 1,
            left: 2,
        });
        if strip.is_empty() {
            return;
        }

        // Chevrons, vertically centered on the strip.
        let chevron_y = strip.y + strip.height / 2;
        let chevron_style = self.chevron_style.merge(&self.style);
        draw_text_span(frame, area.x, chevron_y, "‹", chevron_style, area.right());
        draw_text_span(
            frame,
            area.right() - 1,
            chevron_y,
            "›",
            chevron_style,
            area.right(),
        );
        if let Some(id) = self.hit_id {
            frame.register_hit(
                Rect::new(area.x, area.y, 2, strip.height),
                id,
                HitRegion::Button,
                CHEVRON_PREV,
            );
            frame.register_hit(
                Rect::new(area.right() - 2, area.y, 2, strip.height),
                id,
                HitRegion::Button,
                CHEVRON_NEXT,
            );
        }

        // Card cell layout derived from the area, not from CardMetrics:
        // the metrics drive scroll arithmetic, the area drives pixels.
        let visible = state.visible_count().max(1) as u16;
        let gaps = self.gap_cells * (visible - 1);
        let card_width = strip.width.saturating_sub(gaps) / visible;
        if card_width == 0 {
            return;
        }
        let cell_stride = (card_width + self.gap_cells) as i32;

        // Fractional scroll position in stride units.
        let stride = state.card_stride().max(f32::EPSILON);
        let units = state.scroll_offset() / stride;
        // An offset past the strip end still shows the last window.
        let first = (units.floor().max(0.0) as usize).min(self.cards.len() - 1);
        let frac = units - units.floor();
        let shift = (frac * cell_stride as f32).round() as i32;

        let last = (first + visible as usize + 1).min(self.cards.len());
        for (offset, card) in self.cards[first..last].iter().enumerate() {
            let x = strip.x as i32 + offset as i32 * cell_stride - shift;
            self.draw_card(frame, card, first + offset, x, strip, card_width);
        }

        // Indicator dots, centered under the strip.
        let dot_count = state.dot_count();
        let dots_width = Dots::width_for(dot_count);
        let dots_x = area.x + area.width.saturating_sub(dots_width) / 2;
        let mut dots = Dots::new(dot_count, state.position())
            .style(self.style)
            .active_style(self.style.bold());
        if let Some(id) = self.hit_id {
            dots = dots.hit_id(id);
        }
        dots.render(Rect::new(dots_x, dots_y, dots_width, 1), frame);
    }
}
