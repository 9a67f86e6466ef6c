#![forbid(unsafe_code)]

//! Frame = Buffer + metadata for a render pass.
//!
//! The `Frame` bundles the cell grid ([`Buffer`]) with an optional hit grid
//! for mouse interaction. Widgets register clickable rectangles while they
//! render; the event loop then maps mouse coordinates back to widget ids.

use giostra_core::geometry::Rect;

use crate::buffer::Buffer;

/// Identifier for a clickable region in the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque user data for hit callbacks.
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
    /// Clickable button.
    Button,
    /// Custom region tag.
    Custom(u8),
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    pub widget_id: Option<HitId>,
    pub region: HitRegion,
    pub data: HitData,
}

impl HitCell {
    /// Create a populated hit cell.
    #[inline]
    pub const fn new(widget_id: HitId, region: HitRegion, data: HitData) -> Self {
        Self {
            widget_id: Some(widget_id),
            region,
            data,
        }
    }
}

/// Hit testing grid for mouse interaction.
///
/// Maps screen positions to widget IDs. Overlapping registrations are
/// last-writer-wins, matching paint order.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![HitCell::default(); size],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Register a clickable region with the given hit metadata.
    ///
    /// All cells within the rectangle (clipped to the grid) map to it.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize) as u16;
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize) as u16;

        let hit_cell = HitCell::new(widget_id, region, data);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = hit_cell;
                }
            }
        }
    }

    /// Hit test at the given position.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.index(x, y).and_then(|i| {
            let cell = &self.cells[i];
            cell.widget_id.map(|id| (id, cell.region, cell.data))
        })
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Frame = Buffer + metadata for a render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this render pass.
    pub buffer: Buffer,

    /// Optional hit grid for mouse hit testing.
    pub hit_grid: Option<HitGrid>,

    /// Cursor position, if the app wants a visible cursor.
    pub cursor_position: Option<(u16, u16)>,
}

impl Frame {
    /// Create a new frame with given dimensions and no hit grid.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
            cursor_position: None,
        }
    }

    /// Create a frame with hit testing enabled.
    #[must_use]
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
            cursor_position: None,
        }
    }

    /// Frame width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// The bounding rectangle of the frame.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear frame for the next render pass.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(grid) = &mut self.hit_grid {
            grid.clear();
        }
        self.cursor_position = None;
    }

    /// Set cursor position (`None` hides the cursor).
    #[inline]
    pub fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor_position = position;
    }

    /// Register a hit region (if hit testing is enabled).
    ///
    /// Returns `true` if the region was registered.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion, data: HitData) -> bool {
        if let Some(grid) = &mut self.hit_grid {
            grid.register(rect, id, region, data);
            true
        } else {
            false
        }
    }

    /// Hit test at the given position (if hit testing is enabled).
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|grid| grid.hit_test(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn frame_creation() {
        let frame = Frame::new(80, 24);
        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 24);
        assert!(frame.hit_grid.is_none());
        assert!(frame.cursor_position.is_none());
    }

    #[test]
    fn hit_registration_and_test() {
        let mut frame = Frame::with_hit_grid(80, 24);
        let hit_id = HitId::new(42);
        frame.register_hit(Rect::new(10, 5, 20, 3), hit_id, HitRegion::Button, 99);

        assert_eq!(frame.hit_test(15, 6), Some((hit_id, HitRegion::Button, 99)));
        assert_eq!(frame.hit_test(10, 5), Some((hit_id, HitRegion::Button, 99)));
        assert_eq!(frame.hit_test(29, 7), Some((hit_id, HitRegion::Button, 99)));

        assert!(frame.hit_test(5, 5).is_none());
        assert!(frame.hit_test(30, 6).is_none());
        assert!(frame.hit_test(15, 8).is_none());
    }

    #[test]
    fn overlapping_registrations_last_wins() {
        let mut frame = Frame::with_hit_grid(20, 20);
        frame.register_hit(Rect::new(0, 0, 10, 10), HitId::new(1), HitRegion::Content, 1);
        frame.register_hit(Rect::new(5, 5, 10, 10), HitId::new(2), HitRegion::Button, 2);

        assert_eq!(
            frame.hit_test(2, 2),
            Some((HitId::new(1), HitRegion::Content, 1))
        );
        assert_eq!(
            frame.hit_test(7, 7),
            Some((HitId::new(2), HitRegion::Button, 2))
        );
    }

    #[test]
    fn registration_clips_to_grid() {
        let mut frame = Frame::with_hit_grid(10, 10);
        frame.register_hit(Rect::new(8, 8, 10, 10), HitId::new(1), HitRegion::Content, 0);
        assert!(frame.hit_test(9, 9).is_some());
        assert!(frame.hit_test(10, 10).is_none());
    }

    #[test]
    fn register_without_grid_returns_false() {
        let mut frame = Frame::new(10, 10);
        assert!(!frame.register_hit(Rect::new(0, 0, 5, 5), HitId::new(1), HitRegion::Content, 0));
        assert!(frame.hit_test(2, 2).is_none());
    }

    #[test]
    fn clear_resets_buffer_grid_and_cursor() {
        let mut frame = Frame::with_hit_grid(10, 10);
        frame.buffer.set(5, 5, Cell::from_char('X'));
        frame.register_hit(Rect::new(0, 0, 5, 5), HitId::new(1), HitRegion::Content, 0);
        frame.set_cursor(Some((3, 3)));

        frame.clear();

        assert!(frame.buffer.get(5, 5).unwrap().is_empty());
        assert!(frame.hit_test(2, 2).is_none());
        assert!(frame.cursor_position.is_none());
    }
}
