#![forbid(unsafe_code)]

//! The 2D cell grid widgets draw into.

use giostra_core::geometry::Rect;
use giostra_style::Style;

use crate::cell::Cell;

/// A fixed-size grid of [`Cell`]s.
///
/// Out-of-bounds reads return `None`; out-of-bounds writes are dropped.
/// Widgets never need to bounds-check before drawing.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a cleared buffer with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The bounding rectangle (origin at 0,0).
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get mutable access to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell at (x, y); out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the grid, clearing its contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    /// Merge a style over every cell in `area`, clipped to the buffer.
    ///
    /// Existing glyphs are preserved; the given style's set fields win over
    /// each cell's current style.
    pub fn set_style_area(&mut self, area: Rect, style: Style) {
        let clipped = self.bounds().intersection(&area);
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.style = style.merge(&cell.style);
                }
            }
        }
    }
}
