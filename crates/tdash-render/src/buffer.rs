#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s covering a bounding rectangle
//! whose origin need not be `(0, 0)`. Coordinates are absolute: a buffer
//! for `Rect::new(5, 5, 10, 4)` answers for `x` in `5..15`, `y` in `5..9`.
//!
//! # Clipping
//!
//! Every write goes through the same check: the target must lie inside
//! the buffer rectangle *and* the current scissor. Anything else is
//! dropped without an error. Drawing code relies on this and computes
//! positions optimistically (past the right edge, left of column 0, ...).
//!
//! # Invariants
//!
//! 1. `cells.len() == area.width * area.height`
//! 2. The area never changes after creation
//! 3. The scissor stack is never empty; its base is the buffer area
//! 4. Each pushed scissor is intersected with the one below it

use crate::cell::Cell;
use tdash_core::geometry::{Point, Rect};

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use tdash_core::geometry::{Point, Rect};
/// use tdash_render::buffer::Buffer;
/// use tdash_render::cell::Cell;
///
/// let mut buffer = Buffer::new(Rect::new(0, 0, 80, 24));
/// buffer.set_cell(Cell::from_char('H'), Point::new(0, 0));
/// buffer.set_cell(Cell::from_char('!'), Point::new(-1, 0)); // dropped
/// assert_eq!(buffer.get_cell(Point::new(0, 0)).ch, 'H');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    area: Rect,
    cells: Vec<Cell>,
    scissor_stack: Vec<Rect>,
}

impl Buffer {
    /// Create a buffer covering `area`, filled with [`Cell::BLANK`].
    ///
    /// A zero-area buffer is valid; it drops every write.
    pub fn new(area: Rect) -> Self {
        Self::filled(area, Cell::BLANK)
    }

    /// Create a buffer at the origin with the given size.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self::new(Rect::from_size(width, height))
    }

    /// Create a buffer covering `area` with every cell set to `cell`.
    pub fn filled(area: Rect, cell: Cell) -> Self {
        let size = area.width as usize * area.height as usize;
        Self {
            area,
            cells: vec![cell; size],
            scissor_stack: vec![area],
        }
    }

    /// Bounding rectangle of the buffer.
    #[inline]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.area.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.area.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert absolute (x, y) to a linear index, `None` if out of bounds.
    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if self.area.contains(x, y) {
            let dx = (x - self.area.x) as usize;
            let dy = (y - self.area.y) as usize;
            Some(dy * self.area.width as usize + dx)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Read the cell at `point`.
    ///
    /// Always succeeds: points outside the buffer read as [`Cell::BLANK`].
    #[inline]
    pub fn get_cell(&self, point: Point) -> Cell {
        point
            .to_unsigned()
            .and_then(|(x, y)| self.get(x, y))
            .copied()
            .unwrap_or_default()
    }

    /// Write `cell` at `point` if it lies inside the buffer and the
    /// current scissor; otherwise do nothing.
    #[inline]
    pub fn set_cell(&mut self, cell: Cell, point: Point) {
        if let Some((x, y)) = point.to_unsigned() {
            self.set(x, y, cell);
        }
    }

    /// Unsigned variant of [`set_cell`](Self::set_cell).
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if !self.current_scissor().contains(x, y) {
            return;
        }
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Fill `rect ∩ area ∩ scissor` with `cell`.
    pub fn fill(&mut self, cell: Cell, rect: Rect) {
        let clipped = self.current_scissor().intersection(&rect);
        if clipped.is_empty() {
            return;
        }

        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(idx) = self.index(x, y) {
                    self.cells[idx] = cell;
                }
            }
        }
    }

    /// Write `text` one code point per cell starting at `point`, copying
    /// colors and flags from `template`.
    ///
    /// Returns the x coordinate just past the last code point, whether or
    /// not it was clipped.
    pub fn set_string(&mut self, text: &str, template: Cell, point: Point) -> i32 {
        let mut x = point.x;
        for ch in text.chars() {
            self.set_cell(template.with_char(ch), Point::new(x, point.y));
            x += 1;
        }
        x
    }

    /// Reset every cell to [`Cell::BLANK`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Raw access to the cell slice (row-major).
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cells of row `y`, or an empty slice when `y` is out of range.
    pub fn row_cells(&self, y: u16) -> &[Cell] {
        match self.index(self.area.x, y) {
            Some(start) => &self.cells[start..start + self.area.width as usize],
            None => &[],
        }
    }

    /// The characters of row `y` as a string.
    pub fn row_text(&self, y: u16) -> String {
        self.row_cells(y).iter().map(|c| c.ch).collect()
    }

    /// Every row as a string, top to bottom.
    pub fn to_lines(&self) -> Vec<String> {
        (self.area.y..self.area.bottom())
            .map(|y| self.row_text(y))
            .collect()
    }

    // ========== Scissor Stack ==========

    /// Push a scissor (clipping) region onto the stack.
    ///
    /// The effective scissor is the intersection of all pushed rects.
    /// If the intersection is empty, no cells will be drawn.
    pub fn push_scissor(&mut self, rect: Rect) {
        let current = self.current_scissor();
        let intersected = current.intersection(&rect);
        self.scissor_stack.push(intersected);
    }

    /// Pop a scissor region from the stack.
    ///
    /// Does nothing if only the base scissor remains.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    /// Get the current effective scissor region.
    #[inline]
    pub fn current_scissor(&self) -> Rect {
        self.scissor_stack.last().copied().unwrap_or(self.area)
    }

    /// Get the scissor stack depth.
    #[inline]
    pub fn scissor_depth(&self) -> usize {
        self.scissor_stack.len()
    }

    /// Run `f` with `rect` pushed as scissor, popping it afterwards.
    pub fn with_scissor<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_scissor(rect);
        let out = f(self);
        self.pop_scissor();
        out
    }
}
