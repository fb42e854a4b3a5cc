#![forbid(unsafe_code)]

//! Grid of text cells with column separators.
//!
//! ```text
//! ┌ Awesome Table ─────────────────────┐
//! │Col0      │Col1     │Col2           │
//! │────────────────────────────────────│
//! │Item #1   │AAA      │123            │
//! └────────────────────────────────────┘
//! ```
//!
//! Column widths come from [`Table::column_widths`] or, when that is empty,
//! from splitting the inner width evenly across the first row's cells
//! (the remainder is left unused). Each column is followed by one separator
//! column. Text that does not fit its column is cut and its last visible
//! slot replaced with `…`. Rows that do not fit vertically are skipped.

use tdash_core::error::{ConfigurationError, Error};
use tdash_core::geometry::{Point, Rect};
use tdash_render::buffer::Buffer;
use tdash_render::glyphs::{DOTS, HORIZONTAL_LINE, VERTICAL_LINE};
use tdash_style::{Style, Theme};
use tdash_text::{StyledChar, parse_text};

use crate::block::{Alignment, Block};
use crate::{Edges, Widget, draw_chars};

/// A table of styled text cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub block: Block,
    /// Cell text per row; inline style directives are honored.
    pub rows: Vec<Vec<String>>,
    /// Explicit column widths. Empty means "derive from the first row".
    pub column_widths: Vec<u16>,
    pub text_style: Style,
    pub separator_style: Style,
    /// Draw a horizontal rule between rows.
    pub row_separator: bool,
    pub text_alignment: Alignment,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty table styled by the global theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    /// An empty table styled by `theme`.
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            block: Block::with_theme(theme),
            rows: Vec::new(),
            column_widths: Vec::new(),
            text_style: theme.table.text,
            separator_style: theme.table.separator,
            row_separator: true,
            text_alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn rows<R, C>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self
    }

    #[must_use]
    pub fn column_widths(mut self, widths: impl Into<Vec<u16>>) -> Self {
        self.column_widths = widths.into();
        self
    }

    #[must_use]
    pub fn text_alignment(mut self, alignment: Alignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    #[must_use]
    pub fn row_separator(mut self, enabled: bool) -> Self {
        self.row_separator = enabled;
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: Block) -> Self {
        self.block = block;
        self
    }

    /// The widths used for drawing: the explicit ones, or the inner width
    /// split evenly over the first row's cell count.
    pub fn resolved_column_widths(&self) -> Vec<u16> {
        if !self.column_widths.is_empty() {
            return self.column_widths.clone();
        }
        let count = self.rows.first().map_or(0, Vec::len);
        if count == 0 {
            return Vec::new();
        }
        let width = usize::from(self.block.inner().width) / count;
        vec![width as u16; count]
    }

    fn draw_rows(&self, buf: &mut Buffer, inner: Rect, widths: &[u16]) {
        let edges = Edges::of(inner);
        let vertical = self.separator_style.cell(VERTICAL_LINE);
        let horizontal = self.separator_style.cell(HORIZONTAL_LINE);
        let mut y = edges.top;

        for (i, row) in self.rows.iter().enumerate() {
            if y >= edges.bottom {
                tdash_core::trace!(
                    drawn = i,
                    total = self.rows.len(),
                    "table rows stopped at inner bottom"
                );
                break;
            }

            let mut column_x = edges.left;
            for (text, &width) in row.iter().zip(widths) {
                if column_x >= edges.right {
                    break;
                }
                let width = i32::from(width);
                let chars = parse_text(text, self.text_style);
                let len = chars.len() as i32;

                if len > width || self.text_alignment == Alignment::Left {
                    draw_truncated(buf, &chars, column_x, y, width, edges.right);
                } else {
                    let x = match self.text_alignment {
                        Alignment::Center => column_x + (width - len) / 2,
                        _ => (column_x + width).min(edges.right) - len,
                    };
                    draw_chars(buf, &chars, Point::new(x, y));
                }
                column_x += width + 1;
            }

            let mut separator_x = edges.left;
            for &width in widths {
                if separator_x >= edges.right {
                    break;
                }
                separator_x += i32::from(width);
                buf.set_cell(vertical, Point::new(separator_x, y));
                separator_x += 1;
            }

            y += 1;

            if self.row_separator && y < edges.bottom && i + 1 != self.rows.len() {
                buf.fill(horizontal, Rect::new(inner.x, y as u16, inner.width, 1));
                y += 1;
            }
        }
    }
}

/// Left-aligned draw that stops at the column width or the inner right
/// edge, whichever comes first, writing the marker over the last slot.
fn draw_truncated(buf: &mut Buffer, chars: &[StyledChar], x: i32, y: i32, width: i32, right: i32) {
    for (k, c) in (0i32..).zip(chars) {
        if k == width || x + k == right {
            tdash_core::trace!(len = chars.len(), width, "table cell truncated");
            let marker = StyledChar::new(DOTS, c.style);
            buf.set_cell(marker.cell(), Point::new(x + k - 1, y));
            break;
        }
        buf.set_cell(c.cell(), Point::new(x + k, y));
    }
}

impl Widget for Table {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn kind(&self) -> &'static str {
        "Table"
    }

    fn draw(&self, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = {
            let area = self.block.rect();
            tdash_core::debug_span!(
                "widget_draw",
                widget = "Table",
                x = area.x,
                y = area.y,
                w = area.width,
                h = area.height
            )
            .entered()
        };

        self.block.draw(buf);

        let inner = self.block.inner();
        if inner.is_empty() || self.rows.is_empty() {
            return;
        }
        let widths = self.resolved_column_widths();
        buf.with_scissor(inner, |buf| self.draw_rows(buf, inner, &widths));
    }

    /// Explicit widths must cover every row.
    fn validate(&self) -> Result<(), Error> {
        if self.column_widths.is_empty() {
            return Ok(());
        }
        let widths = self.column_widths.len();
        match self.rows.iter().position(|row| row.len() > widths) {
            Some(row) => Err(ConfigurationError::ColumnWidthsTooShort {
                row,
                cells: self.rows[row].len(),
                widths,
            }
            .into()),
            None => Ok(()),
        }
    }
}
