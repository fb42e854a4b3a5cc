#![forbid(unsafe_code)]

//! Widgets for termdash.
//!
//! Every widget owns a [`Block`] (its rectangle, borders, and title) and
//! implements [`Widget`]. Drawing is total: a widget with no rectangle, a
//! zero-area rectangle, or odd data draws what fits and drops the rest.
//! [`Widget::try_draw`] is the checked variant that reports configuration
//! and precondition problems instead.

pub mod barchart;
pub mod block;
pub mod borders;
pub mod gauge;
pub mod list;
pub mod paragraph;
pub mod sparkline;
pub mod stacked_barchart;
pub mod table;

pub use barchart::BarChart;
pub use block::{Alignment, Block};
pub use borders::{BorderType, Borders};
pub use gauge::Gauge;
pub use list::List;
pub use paragraph::Paragraph;
pub use sparkline::{Sparkline, SparklineGroup};
pub use stacked_barchart::StackedBarChart;
pub use table::Table;

use tdash_core::error::{Error, PreconditionViolation};
use tdash_core::geometry::{Point, Rect};
use tdash_render::buffer::Buffer;
use tdash_render::cell::{Cell, PackedRgba, StyleFlags};
use tdash_text::StyledChar;

/// A drawable component placed in a rectangle of the screen.
pub trait Widget {
    /// The frame this widget draws inside.
    fn block(&self) -> &Block;

    fn block_mut(&mut self) -> &mut Block;

    /// Short type name used in spans and error messages.
    fn kind(&self) -> &'static str;

    /// Paint the widget into `buf`. Never fails; out-of-bounds output is
    /// clipped.
    fn draw(&self, buf: &mut Buffer);

    /// Assign the bounding rectangle (`x1`/`y1` exclusive).
    fn set_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Error> {
        self.block_mut().set_rect(x0, y0, x1, y1)
    }

    fn rect(&self) -> Rect {
        self.block().rect()
    }

    fn inner(&self) -> Rect {
        self.block().inner()
    }

    /// Check the widget's configuration without drawing.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Validate, check that there is somewhere to draw, then draw.
    fn try_draw(&self, buf: &mut Buffer) -> Result<(), Error> {
        self.validate()?;
        if self.block().area().is_none() {
            return Err(PreconditionViolation::RectNotAssigned {
                widget: self.kind(),
            }
            .into());
        }
        if self.inner().is_empty() {
            return Err(PreconditionViolation::EmptyInnerArea {
                widget: self.kind(),
            }
            .into());
        }
        self.draw(buf);
        Ok(())
    }
}

/// Write `chars` left to right from `start`, one cell each.
///
/// Returns the x just past the last character.
pub(crate) fn draw_chars(buf: &mut Buffer, chars: &[StyledChar], start: Point) -> i32 {
    let mut x = start.x;
    for c in chars {
        buf.set_cell(c.cell(), Point::new(x, start.y));
        x += 1;
    }
    x
}

/// `items[i % len]`, or `None` for an empty slice.
pub(crate) fn select<T: Copy>(items: &[T], i: usize) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[i % items.len()])
    }
}

/// A solid bar cell in `color`.
///
/// The terminal-default color has no visible background, so it is drawn in
/// reverse video instead.
pub(crate) fn bar_cell(color: PackedRgba) -> Cell {
    if color.is_default() {
        Cell::BLANK.with_attrs(StyleFlags::REVERSE)
    } else {
        Cell::BLANK.with_bg(color)
    }
}

/// Rows a bar of `value` occupies on a scale where `max` fills `span`.
///
/// Non-positive or non-finite inputs give 0; the result never exceeds
/// `span`.
pub(crate) fn scaled_height(value: f64, max: f64, span: i32) -> i32 {
    if span <= 0 || !(max.is_finite() && max > 0.0) || !(value.is_finite() && value > 0.0) {
        return 0;
    }
    let height = (value / max * f64::from(span)) as i32;
    height.clamp(0, span)
}

/// Largest finite value in `data`, or 0 for an empty series.
pub(crate) fn series_max(data: impl IntoIterator<Item = f64>) -> f64 {
    data.into_iter()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Signed edges of a rectangle, for optimistic coordinate math.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Edges {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Edges {
    pub(crate) fn of(rect: Rect) -> Self {
        Self {
            left: i32::from(rect.left()),
            top: i32::from(rect.top()),
            right: i32::from(rect.right()),
            bottom: i32::from(rect.bottom()),
        }
    }

    pub(crate) fn width(&self) -> i32 {
        self.right - self.left
    }

    pub(crate) fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
