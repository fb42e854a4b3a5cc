#![forbid(unsafe_code)]

//! Sparklines stacked vertically inside one block.
//!
//! The inner height is split evenly across the group; the last sparkline
//! takes whatever the division leaves over. A titled sparkline gives its top
//! row to the title. Each value draws a column of `█` whose height is
//! `⌊value / max × bar height⌋`; a value that rounds to zero still shows a
//! `▁` baseline tick.

use tdash_core::error::{ConfigurationError, Error};
use tdash_core::geometry::Point;
use tdash_render::buffer::Buffer;
use tdash_render::cell::PackedRgba;
use tdash_render::glyphs::{BARS, FULL_BLOCK};
use tdash_style::{Style, Theme};
use tdash_text::{parse_text, trim_chars};

use crate::block::Block;
use crate::{Edges, Widget, draw_chars, scaled_height, series_max};

/// One data series in a [`SparklineGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    pub data: Vec<f64>,
    pub title: Option<String>,
    pub title_style: Style,
    pub line_color: PackedRgba,
    /// Scale maximum; the largest value when unset.
    pub max_val: Option<f64>,
    /// Upper bound on the bar height in rows.
    pub max_height: Option<u16>,
}

impl Default for Sparkline {
    fn default() -> Self {
        Self::new()
    }
}

impl Sparkline {
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            data: Vec::new(),
            title: None,
            title_style: theme.sparkline.title,
            line_color: theme.sparkline.line,
            max_val: None,
            max_height: None,
        }
    }

    #[must_use]
    pub fn data(mut self, data: impl Into<Vec<f64>>) -> Self {
        self.data = data.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn line_color(mut self, color: PackedRgba) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn max_val(mut self, max: f64) -> Self {
        self.max_val = Some(max);
        self
    }

    #[must_use]
    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = Some(rows);
        self
    }

    /// Draw into the band of rows ending at `bottom` (exclusive).
    fn draw_band(&self, buf: &mut Buffer, edges: Edges, bottom: i32, band: i32) {
        let mut bar_height = band - i32::from(self.title.is_some());
        if let Some(cap) = self.max_height {
            bar_height = bar_height.min(i32::from(cap));
        }
        let max = self
            .max_val
            .unwrap_or_else(|| series_max(self.data.iter().copied()));
        let line = Style::new().fg(self.line_color);
        let base_y = bottom - 1;

        for (x, &value) in (edges.left..edges.right).zip(&self.data) {
            let height = scaled_height(value, max, bar_height);
            if height == 0 {
                buf.set_cell(line.cell(BARS[0]), Point::new(x, base_y));
            }
            for k in 0..height {
                buf.set_cell(line.cell(FULL_BLOCK), Point::new(x, base_y - k));
            }
        }

        if let Some(title) = &self.title {
            let chars = trim_chars(
                &parse_text(title, self.title_style),
                edges.width().max(0) as usize,
            );
            draw_chars(buf, &chars, Point::new(edges.left, bottom - 1 - bar_height));
        }
    }
}

/// A block holding one or more sparklines.
#[derive(Debug, Clone, PartialEq)]
pub struct SparklineGroup {
    pub block: Block,
    pub sparklines: Vec<Sparkline>,
}

impl Default for SparklineGroup {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl SparklineGroup {
    pub fn new(sparklines: Vec<Sparkline>) -> Self {
        Self::with_theme(Theme::global(), sparklines)
    }

    pub fn with_theme(theme: &Theme, sparklines: Vec<Sparkline>) -> Self {
        Self {
            block: Block::with_theme(theme),
            sparklines,
        }
    }
}

impl Widget for SparklineGroup {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn kind(&self) -> &'static str {
        "SparklineGroup"
    }

    fn draw(&self, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = {
            let area = self.block.rect();
            tdash_core::debug_span!(
                "widget_draw",
                widget = "SparklineGroup",
                x = area.x,
                y = area.y,
                w = area.width,
                h = area.height
            )
            .entered()
        };

        self.block.draw(buf);

        let inner = self.block.inner();
        if inner.is_empty() || self.sparklines.is_empty() {
            return;
        }
        let edges = Edges::of(inner);
        let count = self.sparklines.len() as i32;
        let share = edges.height() / count;

        buf.with_scissor(inner, |buf| {
            for (i, sparkline) in (0i32..).zip(&self.sparklines) {
                let (bottom, band) = if i == count - 1 {
                    (edges.bottom, edges.height() - share * i)
                } else {
                    (edges.top + share * (i + 1), share)
                };
                sparkline.draw_band(buf, edges, bottom, band);
            }
        });
    }

    fn validate(&self) -> Result<(), Error> {
        if self.sparklines.is_empty() {
            return Err(ConfigurationError::EmptySeries("SparklineGroup").into());
        }
        Ok(())
    }
}
