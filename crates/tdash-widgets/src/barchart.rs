#![forbid(unsafe_code)]

//! Vertical bar chart.
//!
//! Bars grow upward from the row above the label row. Bar `i` is
//! `bar_width` columns wide, starts `i * (bar_width + bar_gap)` columns into
//! the inner area, and is `⌊value / max × (inner height − 1)⌋` rows tall.
//! The value is printed on the bar's bottom row and the label is centered
//! under it.

use tdash_core::error::{ConfigurationError, Error};
use tdash_core::geometry::Point;
use tdash_render::buffer::Buffer;
use tdash_render::cell::{Cell, PackedRgba};
use tdash_style::{Style, Theme};
use tdash_text::parse_text;

use crate::block::Block;
use crate::{Edges, Widget, bar_cell, draw_chars, scaled_height, select, series_max};

/// Default value label: shortest decimal form (`90`, `85.5`).
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

#[derive(Debug, Clone)]
pub struct BarChart {
    pub block: Block,
    pub data: Vec<f64>,
    pub labels: Vec<String>,
    /// Bar `i` uses `bar_colors[i % len]`.
    pub bar_colors: Vec<PackedRgba>,
    pub label_styles: Vec<Style>,
    pub num_styles: Vec<Style>,
    pub num_formatter: fn(f64) -> String,
    pub bar_width: u16,
    pub bar_gap: u16,
    /// Scale maximum; the largest data value when unset.
    pub max_val: Option<f64>,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl BarChart {
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            block: Block::with_theme(theme),
            data: Vec::new(),
            labels: Vec::new(),
            bar_colors: theme.bar_chart.bars.clone(),
            label_styles: theme.bar_chart.labels.clone(),
            num_styles: theme.bar_chart.nums.clone(),
            num_formatter: format_number,
            bar_width: 3,
            bar_gap: 1,
            max_val: None,
        }
    }

    #[must_use]
    pub fn data(mut self, data: impl Into<Vec<f64>>) -> Self {
        self.data = data.into();
        self
    }

    #[must_use]
    pub fn labels<I>(mut self, labels: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn bar_width(mut self, width: u16) -> Self {
        self.bar_width = width;
        self
    }

    #[must_use]
    pub fn bar_gap(mut self, gap: u16) -> Self {
        self.bar_gap = gap;
        self
    }

    #[must_use]
    pub fn max_val(mut self, max: f64) -> Self {
        self.max_val = Some(max);
        self
    }
}

/// A value label cell over a bar: the bar's background with the number
/// style's foreground and modifiers on top.
pub(crate) fn number_cell(ch: char, bar: PackedRgba, num: Style) -> Cell {
    let mut cell = bar_cell(bar).with_char(ch);
    if let Some(fg) = num.fg {
        cell.fg = fg;
    }
    if let Some(attrs) = num.attrs {
        cell.attrs |= attrs;
    }
    cell
}

impl Widget for BarChart {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn kind(&self) -> &'static str {
        "BarChart"
    }

    fn draw(&self, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = {
            let area = self.block.rect();
            tdash_core::debug_span!(
                "widget_draw",
                widget = "BarChart",
                x = area.x,
                y = area.y,
                w = area.width,
                h = area.height
            )
            .entered()
        };

        self.block.draw(buf);

        let inner = self.block.inner();
        if inner.is_empty() || self.data.is_empty() {
            return;
        }
        let edges = Edges::of(inner);
        let max = self
            .max_val
            .unwrap_or_else(|| series_max(self.data.iter().copied()));
        let bar_width = i32::from(self.bar_width);
        let base_y = edges.bottom - 2;
        let label_y = edges.bottom - 1;

        buf.with_scissor(inner, |buf| {
            let mut bar_x = edges.left;
            for (i, &value) in self.data.iter().enumerate() {
                if bar_x >= edges.right {
                    break;
                }
                let color = select(&self.bar_colors, i).unwrap_or(PackedRgba::TRANSPARENT);
                let height = scaled_height(value, max, edges.height() - 1);
                let cell = bar_cell(color);
                for x in bar_x..(bar_x + bar_width).min(edges.right) {
                    for y in (base_y - height + 1)..=base_y {
                        buf.set_cell(cell, Point::new(x, y));
                    }
                }

                if let Some(label) = self.labels.get(i) {
                    let style = select(&self.label_styles, i).unwrap_or_default();
                    let chars = parse_text(label, style);
                    let x = bar_x + bar_width / 2 - chars.len() as i32 / 2;
                    draw_chars(buf, &chars, Point::new(x, label_y));
                }

                let number_x = bar_x + bar_width / 2;
                if number_x <= edges.right {
                    let num = select(&self.num_styles, i).unwrap_or_default();
                    for (k, ch) in (0i32..).zip((self.num_formatter)(value).chars()) {
                        buf.set_cell(number_cell(ch, color, num), Point::new(number_x + k, base_y));
                    }
                }

                bar_x += bar_width + i32::from(self.bar_gap);
            }
        });
    }

    fn validate(&self) -> Result<(), Error> {
        if self.data.is_empty() {
            return Err(ConfigurationError::EmptySeries("BarChart").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_render::cell::StyleFlags;
    use tdash_style::color::{GREEN, RED, WHITE};

    fn chart(data: &[f64]) -> BarChart {
        let mut c = BarChart::with_theme(&Theme::default()).data(data.to_vec());
        c.set_rect(0, 0, 9, 6).unwrap();
        c
    }

    #[test]
    fn defaults() {
        let c = BarChart::with_theme(&Theme::default());
        assert_eq!((c.bar_width, c.bar_gap), (3, 1));
        assert_eq!(format_number(90.0), "90");
        assert_eq!(format_number(85.5), "85.5");
    }

    #[test]
    fn bars_scale_to_max() {
        let c = chart(&[1.0, 2.0]).labels(["a", "b"]);
        let mut buf = Buffer::with_size(9, 6);
        c.draw(&mut buf);
        // inner (1,1) 7x4: base row 3, label row 4, span 3
        assert_eq!(buf.get(1, 3).unwrap().bg, RED);
        assert!(buf.get(1, 2).unwrap().bg.is_default());
        for y in 1..=3 {
            assert_eq!(buf.get(7, y).unwrap().bg, GREEN, "row {y}");
        }
        let num = buf.get(2, 3).unwrap();
        assert_eq!((num.ch, num.fg, num.bg), ('1', WHITE, RED));
        assert!(num.attrs.contains(StyleFlags::BOLD));
        assert_eq!(buf.get(6, 3).unwrap().ch, '2');
        assert_eq!(buf.get(2, 4).unwrap().ch, 'a');
        assert_eq!(buf.get(6, 4).unwrap().ch, 'b');
    }

    #[test]
    fn explicit_max_and_gap() {
        let c = chart(&[2.0]).max_val(4.0).bar_width(2).bar_gap(0);
        let mut buf = Buffer::with_size(9, 6);
        c.draw(&mut buf);
        // 2/4 * 3 = 1 row
        assert_eq!(buf.get(1, 3).unwrap().bg, RED);
        assert_eq!(buf.get(2, 3).unwrap().bg, RED);
        assert!(buf.get(1, 2).unwrap().bg.is_default());
        assert!(buf.get(3, 3).unwrap().bg.is_default());
    }

    #[test]
    fn all_zero_data_draws_numbers_only() {
        let c = chart(&[0.0, 0.0]);
        let mut buf = Buffer::with_size(9, 6);
        c.draw(&mut buf);
        assert_eq!(buf.get(2, 3).unwrap().ch, '0');
        assert!(buf.get(1, 2).unwrap().bg.is_default());
    }

    #[test]
    fn stays_inside_rect() {
        let c = chart(&[5.0, 1.0, 3.0, 9.0, 2.0]).labels(["long label", "x"]);
        let mut buf = Buffer::with_size(20, 10);
        c.draw(&mut buf);
        for y in 0..10u16 {
            for x in 0..20u16 {
                if !c.rect().contains(x, y) {
                    assert!(buf.get(x, y).unwrap().is_blank(), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn empty_series_is_reported() {
        let c = chart(&[]);
        assert_eq!(
            c.validate(),
            Err(Error::Configuration(ConfigurationError::EmptySeries("BarChart")))
        );
        let mut buf = Buffer::with_size(9, 6);
        c.draw(&mut buf);
    }

    #[test]
    fn huge_bars_stop_at_inner_edge() {
        let c = chart(&[1.0; 20_000]).bar_width(u16::MAX).bar_gap(u16::MAX);
        let mut buf = Buffer::with_size(9, 6);
        c.draw(&mut buf);
        for x in 1..8 {
            assert_eq!(buf.get(x, 1).unwrap().bg, RED, "column {x}");
        }
    }
}
