#![forbid(unsafe_code)]

//! Bar chart whose bars are stacks of values.
//!
//! Segment `j` of every bar is colored `bar_colors[j % len]`, so each stack
//! position reads as one series. The scale maximum defaults to the largest
//! stack total.

use tdash_core::error::{ConfigurationError, Error};
use tdash_core::geometry::Point;
use tdash_render::buffer::Buffer;
use tdash_render::cell::PackedRgba;
use tdash_style::{Style, Theme};
use tdash_text::{parse_text, trim_chars};

use crate::barchart::{format_number, number_cell};
use crate::block::Block;
use crate::{Edges, Widget, bar_cell, draw_chars, scaled_height, select, series_max};

#[derive(Debug, Clone)]
pub struct StackedBarChart {
    pub block: Block,
    /// One stack of values per bar, bottom segment first.
    pub data: Vec<Vec<f64>>,
    pub labels: Vec<String>,
    pub bar_colors: Vec<PackedRgba>,
    pub label_styles: Vec<Style>,
    pub num_styles: Vec<Style>,
    pub num_formatter: fn(f64) -> String,
    pub bar_width: u16,
    pub bar_gap: u16,
    pub max_val: Option<f64>,
}

impl Default for StackedBarChart {
    fn default() -> Self {
        Self::new()
    }
}

impl StackedBarChart {
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            block: Block::with_theme(theme),
            data: Vec::new(),
            labels: Vec::new(),
            bar_colors: theme.stacked_bar_chart.bars.clone(),
            label_styles: theme.stacked_bar_chart.labels.clone(),
            num_styles: theme.stacked_bar_chart.nums.clone(),
            num_formatter: format_number,
            bar_width: 3,
            bar_gap: 1,
            max_val: None,
        }
    }

    #[must_use]
    pub fn data(mut self, data: Vec<Vec<f64>>) -> Self {
        self.data = data;
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

    fn scale_max(&self) -> f64 {
        self.max_val
            .unwrap_or_else(|| series_max(self.data.iter().map(|stack| stack.iter().sum())))
    }
}

impl Widget for StackedBarChart {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn kind(&self) -> &'static str {
        "StackedBarChart"
    }

    fn draw(&self, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = {
            let area = self.block.rect();
            tdash_core::debug_span!(
                "widget_draw",
                widget = "StackedBarChart",
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
        let max = self.scale_max();
        let bar_width = i32::from(self.bar_width);
        let base_y = edges.bottom - 2;
        let label_y = edges.bottom - 1;

        buf.with_scissor(inner, |buf| {
            let mut bar_x = edges.left;
            for (i, stack) in self.data.iter().enumerate() {
                if bar_x >= edges.right {
                    break;
                }
                let mut stacked = 0;
                for (j, &value) in stack.iter().enumerate() {
                    let segment_base = base_y - stacked;
                    if segment_base < edges.top {
                        break;
                    }
                    let color = select(&self.bar_colors, j).unwrap_or(PackedRgba::TRANSPARENT);
                    let height = scaled_height(value, max, edges.height() - 1);
                    let cell = bar_cell(color);
                    for x in bar_x..(bar_x + bar_width).min(edges.right) {
                        for y in (segment_base - height + 1)..=segment_base {
                            buf.set_cell(cell, Point::new(x, y));
                        }
                    }

                    let num = select(&self.num_styles, j).unwrap_or_default();
                    let number_x = bar_x + bar_width / 2 - 1;
                    for (k, ch) in (0i32..).zip((self.num_formatter)(value).chars()) {
                        buf.set_cell(
                            number_cell(ch, color, num),
                            Point::new(number_x + k, segment_base),
                        );
                    }
                    stacked += height;
                }

                if let Some(label) = self.labels.get(i) {
                    let style = select(&self.label_styles, i).unwrap_or_default();
                    let chars = trim_chars(&parse_text(label, style), usize::from(self.bar_width));
                    let offset = (bar_width / 2 - chars.len() as i32 / 2).max(0);
                    draw_chars(buf, &chars, Point::new(bar_x + offset, label_y));
                }

                bar_x += bar_width + i32::from(self.bar_gap);
            }
        });
    }

    fn validate(&self) -> Result<(), Error> {
        if self.data.iter().all(Vec::is_empty) {
            return Err(ConfigurationError::EmptySeries("StackedBarChart").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_style::color::{BLUE, GREEN, RED};

    fn marks() -> StackedBarChart {
        let mut c = StackedBarChart::with_theme(&Theme::default())
            .labels(["Ken", "Rob", "Dennis", "Linus"])
            .data(vec![
                vec![90.0, 85.0, 90.0, 80.0],
                vec![70.0, 85.0, 75.0, 60.0],
                vec![75.0, 60.0, 80.0, 85.0],
                vec![100.0, 100.0, 100.0, 100.0],
            ])
            .bar_width(5);
        c.block.title = Some("Student's Marks".into());
        c.set_rect(5, 5, 100, 30).unwrap();
        c
    }

    #[test]
    fn max_is_largest_stack() {
        assert_eq!(marks().scale_max(), 400.0);
    }

    #[test]
    fn segments_stack_upward() {
        let c = marks();
        let mut buf = Buffer::with_size(110, 35);
        c.draw(&mut buf);
        // inner rows 6..29: base row 27, span 22; each Ken segment is 4 rows
        assert_eq!(buf.get(6, 27).unwrap().bg, RED);
        assert_eq!(buf.get(10, 24).unwrap().bg, RED);
        assert_eq!(buf.get(6, 23).unwrap().bg, GREEN);
        assert_eq!(buf.get(6, 12).unwrap().bg, BLUE);
        assert!(buf.get(6, 11).unwrap().bg.is_default());
        // Linus: four 5-row segments
        assert_eq!(buf.get(24, 8).unwrap().bg, BLUE);
        assert!(buf.get(24, 7).unwrap().bg.is_default());
    }

    #[test]
    fn numbers_sit_on_segment_bases() {
        let c = marks();
        let mut buf = Buffer::with_size(110, 35);
        c.draw(&mut buf);
        let text = |x0: u16, y: u16, n: u16| -> String {
            (x0..x0 + n).map(|x| buf.get(x, y).unwrap().ch).collect()
        };
        assert_eq!(text(7, 27, 2), "90");
        assert_eq!(text(7, 23, 2), "85");
        assert_eq!(text(7, 15, 2), "80");
        assert_eq!(text(25, 27, 3), "100");
    }

    #[test]
    fn labels_trimmed_and_centered() {
        let c = marks();
        let mut buf = Buffer::with_size(110, 35);
        c.draw(&mut buf);
        let row = buf.row_text(28);
        let label = |x: usize| -> String { row.chars().skip(x).take(5).collect() };
        assert_eq!(label(6), " Ken ");
        assert_eq!(label(12), " Rob ");
        assert_eq!(label(18), "Denn…");
        assert_eq!(label(24), "Linus");
    }

    #[test]
    fn empty_stacks_are_reported() {
        let c = StackedBarChart::with_theme(&Theme::default()).data(vec![vec![], vec![]]);
        assert!(c.validate().is_err());
        assert!(marks().validate().is_ok());
    }

    #[test]
    fn stays_inside_rect() {
        let mut c = marks();
        c.set_rect(2, 2, 12, 8).unwrap();
        let mut buf = Buffer::with_size(20, 12);
        c.draw(&mut buf);
        for y in 0..12 {
            for x in 0..20 {
                if !c.rect().contains(x, y) {
                    assert!(buf.get(x, y).unwrap().is_blank(), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn huge_bars_stop_at_inner_edge() {
        let mut c = StackedBarChart::with_theme(&Theme::default())
            .data(vec![vec![1.0, 1.0]; 20_000])
            .bar_width(u16::MAX)
            .bar_gap(u16::MAX);
        c.set_rect(0, 0, 9, 6).unwrap();
        let mut buf = Buffer::with_size(9, 6);
        c.draw(&mut buf);
        assert_eq!(buf.get(1, 3).unwrap().bg, RED);
    }

    #[test]
    fn tall_stacks_stop_at_inner_top() {
        let stack: Vec<f64> = (0..40_000)
            .map(|i| if i % 2 == 0 { 100.0 } else { -99.0 })
            .collect();
        let mut c = StackedBarChart::with_theme(&Theme::default())
            .data(vec![stack])
            .max_val(1.0);
        c.set_rect(0, 0, 9, 6).unwrap();
        let mut buf = Buffer::with_size(9, 6);
        c.draw(&mut buf);
        assert_eq!(buf.get(1, 1).unwrap().bg, RED);
        assert_eq!(buf.row_text(0), "┌───────┐");
    }
}
