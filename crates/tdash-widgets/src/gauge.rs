#![forbid(unsafe_code)]

//! Horizontal progress gauge with a centered label.

use tdash_core::error::{ConfigurationError, Error};
use tdash_core::geometry::{Point, Rect};
use tdash_render::buffer::Buffer;
use tdash_render::cell::{PackedRgba, StyleFlags};
use tdash_style::{Style, Theme};
use tdash_text::parse_text;

use crate::block::Block;
use crate::{Edges, Widget, bar_cell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gauge {
    pub block: Block,
    /// Fill level, `0..=100`. Larger values draw as 100.
    pub percent: u16,
    pub bar_color: PackedRgba,
    /// Text shown in the middle row; `"{percent}%"` when unset.
    pub label: Option<String>,
    pub label_style: Style,
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new()
    }
}

impl Gauge {
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            block: Block::with_theme(theme),
            percent: 0,
            bar_color: theme.gauge.bar,
            label: None,
            label_style: theme.gauge.label,
        }
    }

    #[must_use]
    pub fn percent(mut self, percent: u16) -> Self {
        self.percent = percent;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn bar_color(mut self, color: PackedRgba) -> Self {
        self.bar_color = color;
        self
    }

    fn label_text(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}%", self.percent),
        }
    }
}

impl Widget for Gauge {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn kind(&self) -> &'static str {
        "Gauge"
    }

    fn draw(&self, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = {
            let area = self.block.rect();
            tdash_core::debug_span!(
                "widget_draw",
                widget = "Gauge",
                x = area.x,
                y = area.y,
                w = area.width,
                h = area.height
            )
            .entered()
        };

        self.block.draw(buf);

        let inner = self.block.inner();
        if inner.is_empty() {
            return;
        }
        let edges = Edges::of(inner);
        let percent = u32::from(self.percent.min(100));
        let filled = (percent * u32::from(inner.width) / 100) as u16;
        let bar_end = edges.left + i32::from(filled);

        buf.with_scissor(inner, |buf| {
            buf.fill(
                bar_cell(self.bar_color),
                Rect::new(inner.x, inner.y, filled, inner.height),
            );

            let chars = parse_text(&self.label_text(), self.label_style);
            let x = edges.left + edges.width() / 2 - chars.len() as i32 / 2;
            let y = edges.top + (edges.height() - 1) / 2;
            let over_bar = Style::new()
                .fg(self.bar_color)
                .bg(PackedRgba::TRANSPARENT)
                .attrs(StyleFlags::REVERSE);
            for (k, c) in (0i32..).zip(&chars) {
                let style = if x + k < bar_end { over_bar } else { c.style };
                buf.set_cell(style.cell(c.ch), Point::new(x + k, y));
            }
        });
    }

    fn validate(&self) -> Result<(), Error> {
        if self.percent > 100 {
            return Err(ConfigurationError::PercentOutOfRange(self.percent).into());
        }
        Ok(())
    }
}
