#![forbid(unsafe_code)]

//! Multi-line styled text.

use tdash_core::geometry::Point;
use tdash_render::buffer::Buffer;
use tdash_style::{Style, Theme};
use tdash_text::{parse_text, split_lines, trim_chars, wrap_chars};

use crate::block::Block;
use crate::{Edges, Widget, draw_chars};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub block: Block,
    /// Text with optional inline style directives and `\n` line breaks.
    pub text: String,
    pub text_style: Style,
    /// Wrap long lines at the inner width instead of truncating them.
    pub wrap_text: bool,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Paragraph {
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            block: Block::with_theme(theme),
            text: String::new(),
            text_style: theme.paragraph.text,
            wrap_text: true,
        }
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }
}

impl Widget for Paragraph {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn kind(&self) -> &'static str {
        "Paragraph"
    }

    fn draw(&self, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = {
            let area = self.block.rect();
            tdash_core::debug_span!(
                "widget_draw",
                widget = "Paragraph",
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
        let width = usize::from(inner.width);
        let chars = parse_text(&self.text, self.text_style);
        let lines = if self.wrap_text {
            wrap_chars(&chars, width)
        } else {
            split_lines(&chars).into_iter().map(<[_]>::to_vec).collect()
        };

        buf.with_scissor(inner, |buf| {
            for (line, y) in lines.iter().zip(edges.top..edges.bottom) {
                draw_chars(buf, &trim_chars(line, width), Point::new(edges.left, y));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_style::color::RED;

    fn paragraph(text: &str, x1: u16, y1: u16) -> Paragraph {
        let mut p = Paragraph::with_theme(&Theme::default()).text(text);
        p.set_rect(0, 0, x1, y1).unwrap();
        p
    }

    #[test]
    fn wraps_to_inner_width() {
        let p = paragraph("hello world", 8, 4);
        let mut buf = Buffer::with_size(8, 4);
        p.draw(&mut buf);
        assert_eq!(buf.row_text(1), "│hello │");
        assert_eq!(buf.row_text(2), "│world │");
    }

    #[test]
    fn truncates_without_wrap() {
        let p = paragraph("hello world\nbye", 8, 4).wrap_text(false);
        let mut buf = Buffer::with_size(8, 4);
        p.draw(&mut buf);
        assert_eq!(buf.row_text(1), "│hello…│");
        assert_eq!(buf.row_text(2), "│bye   │");
    }

    #[test]
    fn stops_at_inner_bottom() {
        let p = paragraph("a\nb\nc\nd", 4, 4);
        let mut buf = Buffer::with_size(4, 4);
        p.draw(&mut buf);
        assert_eq!(buf.row_text(1), "│a │");
        assert_eq!(buf.row_text(2), "│b │");
        assert_eq!(buf.row_text(3), "└──┘");
    }

    #[test]
    fn directives_are_styled() {
        let p = paragraph("x [y](fg:red)", 8, 3);
        let mut buf = Buffer::with_size(8, 3);
        p.draw(&mut buf);
        assert_eq!(buf.get(3, 1).unwrap().ch, 'y');
        assert_eq!(buf.get(3, 1).unwrap().fg, RED);
    }
}
