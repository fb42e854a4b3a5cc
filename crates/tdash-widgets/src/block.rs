#![forbid(unsafe_code)]

//! The bordered, titled frame every widget is drawn inside.

use tdash_core::error::{Error, PreconditionViolation};
use tdash_core::geometry::{Point, Rect, Sides};
use tdash_render::buffer::Buffer;
use tdash_style::{Style, Theme};
use tdash_text::{parse_text, trim_chars};

use crate::Widget;
use crate::borders::{BorderType, Borders};
use crate::draw_chars;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    /// Align text to the left.
    Left,
    /// Center text horizontally.
    Center,
    /// Align text to the right.
    Right,
}

/// A rectangle with optional borders, title, and padding.
///
/// The inner rectangle is derived from the bounding rectangle every time it
/// is asked for; it is never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    area: Option<Rect>,
    pub title: Option<String>,
    pub title_style: Style,
    pub title_alignment: Alignment,
    pub borders: Borders,
    pub border_style: Style,
    pub border_type: BorderType,
    pub padding: Sides,
}

impl Default for Block {
    fn default() -> Self {
        Self::new()
    }
}

impl Block {
    /// A fully bordered block styled by the global theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    /// A fully bordered block styled by `theme`.
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            area: None,
            title: None,
            title_style: theme.block.title,
            title_alignment: Alignment::Left,
            borders: Borders::ALL,
            border_style: theme.block.border,
            border_type: BorderType::Square,
            padding: Sides::default(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title_alignment(mut self, alignment: Alignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    #[must_use]
    pub fn borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }

    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Assign the bounding rectangle from its corners (`x1`/`y1` exclusive).
    pub fn set_rect(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) -> Result<(), Error> {
        self.area = Some(Rect::from_corners(x0, y0, x1, y1)?);
        Ok(())
    }

    /// Assign the bounding rectangle directly.
    pub fn set_area(&mut self, area: Rect) {
        self.area = Some(area);
    }

    /// The bounding rectangle, if one was assigned.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    /// The bounding rectangle, or an empty one when unassigned.
    pub fn rect(&self) -> Rect {
        self.area.unwrap_or_default()
    }

    /// The content rectangle: borders, then padding, then a title row when
    /// the title has no top border to sit on.
    pub fn inner(&self) -> Rect {
        let borders = self.borders.insets();
        let mut sides = Sides::new(
            borders.top.saturating_add(self.padding.top),
            borders.right.saturating_add(self.padding.right),
            borders.bottom.saturating_add(self.padding.bottom),
            borders.left.saturating_add(self.padding.left),
        );
        if self.title.is_some() && !self.borders.contains(Borders::TOP) {
            sides.top = sides.top.saturating_add(1);
        }
        self.rect().inner(sides)
    }

    fn draw_borders(&self, area: Rect, buf: &mut Buffer) {
        let set = self.border_type.to_border_set();
        let cell = |ch| self.border_style.cell(ch);
        let (right, bottom) = (area.right() - 1, area.bottom() - 1);

        if self.borders.contains(Borders::LEFT) {
            for y in area.y..area.bottom() {
                buf.set(area.x, y, cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::RIGHT) {
            for y in area.y..area.bottom() {
                buf.set(right, y, cell(set.vertical));
            }
        }
        if self.borders.contains(Borders::TOP) {
            for x in area.x..area.right() {
                buf.set(x, area.y, cell(set.horizontal));
            }
        }
        if self.borders.contains(Borders::BOTTOM) {
            for x in area.x..area.right() {
                buf.set(x, bottom, cell(set.horizontal));
            }
        }

        // Corners overwrite the edge runs.
        if self.borders.contains(Borders::LEFT | Borders::TOP) {
            buf.set(area.x, area.y, cell(set.top_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::TOP) {
            buf.set(right, area.y, cell(set.top_right));
        }
        if self.borders.contains(Borders::LEFT | Borders::BOTTOM) {
            buf.set(area.x, bottom, cell(set.bottom_left));
        }
        if self.borders.contains(Borders::RIGHT | Borders::BOTTOM) {
            buf.set(right, bottom, cell(set.bottom_right));
        }
    }

    fn draw_title(&self, area: Rect, buf: &mut Buffer) {
        let Some(title) = self.title.as_deref() else {
            return;
        };
        let available = usize::from(self.inner().width);
        let chars = trim_chars(&parse_text(title, self.title_style), available);
        let slack = available.saturating_sub(chars.len()) as i32;

        let left = i32::from(area.x) + 1;
        let x = match self.title_alignment {
            Alignment::Left => left,
            Alignment::Center => left + slack / 2,
            Alignment::Right => left + slack,
        };
        draw_chars(buf, &chars, Point::new(x, i32::from(area.y)));
    }
}

impl Widget for Block {
    fn block(&self) -> &Block {
        self
    }

    fn block_mut(&mut self) -> &mut Block {
        self
    }

    fn kind(&self) -> &'static str {
        "Block"
    }

    fn draw(&self, buf: &mut Buffer) {
        let area = self.rect();
        let _span = tdash_core::debug_span!(
            "widget_draw",
            widget = "Block",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        if area.is_empty() {
            return;
        }
        buf.with_scissor(area, |buf| {
            self.draw_borders(area, buf);
            self.draw_title(area, buf);
        });
    }

    /// A bare block only needs a rectangle; an empty interior is fine.
    fn try_draw(&self, buf: &mut Buffer) -> Result<(), Error> {
        if self.area.is_none() {
            return Err(PreconditionViolation::RectNotAssigned { widget: "Block" }.into());
        }
        self.draw(buf);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_core::error::ConfigurationError;
    use tdash_style::color::{CYAN, WHITE};

    fn cell_char(buf: &Buffer, x: u16, y: u16) -> Option<char> {
        buf.get(x, y).map(|c| c.ch)
    }

    fn placed(x0: u16, y0: u16, x1: u16, y1: u16) -> Block {
        let mut block = Block::with_theme(&Theme::default());
        block.set_rect(x0, y0, x1, y1).unwrap();
        block
    }

    #[test]
    fn inner_with_all_borders() {
        assert_eq!(placed(0, 0, 10, 5).inner(), Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn inner_with_no_borders() {
        let block = placed(2, 3, 12, 8).borders(Borders::NONE);
        assert_eq!(block.inner(), Rect::new(2, 3, 10, 5));
    }

    #[test]
    fn inner_reserves_title_row_without_top_border() {
        let block = placed(0, 0, 10, 5)
            .borders(Borders::LEFT | Borders::RIGHT)
            .title("T");
        assert_eq!(block.inner(), Rect::new(1, 1, 8, 4));
    }

    #[test]
    fn inner_with_padding() {
        let block = placed(0, 0, 10, 6).padding(Sides::new(1, 2, 0, 1));
        assert_eq!(block.inner(), Rect::new(2, 2, 5, 3));
    }

    #[test]
    fn inner_saturates_on_tiny_area() {
        let block = placed(0, 0, 1, 1).padding(3);
        assert!(block.inner().is_empty());
    }

    #[test]
    fn inverted_rect_is_rejected() {
        let mut block = Block::with_theme(&Theme::default());
        let err = block.set_rect(5, 0, 4, 3).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::InvertedRect { .. })
        ));
        assert_eq!(block.area(), None);
    }

    #[test]
    fn draws_square_borders() {
        let block = placed(0, 0, 4, 3);
        let mut buf = Buffer::with_size(4, 3);
        block.draw(&mut buf);
        assert_eq!(buf.to_lines(), vec!["┌──┐", "│  │", "└──┘"]);
    }

    #[test]
    fn draws_title_left_and_truncated() {
        let block = placed(0, 0, 8, 3).title("Awesome Table");
        let mut buf = Buffer::with_size(8, 3);
        block.draw(&mut buf);
        assert_eq!(buf.row_text(0), "┌Aweso…┐");
    }

    #[test]
    fn draws_title_centered_and_right() {
        let mut buf = Buffer::with_size(8, 2);
        placed(0, 0, 8, 2)
            .title("ab")
            .title_alignment(Alignment::Center)
            .draw(&mut buf);
        assert_eq!(buf.row_text(0), "┌──ab──┐");

        let mut buf = Buffer::with_size(8, 2);
        placed(0, 0, 8, 2)
            .title("ab")
            .title_alignment(Alignment::Right)
            .draw(&mut buf);
        assert_eq!(buf.row_text(0), "┌────ab┐");
    }

    #[test]
    fn border_style_applied() {
        let mut block = placed(0, 0, 3, 3);
        block.border_style = Style::new().fg(CYAN);
        let mut buf = Buffer::with_size(3, 3);
        block.draw(&mut buf);
        assert_eq!(buf.get(0, 0).unwrap().fg, CYAN);
        assert!(buf.get(1, 1).unwrap().fg.is_default());
    }

    #[test]
    fn title_uses_title_style() {
        let block = placed(0, 0, 6, 3).title("x");
        let mut buf = Buffer::with_size(6, 3);
        block.draw(&mut buf);
        assert_eq!(cell_char(&buf, 1, 0), Some('x'));
        assert_eq!(buf.get(1, 0).unwrap().fg, WHITE);
    }

    #[test]
    fn draw_stays_inside_rect() {
        let block = placed(2, 1, 5, 3).title("long title");
        let mut buf = Buffer::with_size(8, 5);
        block.draw(&mut buf);
        for y in 0..5 {
            for x in 0..8 {
                if !block.rect().contains(x, y) {
                    assert_eq!(cell_char(&buf, x, y), Some(' '), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn zero_area_draw_is_noop() {
        let block = placed(3, 3, 3, 3);
        let mut buf = Buffer::with_size(5, 5);
        block.draw(&mut buf);
        assert!(buf.cells().iter().all(|c| c.is_blank()));
        assert!(block.try_draw(&mut buf).is_ok());
    }

    #[test]
    fn try_draw_requires_rect() {
        let block = Block::with_theme(&Theme::default());
        let mut buf = Buffer::with_size(5, 5);
        assert_eq!(
            block.try_draw(&mut buf),
            Err(Error::Precondition(PreconditionViolation::RectNotAssigned {
                widget: "Block"
            }))
        );
    }
}
