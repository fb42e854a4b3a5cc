#![forbid(unsafe_code)]

//! Scrollable list with a selected row.
//!
//! The view keeps the selected row visible: drawing moves the remembered
//! top row just far enough to include it, counting the lines each row
//! wraps or splits into. Arrows in the right column mark content hidden
//! above or below.

use std::cell::Cell;

use tdash_core::geometry::Point;
use tdash_render::buffer::Buffer;
use tdash_render::glyphs::{DOWN_ARROW, UP_ARROW};
use tdash_style::{Style, Theme};
use tdash_text::{StyledChar, parse_text, split_lines, trim_chars, wrap_chars};

use crate::block::Block;
use crate::{Edges, Widget, draw_chars};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub block: Block,
    pub rows: Vec<String>,
    pub text_style: Style,
    pub selected_row: usize,
    /// Resolved over each character's own style on the selected row.
    pub selected_row_style: Style,
    pub wrap_text: bool,
    top_row: Cell<usize>,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    pub fn new() -> Self {
        Self::with_theme(Theme::global())
    }

    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            block: Block::with_theme(theme),
            rows: Vec::new(),
            text_style: theme.list.text,
            selected_row: 0,
            selected_row_style: theme.list.selected,
            wrap_text: false,
            top_row: Cell::new(0),
        }
    }

    #[must_use]
    pub fn rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }

    /// First row currently in view.
    pub fn top_row(&self) -> usize {
        self.top_row.get()
    }

    /// Move the selection by `amount` rows, clamped to the list.
    pub fn scroll_amount(&mut self, amount: isize) {
        let last = self.rows.len().saturating_sub(1);
        self.selected_row = self.selected_row.saturating_add_signed(amount).min(last);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_amount(-1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_amount(1);
    }

    pub fn scroll_top(&mut self) {
        self.selected_row = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.selected_row = self.rows.len().saturating_sub(1);
    }

    /// Jump to the top of the view, or one page up if already there.
    pub fn scroll_page_up(&mut self) {
        let top = self.top_row.get();
        if self.selected_row > top {
            self.selected_row = top;
        } else {
            self.scroll_amount(-self.page());
        }
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_amount(self.page());
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroll_amount(-self.page() / 2);
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroll_amount(self.page() / 2);
    }

    fn page(&self) -> isize {
        isize::try_from(self.block.inner().height).unwrap_or(isize::MAX)
    }

    /// The display lines of one row at `width`. Never empty: a blank row
    /// still takes a line.
    fn row_lines(&self, row: &str, width: usize) -> Vec<Vec<StyledChar>> {
        let chars = parse_text(row, self.text_style);
        let mut lines = if self.wrap_text {
            wrap_chars(&chars, width)
        } else {
            split_lines(&chars).into_iter().map(<[_]>::to_vec).collect()
        };
        if lines.is_empty() {
            lines.push(Vec::new());
        }
        lines
    }

    /// Adjust the remembered top row so every line of the selected row
    /// fits in a view of `height` lines, or at least its first line when
    /// the row alone is taller than the view.
    fn settle_top_row(&self, width: usize, height: usize) -> usize {
        let Some(last) = self.rows.len().checked_sub(1) else {
            self.top_row.set(0);
            return 0;
        };
        let selected = self.selected_row.min(last);
        let mut top = self.top_row.get().min(selected);

        let counts: Vec<usize> = self.rows[top..=selected]
            .iter()
            .map(|row| self.row_lines(row, width).len())
            .collect();
        let mut used: usize = counts.iter().sum();
        for count in counts {
            if used <= height || top == selected {
                break;
            }
            used -= count;
            top += 1;
        }

        self.top_row.set(top);
        top
    }
}

impl Widget for List {
    fn block(&self) -> &Block {
        &self.block
    }

    fn block_mut(&mut self) -> &mut Block {
        &mut self.block
    }

    fn kind(&self) -> &'static str {
        "List"
    }

    fn draw(&self, buf: &mut Buffer) {
        #[cfg(feature = "tracing")]
        let _span = {
            let area = self.block.rect();
            tdash_core::debug_span!(
                "widget_draw",
                widget = "List",
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
        let height = usize::from(inner.height);
        let top = self.settle_top_row(width, height);

        buf.with_scissor(inner, |buf| {
            let mut y = edges.top;
            let mut hidden_below = false;
            'rows: for (index, row) in self.rows.iter().enumerate().skip(top) {
                for line in self.row_lines(row, width) {
                    if y >= edges.bottom {
                        hidden_below = true;
                        break 'rows;
                    }
                    let mut line = trim_chars(&line, width);
                    if index == self.selected_row {
                        for c in &mut line {
                            c.style = self.selected_row_style.resolve(c.style);
                        }
                    }
                    draw_chars(buf, &line, Point::new(edges.left, y));
                    y += 1;
                }
            }

            let arrow_x = edges.right - 1;
            if top > 0 {
                buf.set_cell(self.text_style.cell(UP_ARROW), Point::new(arrow_x, edges.top));
            }
            if hidden_below {
                buf.set_cell(
                    self.text_style.cell(DOWN_ARROW),
                    Point::new(arrow_x, edges.bottom - 1),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tdash_style::color::{WHITE, YELLOW};

    fn list(n: usize) -> List {
        let mut l = List::with_theme(&Theme::default()).rows((0..n).map(|i| format!("row{i}")));
        l.set_rect(0, 0, 8, 4).unwrap();
        l
    }

    #[test]
    fn selected_row_is_highlighted() {
        let mut l = list(2);
        l.selected_row = 1;
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(buf.get(1, 1).unwrap().fg, WHITE);
        assert_eq!(buf.get(1, 2).unwrap().fg, YELLOW);
        assert_eq!(buf.row_text(2), "│row1  │");
    }

    #[test]
    fn view_follows_selection() {
        let mut l = list(5);
        l.selected_row = 3;
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(l.top_row(), 2);
        assert_eq!(buf.row_text(1), "│row2 ▲│");
        assert_eq!(buf.row_text(2), "│row3 ▼│");

        l.selected_row = 0;
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(l.top_row(), 0);
        assert_eq!(buf.row_text(1), "│row0  │");
    }

    #[test]
    fn scrolling_clamps() {
        let mut l = list(3);
        l.scroll_up();
        assert_eq!(l.selected_row, 0);
        l.scroll_amount(10);
        assert_eq!(l.selected_row, 2);
        l.scroll_top();
        l.scroll_down();
        assert_eq!(l.selected_row, 1);
        l.scroll_bottom();
        assert_eq!(l.selected_row, 2);
    }

    #[test]
    fn paging_uses_inner_height() {
        let mut l = list(10);
        l.scroll_page_down();
        assert_eq!(l.selected_row, 2);
        l.scroll_half_page_down();
        assert_eq!(l.selected_row, 3);
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(l.top_row(), 2);
        l.scroll_page_up();
        assert_eq!(l.selected_row, 2);
        l.scroll_page_up();
        assert_eq!(l.selected_row, 0);
    }

    #[test]
    fn empty_list_scrolls_safely() {
        let mut l = list(0);
        l.scroll_down();
        l.scroll_bottom();
        l.scroll_page_up();
        assert_eq!(l.selected_row, 0);
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(buf.row_text(1), "│      │");
    }

    #[test]
    fn wrapped_rows_take_several_lines() {
        let mut l = list(0).rows(["aaaa bbbb", "c"]).wrap_text(true);
        l.set_rect(0, 0, 8, 5).unwrap();
        let mut buf = Buffer::with_size(8, 5);
        l.draw(&mut buf);
        assert_eq!(buf.row_text(1), "│aaaa  │");
        assert_eq!(buf.row_text(2), "│bbbb  │");
        assert_eq!(buf.row_text(3), "│c     │");
    }

    #[test]
    fn wrapped_rows_above_selection_scroll_away() {
        let mut l = list(0).rows(["aaaa bbbb", "sel"]).wrap_text(true);
        l.set_rect(0, 0, 8, 4).unwrap();
        l.selected_row = 1;
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(l.top_row(), 1);
        assert_eq!(buf.row_text(1), "│sel  ▲│");
        assert_eq!(buf.get(1, 1).unwrap().fg, YELLOW);
    }

    #[test]
    fn split_rows_count_every_line() {
        let mut l = list(0).rows(["a\nb\nc", "d"]);
        l.set_rect(0, 0, 8, 4).unwrap();
        l.selected_row = 1;
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(l.top_row(), 1);
        assert_eq!(buf.row_text(1), "│d    ▲│");
    }

    #[test]
    fn down_arrow_marks_hidden_lines() {
        let mut l = list(0).rows(["a", "b\nc"]);
        l.set_rect(0, 0, 8, 4).unwrap();
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(l.top_row(), 0);
        assert_eq!(buf.row_text(1), "│a     │");
        assert_eq!(buf.row_text(2), "│b    ▼│");
    }

    #[test]
    fn tall_selected_row_shows_its_start() {
        let mut l = list(0).rows(["x", "1\n2\n3"]);
        l.set_rect(0, 0, 8, 4).unwrap();
        l.selected_row = 1;
        let mut buf = Buffer::with_size(8, 4);
        l.draw(&mut buf);
        assert_eq!(l.top_row(), 1);
        assert_eq!(buf.row_text(1), "│1    ▲│");
        assert_eq!(buf.row_text(2), "│2    ▼│");
    }
}
