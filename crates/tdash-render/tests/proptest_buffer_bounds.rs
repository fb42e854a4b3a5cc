//! Property tests for buffer clipping.
//!
//! Writes anywhere in `i32` space never panic, never touch cells outside
//! the active scissor, and land exactly when the point is inside it.

use proptest::prelude::*;
use tdash_core::geometry::{Point, Rect};
use tdash_render::{Buffer, Cell};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=20, 0u16..=20, 0u16..=30, 0u16..=30).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn set_cell_never_escapes(area in rect_strategy(), px in -100i32..=100, py in -100i32..=100) {
        let mut buf = Buffer::new(area);
        buf.set_cell(Cell::from_char('x'), Point::new(px, py));
        let written = buf.cells().iter().filter(|c| c.ch == 'x').count();
        let inside = area.contains_point(Point::new(px, py));
        prop_assert_eq!(written, usize::from(inside));
        if inside {
            prop_assert_eq!(buf.get_cell(Point::new(px, py)).ch, 'x');
        }
    }

    #[test]
    fn scissor_bounds_every_write(
        area in rect_strategy(),
        scissor in rect_strategy(),
        fill in rect_strategy(),
    ) {
        let mut buf = Buffer::new(area);
        buf.push_scissor(scissor);
        buf.fill(Cell::from_char('#'), fill);
        let clip = buf.current_scissor();
        buf.pop_scissor();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let expected = clip.contains(x, y) && fill.contains(x, y);
                let got = buf.get(x, y).map(|c| c.ch == '#').unwrap_or(false);
                prop_assert_eq!(got, expected, "cell ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn set_string_cursor_is_len(text in "[a-z]{0,40}", px in -20i32..=20) {
        let mut buf = Buffer::with_size(10, 1);
        let end = buf.set_string(&text, Cell::BLANK, Point::new(px, 0));
        prop_assert_eq!(end, px + text.chars().count() as i32);
    }
}
