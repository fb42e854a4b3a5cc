//! Text measurement.
//!
//! Layout in the widgets counts **code points**: one `char` takes one cell.
//! That matches how the buffer stores text, but wide glyphs (CJK, most
//! emoji) occupy two terminal columns and combining marks occupy none.
//! [`display_width`] reports what a terminal will actually use, so callers
//! can detect text where the two disagree.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of code points in `text`. This is the layout metric.
#[inline]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Terminal columns used by `text`, measured per grapheme cluster.
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() {
        return text.bytes().filter(|b| !b.is_ascii_control()).count();
    }
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}

/// Terminal columns used by a single code point.
#[inline]
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Whether laying out `text` by code point matches its display width.
#[inline]
pub fn is_cell_aligned(text: &str) -> bool {
    char_count(text) == display_width(text)
}
