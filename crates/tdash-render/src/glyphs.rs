#![forbid(unsafe_code)]

//! Box-drawing and bar glyphs shared by the widgets.

/// Truncation marker written in place of the last visible code point.
pub const DOTS: char = '…';

pub const VERTICAL_LINE: char = '│';
pub const HORIZONTAL_LINE: char = '─';
pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';

/// Eighth-block ramp from lowest to full, used by sparklines.
pub const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Full block used by sparkline columns.
pub const FULL_BLOCK: char = '█';

/// Scroll indicators drawn by lists.
pub const UP_ARROW: char = '▲';
pub const DOWN_ARROW: char = '▼';

/// The glyphs needed to draw a rectangular border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderSet {
    /// Square corners with light lines.
    pub const SQUARE: Self = Self {
        top_left: TOP_LEFT,
        top_right: TOP_RIGHT,
        bottom_left: BOTTOM_LEFT,
        bottom_right: BOTTOM_RIGHT,
        horizontal: HORIZONTAL_LINE,
        vertical: VERTICAL_LINE,
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        ..Self::SQUARE
    };

    /// Double lines.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Heavy lines.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    /// 7-bit fallback for terminals without box-drawing support.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::SQUARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_border_is_square() {
        assert_eq!(BorderSet::default().top_left, '┌');
        assert_eq!(BorderSet::ROUNDED.horizontal, HORIZONTAL_LINE);
    }
}
