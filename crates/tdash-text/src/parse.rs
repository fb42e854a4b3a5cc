//! Inline style directives.
//!
//! A directive wraps a run of text and restyles it:
//!
//! ```text
//! [text](fg:red,bg:#003366,mod:bold|underline)
//! ```
//!
//! Keys are `fg`, `bg`, and `mod` (alias `modifier`). Colors are the named
//! palette (`black red green yellow blue magenta cyan white clear`) or
//! `#rrggbb`. Modifiers are `|`-separated. Anything that does not form a
//! complete, valid directive is kept as plain text, brackets included.
//!
//! # Example
//! ```
//! use tdash_style::{Style, color::RED};
//! use tdash_text::parse::parse_text;
//!
//! let chars = parse_text("a[bc](fg:red)d", Style::new());
//! let text: String = chars.iter().map(|c| c.ch).collect();
//! assert_eq!(text, "abcd");
//! assert_eq!(chars[1].style.fg, Some(RED));
//! assert_eq!(chars[3].style.fg, None);
//! ```

use tdash_render::cell::{Cell, StyleFlags};
use tdash_style::{Style, parse_color};

/// One displayable code point with its resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    pub ch: char,
    pub style: Style,
}

impl StyledChar {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// The buffer cell for this character.
    #[inline]
    pub fn cell(self) -> Cell {
        self.style.cell(self.ch)
    }
}

/// Parse `raw` into styled characters.
///
/// Plain text gets `default`; directive text gets the directive's fields
/// resolved over `default`.
pub fn parse_text(raw: &str, default: Style) -> Vec<StyledChar> {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '['
            && let Some((text, style, next)) = parse_directive(&chars, i)
        {
            let style = style.resolve(default);
            out.extend(text.iter().map(|&ch| StyledChar::new(ch, style)));
            i = next;
            continue;
        }
        out.push(StyledChar::new(chars[i], default));
        i += 1;
    }

    out
}

/// Try to read a directive starting at `chars[start] == '['`.
///
/// Returns the bracketed text, the parsed style, and the index just past
/// the closing parenthesis.
fn parse_directive(chars: &[char], start: usize) -> Option<(&[char], Style, usize)> {
    let text_start = start + 1;
    let close = text_start
        + chars[text_start..]
            .iter()
            .position(|&c| matches!(c, ']' | '[' | '\n'))?;
    if chars[close] != ']' || chars.get(close + 1) != Some(&'(') {
        return None;
    }

    let spec_start = close + 2;
    let spec_end = spec_start
        + chars[spec_start..]
            .iter()
            .position(|&c| matches!(c, ')' | '(' | '\n'))?;
    if chars[spec_end] != ')' {
        return None;
    }

    let spec: String = chars[spec_start..spec_end].iter().collect();
    match parse_style(&spec) {
        Some(style) => Some((&chars[text_start..close], style, spec_end + 1)),
        None => {
            tdash_core::trace!(spec = %spec, "malformed style directive kept as text");
            None
        }
    }
}

/// Parse the body of a directive (`fg:red,mod:bold`) into a [`Style`].
///
/// Returns `None` if any item is unknown or malformed.
pub fn parse_style(spec: &str) -> Option<Style> {
    let mut style = Style::new();
    for item in spec.split(',') {
        let (key, value) = item.split_once(':')?;
        let value = value.trim();
        match key.trim() {
            "fg" => style.fg = Some(parse_color(value)?),
            "bg" => style.bg = Some(parse_color(value)?),
            "mod" | "modifier" => style.attrs = Some(parse_modifiers(value)?),
            _ => return None,
        }
    }
    Some(style)
}

/// Parse `bold|underline` style modifier lists.
pub fn parse_modifiers(value: &str) -> Option<StyleFlags> {
    value.split('|').try_fold(StyleFlags::empty(), |acc, name| {
        let flag = match name.trim().to_ascii_lowercase().as_str() {
            "bold" => StyleFlags::BOLD,
            "dim" => StyleFlags::DIM,
            "italic" => StyleFlags::ITALIC,
            "underline" => StyleFlags::UNDERLINE,
            "blink" => StyleFlags::BLINK,
            "reverse" => StyleFlags::REVERSE,
            "strikethrough" => StyleFlags::STRIKETHROUGH,
            "hidden" => StyleFlags::HIDDEN,
            _ => return None,
        };
        Some(acc | flag)
    })
}

/// The characters of `chars` as a plain string.
pub fn plain_text(chars: &[StyledChar]) -> String {
    chars.iter().map(|c| c.ch).collect()
}
