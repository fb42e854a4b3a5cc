//! Line splitting, wrapping, and truncation over styled characters.
//!
//! Widths are in code points (see [`crate::width`]).

use tdash_render::glyphs::DOTS;

use crate::parse::StyledChar;

/// Split at `'\n'`, dropping the newlines. Always yields at least one line.
pub fn split_lines(chars: &[StyledChar]) -> Vec<&[StyledChar]> {
    chars.split(|c| c.ch == '\n').collect()
}

/// Wrap each line of `chars` to at most `width` characters.
///
/// Breaks at the last whitespace before the limit when there is one and
/// hard-breaks otherwise; the whitespace at a break is dropped. A `width`
/// of zero leaves lines unwrapped.
pub fn wrap_chars(chars: &[StyledChar], width: usize) -> Vec<Vec<StyledChar>> {
    let mut out = Vec::new();
    for line in split_lines(chars) {
        if width == 0 {
            out.push(line.to_vec());
        } else {
            wrap_line(line, width, &mut out);
        }
    }
    out
}

fn wrap_line(line: &[StyledChar], width: usize, out: &mut Vec<Vec<StyledChar>>) {
    let mut current: Vec<StyledChar> = Vec::with_capacity(width);
    let mut last_space: Option<usize> = None;

    for &c in line {
        if current.len() == width {
            if c.ch.is_whitespace() {
                out.push(std::mem::take(&mut current));
                last_space = None;
                continue;
            }
            match last_space {
                Some(sp) if sp > 0 => {
                    let rest = current.split_off(sp + 1);
                    current.pop();
                    out.push(std::mem::replace(&mut current, rest));
                }
                _ => out.push(std::mem::take(&mut current)),
            }
            last_space = None;
        }
        if c.ch.is_whitespace() {
            last_space = Some(current.len());
        }
        current.push(c);
    }

    out.push(current);
}

/// Truncate to `width`, replacing the last kept character with the marker.
///
/// The marker keeps the style of the character it replaces.
pub fn trim_chars(chars: &[StyledChar], width: usize) -> Vec<StyledChar> {
    if chars.len() <= width {
        return chars.to_vec();
    }
    if width == 0 {
        return Vec::new();
    }
    let mut out = chars[..width].to_vec();
    if let Some(last) = out.last_mut() {
        last.ch = DOTS;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_text, plain_text};
    use tdash_style::Style;
    use tdash_style::color::RED;

    fn chars(s: &str) -> Vec<StyledChar> {
        parse_text(s, Style::new())
    }

    fn wrapped(s: &str, width: usize) -> Vec<String> {
        wrap_chars(&chars(s), width)
            .iter()
            .map(|l| plain_text(l))
            .collect()
    }

    #[test]
    fn split_keeps_empty_lines() {
        let c = chars("a\n\nb");
        let lines = split_lines(&c);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
        assert_eq!(split_lines(&[]).len(), 1);
    }

    #[test]
    fn wraps_at_whitespace() {
        assert_eq!(wrapped("hello world foo", 8), vec!["hello", "world", "foo"]);
        assert_eq!(wrapped("ab cd", 5), vec!["ab cd"]);
    }

    #[test]
    fn hard_breaks_long_words() {
        assert_eq!(wrapped("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn break_space_is_dropped() {
        assert_eq!(wrapped("abc def", 3), vec!["abc", "def"]);
    }

    #[test]
    fn newlines_are_respected() {
        assert_eq!(wrapped("ab\ncd", 10), vec!["ab", "cd"]);
        assert_eq!(wrapped("ab\ncd", 0), vec!["ab", "cd"]);
    }

    #[test]
    fn trim_replaces_last_slot_with_marker() {
        let c = parse_text("[abcdef](fg:red)", Style::new());
        let t = trim_chars(&c, 4);
        assert_eq!(plain_text(&t), "abc…");
        assert_eq!(t[3].style.fg, Some(RED));
        assert_eq!(plain_text(&trim_chars(&c, 6)), "abcdef");
        assert!(trim_chars(&c, 0).is_empty());
    }
}
