//! Property tests for style resolution and color parsing.

use proptest::prelude::*;
use tdash_render::cell::{Cell, PackedRgba, StyleFlags};
use tdash_style::{Style, parse_color};

fn color() -> impl Strategy<Value = PackedRgba> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| PackedRgba::rgb(r, g, b))
}

fn style() -> impl Strategy<Value = Style> {
    (
        prop::option::of(color()),
        prop::option::of(color()),
        prop::option::of(any::<u8>().prop_map(StyleFlags::from_bits_truncate)),
    )
        .prop_map(|(fg, bg, attrs)| Style { fg, bg, attrs })
}

proptest! {
    #[test]
    fn empty_fallback_is_identity(s in style()) {
        prop_assert_eq!(s.resolve(Style::new()), s);
        prop_assert_eq!(Style::new().resolve(s), s);
    }

    #[test]
    fn set_fields_win(a in style(), b in style()) {
        let r = a.resolve(b);
        prop_assert_eq!(r.fg, a.fg.or(b.fg));
        prop_assert_eq!(r.bg, a.bg.or(b.bg));
        prop_assert_eq!(r.attrs, a.attrs.or(b.attrs));
    }

    #[test]
    fn apply_keeps_unset_fields(s in style(), base in color()) {
        let cell = Cell::from_char('x').with_fg(base).with_bg(base);
        let out = s.apply_to(cell);
        prop_assert_eq!(out.ch, 'x');
        prop_assert_eq!(out.fg, s.fg.unwrap_or(base));
        prop_assert_eq!(out.bg, s.bg.unwrap_or(base));
    }

    #[test]
    fn hex_literals_parse(c in color()) {
        let hex = format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b());
        prop_assert_eq!(parse_color(&hex), Some(c));
        prop_assert_eq!(parse_color(&hex.to_uppercase()), Some(c));
    }

    #[test]
    fn garbage_never_panics(s in "\\PC{0,12}") {
        let _ = parse_color(&s);
    }
}
