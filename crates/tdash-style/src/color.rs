//! Named colors and color parsing.

use tdash_render::cell::PackedRgba;

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    /// Return the raw ANSI index (0–15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Canonical RGB value for this palette slot.
    #[must_use]
    pub const fn to_packed(self) -> PackedRgba {
        ANSI16_PALETTE[self as usize]
    }
}

impl From<Ansi16> for PackedRgba {
    fn from(color: Ansi16) -> Self {
        color.to_packed()
    }
}

const ANSI16_PALETTE: [PackedRgba; 16] = [
    PackedRgba::rgb(0, 0, 0),       // Black
    PackedRgba::rgb(205, 0, 0),     // Red
    PackedRgba::rgb(0, 205, 0),     // Green
    PackedRgba::rgb(205, 205, 0),   // Yellow
    PackedRgba::rgb(0, 0, 238),     // Blue
    PackedRgba::rgb(205, 0, 205),   // Magenta
    PackedRgba::rgb(0, 205, 205),   // Cyan
    PackedRgba::rgb(229, 229, 229), // White
    PackedRgba::rgb(127, 127, 127), // Bright Black
    PackedRgba::rgb(255, 0, 0),     // Bright Red
    PackedRgba::rgb(0, 255, 0),     // Bright Green
    PackedRgba::rgb(255, 255, 0),   // Bright Yellow
    PackedRgba::rgb(92, 92, 255),   // Bright Blue
    PackedRgba::rgb(255, 0, 255),   // Bright Magenta
    PackedRgba::rgb(0, 255, 255),   // Bright Cyan
    PackedRgba::rgb(255, 255, 255), // Bright White
];

pub const CLEAR: PackedRgba = PackedRgba::TRANSPARENT;
pub const BLACK: PackedRgba = Ansi16::Black.to_packed();
pub const RED: PackedRgba = Ansi16::Red.to_packed();
pub const GREEN: PackedRgba = Ansi16::Green.to_packed();
pub const YELLOW: PackedRgba = Ansi16::Yellow.to_packed();
pub const BLUE: PackedRgba = Ansi16::Blue.to_packed();
pub const MAGENTA: PackedRgba = Ansi16::Magenta.to_packed();
pub const CYAN: PackedRgba = Ansi16::Cyan.to_packed();
pub const WHITE: PackedRgba = Ansi16::White.to_packed();

/// The seven foreground colors cycled through by multi-series widgets.
pub const STANDARD_COLORS: [PackedRgba; 7] = [RED, GREEN, YELLOW, BLUE, MAGENTA, CYAN, WHITE];

/// Look up a color by its directive name.
///
/// `clear` maps to the terminal default.
#[must_use]
pub fn named_color(name: &str) -> Option<PackedRgba> {
    let color = match name {
        "clear" => CLEAR,
        "black" => BLACK,
        "red" => RED,
        "green" => GREEN,
        "yellow" => YELLOW,
        "blue" => BLUE,
        "magenta" => MAGENTA,
        "cyan" => CYAN,
        "white" => WHITE,
        _ => return None,
    };
    Some(color)
}

/// Parse a color name or a `#rrggbb` hex literal.
///
/// ```
/// use tdash_render::cell::PackedRgba;
/// use tdash_style::color::parse_color;
///
/// assert_eq!(parse_color("#ff8000"), Some(PackedRgba::rgb(255, 128, 0)));
/// assert_eq!(parse_color("nope"), None);
/// ```
#[must_use]
pub fn parse_color(input: &str) -> Option<PackedRgba> {
    let input = input.trim();
    match input.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => named_color(&input.to_ascii_lowercase()),
    }
}

fn parse_hex(hex: &str) -> Option<PackedRgba> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(PackedRgba::rgb(channel(0)?, channel(2)?, channel(4)?))
}
