#![forbid(unsafe_code)]

//! Border flags and border glyph styles.

use bitflags::bitflags;
use tdash_core::geometry::Sides;
use tdash_render::glyphs::BorderSet;

bitflags! {
    /// Which sides of a block draw a border.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Borders: u8 {
        const NONE   = 0b0000;
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

impl Borders {
    /// One cell of inset per enabled side.
    pub fn insets(self) -> Sides {
        Sides::new(
            u16::from(self.contains(Self::TOP)),
            u16::from(self.contains(Self::RIGHT)),
            u16::from(self.contains(Self::BOTTOM)),
            u16::from(self.contains(Self::LEFT)),
        )
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderType {
    #[default]
    Square,
    Rounded,
    Double,
    Heavy,
    Ascii,
}

impl BorderType {
    /// Glyphs used for this border type.
    pub const fn to_border_set(self) -> BorderSet {
        match self {
            Self::Square => BorderSet::SQUARE,
            Self::Rounded => BorderSet::ROUNDED,
            Self::Double => BorderSet::DOUBLE,
            Self::Heavy => BorderSet::HEAVY,
            Self::Ascii => BorderSet::ASCII,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insets_follow_flags() {
        assert_eq!(Borders::ALL.insets(), Sides::all(1));
        assert_eq!(Borders::NONE.insets(), Sides::all(0));
        assert_eq!(
            (Borders::LEFT | Borders::BOTTOM).insets(),
            Sides::new(0, 0, 1, 1)
        );
    }

    #[test]
    fn border_type_glyphs() {
        assert_eq!(BorderType::default().to_border_set().top_left, '┌');
        assert_eq!(BorderType::Rounded.to_border_set().top_left, '╭');
        assert_eq!(BorderType::Ascii.to_border_set().vertical, '|');
    }
}
