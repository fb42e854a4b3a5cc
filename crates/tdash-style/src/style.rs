//! Optional-field styles and field-wise resolution.

use tdash_render::cell::{Cell, PackedRgba, StyleFlags};

/// Visual attributes with every field optional.
///
/// An unset field means "inherit": [`Style::resolve`] fills it from a
/// fallback, and [`Style::apply_to`] leaves the target cell's value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<PackedRgba>,
    /// Background color.
    pub bg: Option<PackedRgba>,
    /// Modifier flags.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// An empty style that inherits everything.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Replace the modifier set.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Add modifiers to whatever is already set.
    #[must_use]
    pub fn add_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default() | attrs);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.add_attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.add_attrs(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.add_attrs(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.add_attrs(StyleFlags::REVERSE)
    }

    /// Whether no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Field-wise merge: fields set on `self` win, the rest come from
    /// `fallback`.
    #[must_use]
    pub fn resolve(self, fallback: Style) -> Style {
        Style {
            fg: self.fg.or(fallback.fg),
            bg: self.bg.or(fallback.bg),
            attrs: self.attrs.or(fallback.attrs),
        }
    }

    /// Paint this style onto `cell`, keeping the cell's values for unset
    /// fields.
    #[must_use]
    pub fn apply_to(self, mut cell: Cell) -> Cell {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        if let Some(attrs) = self.attrs {
            cell.attrs = attrs;
        }
        cell
    }

    /// A cell showing `ch` in this style over a blank background.
    #[must_use]
    pub fn cell(self, ch: char) -> Cell {
        self.apply_to(Cell::from_char(ch))
    }

    /// Drop colors, keep modifiers.
    #[must_use]
    pub const fn without_colors(self) -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: self.attrs,
        }
    }
}

impl From<PackedRgba> for Style {
    fn from(fg: PackedRgba) -> Self {
        Style::new().fg(fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, RED, WHITE};

    #[test]
    fn resolve_is_field_wise() {
        let explicit = Style::new().fg(RED);
        let theme = Style::new().fg(WHITE).bg(BLUE).attrs(StyleFlags::BOLD);
        let resolved = explicit.resolve(theme);
        assert_eq!(resolved.fg, Some(RED));
        assert_eq!(resolved.bg, Some(BLUE));
        assert_eq!(resolved.attrs, Some(StyleFlags::BOLD));
    }

    #[test]
    fn resolve_with_empty_fallback_is_identity() {
        let s = Style::new().bg(BLUE).underline();
        assert_eq!(s.resolve(Style::new()), s);
        assert_eq!(Style::new().resolve(s), s);
    }

    #[test]
    fn apply_to_keeps_unset_fields() {
        let base = Cell::from_char('a').with_fg(WHITE).with_bg(BLUE);
        let out = Style::new().fg(RED).apply_to(base);
        assert_eq!(out.ch, 'a');
        assert_eq!(out.fg, RED);
        assert_eq!(out.bg, BLUE);
    }

    #[test]
    fn modifier_helpers_accumulate() {
        let s = Style::new().bold().italic();
        assert_eq!(s.attrs, Some(StyleFlags::BOLD | StyleFlags::ITALIC));
        assert!(!s.is_empty());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn without_colors_keeps_attrs() {
        let s = Style::new().fg(RED).bg(BLUE).reverse().without_colors();
        assert_eq!(s, Style::new().attrs(StyleFlags::REVERSE));
    }
}
