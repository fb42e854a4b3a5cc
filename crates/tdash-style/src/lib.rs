#![forbid(unsafe_code)]

//! Style system for termdash.
//!
//! - [`Style`]: optional fg/bg/modifiers with field-wise resolution.
//! - [`color`]: the named palette and `#rrggbb` parsing used by directives.
//! - [`Theme`]: default styles per widget kind, installable once.

pub mod color;
pub mod style;
pub mod theme;

pub use color::{Ansi16, parse_color};
pub use style::Style;
pub use tdash_render::cell::{PackedRgba, StyleFlags};
pub use theme::{
    BarChartTheme, BlockTheme, GaugeTheme, ListTheme, ParagraphTheme, SparklineTheme,
    TableTheme, Theme,
};
