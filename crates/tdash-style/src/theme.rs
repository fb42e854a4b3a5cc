//! Per-widget default styles and the process-wide theme.
//!
//! Every widget reads its defaults from one sub-theme of [`Theme`]. A host
//! either passes a theme explicitly (`Widget::with_theme(&theme)`) or
//! installs one process-wide with [`Theme::install`] before building
//! widgets; [`Theme::global`] falls back to [`Theme::default`] when nothing
//! was installed.
//!
//! # Example
//! ```
//! use tdash_style::color::CYAN;
//! use tdash_style::{Style, Theme};
//!
//! let mut theme = Theme::default();
//! theme.block.border = Style::new().fg(CYAN);
//! assert_eq!(theme.block.border.fg, Some(CYAN));
//! ```

use std::env;
use std::sync::OnceLock;

use tdash_core::error::{ConfigurationError, Error};
use tdash_render::cell::{PackedRgba, StyleFlags};

use crate::color::{CLEAR, STANDARD_COLORS, WHITE, YELLOW};
use crate::style::Style;

static INSTALLED: OnceLock<Theme> = OnceLock::new();
static BUILTIN: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTheme {
    pub title: Style,
    pub border: Style,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTheme {
    pub text: Style,
    pub separator: Style,
}

/// Defaults shared by bar charts and stacked bar charts.
///
/// Slices are indexed modulo their length (bar `i` uses `bars[i % len]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChartTheme {
    pub bars: Vec<PackedRgba>,
    pub nums: Vec<Style>,
    pub labels: Vec<Style>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeTheme {
    pub bar: PackedRgba,
    pub label: Style,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparklineTheme {
    pub title: Style,
    pub line: PackedRgba,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphTheme {
    pub text: Style,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTheme {
    pub text: Style,
    pub selected: Style,
}

/// Default styles for every widget kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Base style used where no widget-specific entry applies.
    pub default: Style,
    pub block: BlockTheme,
    pub table: TableTheme,
    pub bar_chart: BarChartTheme,
    pub stacked_bar_chart: BarChartTheme,
    pub gauge: GaugeTheme,
    pub sparkline: SparklineTheme,
    pub paragraph: ParagraphTheme,
    pub list: ListTheme,
}

impl Default for Theme {
    fn default() -> Self {
        let white = Style::new().fg(WHITE);
        Self {
            default: white,
            block: BlockTheme {
                title: white,
                border: white,
            },
            table: TableTheme {
                text: white,
                separator: white,
            },
            bar_chart: BarChartTheme {
                bars: STANDARD_COLORS.to_vec(),
                nums: vec![Style::new().fg(WHITE).bold()],
                labels: vec![white],
            },
            stacked_bar_chart: BarChartTheme {
                bars: STANDARD_COLORS.to_vec(),
                nums: vec![Style::new().fg(WHITE).bold()],
                labels: vec![white],
            },
            gauge: GaugeTheme {
                bar: WHITE,
                label: white,
            },
            sparkline: SparklineTheme {
                title: white,
                line: WHITE,
            },
            paragraph: ParagraphTheme { text: white },
            list: ListTheme {
                text: white,
                selected: Style::new().fg(YELLOW).bold(),
            },
        }
    }
}

impl Theme {
    /// The default theme with every color stripped.
    ///
    /// Modifiers survive, and selections fall back to reverse video so they
    /// stay visible.
    #[must_use]
    pub fn monochrome() -> Self {
        let base = Self::default();
        let mono = |s: Style| s.without_colors();
        let bar_chart = |t: BarChartTheme| BarChartTheme {
            bars: vec![CLEAR],
            nums: t.nums.into_iter().map(mono).collect(),
            labels: t.labels.into_iter().map(mono).collect(),
        };
        Self {
            default: mono(base.default),
            block: BlockTheme {
                title: mono(base.block.title),
                border: mono(base.block.border),
            },
            table: TableTheme {
                text: mono(base.table.text),
                separator: mono(base.table.separator),
            },
            bar_chart: bar_chart(base.bar_chart),
            stacked_bar_chart: bar_chart(base.stacked_bar_chart),
            gauge: GaugeTheme {
                bar: CLEAR,
                label: mono(base.gauge.label),
            },
            sparkline: SparklineTheme {
                title: mono(base.sparkline.title),
                line: CLEAR,
            },
            paragraph: ParagraphTheme {
                text: mono(base.paragraph.text),
            },
            list: ListTheme {
                text: mono(base.list.text),
                selected: Style::new().attrs(StyleFlags::REVERSE | StyleFlags::BOLD),
            },
        }
    }

    /// Build the default theme, honoring `NO_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_no_color(env::var("NO_COLOR").ok().as_deref())
    }

    /// Theme selection from a `NO_COLOR` value.
    ///
    /// Any non-empty value selects [`Theme::monochrome`].
    #[must_use]
    pub fn from_no_color(no_color: Option<&str>) -> Self {
        match no_color {
            Some(value) if !value.is_empty() => Self::monochrome(),
            _ => Self::default(),
        }
    }

    /// Install `theme` as the process-wide theme.
    ///
    /// Succeeds at most once per process.
    pub fn install(theme: Theme) -> Result<(), Error> {
        INSTALLED
            .set(theme)
            .map_err(|_| Error::from(ConfigurationError::ThemeAlreadyInstalled))?;
        tdash_core::debug!("theme installed");
        Ok(())
    }

    /// The installed theme, or the built-in default when none was installed.
    #[must_use]
    pub fn global() -> &'static Theme {
        INSTALLED
            .get()
            .unwrap_or_else(|| BUILTIN.get_or_init(Theme::default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_standard_bar_colors() {
        let theme = Theme::default();
        assert_eq!(theme.bar_chart.bars.len(), 7);
        assert_eq!(theme.table.text.fg, Some(WHITE));
    }

    #[test]
    fn monochrome_has_no_colors() {
        let theme = Theme::monochrome();
        assert_eq!(theme.block.border.fg, None);
        assert_eq!(theme.table.text, Style::new());
        assert!(theme.bar_chart.bars.iter().all(|c| c.is_default()));
        assert_eq!(
            theme.bar_chart.nums[0].attrs,
            Some(StyleFlags::BOLD),
            "modifiers are kept"
        );
        assert!(theme.gauge.bar.is_default());
    }

    #[test]
    fn no_color_selection() {
        assert_eq!(Theme::from_no_color(None), Theme::default());
        assert_eq!(Theme::from_no_color(Some("")), Theme::default());
        assert_eq!(Theme::from_no_color(Some("1")), Theme::monochrome());
    }

    #[test]
    fn install_only_once() {
        let _ = Theme::install(Theme::monochrome());
        assert_eq!(
            Theme::install(Theme::default()),
            Err(Error::Configuration(ConfigurationError::ThemeAlreadyInstalled))
        );
        assert_eq!(Theme::global(), INSTALLED.get().expect("installed"));
    }
}
