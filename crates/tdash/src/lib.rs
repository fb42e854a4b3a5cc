#![forbid(unsafe_code)]

//! termdash public facade.
//!
//! Re-exports the widget toolkit and provides the per-frame entry points:
//! [`render`] paints widgets into a shared [`Buffer`], [`render_to`] also
//! hands the finished buffer to a [`Presenter`].
//!
//! ```
//! use tdash::prelude::*;
//!
//! let mut table = Table::with_theme(&Theme::default()).rows([["Ken", "C"], ["Rob", "Go"]]);
//! table.set_rect(0, 0, 22, 6)?;
//!
//! let mut presenter = TextPresenter::new();
//! let mut buf = Buffer::with_size(22, 6);
//! tdash::render_to(&mut presenter, &mut buf, &[&table])?;
//! assert_eq!(presenter.last_frame().map(|f| f[1].as_str()), Some("│Ken       │C        │"));
//! # Ok::<(), tdash::Error>(())
//! ```

mod presenter;

// --- Core re-exports -------------------------------------------------------

pub use tdash_core::error::{ConfigurationError, Error, PreconditionViolation, Result};
pub use tdash_core::event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseKind};
pub use tdash_core::event_queue::{EventQueue, EventReceiver, EventSender};
pub use tdash_core::geometry::{Point, Rect, Sides};

// --- Render re-exports -----------------------------------------------------

pub use tdash_render::buffer::Buffer;
pub use tdash_render::cell::{Cell, PackedRgba, StyleFlags};

// --- Style and text re-exports ---------------------------------------------

pub use tdash_style::{Style, Theme, parse_color};
pub use tdash_text::{StyledChar, parse_text};

// --- Widgets ---------------------------------------------------------------

pub use tdash_widgets::{
    Alignment, BarChart, Block, BorderType, Borders, Gauge, List, Paragraph, Sparkline,
    SparklineGroup, StackedBarChart, Table, Widget,
};

pub use presenter::{Presenter, TextPresenter};

/// Draw `widgets` into `buf` in order. Later widgets paint over earlier
/// ones where they overlap.
pub fn render(buf: &mut Buffer, widgets: &[&dyn Widget]) {
    let _span = tdash_core::debug_span!("render", widgets = widgets.len()).entered();
    for widget in widgets {
        widget.draw(buf);
    }
}

/// [`render`], then flush the buffer through `presenter`.
pub fn render_to(
    presenter: &mut dyn Presenter,
    buf: &mut Buffer,
    widgets: &[&dyn Widget],
) -> Result<()> {
    render(buf, widgets);
    presenter.present(buf)
}

pub mod prelude {
    pub use crate::{
        Alignment, BarChart, Block, BorderType, Borders, Buffer, Cell, Error, Event, Gauge, List,
        PackedRgba, Paragraph, Presenter, Rect, Result, Sparkline, SparklineGroup,
        StackedBarChart, Style, Table, TextPresenter, Theme, Widget,
    };
}
