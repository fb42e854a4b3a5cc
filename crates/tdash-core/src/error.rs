#![forbid(unsafe_code)]

//! Error taxonomy.
//!
//! Rendering never fails: out-of-bounds writes are dropped, overflowing
//! text is truncated, and rows that don't fit are skipped. The errors here
//! cover setup mistakes a caller can detect and fix (bad configuration,
//! drawing before geometry exists) plus the two external boundaries
//! (event delivery and presenting a frame).

use thiserror::Error;

/// Convenience alias used across the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed or contradictory widget configuration.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// An operation was invoked before its preconditions held.
    #[error("precondition violated: {0}")]
    Precondition(#[from] PreconditionViolation),

    /// The event queue has been shut down.
    #[error("event queue closed")]
    QueueClosed,

    /// A presenter failed to flush a frame.
    #[error("present failed: {0}")]
    Present(String),
}

/// Configuration problems detected at setup time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Rectangle corners are inverted (negative width or height).
    #[error("inverted rectangle ({x0},{y0})-({x1},{y1})")]
    InvertedRect { x0: u16, y0: u16, x1: u16, y1: u16 },

    /// Explicit column widths don't cover every cell of a row.
    #[error("row {row} has {cells} cells but only {widths} column widths are set")]
    ColumnWidthsTooShort {
        row: usize,
        cells: usize,
        widths: usize,
    },

    /// Gauge percentage outside `0..=100`.
    #[error("percent {0} is outside 0..=100")]
    PercentOutOfRange(u16),

    /// A chart or sparkline has nothing to plot where data is required.
    #[error("{0} has no data")]
    EmptySeries(&'static str),

    /// The process-wide theme can only be installed once.
    #[error("theme already installed")]
    ThemeAlreadyInstalled,
}

/// Operations invoked before geometry was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    /// The widget still has the default, empty rectangle.
    #[error("{widget} has no rectangle assigned")]
    RectNotAssigned { widget: &'static str },

    /// Borders, title, and padding leave no room for content.
    #[error("{widget} has a zero-area inner rectangle")]
    EmptyInnerArea { widget: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_converts_into_error() {
        let err: Error = ConfigurationError::ThemeAlreadyInstalled.into();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::ThemeAlreadyInstalled)
        ));
    }

    #[test]
    fn display_messages() {
        let err: Error = ConfigurationError::ColumnWidthsTooShort {
            row: 2,
            cells: 4,
            widths: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "configuration error: row 2 has 4 cells but only 3 column widths are set"
        );

        let err: Error = PreconditionViolation::EmptyInnerArea { widget: "Table" }.into();
        assert_eq!(
            err.to_string(),
            "precondition violated: Table has a zero-area inner rectangle"
        );
    }
}
