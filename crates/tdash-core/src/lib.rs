#![forbid(unsafe_code)]

//! Core: geometry, errors, logging, and the input-event boundary.

pub mod error;
pub mod event;
pub mod event_queue;
pub mod geometry;
pub mod logging;

pub use error::{ConfigurationError, Error, PreconditionViolation, Result};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
