#![forbid(unsafe_code)]

//! Text handling for termdash.
//!
//! - [`parse`]: `[text](fg:..,bg:..,mod:..)` directives into styled chars.
//! - [`width`]: code-point and display-width measurement.
//! - [`wrap`]: splitting, wrapping, and marker truncation.

pub mod parse;
pub mod width;
pub mod wrap;

pub use parse::{StyledChar, parse_text, plain_text};
pub use width::{char_count, display_width};
pub use wrap::{split_lines, trim_chars, wrap_chars};
