#![forbid(unsafe_code)]

//! Render kernel: cells, colors, glyphs, and the clipping buffer.
//!
//! # Role in termdash
//! `tdash-render` owns the grid every widget draws into. It knows nothing
//! about optional styles or themes; it stores fully resolved cells and
//! enforces that writes outside the buffer (or outside the active scissor)
//! are dropped.
//!
//! # Primary responsibilities
//! - **Cell / PackedRgba / StyleFlags**: the per-slot value type.
//! - **Buffer**: 2D grid with absolute coordinates and a scissor stack.
//! - **Glyphs**: border sets, the truncation marker, bar ramps.

pub mod buffer;
pub mod cell;
pub mod glyphs;

pub use buffer::Buffer;
pub use cell::{Cell, PackedRgba, StyleFlags};
