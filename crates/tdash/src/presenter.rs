#![forbid(unsafe_code)]

//! Presenter boundary.
//!
//! A presenter takes a finished [`Buffer`] to some output. Terminal
//! backends live outside this workspace; [`TextPresenter`] keeps plain-text
//! snapshots for tests and debugging.

use tdash_core::error::Error;
use tdash_render::buffer::Buffer;

/// Flushes a rendered buffer.
pub trait Presenter {
    fn present(&mut self, buf: &Buffer) -> Result<(), Error>;
}

/// Records every presented frame as lines of text. Styling is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPresenter {
    frames: Vec<Vec<String>>,
}

impl TextPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Drop recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Presenter for TextPresenter {
    fn present(&mut self, buf: &Buffer) -> Result<(), Error> {
        tdash_core::trace!(width = buf.width(), height = buf.height(), "frame presented");
        self.frames.push(buf.to_lines());
        Ok(())
    }
}
