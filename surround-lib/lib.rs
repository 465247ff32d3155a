//! Text model and the selection-wrapping transformation.
//!
//! The host's text-buffer API is abstracted behind [`buffer::TextBuffer`];
//! [`document::Document`] is an in-memory implementation of it built on a
//! rope with a snapshot undo stack.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod buffer;
pub mod document;
pub mod pairs;
pub mod selection;
pub mod wrap;

pub type Tendril = SmartString<LazyCompact>;
