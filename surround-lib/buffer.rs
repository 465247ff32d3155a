//! The text-buffer API a host exposes to the plugin.
//!
//! The calls mirror a Scintilla-style editing component: selections are
//! enumerated by index, edits go through a target range, and an undo action
//! brackets edits that must revert together.

use crate::{
  Tendril,
  selection::Range,
};

pub trait TextBuffer {
  type Error: std::error::Error + 'static;

  /// Number of selections, including carets.
  fn selection_count(&self) -> usize;

  /// The `n`th selection in host enumeration order.
  fn selection_n(&self, n: usize) -> Range;

  /// True when no selection covers any text.
  fn selection_empty(&self) -> bool {
    (0..self.selection_count()).all(|n| self.selection_n(n).is_empty())
  }

  /// Drop every selection, leaving a single caret.
  fn clear_selections(&mut self);

  /// Replace all selections with `range`, which becomes primary.
  fn set_selection(&mut self, range: Range);

  /// Add `range` as an additional selection.
  fn add_selection(&mut self, range: Range);

  fn set_target_range(&mut self, from: usize, to: usize);

  fn target_text(&self) -> Result<Tendril, Self::Error>;

  /// Replace the target text, returning the length of the replacement in
  /// characters. The target is updated to cover the replacement.
  fn replace_target(&mut self, text: &str) -> Result<usize, Self::Error>;

  fn begin_undo_action(&mut self);

  fn end_undo_action(&mut self) -> Result<(), Self::Error>;
}

impl<B: TextBuffer + ?Sized> TextBuffer for &mut B {
  type Error = B::Error;

  fn selection_count(&self) -> usize {
    (**self).selection_count()
  }

  fn selection_n(&self, n: usize) -> Range {
    (**self).selection_n(n)
  }

  fn selection_empty(&self) -> bool {
    (**self).selection_empty()
  }

  fn clear_selections(&mut self) {
    (**self).clear_selections()
  }

  fn set_selection(&mut self, range: Range) {
    (**self).set_selection(range)
  }

  fn add_selection(&mut self, range: Range) {
    (**self).add_selection(range)
  }

  fn set_target_range(&mut self, from: usize, to: usize) {
    (**self).set_target_range(from, to)
  }

  fn target_text(&self) -> Result<Tendril, Self::Error> {
    (**self).target_text()
  }

  fn replace_target(&mut self, text: &str) -> Result<usize, Self::Error> {
    (**self).replace_target(text)
  }

  fn begin_undo_action(&mut self) {
    (**self).begin_undo_action()
  }

  fn end_undo_action(&mut self) -> Result<(), Self::Error> {
    (**self).end_undo_action()
  }
}
