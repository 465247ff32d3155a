//! In-memory text buffer.
//!
//! [`Document`] owns a rope, a selection and a target range, and implements
//! [`TextBuffer`] so the wrapping logic can run without a host. Undo keeps
//! whole snapshots of text and selection: the outermost
//! [`TextBuffer::begin_undo_action`] records the state edits will revert to,
//! and everything up to the matching [`TextBuffer::end_undo_action`] is one
//! undo step. A replacement made outside an undo action is a step of its own.
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use ropey::Rope;
//! use surround_lib::{
//!   buffer::TextBuffer,
//!   document::{
//!     Document,
//!     DocumentId,
//!   },
//! };
//!
//! let id = DocumentId::new(NonZeroUsize::new(1).unwrap());
//! let mut doc = Document::new(id, Rope::from("hello"));
//! doc.set_target_range(5, 5);
//! doc.replace_target(" world").unwrap();
//! assert_eq!(doc.text().to_string(), "hello world");
//! assert!(doc.undo());
//! assert_eq!(doc.text().to_string(), "hello");
//! ```

use std::{
  borrow::Cow,
  num::NonZeroUsize,
};

use ropey::Rope;
use thiserror::Error;

use crate::{
  Tendril,
  buffer::TextBuffer,
  selection::{
    Range,
    Selection,
  },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(NonZeroUsize);

impl DocumentId {
  pub const fn new(id: NonZeroUsize) -> Self {
    Self(id)
  }

  pub const fn get(self) -> NonZeroUsize {
    self.0
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentFlags {
  pub readonly: bool,
  pub modified: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
  #[error("document is readonly")]
  Readonly,
  #[error("target {from}..{to} is out of bounds for document length {len}")]
  TargetOutOfBounds { from: usize, to: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Text and selection at one point in time. Rope clones share their chunks.
#[derive(Debug, Clone)]
struct Snapshot {
  text:      Rope,
  selection: Selection,
}

/// One undo step.
#[derive(Debug, Clone)]
struct Revision {
  before: Snapshot,
  after:  Snapshot,
}

#[derive(Debug)]
pub struct Document {
  id:           DocumentId,
  text:         Rope,
  selection:    Selection,
  target:       Range,
  undo:         Vec<Revision>,
  redo:         Vec<Revision>,
  /// State at the start of the open undo action.
  pending:      Option<Snapshot>,
  /// Whether the open undo action has replaced any text.
  edited:       bool,
  action_depth: usize,
  version:      u64,
  flags:        DocumentFlags,
}

/// Where `pos` ends up once `from..to` is replaced by `inserted` characters.
///
/// Positions before the replacement stay put, positions inside it collapse to
/// its start, and positions at or after its end (including a caret at a pure
/// insertion point) move by the change in length.
fn map_pos(pos: usize, from: usize, to: usize, inserted: usize) -> usize {
  if pos < from {
    pos
  } else if pos >= to {
    pos - (to - from) + inserted
  } else {
    from
  }
}

impl Document {
  pub fn new(id: DocumentId, text: Rope) -> Self {
    Self {
      id,
      text,
      selection: Selection::point(0),
      target: Range::point(0),
      undo: Vec::new(),
      redo: Vec::new(),
      pending: None,
      edited: false,
      action_depth: 0,
      version: 0,
      flags: DocumentFlags::default(),
    }
  }

  pub fn id(&self) -> DocumentId {
    self.id
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  pub fn selection(&self) -> &Selection {
    &self.selection
  }

  /// Replace the whole selection. Positions are not validated, like a host
  /// that reports stale ranges.
  pub fn select(&mut self, selection: Selection) {
    self.selection = selection;
  }

  pub fn target(&self) -> Range {
    self.target
  }

  pub fn version(&self) -> u64 {
    self.version
  }

  pub fn flags(&self) -> DocumentFlags {
    self.flags
  }

  pub fn set_readonly(&mut self, readonly: bool) {
    self.flags.readonly = readonly;
  }

  /// True while an undo action is open.
  pub fn in_undo_action(&self) -> bool {
    self.action_depth > 0
  }

  /// Number of steps [`Document::undo`] can revert.
  pub fn revisions(&self) -> usize {
    self.undo.len()
  }

  /// Revert the last undo step. Returns `false` when there is none.
  pub fn undo(&mut self) -> bool {
    let Some(revision) = self.undo.pop() else {
      return false;
    };
    self.restore(revision.before.clone());
    self.redo.push(revision);
    true
  }

  /// Reapply the last undone step. Returns `false` when there is none.
  pub fn redo(&mut self) -> bool {
    let Some(revision) = self.redo.pop() else {
      return false;
    };
    self.restore(revision.after.clone());
    self.undo.push(revision);
    true
  }

  fn snapshot(&self) -> Snapshot {
    Snapshot {
      text:      self.text.clone(),
      selection: self.selection.clone(),
    }
  }

  fn restore(&mut self, snapshot: Snapshot) {
    self.text = snapshot.text;
    self.selection = snapshot.selection;
    self.version = self.version.saturating_add(1);
  }

  fn record(&mut self, before: Snapshot) {
    let after = self.snapshot();
    self.undo.push(Revision { before, after });
    self.redo.clear();
  }

  fn checked_target(&self) -> Result<(usize, usize)> {
    let len = self.text.len_chars();
    let (from, to) = (self.target.from(), self.target.to());
    if to > len {
      return Err(DocumentError::TargetOutOfBounds { from, to, len });
    }
    Ok((from, to))
  }
}

impl TextBuffer for Document {
  type Error = DocumentError;

  fn selection_count(&self) -> usize {
    self.selection.len()
  }

  fn selection_n(&self, n: usize) -> Range {
    self
      .selection
      .range_at(n)
      .unwrap_or_else(|_| Range::point(self.text.len_chars()))
  }

  fn clear_selections(&mut self) {
    self.selection = Selection::point(0);
  }

  fn set_selection(&mut self, range: Range) {
    self.selection = Selection::single(range.anchor, range.head);
  }

  fn add_selection(&mut self, range: Range) {
    self.selection.push(range);
  }

  fn set_target_range(&mut self, from: usize, to: usize) {
    self.target = Range::new(from, to);
  }

  fn target_text(&self) -> Result<Tendril> {
    let (from, to) = self.checked_target()?;
    let text = Cow::from(self.text.slice(from..to));
    Ok(Tendril::from(text.as_ref()))
  }

  fn replace_target(&mut self, text: &str) -> Result<usize> {
    if self.flags.readonly {
      return Err(DocumentError::Readonly);
    }
    // Every check happens before the rope is touched.
    let (from, to) = self.checked_target()?;
    let before = (!self.in_undo_action()).then(|| self.snapshot());

    let inserted = text.chars().count();
    self.text.remove(from..to);
    self.text.insert(from, text);
    self.selection = std::mem::replace(&mut self.selection, Selection::point(0)).transform(
      |range| {
        Range::new(
          map_pos(range.anchor, from, to, inserted),
          map_pos(range.head, from, to, inserted),
        )
      },
    );
    self.target = Range::new(from, from + inserted);
    self.flags.modified = true;
    self.version = self.version.saturating_add(1);

    match before {
      Some(before) => self.record(before),
      None => self.edited = true,
    }
    Ok(inserted)
  }

  fn begin_undo_action(&mut self) {
    if self.action_depth == 0 {
      // Undo returns to the state the action started from, selections
      // included, even if the action rearranges them before editing.
      self.pending = Some(self.snapshot());
      self.edited = false;
    }
    self.action_depth += 1;
  }

  fn end_undo_action(&mut self) -> Result<()> {
    self.action_depth = self.action_depth.saturating_sub(1);
    if self.action_depth == 0 {
      let pending = self.pending.take();
      if let Some(before) = pending.filter(|_| self.edited) {
        self.record(before);
      }
      self.edited = false;
    }
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn document(text: &str) -> Document {
    Document::new(DocumentId::new(NonZeroUsize::new(1).unwrap()), Rope::from(text))
  }

  #[test]
  fn replace_target_outside_undo_action_is_one_step() {
    let mut doc = document("hello");
    doc.set_target_range(5, 5);
    assert_eq!(doc.replace_target("!").unwrap(), 1);
    assert_eq!(doc.text().to_string(), "hello!");
    assert_eq!(doc.target(), Range::new(5, 6));
    assert_eq!(doc.revisions(), 1);

    assert!(doc.undo());
    assert_eq!(doc.text().to_string(), "hello");
    assert!(doc.redo());
    assert_eq!(doc.text().to_string(), "hello!");
    assert!(!doc.redo());
  }

  #[test]
  fn undo_action_groups_edits() {
    let mut doc = document("ab cd");
    doc.begin_undo_action();
    doc.set_target_range(0, 2);
    doc.replace_target("[ab]").unwrap();
    doc.set_target_range(5, 7);
    doc.replace_target("[cd]").unwrap();
    doc.end_undo_action().unwrap();

    assert_eq!(doc.text().to_string(), "[ab] [cd]");
    assert_eq!(doc.revisions(), 1);

    assert!(doc.undo());
    assert_eq!(doc.text().to_string(), "ab cd");
    assert!(!doc.undo());
  }

  #[test]
  fn nested_undo_actions_record_at_outermost_end() {
    let mut doc = document("x");
    doc.begin_undo_action();
    doc.begin_undo_action();
    doc.set_target_range(1, 1);
    doc.replace_target("y").unwrap();
    doc.end_undo_action().unwrap();
    assert!(doc.in_undo_action());
    assert_eq!(doc.revisions(), 0);
    doc.end_undo_action().unwrap();
    assert_eq!(doc.revisions(), 1);
  }

  #[test]
  fn empty_undo_action_records_nothing() {
    let mut doc = document("x");
    doc.begin_undo_action();
    doc.clear_selections();
    doc.end_undo_action().unwrap();
    assert_eq!(doc.revisions(), 0);
  }

  #[test]
  fn new_edit_clears_redo() {
    let mut doc = document("a");
    doc.set_target_range(1, 1);
    doc.replace_target("b").unwrap();
    assert!(doc.undo());
    doc.set_target_range(0, 0);
    doc.replace_target("c").unwrap();
    assert!(!doc.redo());
    assert_eq!(doc.text().to_string(), "ca");
  }

  #[test]
  fn target_text_reads_range() {
    let mut doc = document("hello world");
    doc.set_target_range(6, 11);
    assert_eq!(doc.target_text().unwrap().as_str(), "world");

    doc.set_target_range(6, 20);
    assert_eq!(
      doc.target_text(),
      Err(DocumentError::TargetOutOfBounds {
        from: 6,
        to:   20,
        len:  11,
      })
    );
  }

  #[test]
  fn rejected_replacement_leaves_document_untouched() {
    let mut doc = document("abc");
    doc.set_readonly(true);
    doc.set_target_range(0, 1);
    assert_eq!(doc.replace_target("z"), Err(DocumentError::Readonly));

    doc.set_readonly(false);
    doc.set_target_range(2, 9);
    assert!(doc.replace_target("z").is_err());
    assert_eq!(doc.text().to_string(), "abc");
    assert_eq!(doc.version(), 0);
    assert_eq!(doc.revisions(), 0);
  }

  #[test]
  fn stale_selection_does_not_break_later_edits() {
    let mut doc = document("abc");
    doc.select(Selection::point(10));
    doc.set_target_range(0, 0);
    assert_eq!(doc.replace_target("x"), Ok(1));
    assert_eq!(doc.text().to_string(), "xabc");
    assert_eq!(doc.selection().primary(), Range::point(11));

    doc.select(Selection::point(0));
    doc.set_target_range(0, 0);
    assert_eq!(doc.replace_target("y"), Ok(1));
    assert_eq!(doc.text().to_string(), "yxabc");
    assert_eq!(doc.revisions(), 2);

    assert!(doc.undo());
    assert_eq!(doc.text().to_string(), "xabc");
    assert!(doc.undo());
    assert_eq!(doc.text().to_string(), "abc");
    assert_eq!(doc.selection().primary(), Range::point(10));
  }

  #[test]
  fn selection_calls_follow_host_semantics() {
    let mut doc = document("hello world");
    doc.set_selection(Range::new(6, 11));
    doc.add_selection(Range::new(0, 5));
    assert_eq!(doc.selection_count(), 2);
    assert_eq!(doc.selection_n(1), Range::new(0, 5));
    assert_eq!(doc.selection_n(7), Range::point(11));
    assert!(!doc.selection_empty());

    doc.clear_selections();
    assert_eq!(doc.selection_count(), 1);
    assert!(doc.selection_empty());
  }

  #[test]
  fn selection_follows_replacement() {
    let mut doc = document("abcdef");
    let mut selection = Selection::single(0, 1);
    selection.push(Range::new(5, 3));
    selection.push(Range::point(2));
    doc.select(selection);

    doc.set_target_range(1, 3);
    doc.replace_target("XYZW").unwrap();
    assert_eq!(doc.text().to_string(), "aXYZWdef");
    assert_eq!(doc.selection().ranges(), &[
      Range::new(0, 1),
      Range::new(7, 5),
      Range::point(1),
    ]);
  }

  #[test]
  fn positions_map_around_replacement() {
    // "(ab)" replacing 2..4
    assert_eq!(map_pos(1, 2, 4, 4), 1);
    assert_eq!(map_pos(2, 2, 4, 4), 2);
    assert_eq!(map_pos(3, 2, 4, 4), 2);
    assert_eq!(map_pos(4, 2, 4, 4), 6);
    // pure insertion
    assert_eq!(map_pos(2, 2, 2, 1), 3);
  }
}
