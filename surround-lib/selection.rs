//! Selection ranges as reported by a text buffer.
//!
//! A [`Range`] has two positions: `anchor` and `head`. The `head` is where the
//! caret sits, the `anchor` is the other end. When `anchor == head` the range
//! is a caret and selects nothing.
//!
//! ```text
//! anchor=2, head=7: "he[llo w]orld"  (forward selection)
//! anchor=7, head=2: "he]llo w[orld"  (backward selection)
//! anchor=5, head=5: "hello|world"    (caret)
//! ```
//!
//! A [`Selection`] holds one or more ranges and the index of the primary one.
//! Unlike an editor-owned selection it is *not* normalized: ranges stay in
//! the order they were added, because that is the order a host enumerates
//! them in and it need not match buffer order.

use smallvec::{
  SmallVec,
  smallvec,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectionError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelectionError {
  #[error("selection must contain at least one range")]
  EmptySelection,
  #[error("range index {index} out of bounds for selection of length {len}")]
  RangeIndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
  pub anchor: usize,
  pub head:   usize,
}

impl Range {
  pub fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  #[inline]
  pub fn point(head: usize) -> Self {
    Self::new(head, head)
  }

  /// Start of the range
  #[inline]
  #[must_use]
  pub fn from(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the range
  #[inline]
  #[must_use]
  pub fn to(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.to() - self.from()
  }

  /// When the head and anchor are in the same position, we have no range.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.anchor == self.head
  }

  /// Moves both ends right by `delta` characters, keeping the direction.
  #[inline]
  #[must_use]
  pub fn shift(self, delta: usize) -> Self {
    Self {
      anchor: self.anchor + delta,
      head:   self.head + delta,
    }
  }
}

impl From<(usize, usize)> for Range {
  fn from(value: (usize, usize)) -> Self {
    Self::new(value.0, value.1)
  }
}

/// A selection is one or more ranges.
/// INVARIANT: A selection can never be empty (always contain at least one
/// range).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
  ranges:        SmallVec<[Range; 1]>,
  primary_index: usize,
}

impl Selection {
  pub fn new(ranges: SmallVec<[Range; 1]>, primary_index: usize) -> Result<Self> {
    if ranges.is_empty() {
      return Err(SelectionError::EmptySelection);
    }
    if primary_index >= ranges.len() {
      return Err(SelectionError::RangeIndexOutOfBounds {
        index: primary_index,
        len:   ranges.len(),
      });
    }
    Ok(Self {
      ranges,
      primary_index,
    })
  }

  pub fn single(anchor: usize, head: usize) -> Self {
    Self {
      ranges:        smallvec![Range::new(anchor, head)],
      primary_index: 0,
    }
  }

  pub fn point(pos: usize) -> Self {
    Self::single(pos, pos)
  }

  pub fn ranges(&self) -> &[Range] {
    &self.ranges
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Range> {
    self.ranges.iter()
  }

  pub fn primary(&self) -> Range {
    self.ranges[self.primary_index]
  }

  pub fn primary_index(&self) -> usize {
    self.primary_index
  }

  pub fn range_at(&self, idx: usize) -> Result<Range> {
    self.ranges.get(idx).copied().ok_or_else(|| {
      SelectionError::RangeIndexOutOfBounds {
        index: idx,
        len:   self.ranges.len(),
      }
    })
  }

  /// Number of ranges.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.ranges.len()
  }

  /// True when every range is a caret.
  pub fn is_empty(&self) -> bool {
    self.ranges.iter().all(Range::is_empty)
  }

  /// Adds a secondary range. The primary range is unchanged.
  pub fn push(&mut self, range: Range) {
    self.ranges.push(range);
  }

  /// Takes a closure and maps each `Range` over the closure. Order and
  /// primary are kept.
  pub fn transform<F>(mut self, mut f: F) -> Self
  where
    F: FnMut(Range) -> Range,
  {
    for range in self.ranges.iter_mut() {
      *range = f(*range);
    }
    self
  }
}

impl<'a> IntoIterator for &'a Selection {
  type IntoIter = std::slice::Iter<'a, Range>;
  type Item = &'a Range;

  fn into_iter(self) -> Self::IntoIter {
    self.ranges.iter()
  }
}
