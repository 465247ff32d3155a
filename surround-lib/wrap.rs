//! Wrapping selections in a delimiter pair.
//!
//! Every non-empty selection is replaced by `open + text + close` and
//! reselected so that only the original text is covered. Selections are
//! processed left to right in buffer order; each replacement grows the buffer
//! by two characters, so every later selection is shifted by two per
//! selection already wrapped.
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use ropey::Rope;
//! use surround_lib::{
//!   document::{
//!     Document,
//!     DocumentId,
//!   },
//!   pairs::pair_for,
//!   selection::{
//!     Range,
//!     Selection,
//!   },
//!   wrap::wrap_selections,
//! };
//!
//! let id = DocumentId::new(NonZeroUsize::new(1).unwrap());
//! let mut doc = Document::new(id, Rope::from("hello world"));
//! doc.select(Selection::single(0, 5));
//!
//! let wrapped = wrap_selections(&mut doc, pair_for('(').unwrap()).unwrap();
//! assert_eq!(wrapped, 1);
//! assert_eq!(doc.text().to_string(), "(hello) world");
//! assert_eq!(doc.selection().primary(), Range::new(1, 6));
//! ```

use smallvec::SmallVec;

use crate::{
  Tendril,
  buffer::TextBuffer,
  pairs::DelimiterPair,
  selection::Range,
};

/// A selection scheduled for wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapTarget {
  /// The selection as the host reported it.
  pub original: Range,
  /// The same text after every earlier selection has been wrapped.
  pub target:   Range,
}

impl WrapTarget {
  /// The selection to establish once this target has been wrapped: the
  /// original text, excluding both delimiters.
  pub fn inner(&self) -> Range {
    self.target.shift(1)
  }
}

/// Order `ranges` for wrapping and compute where each one will sit when its
/// turn comes. Carets are dropped.
pub fn wrap_targets(ranges: impl IntoIterator<Item = Range>) -> SmallVec<[WrapTarget; 4]> {
  let mut ranges: SmallVec<[Range; 4]> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
  // Host enumeration order is not buffer order.
  ranges.sort_by_key(|range| (range.from(), range.to()));

  let mut offset = 0;
  let mut targets = SmallVec::with_capacity(ranges.len());
  for original in ranges {
    targets.push(WrapTarget {
      original,
      target: original.shift(offset),
    });
    offset += 2;
  }
  targets
}

/// Wrap every non-empty selection of `buffer` in `pair` as one undo step.
///
/// Returns the number of selections wrapped. When there is nothing to wrap
/// the buffer is left untouched, selections included. Carets that coexist
/// with non-empty selections are dropped.
pub fn wrap_selections<B>(buffer: &mut B, pair: DelimiterPair) -> Result<usize, B::Error>
where
  B: TextBuffer + ?Sized,
{
  let targets = wrap_targets((0..buffer.selection_count()).map(|n| buffer.selection_n(n)));
  if targets.is_empty() {
    return Ok(0);
  }

  buffer.begin_undo_action();
  buffer.clear_selections();

  let wrapped = surround_targets(buffer, &targets, pair);
  // The undo action is closed even when a replacement failed.
  let closed = buffer.end_undo_action();
  wrapped?;
  closed?;

  log::debug!("wrapped {} selection(s) in {pair}", targets.len());
  Ok(targets.len())
}

fn surround_targets<B>(
  buffer: &mut B,
  targets: &[WrapTarget],
  pair: DelimiterPair,
) -> Result<(), B::Error>
where
  B: TextBuffer + ?Sized,
{
  for (idx, target) in targets.iter().enumerate() {
    let range = target.target;
    buffer.set_target_range(range.from(), range.to());

    let text = buffer.target_text()?;
    let mut replacement = Tendril::new();
    replacement.push(pair.open());
    replacement.push_str(&text);
    replacement.push(pair.close());
    buffer.replace_target(&replacement)?;

    if idx == 0 {
      buffer.set_selection(target.inner());
    } else {
      buffer.add_selection(target.inner());
    }
  }
  Ok(())
}
