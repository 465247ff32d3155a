//! The fixed delimiter table.
//!
//! Lookup walks [`DELIMITERS`] in order and the first pair containing the
//! trigger character wins. The members are disjoint today, but the order is
//! part of the contract: `(` and `)` always resolve to the parenthesis pair.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
  open:  char,
  close: char,
}

impl DelimiterPair {
  pub const fn new(open: char, close: char) -> Self {
    Self { open, close }
  }

  pub const fn open(self) -> char {
    self.open
  }

  pub const fn close(self) -> char {
    self.close
  }

  /// true if open == close
  pub const fn same(self) -> bool {
    self.open == self.close
  }

  /// True when `ch` is either member of the pair.
  pub const fn matches(self, ch: char) -> bool {
    ch == self.open || ch == self.close
  }
}

impl fmt::Display for DelimiterPair {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.open, self.close)
  }
}

/// Delimiter pairs in lookup priority order.
pub const DELIMITERS: &[DelimiterPair] = &[
  DelimiterPair::new('(', ')'),
  DelimiterPair::new('[', ']'),
  DelimiterPair::new('{', '}'),
  DelimiterPair::new('<', '>'),
  DelimiterPair::new('"', '"'),
  DelimiterPair::new('\'', '\''),
];

/// The first pair in [`DELIMITERS`] that `ch` belongs to.
pub fn pair_for(ch: char) -> Option<DelimiterPair> {
  DELIMITERS.iter().copied().find(|pair| pair.matches(ch))
}
