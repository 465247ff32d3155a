use surround_lib::pairs::{
  DelimiterPair,
  pair_for,
};

use crate::{
  key::RawKeyEvent,
  layout::KeyboardLayout,
};

/// The delimiter pair `event` types on `layout`, if any.
///
/// The key must resolve to exactly one printable character; dead keys and
/// keys producing several characters never match. The transition is not
/// inspected here.
pub fn classify<L>(layout: &L, event: &RawKeyEvent) -> Option<DelimiterPair>
where
  L: KeyboardLayout + ?Sized,
{
  let ch = layout.translate(event).printable()?;
  let pair = pair_for(ch);
  log::debug!("key {:#04x} typed {ch:?}: {pair:?}", event.virtual_key);
  pair
}
