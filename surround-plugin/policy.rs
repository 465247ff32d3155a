//! Deciding which key presses wrap the selection.

use surround_input::{
  KeyboardLayout,
  RawKeyEvent,
  classify,
};
use surround_lib::{
  buffer::TextBuffer,
  wrap::wrap_selections,
};

use crate::{
  dispatch::{
    DispatchPlugin,
    DispatchResult,
  },
  editor::EditorState,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interception {
  #[default]
  Disabled,
  Enabled,
}

impl Interception {
  #[inline]
  pub const fn is_enabled(self) -> bool {
    matches!(self, Self::Enabled)
  }

  #[must_use]
  pub const fn toggled(self) -> Self {
    match self {
      Self::Enabled => Self::Disabled,
      Self::Disabled => Self::Enabled,
    }
  }
}

impl From<bool> for Interception {
  fn from(enabled: bool) -> Self {
    if enabled { Self::Enabled } else { Self::Disabled }
  }
}

/// Wraps the active buffer's selections when a delimiter key goes down.
///
/// While disabled every event is forwarded without consulting the layout.
/// While enabled, an event reaches the layout only when it is a key-down,
/// the editor has focus, and the active buffer has a non-empty selection.
#[derive(Debug)]
pub struct InterceptionPolicy<L> {
  state:  Interception,
  layout: L,
}

impl<L: KeyboardLayout> InterceptionPolicy<L> {
  pub fn new(layout: L) -> Self {
    Self {
      state: Interception::Disabled,
      layout,
    }
  }

  pub fn state(&self) -> Interception {
    self.state
  }

  pub fn set_state(&mut self, state: Interception) {
    self.state = state;
  }

  pub fn layout(&self) -> &L {
    &self.layout
  }
}

impl<B, L> DispatchPlugin<EditorState<B>, RawKeyEvent> for InterceptionPolicy<L>
where
  B: TextBuffer,
  L: KeyboardLayout,
{
  fn dispatch(&mut self, editor: &mut EditorState<B>, event: RawKeyEvent) -> DispatchResult {
    if !self.state.is_enabled() || !event.is_key_down() || !editor.has_focus() {
      return DispatchResult::Continue;
    }
    let Some(buffer) = editor.active_mut() else {
      return DispatchResult::Continue;
    };
    if buffer.selection_empty() {
      return DispatchResult::Continue;
    }
    let Some(pair) = classify(&self.layout, &event) else {
      return DispatchResult::Continue;
    };

    // The buffer may be partly modified on failure, so the key is consumed
    // either way.
    if let Err(err) = wrap_selections(buffer, pair) {
      log::error!("failed to wrap selections in {pair}: {err}");
    }
    DispatchResult::Handled
  }
}
