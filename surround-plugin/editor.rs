/// What the plugin knows about the host editor: the buffer keys go to and
/// whether the editor has keyboard focus.
#[derive(Debug)]
pub struct EditorState<B> {
  active:    Option<B>,
  has_focus: bool,
}

impl<B> Default for EditorState<B> {
  fn default() -> Self {
    Self {
      active:    None,
      // The host only reports focus changes, and starts focused.
      has_focus: true,
    }
  }
}

impl<B> EditorState<B> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make `buffer` the active buffer, returning the previous one.
  pub fn activate(&mut self, buffer: B) -> Option<B> {
    self.active.replace(buffer)
  }

  pub fn active(&self) -> Option<&B> {
    self.active.as_ref()
  }

  pub fn active_mut(&mut self) -> Option<&mut B> {
    self.active.as_mut()
  }

  #[inline]
  pub fn has_focus(&self) -> bool {
    self.has_focus
  }

  pub fn set_focus(&mut self, has_focus: bool) {
    self.has_focus = has_focus;
  }
}
