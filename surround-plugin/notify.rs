/// Host lifecycle events the plugin reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
  /// The host finished starting up.
  Ready,
  /// The host is about to exit.
  Shutdown,
  /// Another buffer became the current view.
  BufferActivated,
  /// The editing component gained keyboard focus.
  FocusIn,
  /// The editing component lost keyboard focus.
  FocusOut,
}
