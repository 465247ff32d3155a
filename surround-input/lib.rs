//! Keyboard input for the surround plugin: raw hook events, keyboard layouts
//! and the classifier that maps a key press to a delimiter pair.

pub mod classify;
pub mod key;
pub mod layout;
#[cfg(windows)]
pub mod win32;

pub use classify::classify;
pub use key::{
  KeyTransition,
  Modifiers,
  RawKeyEvent,
};
pub use layout::{
  KeyboardLayout,
  Translation,
  UsLayout,
};
#[cfg(windows)]
pub use win32::SystemLayout;
