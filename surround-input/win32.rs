//! The live Windows keyboard layout.

use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
  GetKeyState,
  GetKeyboardState,
  ToAscii,
};

use crate::{
  key::{
    Modifiers,
    RawKeyEvent,
    vk,
  },
  layout::{
    KeyboardLayout,
    Translation,
  },
};

/// Asks the OS what a key types, using the live keyboard state rather than
/// the modifiers recorded on the event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemLayout;

impl KeyboardLayout for SystemLayout {
  fn translate(&self, event: &RawKeyEvent) -> Translation {
    let mut state = [0u8; 256];
    // SAFETY: `state` is the 256-byte buffer GetKeyboardState requires.
    if unsafe { GetKeyboardState(state.as_mut_ptr()) } == 0 {
      log::warn!("could not read the keyboard state");
      return Translation::None;
    }

    let mut chars = [0u16; 2];
    // SAFETY: `state` holds 256 bytes and `chars` has room for the two
    // characters ToAscii may write.
    let written = unsafe {
      ToAscii(
        u32::from(event.virtual_key),
        u32::from(event.scan_code),
        state.as_ptr(),
        chars.as_mut_ptr(),
        0,
      )
    };

    match written {
      0 => Translation::None,
      1 => Translation::Char(char::from((chars[0] & 0xFF) as u8)),
      n if n < 0 => Translation::Dead,
      _ => Translation::Multiple,
    }
  }
}

/// Modifier and lock state as the OS currently reports it.
pub fn current_modifiers() -> Modifiers {
  // SAFETY: GetKeyState only reads the calling thread's key state.
  let pressed = |key: u16| unsafe { GetKeyState(i32::from(key)) } < 0;
  let toggled = |key: u16| unsafe { GetKeyState(i32::from(key)) } & 1 != 0;

  let mut modifiers = Modifiers::empty();
  modifiers.set(Modifiers::SHIFT, pressed(vk::SHIFT));
  modifiers.set(Modifiers::CTRL, pressed(vk::CONTROL));
  modifiers.set(Modifiers::ALT, pressed(vk::MENU));
  modifiers.set(Modifiers::CAPS_LOCK, toggled(vk::CAPITAL));
  modifiers
}

/// Decode keyboard hook parameters with the current modifier state.
pub fn event_from_hook(wparam: usize, lparam: isize) -> RawKeyEvent {
  RawKeyEvent::from_hook_params(wparam, lparam, current_modifiers())
}
