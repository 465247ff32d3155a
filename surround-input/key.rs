//! Raw keyboard events as delivered by a low-level keyboard hook.

use bitflags::bitflags;

/// Windows virtual-key codes used by the built-in layout.
pub mod vk {
  pub const SHIFT: u16 = 0x10;
  pub const CONTROL: u16 = 0x11;
  pub const MENU: u16 = 0x12;
  pub const CAPITAL: u16 = 0x14;
  pub const SPACE: u16 = 0x20;

  pub const KEY_0: u16 = 0x30;
  pub const KEY_9: u16 = 0x39;
  pub const KEY_A: u16 = 0x41;
  pub const KEY_Z: u16 = 0x5A;

  pub const NUMPAD0: u16 = 0x60;
  pub const NUMPAD9: u16 = 0x69;
  pub const MULTIPLY: u16 = 0x6A;
  pub const ADD: u16 = 0x6B;
  pub const SUBTRACT: u16 = 0x6D;
  pub const DECIMAL: u16 = 0x6E;
  pub const DIVIDE: u16 = 0x6F;

  /// `;` / `:`
  pub const OEM_1: u16 = 0xBA;
  pub const OEM_PLUS: u16 = 0xBB;
  pub const OEM_COMMA: u16 = 0xBC;
  pub const OEM_MINUS: u16 = 0xBD;
  pub const OEM_PERIOD: u16 = 0xBE;
  /// `/` / `?`
  pub const OEM_2: u16 = 0xBF;
  /// `` ` `` / `~`
  pub const OEM_3: u16 = 0xC0;
  /// `[` / `{`
  pub const OEM_4: u16 = 0xDB;
  /// `\` / `|`
  pub const OEM_5: u16 = 0xDC;
  /// `]` / `}`
  pub const OEM_6: u16 = 0xDD;
  /// `'` / `"`
  pub const OEM_7: u16 = 0xDE;
}

bitflags! {
  /// Modifier and lock state at the time of a key event.
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
  pub struct Modifiers: u8 {
    const SHIFT     = 1 << 0;
    const CTRL      = 1 << 1;
    const ALT       = 1 << 2;
    /// Caps lock is toggled on.
    const CAPS_LOCK = 1 << 3;
  }
}

impl Modifiers {
  /// Ctrl or alt is held. Such chords never type a delimiter.
  pub const fn is_chord(self) -> bool {
    self.intersects(Self::CTRL.union(Self::ALT))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTransition {
  Down,
  Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawKeyEvent {
  pub virtual_key: u16,
  pub scan_code:   u8,
  pub transition:  KeyTransition,
  pub modifiers:   Modifiers,
}

impl RawKeyEvent {
  const SCAN_CODE_SHIFT: u32 = 16;
  const TRANSITION_UP: u32 = 1 << 31;

  /// A key-down event with no scan code.
  pub const fn key_down(virtual_key: u16, modifiers: Modifiers) -> Self {
    Self {
      virtual_key,
      scan_code: 0,
      transition: KeyTransition::Down,
      modifiers,
    }
  }

  pub const fn key_up(virtual_key: u16, modifiers: Modifiers) -> Self {
    Self {
      virtual_key,
      scan_code: 0,
      transition: KeyTransition::Up,
      modifiers,
    }
  }

  /// Decode the parameters of a keyboard hook callback.
  ///
  /// `wparam` carries the virtual-key code. `lparam` carries the repeat
  /// count in bits 0-15, the scan code in bits 16-23 and the transition
  /// state in bit 31 (set when the key is being released).
  pub fn from_hook_params(wparam: usize, lparam: isize, modifiers: Modifiers) -> Self {
    // Only the low 32 bits are defined, whatever the pointer width.
    let bits = lparam as u32;
    let transition = if bits & Self::TRANSITION_UP != 0 {
      KeyTransition::Up
    } else {
      KeyTransition::Down
    };

    Self {
      virtual_key: (wparam & 0xFFFF) as u16,
      scan_code: ((bits >> Self::SCAN_CODE_SHIFT) & 0xFF) as u8,
      transition,
      modifiers,
    }
  }

  #[inline]
  pub fn is_key_down(&self) -> bool {
    self.transition == KeyTransition::Down
  }

  pub fn with_scan_code(mut self, scan_code: u8) -> Self {
    self.scan_code = scan_code;
    self
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn decodes_key_down() {
    // shift+9 pressed: repeat 1, scan code 0x0A
    let event = RawKeyEvent::from_hook_params(0x39, 0x000A_0001, Modifiers::SHIFT);
    assert_eq!(event.virtual_key, vk::KEY_9);
    assert_eq!(event.scan_code, 0x0A);
    assert!(event.is_key_down());
    assert_eq!(event.modifiers, Modifiers::SHIFT);
  }

  #[test]
  fn decodes_key_up() {
    let lparam = 0xC01A_0001_u32 as i32 as isize;
    let event = RawKeyEvent::from_hook_params(vk::OEM_4 as usize, lparam, Modifiers::empty());
    assert_eq!(event.virtual_key, vk::OEM_4);
    assert_eq!(event.scan_code, 0x1A);
    assert_eq!(event.transition, KeyTransition::Up);
  }

  #[test]
  fn upper_wparam_bits_are_ignored() {
    let event = RawKeyEvent::from_hook_params(0x1_0041, 0, Modifiers::empty());
    assert_eq!(event.virtual_key, vk::KEY_A);
  }

  #[test]
  fn chords() {
    assert!(Modifiers::CTRL.is_chord());
    assert!((Modifiers::ALT | Modifiers::SHIFT).is_chord());
    assert!(!(Modifiers::SHIFT | Modifiers::CAPS_LOCK).is_chord());
    assert!(!Modifiers::empty().is_chord());
  }
}
