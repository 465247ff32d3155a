//! Translating virtual keys into characters.

use crate::key::{
  Modifiers,
  RawKeyEvent,
  vk,
};

/// What a key press would type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation {
  /// The key types nothing in the current state.
  None,
  Char(char),
  /// A dead key that only modifies the next key press.
  Dead,
  /// The key types more than one character.
  Multiple,
}

impl Translation {
  /// The typed character if it is a single printable ASCII character.
  pub fn printable(self) -> Option<char> {
    match self {
      Self::Char(ch) if matches!(ch, ' '..='~') => Some(ch),
      _ => None,
    }
  }
}

pub trait KeyboardLayout {
  fn translate(&self, event: &RawKeyEvent) -> Translation;
}

impl<L: KeyboardLayout + ?Sized> KeyboardLayout for &L {
  fn translate(&self, event: &RawKeyEvent) -> Translation {
    (**self).translate(event)
  }
}

/// US-QWERTY, driven purely by the modifiers carried on the event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UsLayout;

const DIGIT_SHIFTED: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

impl UsLayout {
  fn symbol(virtual_key: u16) -> Option<(char, char)> {
    let pair = match virtual_key {
      vk::OEM_1 => (';', ':'),
      vk::OEM_PLUS => ('=', '+'),
      vk::OEM_COMMA => (',', '<'),
      vk::OEM_MINUS => ('-', '_'),
      vk::OEM_PERIOD => ('.', '>'),
      vk::OEM_2 => ('/', '?'),
      vk::OEM_3 => ('`', '~'),
      vk::OEM_4 => ('[', '{'),
      vk::OEM_5 => ('\\', '|'),
      vk::OEM_6 => (']', '}'),
      vk::OEM_7 => ('\'', '"'),
      _ => return None,
    };
    Some(pair)
  }

  fn numpad(virtual_key: u16) -> Option<char> {
    let ch = match virtual_key {
      vk::NUMPAD0..=vk::NUMPAD9 => char::from(b'0' + (virtual_key - vk::NUMPAD0) as u8),
      vk::MULTIPLY => '*',
      vk::ADD => '+',
      vk::SUBTRACT => '-',
      vk::DECIMAL => '.',
      vk::DIVIDE => '/',
      _ => return None,
    };
    Some(ch)
  }
}

impl KeyboardLayout for UsLayout {
  fn translate(&self, event: &RawKeyEvent) -> Translation {
    let modifiers = event.modifiers;
    if modifiers.is_chord() {
      return Translation::None;
    }

    let shift = modifiers.contains(Modifiers::SHIFT);
    let key = event.virtual_key;

    let ch = match key {
      vk::SPACE => ' ',
      vk::KEY_0..=vk::KEY_9 => {
        let digit = (key - vk::KEY_0) as usize;
        if shift {
          DIGIT_SHIFTED[digit]
        } else {
          char::from(b'0' + digit as u8)
        }
      },
      vk::KEY_A..=vk::KEY_Z => {
        let lower = char::from(b'a' + (key - vk::KEY_A) as u8);
        // Caps lock inverts shift for letters only.
        if shift != modifiers.contains(Modifiers::CAPS_LOCK) {
          lower.to_ascii_uppercase()
        } else {
          lower
        }
      },
      _ => {
        if let Some((plain, shifted)) = Self::symbol(key) {
          if shift { shifted } else { plain }
        } else if let Some(ch) = Self::numpad(key) {
          ch
        } else {
          return Translation::None;
        }
      },
    };

    Translation::Char(ch)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn typed(key: u16, modifiers: Modifiers) -> Option<char> {
    UsLayout
      .translate(&RawKeyEvent::key_down(key, modifiers))
      .printable()
  }

  #[test]
  fn shifted_digits() {
    assert_eq!(typed(vk::KEY_9, Modifiers::SHIFT), Some('('));
    assert_eq!(typed(vk::KEY_0, Modifiers::SHIFT), Some(')'));
    assert_eq!(typed(vk::KEY_9, Modifiers::empty()), Some('9'));
    assert_eq!(typed(vk::KEY_0 + 2, Modifiers::SHIFT), Some('@'));
  }

  #[test]
  fn brackets_and_quotes() {
    assert_eq!(typed(vk::OEM_4, Modifiers::empty()), Some('['));
    assert_eq!(typed(vk::OEM_4, Modifiers::SHIFT), Some('{'));
    assert_eq!(typed(vk::OEM_6, Modifiers::SHIFT), Some('}'));
    assert_eq!(typed(vk::OEM_COMMA, Modifiers::SHIFT), Some('<'));
    assert_eq!(typed(vk::OEM_PERIOD, Modifiers::SHIFT), Some('>'));
    assert_eq!(typed(vk::OEM_7, Modifiers::empty()), Some('\''));
    assert_eq!(typed(vk::OEM_7, Modifiers::SHIFT), Some('"'));
  }

  #[test]
  fn caps_lock_only_affects_letters() {
    assert_eq!(typed(vk::KEY_A, Modifiers::CAPS_LOCK), Some('A'));
    assert_eq!(typed(vk::KEY_A, Modifiers::CAPS_LOCK | Modifiers::SHIFT), Some('a'));
    assert_eq!(typed(vk::KEY_Z, Modifiers::SHIFT), Some('Z'));
    assert_eq!(typed(vk::KEY_9, Modifiers::CAPS_LOCK), Some('9'));
    assert_eq!(typed(vk::OEM_4, Modifiers::CAPS_LOCK), Some('['));
  }

  #[test]
  fn chords_type_nothing() {
    assert_eq!(typed(vk::KEY_9, Modifiers::SHIFT | Modifiers::CTRL), None);
    assert_eq!(typed(vk::OEM_4, Modifiers::ALT), None);
  }

  #[test]
  fn numpad() {
    assert_eq!(typed(vk::NUMPAD0 + 7, Modifiers::empty()), Some('7'));
    assert_eq!(typed(vk::DIVIDE, Modifiers::empty()), Some('/'));
  }

  #[test]
  fn non_character_keys() {
    for key in [vk::SHIFT, vk::CONTROL, vk::MENU, vk::CAPITAL, 0x0D, 0x25] {
      assert_eq!(
        UsLayout.translate(&RawKeyEvent::key_down(key, Modifiers::empty())),
        Translation::None
      );
    }
  }

  #[test]
  fn only_single_printable_characters_count() {
    assert_eq!(Translation::Char('(').printable(), Some('('));
    assert_eq!(Translation::Char(' ').printable(), Some(' '));
    assert_eq!(Translation::Char('\t').printable(), None);
    assert_eq!(Translation::Char('é').printable(), None);
    assert_eq!(Translation::Dead.printable(), None);
    assert_eq!(Translation::Multiple.printable(), None);
    assert_eq!(Translation::None.printable(), None);
  }
}
