//! The plugin menu.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
  /// Turn interception on or off. Shown with a check mark while on.
  Enable,
  About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
  Command {
    id:        CommandId,
    label:     &'static str,
    checkable: bool,
  },
  Separator,
}

impl MenuItem {
  pub const fn id(&self) -> Option<CommandId> {
    match self {
      Self::Command { id, .. } => Some(*id),
      Self::Separator => None,
    }
  }
}

/// Menu entries in display order.
pub const MENU: &[MenuItem] = &[
  MenuItem::Command {
    id:        CommandId::Enable,
    label:     "Enable",
    checkable: true,
  },
  MenuItem::Separator,
  MenuItem::Command {
    id:        CommandId::About,
    label:     "About...",
    checkable: false,
  },
];

/// Contents of the about box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct About {
  pub name:        &'static str,
  pub version:     &'static str,
  pub description: &'static str,
  pub license:     &'static str,
}

impl About {
  pub fn current() -> Self {
    Self {
      name:        crate::PLUGIN_NAME,
      version:     env!("CARGO_PKG_VERSION"),
      description: "Wraps the selected text in brackets or quotes when one of them is typed.",
      license:     env!("CARGO_PKG_LICENSE"),
    }
  }
}

impl fmt::Display for About {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{} {}", self.name, self.version)?;
    writeln!(f, "{}", self.description)?;
    write!(f, "Licensed under {}", self.license)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn menu_layout() {
    let ids: Vec<_> = MENU.iter().map(MenuItem::id).collect();
    assert_eq!(ids, vec![Some(CommandId::Enable), None, Some(CommandId::About)]);
    assert!(matches!(MENU[0], MenuItem::Command {
      label: "Enable",
      checkable: true,
      ..
    }));
  }

  #[test]
  fn about_text() {
    let text = About::current().to_string();
    assert!(text.starts_with("SurroundSelection "));
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
  }
}
