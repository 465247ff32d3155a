//! What the plugin needs from the editor it is loaded into.

use std::{
  io,
  path::PathBuf,
};

use surround_lib::buffer::TextBuffer;
use thiserror::Error;

use crate::commands::{
  About,
  CommandId,
};

pub trait Host {
  /// Handle to the host's text-editing component.
  type Buffer: TextBuffer;

  /// The text buffer of the view that currently has the user's attention.
  fn current_view(&mut self) -> Self::Buffer;

  /// Directory the host keeps plugin configuration in, if it has one.
  fn plugin_config_dir(&self) -> Option<PathBuf>;

  fn set_menu_check(&mut self, command: CommandId, checked: bool);

  fn show_about(&mut self, about: &About);
}

#[derive(Debug, Error)]
pub enum HookError {
  #[error("failed to install keyboard hook: {0}")]
  Install(#[source] io::Error),
  #[error("failed to remove keyboard hook: {0}")]
  Remove(#[source] io::Error),
}

/// A process-wide keyboard hook that routes key events to
/// [`SurroundPlugin::on_key`](crate::plugin::SurroundPlugin::on_key).
pub trait KeyboardHook {
  fn install(&mut self) -> Result<(), HookError>;

  fn remove(&mut self) -> Result<(), HookError>;

  fn is_installed(&self) -> bool;
}
