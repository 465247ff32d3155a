//! The SurroundSelection editor plugin.
//!
//! Typing an opening or closing bracket or quote while text is selected wraps
//! every selection in the matching pair instead of replacing it. The host
//! editor is reached through [`host::Host`] and the keyboard hook through
//! [`host::KeyboardHook`]; [`plugin::SurroundPlugin`] ties them together.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod host;
pub mod logging;
pub mod notify;
pub mod plugin;
pub mod policy;

pub const PLUGIN_NAME: &str = "SurroundSelection";

pub use plugin::{
  KeyAction,
  SurroundPlugin,
};
