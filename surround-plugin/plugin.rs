use std::path::PathBuf;

use surround_input::{
  KeyboardLayout,
  RawKeyEvent,
};

use crate::{
  PLUGIN_NAME,
  commands::{
    About,
    CommandId,
    MENU,
    MenuItem,
  },
  config::{
    self,
    CONFIG_FILE_NAME,
    ConfigError,
    LOG_FILE_NAME,
    PluginConfig,
  },
  dispatch::DispatchPlugin,
  editor::EditorState,
  host::{
    Host,
    KeyboardHook,
  },
  logging::setup_logging,
  notify::Notification,
  policy::{
    Interception,
    InterceptionPolicy,
  },
};

/// What the keyboard hook should do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
  /// Swallow the event; the host never sees it.
  Consume,
  /// Hand the event on to the next hook.
  Forward,
}

/// The plugin as the host sees it: a menu, lifecycle notifications and a key
/// handler.
///
/// Interception is enabled exactly while the keyboard hook is installed.
pub struct SurroundPlugin<H: Host, K, L> {
  host:   H,
  hook:   K,
  editor: EditorState<H::Buffer>,
  policy: InterceptionPolicy<L>,
  config: PluginConfig,
}

impl<H, K, L> SurroundPlugin<H, K, L>
where
  H: Host,
  K: KeyboardHook,
  L: KeyboardLayout,
{
  /// Attach to `host`. The current view is made active right away so keys
  /// can be handled before the first buffer switch is reported.
  pub fn new(mut host: H, hook: K, layout: L) -> Self {
    let mut editor = EditorState::new();
    editor.activate(host.current_view());
    Self {
      host,
      hook,
      editor,
      policy: InterceptionPolicy::new(layout),
      config: PluginConfig::default(),
    }
  }

  pub fn name(&self) -> &'static str {
    PLUGIN_NAME
  }

  pub fn commands(&self) -> &'static [MenuItem] {
    MENU
  }

  pub fn run_command(&mut self, command: CommandId) {
    match command {
      CommandId::Enable => self.toggle(),
      CommandId::About => self.host.show_about(&About::current()),
    }
  }

  pub fn is_enabled(&self) -> bool {
    self.policy.state().is_enabled()
  }

  pub fn toggle(&mut self) {
    if self.is_enabled() {
      self.disable();
    } else {
      self.enable();
    }
  }

  fn enable(&mut self) {
    if !self.hook.is_installed() {
      if let Err(err) = self.hook.install() {
        log::error!("{err}");
        return;
      }
    }
    self.host.set_menu_check(CommandId::Enable, true);
    self.policy.set_state(Interception::Enabled);
    log::info!("interception enabled");
  }

  fn disable(&mut self) {
    self.remove_hook();
    self.host.set_menu_check(CommandId::Enable, false);
    self.policy.set_state(Interception::Disabled);
    log::info!("interception disabled");
  }

  fn remove_hook(&mut self) {
    if self.hook.is_installed() {
      if let Err(err) = self.hook.remove() {
        log::error!("{err}");
      }
    }
  }

  pub fn notify(&mut self, notification: Notification) {
    match notification {
      Notification::FocusIn => self.editor.set_focus(true),
      Notification::FocusOut => self.editor.set_focus(false),
      Notification::BufferActivated => {
        let view = self.host.current_view();
        self.editor.activate(view);
      },
      Notification::Ready => self.on_ready(),
      Notification::Shutdown => self.on_shutdown(),
    }
  }

  fn config_dir(&self) -> Result<PathBuf, ConfigError> {
    config::config_dir(self.host.plugin_config_dir())
  }

  fn on_ready(&mut self) {
    let dir = match self.config_dir() {
      Ok(dir) => Some(dir),
      Err(err) => {
        log::warn!("{err}, using default settings");
        None
      },
    };

    self.config = dir
      .as_ref()
      .map(|dir| PluginConfig::load(&dir.join(CONFIG_FILE_NAME)))
      .transpose()
      .unwrap_or_else(|err| {
        log::warn!("{err}, using default settings");
        None
      })
      .unwrap_or_default();

    if let (Some(dir), Ok(Some(level))) = (&dir, self.config.log_filter()) {
      let path = dir.join(LOG_FILE_NAME);
      if let Err(err) = setup_logging(&path, level) {
        log::warn!("could not open log file {}: {err}", path.display());
      }
    }

    if self.config.enabled {
      self.enable();
    }
  }

  fn on_shutdown(&mut self) {
    self.config.enabled = self.is_enabled();
    match self.config_dir() {
      Ok(dir) => {
        if let Err(err) = self.config.save(&dir.join(CONFIG_FILE_NAME)) {
          log::error!("{err}");
        }
      },
      Err(err) => log::error!("{err}, settings not saved"),
    }

    self.remove_hook();
    self.policy.set_state(Interception::Disabled);
  }

  /// Handle a key event delivered by the keyboard hook.
  pub fn on_key(&mut self, event: RawKeyEvent) -> KeyAction {
    if self.policy.dispatch(&mut self.editor, event).is_handled() {
      KeyAction::Consume
    } else {
      KeyAction::Forward
    }
  }

  pub fn host(&self) -> &H {
    &self.host
  }

  pub fn host_mut(&mut self) -> &mut H {
    &mut self.host
  }

  pub fn hook(&self) -> &K {
    &self.hook
  }

  pub fn editor(&self) -> &EditorState<H::Buffer> {
    &self.editor
  }

  pub fn config(&self) -> &PluginConfig {
    &self.config
  }
}
