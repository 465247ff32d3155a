//! Persisted plugin settings.
//!
//! Settings live in `SurroundSelection.toml` under the plugin config
//! directory:
//!
//! ```toml
//! [SurroundSelection]
//! enabled = true
//! log-level = "debug"
//! ```
//!
//! Missing keys take their defaults and a missing file is the default
//! configuration.

use std::{
  ffi::OsString,
  fs,
  io,
  path::{
    Path,
    PathBuf,
  },
  str::FromStr,
};

use etcetera::base_strategy::{
  BaseStrategy,
  choose_base_strategy,
};
use log::LevelFilter;
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "SurroundSelection.toml";
pub const LOG_FILE_NAME: &str = "SurroundSelection.log";
/// Overrides the platform config directory when the host provides none.
pub const CONFIG_DIR_ENV: &str = "SURROUND_SELECTION_CONFIG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("could not locate a configuration directory")]
  NoConfigDir,
  #[error("failed to read {}: {source}", path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to write {}: {source}", path.display())]
  Write {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },
  #[error("failed to parse {}: {source}", path.display())]
  Parse {
    path:   PathBuf,
    #[source]
    source: toml::de::Error,
  },
  #[error(transparent)]
  Serialize(#[from] toml::ser::Error),
  #[error("invalid log level {0:?}")]
  InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PluginConfig {
  /// Intercept keys when the host starts.
  pub enabled:   bool,
  /// Write a log file at this level. No log file when unset.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub log_level: Option<String>,
}

impl Default for PluginConfig {
  fn default() -> Self {
    Self {
      enabled:   true,
      log_level: None,
    }
  }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
  #[serde(rename = "SurroundSelection", default)]
  surround_selection: PluginConfig,
}

impl PluginConfig {
  /// The configured log filter. `None` disables the log file.
  pub fn log_filter(&self) -> Result<Option<LevelFilter>> {
    self
      .log_level
      .as_deref()
      .map(|level| {
        LevelFilter::from_str(level).map_err(|_| ConfigError::InvalidLogLevel(level.to_owned()))
      })
      .transpose()
  }

  /// Load the configuration at `path`. A missing file yields the defaults.
  pub fn load(path: &Path) -> Result<Self> {
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == io::ErrorKind::NotFound => {
        log::info!("no config at {}, using defaults", path.display());
        return Ok(Self::default());
      },
      Err(source) => {
        return Err(ConfigError::Read {
          path: path.to_owned(),
          source,
        });
      },
    };

    let file: ConfigFile = toml::from_str(&contents).map_err(|source| {
      ConfigError::Parse {
        path: path.to_owned(),
        source,
      }
    })?;
    let config = file.surround_selection;
    config.log_filter()?;
    Ok(config)
  }

  /// Write the configuration to `path`, creating parent directories.
  pub fn save(&self, path: &Path) -> Result<()> {
    let file = ConfigFile {
      surround_selection: self.clone(),
    };
    let contents = toml::to_string(&file)?;

    let write_err = |source| {
      ConfigError::Write {
        path: path.to_owned(),
        source,
      }
    };
    ensure_parent_dir(path).map_err(write_err)?;
    fs::write(path, contents).map_err(write_err)?;
    log::info!("saved config to {}", path.display());
    Ok(())
  }
}

/// The plugin config directory.
///
/// The priority is:
///
/// 1. the directory the host provides
/// 2. `SURROUND_SELECTION_CONFIG_DIR` (if the environment variable is set)
/// 3. `surround-selection` under the user config directory
pub fn config_dir(host_dir: Option<PathBuf>) -> Result<PathBuf> {
  resolve_config_dir(host_dir, std::env::var_os(CONFIG_DIR_ENV))
}

fn resolve_config_dir(host_dir: Option<PathBuf>, env_dir: Option<OsString>) -> Result<PathBuf> {
  if let Some(dir) = host_dir {
    return Ok(dir);
  }
  if let Some(dir) = env_dir.filter(|dir| !dir.is_empty()) {
    return Ok(PathBuf::from(dir));
  }
  let strategy = choose_base_strategy().map_err(|_| ConfigError::NoConfigDir)?;
  let mut path = strategy.config_dir();
  path.push("surround-selection");
  Ok(path)
}

pub(crate) fn ensure_parent_dir(path: &Path) -> io::Result<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
      fs::create_dir_all(parent)
    },
    _ => Ok(()),
  }
}
