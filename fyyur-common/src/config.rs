//! Configuration loading
//!
//! Settings resolve in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! The first two arrive together as [`Overrides`]; the binary's argument
//! parser folds environment variables into them.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `[server]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// `[database]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    pub path: Option<PathBuf>,
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Contents of the TOML config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Compiled defaults used when nothing else is configured
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: default_database_path(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_level: String,
}

impl Settings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge overrides, an optional TOML file and compiled defaults
    pub fn resolve(
        overrides: Overrides,
        file: Option<TomlConfig>,
        defaults: CompiledDefaults,
    ) -> Self {
        let file = file.unwrap_or_default();

        Self {
            host: overrides
                .host
                .or(file.server.host)
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.server.port).unwrap_or(defaults.port),
            database_path: overrides
                .database
                .or(file.database.path)
                .unwrap_or(defaults.database_path),
            log_level: file.logging.level.unwrap_or(defaults.log_level),
        }
    }

    /// Resolve settings, reading the config file if one can be found
    ///
    /// A missing or unreadable file is not fatal: the remaining sources are
    /// used and the returned [`ConfigSource`] says what happened, so the
    /// caller can log it once tracing is up.
    pub fn load(overrides: Overrides) -> (Self, ConfigSource) {
        Self::load_from(overrides, default_config_path())
    }

    /// [`Settings::load`] with `default_path` used when no file is given
    pub fn load_from(overrides: Overrides, default_path: Option<PathBuf>) -> (Self, ConfigSource) {
        let config_path = overrides.config_file.clone().or(default_path);

        let (file, source) = match config_path {
            Some(path) if path.exists() => match TomlConfig::load(&path) {
                Ok(config) => (Some(config), ConfigSource::File(path)),
                Err(e) => (None, ConfigSource::Invalid(path, e.to_string())),
            },
            Some(path) => (None, ConfigSource::Missing(path)),
            None => (None, ConfigSource::Defaults),
        };

        let settings = Self::resolve(overrides, file, CompiledDefaults::for_current_platform());
        (settings, source)
    }
}

/// Where the TOML layer of the settings came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// Configured or default file does not exist
    Missing(PathBuf),
    /// File exists but could not be read or parsed
    Invalid(PathBuf, String),
    /// No file given and the platform has no config directory
    Defaults,
}

/// `<config_dir>/fyyur/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// `<data_local_dir>/fyyur/fyyur.db`, or `./fyyur.db` when the platform
/// has no data directory
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("fyyur").join("fyyur.db"))
        .unwrap_or_else(|| PathBuf::from("./fyyur.db"))
}
