//! # Settings
//!
//! Layered application configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` if present, or the file passed with `--config`
//! 3. Environment variables prefixed `MURAL__`, sections separated by `__`
//!    (`MURAL__SERVER__PORT=8080`, `MURAL__CONTENT__SOURCE=remote`)
//!
//! Pricing tables validate while deserializing, so a loaded [`AppConfig`]
//! always carries a usable rate table and discount schedule.
//!
//! # Examples
//!
//! ```
//! use mural_studio::settings::{AppConfig, ContentSourceKind};
//!
//! let config = AppConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
//! assert_eq!(config.server.port, 9000);
//! assert_eq!(config.content.source, ContentSourceKind::Seeded);
//! ```

use crate::domain::value_objects::PricingConfig;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
const DEFAULT_PORT: u16 = 8001;

/// Default content source request timeout in milliseconds.
const DEFAULT_CONTENT_TIMEOUT_MS: u64 = 5000;

/// Default tracing filter directive.
const DEFAULT_LOG_FILTER: &str = "mural_studio=info,tower_http=info";

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Environment variable prefix.
const ENV_PREFIX: &str = "MURAL";

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or did not deserialize.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// The configuration loaded but is inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server.
    pub server: ServerConfig,
    /// Display list source.
    pub content: ContentConfig,
    /// Rate table and discount schedule.
    pub pricing: PricingConfig,
    /// Log output.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads defaults, the config file and the environment.
    ///
    /// With `path` set the file must exist. Without it
    /// `config/default.toml` is read if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse, a value has the
    /// wrong type, pricing tables are invalid, or [`AppConfig::validate`]
    /// rejects the result.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let builder = Self::file_layer(path).add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
        Self::finish(builder)
    }

    /// Loads defaults overlaid with a TOML document. Ignores the
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::load`].
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn file_layer(path: Option<&Path>) -> ConfigBuilder<DefaultState> {
        match path {
            Some(path) => Config::builder().add_source(File::from(path).required(true)),
            None => Config::builder().add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        }
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ConfigResult<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the remote source has no base URL
    /// or a timeout is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.content.source == ContentSourceKind::Remote {
            match self.content.base_url.as_deref().map(str::trim) {
                Some(url) if !url.is_empty() => {}
                _ => {
                    return Err(ConfigError::Invalid(
                        "content.base_url is required when content.source = \"remote\"".to_string(),
                    ));
                }
            }
        }
        if self.content.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "content.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Bind address as `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which [`ContentSource`](crate::infrastructure::content::ContentSource)
/// backs the display lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSourceKind {
    /// In-process lists seeded with the studio catalogue.
    #[default]
    Seeded,
    /// The data service over HTTP.
    Remote,
}

/// Content source settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Source kind.
    pub source: ContentSourceKind,
    /// Data service base URL. Required for [`ContentSourceKind::Remote`].
    pub base_url: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSourceKind::default(),
            base_url: None,
            timeout_ms: DEFAULT_CONTENT_TIMEOUT_MS,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
