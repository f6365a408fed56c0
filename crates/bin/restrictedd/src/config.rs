//! Service configuration.
//!
//! Values come from an optional `restrictedd.toml` in the working directory,
//! then from `RESTRICTED_*` environment variables (plus `RUST_LOG`), and are
//! validated once before anything is started.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const CONFIG_FILE: &str = "restrictedd.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8081;
const DEFAULT_DATABASE_URL: &str = "sqlite:restricted.db?mode=rwc";
const DEFAULT_LOG_FILTER: &str = "restrictedd=info,restricted=info,tower_http=debug";
const DEFAULT_APPLICATION_NAME: &str = "restrictedMicroserviceApp";

/// Top-level configuration, mirroring the sections of `restrictedd.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    /// Application identity, used in alert header names.
    pub application: ApplicationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx `SQLite` URL, e.g. `sqlite:restricted.db?mode=rwc` or `sqlite::memory:`.
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive string.
    pub filter: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_APPLICATION_NAME.to_owned(),
        }
    }
}

impl Config {
    /// Read `restrictedd.toml` (if present), apply environment overrides and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is unreadable or malformed, when
    /// an override cannot be parsed, or when a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Apply overrides looked up through `var`, so tests never touch the
    /// process environment.
    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = var("RESTRICTED_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("RESTRICTED_PORT") {
            self.server.port = port.parse().map_err(|_| {
                ConfigError::Validation(format!("RESTRICTED_PORT {port:?} is not a port"))
            })?;
        }
        if let Some(url) = var("RESTRICTED_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(filter) = var("RUST_LOG") {
            self.logging.filter = filter;
        }
        if let Some(name) = var("RESTRICTED_APP_NAME") {
            self.application.name = name;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_owned()));
        }

        let name = &self.application.name;
        let header_safe = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';
        if name.is_empty() || !name.chars().all(header_safe) {
            return Err(ConfigError::Validation(format!(
                "application name {name:?} must be non-empty ASCII letters, digits, '-' or '_'"
            )));
        }

        self.log_filter()?;
        Ok(())
    }

    /// Build the tracing filter from `logging.filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogFilter`] when the directive does not parse.
    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        Ok(EnvFilter::try_new(&self.logging.filter)?)
    }

    /// `host:port` to bind the HTTP listener to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse restrictedd.toml")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read restrictedd.toml")]
    Io(#[from] std::io::Error),
    #[error("invalid log filter")]
    LogFilter(#[from] ParseError),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
