//! Configuration module
//!
//! Reads `AppConfig` from a TOML file. Every section and field has a default,
//! so a partial file (or none at all) is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::storage::SessionExpiry;

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "STOREFRONT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// `~/.config/storefront/config.toml`, or `./config.toml` when there is no
/// config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("storefront").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

/// Path from `STOREFRONT_CONFIG`, falling back to [`default_config_path`].
pub fn config_path_from_env() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub pagination: PaginationConfig,
    pub navigation: NavigationConfig,
    pub session: SessionConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`, or any `EnvFilter` directive
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_per_page: u32,
    pub max_per_page: u32,
    pub max_page_buttons: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: 10,
            max_per_page: 100,
            max_page_buttons: crate::domain::DEFAULT_MAX_PAGE_BUTTONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub login_path: String,
    pub unauthorized_path: String,
    /// `Retry-After` seconds sent while a session is still loading
    pub pending_retry_secs: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
            pending_retry_secs: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long a new session reports itself as loading
    pub hydration_delay_ms: u64,
    /// Seconds of inactivity after which a session expires (0 = never)
    pub idle_timeout_secs: u64,
    /// Seconds after login at which a session expires (0 = never)
    pub max_age_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hydration_delay_ms: 0,
            idle_timeout_secs: 1800,
            max_age_secs: 86_400,
        }
    }
}

impl SessionConfig {
    pub fn hydration_delay(&self) -> Duration {
        Duration::from_millis(self.hydration_delay_ms)
    }

    pub fn expiry(&self) -> SessionExpiry {
        let limit = |secs: u64| (secs > 0).then(|| Duration::from_secs(secs));
        SessionExpiry {
            idle_timeout: limit(self.idle_timeout_secs),
            max_age: limit(self.max_age_secs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub products: usize,
    pub orders: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            products: 132,
            orders: 47,
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, path)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Self::parse(raw, Path::new("<inline>"))
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.pagination;
        if p.max_page_buttons < crate::domain::pagination::MIN_PAGE_BUTTONS {
            return Err(ConfigError::Invalid(format!(
                "pagination.max_page_buttons must be at least {}",
                crate::domain::pagination::MIN_PAGE_BUTTONS
            )));
        }
        if p.default_per_page == 0 {
            return Err(ConfigError::Invalid(
                "pagination.default_per_page must be positive".into(),
            ));
        }
        if p.default_per_page > p.max_per_page {
            return Err(ConfigError::Invalid(
                "pagination.default_per_page exceeds pagination.max_per_page".into(),
            ));
        }
        if !self.navigation.login_path.starts_with('/')
            || !self.navigation.unauthorized_path.starts_with('/')
        {
            return Err(ConfigError::Invalid(
                "navigation paths must be absolute".into(),
            ));
        }
        Ok(())
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.pagination.max_page_buttons, 5);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9090

            [pagination]
            default_per_page = 20
            max_page_buttons = 7

            [session]
            hydration_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pagination.default_per_page, 20);
        assert_eq!(config.pagination.max_per_page, 100);
        assert_eq!(config.session.hydration_delay(), Duration::from_millis(250));
        assert_eq!(config.session.idle_timeout_secs, 1800);
        assert_eq!(config.seed.products, 132);
    }

    #[test]
    fn zero_session_limits_disable_expiry() {
        let config =
            AppConfig::from_toml("[session]\nidle_timeout_secs = 0\nmax_age_secs = 600").unwrap();
        assert_eq!(
            config.session.expiry(),
            SessionExpiry {
                idle_timeout: None,
                max_age: Some(Duration::from_secs(600)),
            }
        );
    }

    #[test]
    fn rejects_tiny_button_budget() {
        let err = AppConfig::from_toml("[pagination]\nmax_page_buttons = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_default_page_size_above_max() {
        let err = AppConfig::from_toml("[pagination]\ndefault_per_page = 50\nmax_per_page = 20")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("[server\nport = 1"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("storefront-config-that-does-not-exist.toml");
        assert_eq!(AppConfig::load(&path).unwrap(), AppConfig::default());
    }
}
