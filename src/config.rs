//! Configuration management for ReadBookList

use axum_extra::extract::cookie::Key;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use sha2::{Digest, Sha512};
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Verbose crate logging when no RUST_LOG is set
    pub debug: bool,
    /// Directory served under /static
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SecurityConfig {
    pub secret_key: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
    /// Optional log file, rolled daily
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // READBOOKLIST_SERVER__PORT=8000 and friends
            .add_source(
                Environment::with_prefix("READBOOKLIST")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            .set_override_option("security.secret_key", env::var("SECRET_KEY").ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Default tracing filter directive when RUST_LOG is absent
    pub fn log_filter(&self) -> String {
        let level = if self.server.debug {
            "debug"
        } else {
            self.logging.level.as_str()
        };
        format!("readbooklist={},tower_http={}", level, self.logging.level)
    }
}

impl SecurityConfig {
    /// Derive the 64-byte cookie signing key from the configured secret
    pub fn cookie_key(&self) -> Key {
        let digest = Sha512::digest(self.secret_key.as_bytes());
        Key::from(digest.as_slice())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 2000,
            debug: true,
            static_dir: "static".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data.db".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            secret_key: "dev".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 2000);
        assert_eq!(config.database.url, "sqlite://data.db");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_log_filter() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_filter(), "readbooklist=debug,tower_http=info");

        config.server.debug = false;
        config.logging.level = "warn".to_string();
        assert_eq!(config.log_filter(), "readbooklist=warn,tower_http=warn");
    }

    #[test]
    fn test_cookie_key_is_stable() {
        let a = SecurityConfig { secret_key: "s3cret".to_string() };
        let b = SecurityConfig { secret_key: "s3cret".to_string() };
        let c = SecurityConfig { secret_key: "other".to_string() };
        assert_eq!(a.cookie_key().master(), b.cookie_key().master());
        assert_ne!(a.cookie_key().master(), c.cookie_key().master());
    }
}
