//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `FOODHUB_HOST` - Bind address (default: 127.0.0.1)
//! - `FOODHUB_PORT` - Listen port (default: 5000)
//! - `FOODHUB_DATA_DIR` - Directory holding the collection files (default: .)
//! - `FOODHUB_PASSWORD_STORAGE` - `plaintext` or `argon2` (default: plaintext)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::services::PasswordStorage;

const DEFAULT_PORT: u16 = 5000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding `data.json`, `owner-data.json` and `food-data.json`
    pub data_dir: PathBuf,
    /// How newly registered passwords are persisted
    pub password_storage: PasswordStorage,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("."),
            password_storage: PasswordStorage::default(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or(&var, "FOODHUB_HOST", defaults.host)?;
        let port = parse_or(&var, "FOODHUB_PORT", defaults.port)?;
        let data_dir = var("FOODHUB_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let password_storage =
            parse_or(&var, "FOODHUB_PASSWORD_STORAGE", defaults.password_storage)?;
        let sentry_dsn = var("SENTRY_DSN").filter(|dsn| !dsn.is_empty());
        let sentry_environment = var("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            data_dir,
            password_storage,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable if set, otherwise use `default`.
fn parse_or<T>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.password_storage, PasswordStorage::Plaintext);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FOODHUB_HOST", "0.0.0.0"),
            ("FOODHUB_PORT", "8080"),
            ("FOODHUB_DATA_DIR", "/var/lib/foodhub"),
            ("FOODHUB_PASSWORD_STORAGE", "argon2"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/foodhub"));
        assert_eq!(config.password_storage, PasswordStorage::Argon2);
        assert!(config.sentry_dsn.is_some());
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("FOODHUB_PORT", "not-a-port")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "FOODHUB_PORT"));
    }

    #[test]
    fn test_invalid_password_storage() {
        let err = load(&[("FOODHUB_PASSWORD_STORAGE", "md5")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "FOODHUB_PASSWORD_STORAGE")
        );
    }

    #[test]
    fn test_empty_sentry_dsn_is_disabled() {
        let config = load(&[("SENTRY_DSN", "")]).unwrap();
        assert!(config.sentry_dsn.is_none());
    }
}
