//! Configuration settings structures.
//!
//! Defines all configuration that can be loaded from TOML files and
//! environment variables (prefix `VITRINA`, `__` separator).

use std::path::Path;

use config::{Config, Environment as EnvSource, File};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "vitrina".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "postgres://localhost/vitrina".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_jwt_secret() -> String {
    String::new()
}

fn default_access_token_expiration() -> i64 {
    1 // 1 hour
}

fn default_refresh_token_expiration() -> i64 {
    168 // 7 days (168 hours)
}

// ============================================================================
// Configuration sections
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Returns the bind address as `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquisition timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Validates the database configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.url.is_empty() {
            return Err(AppError::Configuration {
                key: "database.url".to_string(),
                source: anyhow::anyhow!("Database URL must not be empty"),
            });
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Secret used to sign and verify tokens
    #[serde(default = "default_jwt_secret")]
    pub secret: String,

    /// Access token validity in hours
    #[serde(default = "default_access_token_expiration")]
    pub access_token_expiration: i64,

    /// Refresh token validity in hours
    #[serde(default = "default_refresh_token_expiration")]
    pub refresh_token_expiration: i64,
}

impl JwtConfig {
    /// Validates the JWT configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.secret.len() < 32 {
            return Err(AppError::Configuration {
                key: "jwt.secret".to_string(),
                source: anyhow::anyhow!("JWT secret must be at least 32 characters"),
            });
        }
        Ok(())
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            access_token_expiration: default_access_token_expiration(),
            refresh_token_expiration: default_refresh_token_expiration(),
        }
    }
}

// ============================================================================
// Settings root
// ============================================================================

/// Root application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logger: LoggerConfig,
    pub jwt: JwtConfig,
}

impl Settings {
    /// Loads settings from `config/default.toml` (when present), an
    /// optional explicit file, and `VITRINA__*` environment variables,
    /// with later sources taking precedence.
    pub fn load(config_file: Option<&Path>) -> AppResult<Settings> {
        let mut builder =
            Config::builder().add_source(File::from(Path::new("config/default.toml")).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(EnvSource::with_prefix("VITRINA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.logger.level, "info");
        assert_eq!(settings.jwt.access_token_expiration, 1);
        assert_eq!(settings.jwt.refresh_token_expiration, 168);
    }

    #[test]
    fn test_jwt_validation_rejects_short_secret() {
        let jwt = JwtConfig {
            secret: "short".to_string(),
            ..Default::default()
        };
        assert!(jwt.validate().is_err());

        let jwt = JwtConfig {
            secret: "a_sufficiently_long_secret_value_123".to_string(),
            ..Default::default()
        };
        assert!(jwt.validate().is_ok());
    }

    #[test]
    fn test_database_validation_rejects_empty_url() {
        let db = DatabaseConfig {
            url: String::new(),
            ..Default::default()
        };
        assert!(db.validate().is_err());
    }
}
