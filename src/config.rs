//! Configuration management for the bookstore server

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound on the time spent handling one request
    pub request_timeout_secs: u64,
    /// How long in-flight requests may run once shutdown starts
    pub shutdown_grace_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

/// Flat environment variables understood on top of the `BOOKSTORE__` ones
const FLAT_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("SERVER_ADDRESS", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USERNAME", "database.username"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
];

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // BOOKSTORE__DATABASE__HOST=... style variables
            .add_source(
                Environment::with_prefix("BOOKSTORE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::flat_overrides(builder, |var| env::var(var).ok())?
            .build()?
            .try_deserialize()
    }

    /// Apply `FLAT_ENV_OVERRIDES`, reading each variable through `lookup`
    fn flat_overrides(
        mut builder: ConfigBuilder<DefaultState>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        for (var, key) in FLAT_ENV_OVERRIDES {
            builder = builder.set_override_option(*key, lookup(var))?;
        }
        Ok(builder)
    }

    /// Seed a builder with the built-in defaults
    pub fn defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let server = ServerConfig::default();
        let database = DatabaseConfig::default();
        let logging = LoggingConfig::default();

        builder
            .set_default("server.host", server.host)?
            .set_default("server.port", server.port)?
            .set_default("server.request_timeout_secs", server.request_timeout_secs)?
            .set_default("server.shutdown_grace_secs", server.shutdown_grace_secs)?
            .set_default("database.host", database.host)?
            .set_default("database.port", database.port)?
            .set_default("database.username", database.username)?
            .set_default("database.password", database.password)?
            .set_default("database.name", database.name)?
            .set_default("database.max_connections", database.max_connections)?
            .set_default("database.min_connections", database.min_connections)?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "bookstore".to_string(),
            password: "bookstore".to_string(),
            name: "bookstore".to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
