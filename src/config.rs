//! Connection and engine configuration.
//!
//! Defaults mirror a modest production pool: ten connections, two kept warm,
//! ten second connect/acquire/idle timeouts and a ten minute connection lifetime.

use std::env;
use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use thiserror::Error;

use crate::cache::DEFAULT_TTL;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),

    #[error("environment variable {name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Pool settings for one database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            connect_timeout: Duration::from_secs(10),
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(10),
            max_lifetime: Duration::from_secs(10 * 60),
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn with_min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(false);
        opt
    }

    /// Opens the pool. Close it with [`DatabaseConnection::close`] at shutdown.
    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Database::connect(self.connect_options()).await
    }
}

/// Limits applied by [`crate::BannerEngine`] to each store or cache call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub operation_timeout: Duration,
}

impl EngineConfig {
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            operation_timeout: Duration::from_secs(5),
        }
    }
}

/// Everything needed to assemble an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: DatabaseConfig,
    pub cache: DatabaseConfig,
    pub cache_ttl: Duration,
    pub engine: EngineConfig,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// | Variable                     | Meaning                                  |
    /// |------------------------------|------------------------------------------|
    /// | `DATABASE_URL`               | Durable store URL (required)             |
    /// | `CACHE_DATABASE_URL`         | Cache database URL, defaults to the above |
    /// | `BANNER_CACHE_TTL_SECS`      | Cache entry lifetime, default 300        |
    /// | `BANNER_OPERATION_TIMEOUT_MS`| Per-call store/cache bound, default 5000 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let cache_url = lookup("CACHE_DATABASE_URL").unwrap_or_else(|| store_url.clone());

        let cache_ttl = match lookup("BANNER_CACHE_TTL_SECS") {
            Some(value) => Duration::from_secs(parse_u64("BANNER_CACHE_TTL_SECS", value)?),
            None => DEFAULT_TTL,
        };

        let mut engine = EngineConfig::default();
        if let Some(value) = lookup("BANNER_OPERATION_TIMEOUT_MS") {
            let millis = parse_u64("BANNER_OPERATION_TIMEOUT_MS", value)?;
            engine = engine.with_operation_timeout(Duration::from_millis(millis));
        }

        Ok(Self {
            store: DatabaseConfig::new(store_url),
            cache: DatabaseConfig::new(cache_url),
            cache_ttl,
            engine,
        })
    }
}

fn parse_u64(name: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            name,
            value,
            reason: e.to_string(),
        }),
    }
}
