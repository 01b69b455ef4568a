//! Lookup cache for `(tag, feature)` resolutions.
//!
//! The cache holds non-authoritative, time-bounded copies of what
//! [`crate::BannerStore::get_user_banner`] returned. Two backends are provided:
//!
//! - [`SeaOrmCache`]: an expiring table on its own database connection
//! - [`MemoryCache`]: an in-process map, for single-node setups and tests
//!
//! Every entry carries an expiry horizon fixed at write time and backends must
//! not serve an entry past it, whether or not an eviction ever reaches them.

mod memory;
mod seaorm_cache;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{CacheKey, CachedBanner};

pub use memory::MemoryCache;
pub use seaorm_cache::SeaOrmCache;

/// How long an entry stays servable unless a backend is configured otherwise.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Result type alias using [`CacheError`].
pub type Result<T> = std::result::Result<T, CacheError>;

/// Lookup cache errors.
///
/// [`CacheError::Miss`] is the only recoverable one: the caller falls through
/// to the store. Everything else is a fault of the cache layer itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No live entry for the key.
    #[error("no cache entry for {0}")]
    Miss(CacheKey),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Encode(String),

    #[error("{0}")]
    Decode(String),
}

impl CacheError {
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::Miss(_))
    }
}

#[async_trait]
pub trait LookupCache: Send + Sync {
    /// Returns the live entry for `key`, or [`CacheError::Miss`].
    async fn get(&self, key: CacheKey) -> Result<CachedBanner>;

    /// Writes the entry and resets its expiry horizon to now + TTL.
    async fn set(&self, key: CacheKey, entry: &CachedBanner) -> Result<()>;

    /// Removes every entry produced by `banner_id`, whatever its key.
    async fn evict_banner(&self, banner_id: i64) -> Result<()>;

    /// Drops entries whose horizon has passed. Returns how many were removed.
    async fn delete_expired(&self) -> Result<u64>;

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
