#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use banner_seaorm_store::cache::{self, CacheError, LookupCache};
use banner_seaorm_store::migration::{CacheMigrator, Migrator, MigratorTrait};
use banner_seaorm_store::{
    BannerEngine, CacheKey, CachedBanner, MemoryCache, NewBanner, PostgresStore, SeaOrmCache,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// A fresh in-memory SQLite database. One connection, so the database lives
/// as long as the pool does.
pub async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(false);
    Database::connect(opt).await.unwrap()
}

pub async fn store_db() -> DatabaseConnection {
    let conn = memory_db().await;
    Migrator::up(&conn, None).await.unwrap();
    conn
}

pub async fn cache_db() -> DatabaseConnection {
    let conn = memory_db().await;
    CacheMigrator::up(&conn, None).await.unwrap();
    conn
}

pub async fn store() -> PostgresStore {
    PostgresStore::new(store_db().await)
}

pub async fn engine() -> BannerEngine<PostgresStore, MemoryCache> {
    BannerEngine::new(store().await, MemoryCache::new())
}

pub async fn engine_with_cache<C: LookupCache>(cache: C) -> BannerEngine<PostgresStore, C> {
    BannerEngine::new(store().await, cache)
}

pub async fn seaorm_cache() -> SeaOrmCache {
    SeaOrmCache::new(cache_db().await)
}

pub fn promo(tag_ids: &[i64], feature_id: i64) -> NewBanner {
    NewBanner {
        title: "Promo".into(),
        text: "Text".into(),
        url: "https://example.com".into(),
        tag_ids: tag_ids.to_vec(),
        feature_id,
        is_active: true,
    }
}

/// Counts evictions and can be told to fail every call.
#[derive(Debug, Default)]
pub struct RecordingCache {
    pub inner: MemoryCache,
    pub evictions: AtomicUsize,
    pub failing: bool,
}

impl RecordingCache {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn evictions(&self) -> usize {
        self.evictions.load(Ordering::SeqCst)
    }

    fn check(&self) -> cache::Result<()> {
        if self.failing {
            Err(CacheError::Backend("connection reset by peer".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LookupCache for RecordingCache {
    async fn get(&self, key: CacheKey) -> cache::Result<CachedBanner> {
        self.check()?;
        self.inner.get(key).await
    }

    async fn set(&self, key: CacheKey, entry: &CachedBanner) -> cache::Result<()> {
        self.check()?;
        self.inner.set(key, entry).await
    }

    async fn evict_banner(&self, banner_id: i64) -> cache::Result<()> {
        self.evictions.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.evict_banner(banner_id).await
    }

    async fn delete_expired(&self) -> cache::Result<u64> {
        self.check()?;
        self.inner.delete_expired().await
    }
}

/// Never answers `get` in any reasonable time.
#[derive(Debug, Default)]
pub struct StalledCache;

#[async_trait]
impl LookupCache for StalledCache {
    async fn get(&self, key: CacheKey) -> cache::Result<CachedBanner> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(CacheError::Miss(key))
    }

    async fn set(&self, _key: CacheKey, _entry: &CachedBanner) -> cache::Result<()> {
        Ok(())
    }

    async fn evict_banner(&self, _banner_id: i64) -> cache::Result<()> {
        Ok(())
    }

    async fn delete_expired(&self) -> cache::Result<u64> {
        Ok(0)
    }
}
