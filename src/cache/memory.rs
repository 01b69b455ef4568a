use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::time::Instant;

use super::{CacheError, LookupCache, Result, DEFAULT_TTL};
use crate::model::{CacheKey, CachedBanner};

#[derive(Debug, Clone)]
struct Entry {
    value: CachedBanner,
    expires_at: Instant,
}

/// In-process lookup cache.
///
/// Expiry uses `tokio::time::Instant`, so tests running on a paused clock can
/// step past the TTL deterministically. Expired entries are skipped on read and
/// removed by [`LookupCache::delete_expired`] or the next `set` on their key.
#[derive(Debug)]
pub struct MemoryCache {
    entries: DashMap<CacheKey, Entry>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            ttl: DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupCache for MemoryCache {
    async fn get(&self, key: CacheKey) -> Result<CachedBanner> {
        match self.entries.get(&key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(entry.value.clone()),
            _ => Err(CacheError::Miss(key)),
        }
    }

    async fn set(&self, key: CacheKey, entry: &CachedBanner) -> Result<()> {
        self.entries.insert(
            key,
            Entry {
                value: entry.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );
        Ok(())
    }

    async fn evict_banner(&self, banner_id: i64) -> Result<()> {
        self.entries.retain(|_, entry| entry.value.banner_id != banner_id);
        Ok(())
    }

    async fn delete_expired(&self) -> Result<u64> {
        let now = Instant::now();
        let mut removed = 0u64;
        self.entries.retain(|_, entry| {
            let live = entry.expires_at > now;
            if !live {
                removed += 1;
            }
            live
        });
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::BannerContent;

    fn cached(banner_id: i64, title: &str) -> CachedBanner {
        CachedBanner {
            banner_id,
            content: BannerContent {
                title: title.into(),
                text: "Text".into(),
                url: "https://example.com".into(),
            },
        }
    }

    #[tokio::test(start_paused = true)]
    async fn entry_is_not_served_past_its_ttl() {
        let cache = MemoryCache::new().with_ttl(Duration::from_secs(30));
        let key = CacheKey::new(1, 5);
        cache.set(key, &cached(7, "Promo")).await.unwrap();

        tokio::time::advance(Duration::from_secs(29)).await;
        assert_eq!(cache.get(key).await.unwrap().banner_id, 7);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get(key).await.unwrap_err(), CacheError::Miss(key));
    }

    #[tokio::test(start_paused = true)]
    async fn rewrite_refreshes_the_horizon() {
        let cache = MemoryCache::new().with_ttl(Duration::from_secs(30));
        let key = CacheKey::new(1, 5);
        cache.set(key, &cached(7, "Promo")).await.unwrap();

        tokio::time::advance(Duration::from_secs(20)).await;
        cache.set(key, &cached(7, "Promo 2")).await.unwrap();

        tokio::time::advance(Duration::from_secs(20)).await;
        assert_eq!(cache.get(key).await.unwrap().content.title, "Promo 2");
    }

    #[tokio::test]
    async fn evict_banner_drops_every_key_of_that_banner() {
        let cache = MemoryCache::new();
        cache.set(CacheKey::new(1, 5), &cached(7, "a")).await.unwrap();
        cache.set(CacheKey::new(2, 5), &cached(7, "a")).await.unwrap();
        cache.set(CacheKey::new(3, 5), &cached(8, "b")).await.unwrap();

        cache.evict_banner(7).await.unwrap();

        assert!(cache.get(CacheKey::new(1, 5)).await.unwrap_err().is_miss());
        assert!(cache.get(CacheKey::new(2, 5)).await.unwrap_err().is_miss());
        assert_eq!(cache.get(CacheKey::new(3, 5)).await.unwrap().banner_id, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_expired_counts_removed_entries() {
        let cache = MemoryCache::new().with_ttl(Duration::from_secs(10));
        cache.set(CacheKey::new(1, 5), &cached(7, "a")).await.unwrap();
        tokio::time::advance(Duration::from_secs(5)).await;
        cache.set(CacheKey::new(2, 5), &cached(8, "b")).await.unwrap();

        tokio::time::advance(Duration::from_secs(6)).await;
        assert_eq!(cache.delete_expired().await.unwrap(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn delete_expired_alongside_writers_counts_only_removals() {
        let cache = Arc::new(MemoryCache::new().with_ttl(Duration::ZERO));
        let inserts = 2_000i64;

        let writer = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                for tag_id in 1..=inserts {
                    cache
                        .set(CacheKey::new(tag_id, 5), &cached(tag_id, "a"))
                        .await
                        .unwrap();
                    if tag_id % 64 == 0 {
                        tokio::task::yield_now().await;
                    }
                }
            })
        };

        let mut removed = 0u64;
        while !writer.is_finished() {
            removed += cache.delete_expired().await.unwrap();
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();
        removed += cache.delete_expired().await.unwrap();

        assert_eq!(removed, inserts as u64);
        assert!(cache.is_empty());
    }
}
