//! Domain types shared by the store, the cache and the engine.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Feature id meaning "no feature" on create and in listing filters.
pub const NO_FEATURE: i64 = 0;

/// Feature id meaning "leave the feature unchanged" in a [`BannerPatch`].
pub const FEATURE_UNCHANGED: i64 = -1;

/// What a user actually sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerContent {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// A banner together with its associations, as held by the durable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Zero until the store assigns an id.
    pub id: i64,
    pub content: BannerContent,
    /// `None` when the banner is not bound to a feature.
    pub feature_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Input for creating a banner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewBanner {
    pub title: String,
    pub text: String,
    pub url: String,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    /// [`NO_FEATURE`] for none.
    #[serde(default)]
    pub feature_id: i64,
    #[serde(default)]
    pub is_active: bool,
}

/// Partial update of a banner. Absent fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BannerPatch {
    pub title: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    /// `None` or an empty list leaves the tag set untouched.
    pub tag_ids: Option<Vec<i64>>,
    /// [`FEATURE_UNCHANGED`] behaves like `None`.
    pub feature_id: Option<i64>,
    pub is_active: Option<bool>,
}

/// Admin listing filter. Zero means "no filter" for ids and "no limit" for `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct BannerFilter {
    #[serde(default)]
    pub feature_id: i64,
    #[serde(default)]
    pub tag_id: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

/// Lookup cache key: the (tag, feature) pair a user request resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub tag_id: i64,
    pub feature_id: i64,
}

impl CacheKey {
    pub fn new(tag_id: i64, feature_id: i64) -> Self {
        Self { tag_id, feature_id }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag_id:{}:feature_id:{}", self.tag_id, self.feature_id)
    }
}

/// Cached value: the content snapshot and the banner it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedBanner {
    pub banner_id: i64,
    pub content: BannerContent,
}

/// What the caller is allowed to do, decided before the engine is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// End user: may only resolve banners.
    User,
    /// Administrator: may also manage banners.
    Admin,
}

impl Capability {
    pub fn is_admin(self) -> bool {
        matches!(self, Capability::Admin)
    }
}
