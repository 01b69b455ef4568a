//! Durable banner store interface.

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::model::{Banner, BannerContent};

/// Result type alias using [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors produced by a [`BannerStore`], already classified at the boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Zero rows matched: the banner or association does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unique constraint violation on the (tag, feature) pair.
    #[error("{0}")]
    Conflict(String),

    /// The connection pool could not provide a working connection.
    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Backend(String),

    #[error("{0}")]
    Encode(String),

    #[error("{0}")]
    Decode(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return StoreError::Conflict(format!(
                    "tag and feature pair is already bound to another banner: {msg}"
                ));
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return StoreError::NotFound(format!("referenced row does not exist: {msg}"));
            }
            _ => {}
        }

        match err {
            DbErr::ConnectionAcquire(e) => StoreError::Unavailable(e.to_string()),
            DbErr::Conn(e) => StoreError::Unavailable(e.to_string()),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Persistence of banners and their (tag, feature) associations.
///
/// Every multi-statement operation runs in one transaction. Dropping the
/// returned future before it resolves rolls the transaction back.
#[async_trait]
pub trait BannerStore: Send + Sync {
    /// Inserts the banner and one association per tag, returning the new id.
    async fn create(&self, banner: &Banner) -> Result<i64>;

    /// Rewrites the banner row, inserts associations for tags not yet stored
    /// and deletes the associations listed in `tags_to_remove`.
    ///
    /// Fails with [`StoreError::NotFound`] if the banner, or any association to
    /// remove, does not exist. Nothing is written in that case.
    async fn update(&self, banner: &Banner, tags_to_remove: &[i64]) -> Result<()>;

    /// Deletes the banner. Associations go with it.
    async fn delete(&self, banner_id: i64) -> Result<()>;

    async fn get_banner_by_id(&self, banner_id: i64) -> Result<Banner>;

    /// Content and id of the active banner bound to `(tag_id, feature_id)`.
    async fn get_user_banner(&self, tag_id: i64, feature_id: i64) -> Result<(BannerContent, i64)>;

    /// Banners ordered by id. Zero ids disable the matching filter and a zero
    /// `limit` disables the limit.
    async fn get_all_banners(
        &self,
        feature_id: i64,
        tag_id: i64,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Banner>>;

    /// Releases the underlying connections.
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
