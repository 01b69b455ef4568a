//! Lookup cache entity model for Sea-ORM database interaction.
//!
//! This table is not authoritative. Each row is a time-bounded copy of the
//! content a (tag, feature) lookup resolved to, along with the banner that
//! produced it so every entry for a banner can be evicted at once.

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing a cached lookup result.
///
/// # Database Schema
///
/// | Column      | Type                    | Description                           |
/// |-------------|-------------------------|---------------------------------------|
/// | key         | TEXT (Primary Key)      | `tag_id:{tag}:feature_id:{feature}`   |
/// | banner_id   | BIGINT                  | Banner that produced the snapshot     |
/// | data        | BYTEA                   | MessagePack serialized snapshot       |
/// | expiry_date | TIMESTAMPTZ             | Entry is ignored once this has passed |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "banner_cache")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub key: String,

    /// Indexed, used by banner-wide eviction.
    pub banner_id: i64,

    pub data: Vec<u8>,

    /// Set at write time to `now + ttl`. Reads filter on it, so an entry is
    /// never served past its horizon even if nobody deletes it.
    pub expiry_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
