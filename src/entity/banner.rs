//! Banner entity model for Sea-ORM database interaction.
//!
//! This module defines the database schema representation for banners. The
//! banner row carries the content blob, the optional feature reference and the
//! activation flag; the tag associations live in [`super::banner_tag`].

use sea_orm::entity::prelude::*;

/// Sea-ORM entity model representing a banner in the database.
///
/// # Database Schema
///
/// | Column      | Type                    | Description                          |
/// |-------------|-------------------------|--------------------------------------|
/// | id          | BIGINT (Primary Key)    | Banner ID, generated by the store    |
/// | feature_id  | BIGINT NULL             | Feature the banner is shown for      |
/// | content     | BYTEA                   | MessagePack serialized content       |
/// | is_active   | BOOLEAN                 | Whether user lookups may return it   |
/// | created_at  | TIMESTAMPTZ             | Creation timestamp                   |
/// | updated_at  | TIMESTAMPTZ             | Last update timestamp                |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "banner")]
pub struct Model {
    /// Store-generated identifier.
    #[sea_orm(primary_key)]
    pub id: i64,

    /// The feature this banner belongs to, `NULL` when none was given.
    pub feature_id: Option<i64>,

    /// MessagePack serialized [`crate::BannerContent`].
    pub content: Vec<u8>,

    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Tag associations owned by this banner.
    #[sea_orm(has_many = "super::banner_tag::Entity")]
    BannerTag,
}

impl Related<super::banner_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BannerTag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
