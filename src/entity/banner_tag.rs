//! Association entity linking a banner to a (tag, feature) pair.

use sea_orm::entity::prelude::*;

/// One row per (banner, tag). The banner's feature is copied onto every row so
/// user lookups can filter on the association table alone.
///
/// # Database Schema
///
/// | Column     | Type                    | Description                           |
/// |------------|-------------------------|---------------------------------------|
/// | banner_id  | BIGINT (Primary Key)    | References `banner.id`, cascades      |
/// | tag_id     | BIGINT (Primary Key)    | Tag identifier                        |
/// | feature_id | BIGINT NULL             | Copy of the banner's feature          |
///
/// A unique index on `(tag_id, feature_id)` guarantees that at most one banner
/// answers a given (tag, feature) lookup. Rows with a NULL `feature_id` are not
/// covered by it, so several featureless banners may share a tag. Lookups always
/// name a feature and never match those rows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "banner_tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub banner_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i64,

    pub feature_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::banner::Entity",
        from = "Column::BannerId",
        to = "super::banner::Column::Id",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    Banner,
}

impl Related<super::banner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Banner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
