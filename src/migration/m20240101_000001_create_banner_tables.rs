use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Banner::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Banner::FeatureId).big_integer().null())
                    .col(ColumnDef::new(Banner::Content).binary().not_null())
                    .col(
                        ColumnDef::new(Banner::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Banner::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Banner::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_banner_feature_id")
                    .table(Banner::Table)
                    .col(Banner::FeatureId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BannerTag::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BannerTag::BannerId).big_integer().not_null())
                    .col(ColumnDef::new(BannerTag::TagId).big_integer().not_null())
                    .col(ColumnDef::new(BannerTag::FeatureId).big_integer().null())
                    .primary_key(
                        Index::create()
                            .col(BannerTag::BannerId)
                            .col(BannerTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_banner_tag_banner")
                            .from(BannerTag::Table, BannerTag::BannerId)
                            .to(Banner::Table, Banner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // One banner per (tag, feature) pair. NULL features stay distinct.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_banner_tag_tag_feature")
                    .table(BannerTag::Table)
                    .col(BannerTag::TagId)
                    .col(BannerTag::FeatureId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BannerTag::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Banner::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Banner {
    Table,
    Id,
    FeatureId,
    Content,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BannerTag {
    Table,
    BannerId,
    TagId,
    FeatureId,
}
