use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BannerCache::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BannerCache::Key)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BannerCache::BannerId).big_integer().not_null())
                    .col(ColumnDef::new(BannerCache::Data).binary().not_null())
                    .col(
                        ColumnDef::new(BannerCache::ExpiryDate)
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
                    .name("idx_banner_cache_banner_id")
                    .table(BannerCache::Table)
                    .col(BannerCache::BannerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_banner_cache_expiry_date")
                    .table(BannerCache::Table)
                    .col(BannerCache::ExpiryDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BannerCache::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BannerCache {
    Table,
    Key,
    BannerId,
    Data,
    ExpiryDate,
}
