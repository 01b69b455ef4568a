//! Schema migrations for the banner store and the database-backed lookup cache.
//!
//! Run [`Migrator`] against the store database. When the cache lives in a
//! separate database, run [`CacheMigrator`] there instead of relying on the
//! cache table created by [`Migrator`].

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_banner_tables;
mod m20240101_000002_create_banner_cache_table;

/// Banner tables plus the cache table, for single-database deployments.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("banner_seaorm_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_banner_tables::Migration),
            Box::new(m20240101_000002_create_banner_cache_table::Migration),
        ]
    }
}

/// Only the cache table, for a dedicated cache database.
pub struct CacheMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CacheMigrator {
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("banner_cache_seaorm_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000002_create_banner_cache_table::Migration)]
    }
}
