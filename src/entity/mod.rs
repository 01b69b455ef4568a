//! Database entity models for banner-seaorm-store.
//!
//! This module contains the Sea-ORM entity definitions used by the durable
//! banner store and by the database-backed lookup cache. The cache table has no
//! relation to the banner tables and may live in a different database.

/// Banner rows: content, feature reference and activation state.
pub mod banner;

/// Banner cache rows: keyed, expiring lookup snapshots.
pub mod banner_cache;

/// Banner to (tag, feature) associations.
pub mod banner_tag;
