//! Conversions between `time::OffsetDateTime` and Sea-ORM's chrono-based
//! `DateTimeWithTimeZone`.

use chrono::{DateTime, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use time::OffsetDateTime;

/// Converts to the database representation, normalised to UTC.
///
/// Fails for instants outside chrono's range.
pub(crate) fn to_db(time: OffsetDateTime) -> Result<DateTimeWithTimeZone, String> {
    DateTime::<Utc>::from_timestamp(time.unix_timestamp(), time.nanosecond())
        .map(Into::into)
        .ok_or_else(|| format!("timestamp {time} is out of range"))
}

/// Converts a database timestamp back to `OffsetDateTime` in UTC.
pub(crate) fn from_db(value: DateTimeWithTimeZone) -> Result<OffsetDateTime, String> {
    let nanos = i128::from(value.timestamp()) * 1_000_000_000
        + i128::from(value.timestamp_subsec_nanos());
    OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|e| e.to_string())
}
