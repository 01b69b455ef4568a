//! Input validation. Everything here runs before the store is touched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{BannerContent, FEATURE_UNCHANGED, NO_FEATURE};

pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_TEXT_LEN: usize = 1000;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9](?:[A-Za-z0-9.\-]*[A-Za-z0-9])?(?::\d{1,5})?(?:[/?#]\S*)?$")
        .unwrap_or_else(|e| unreachable!("URL pattern is a literal: {e}"))
});

pub fn content(content: &BannerContent) -> Result<()> {
    non_empty_bounded("title", &content.title, MAX_TITLE_LEN)?;
    non_empty_bounded("text", &content.text, MAX_TEXT_LEN)?;

    if content.url.is_empty() {
        return Err(Error::InvalidArgument("url must not be empty".into()));
    }
    if !URL_PATTERN.is_match(&content.url) {
        return Err(Error::InvalidArgument(format!(
            "url {:?} is not a valid http(s) URL",
            content.url
        )));
    }

    Ok(())
}

fn non_empty_bounded(field: &str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max {
        return Err(Error::InvalidArgument(format!(
            "{field} is {len} characters long, at most {max} allowed"
        )));
    }
    Ok(())
}

/// Feature given on create. [`NO_FEATURE`] maps to `None`.
pub fn new_feature(feature_id: i64) -> Result<Option<i64>> {
    match feature_id {
        NO_FEATURE => Ok(None),
        id if id > 0 => Ok(Some(id)),
        id => Err(Error::InvalidArgument(format!(
            "feature id must be greater or equal to 0, got {id}"
        ))),
    }
}

/// Feature given in a patch, resolved against the stored one.
pub fn patched_feature(current: Option<i64>, requested: Option<i64>) -> Result<Option<i64>> {
    match requested {
        None | Some(FEATURE_UNCHANGED) => Ok(current),
        Some(id) => new_feature(id),
    }
}

/// Rejects negative ids and duplicates.
pub fn tag_ids(tag_ids: &[i64]) -> Result<()> {
    if let Some(id) = tag_ids.iter().find(|id| **id < 0) {
        return Err(Error::InvalidArgument(format!(
            "tag id must be greater or equal to 0, got {id}"
        )));
    }
    crate::tag_diff::ensure_unique(tag_ids)
}

pub fn lookup_ids(tag_id: i64, feature_id: i64) -> Result<()> {
    if tag_id < 0 {
        return Err(Error::InvalidArgument(
            "tag id must be greater or equal to 0".into(),
        ));
    }
    if feature_id < 0 {
        return Err(Error::InvalidArgument(
            "feature id must be greater or equal to 0".into(),
        ));
    }
    Ok(())
}

pub fn banner_id(banner_id: i64) -> Result<()> {
    if banner_id <= 0 {
        return Err(Error::InvalidArgument(
            "banner id must be greater than 0".into(),
        ));
    }
    Ok(())
}
