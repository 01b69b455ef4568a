//! Engine-level error type.
//!
//! Store and cache errors are classified where they are produced
//! ([`StoreError`], [`CacheError`]) and converted here into one of the kinds a
//! boundary layer maps to protocol status codes.

use thiserror::Error;

use crate::cache::CacheError;
use crate::store::StoreError;

/// Result type alias using the engine [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Classification of an [`Error`], without the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Conflict,
    Unavailable,
    Internal,
    PermissionDenied,
}

/// Errors returned by [`crate::BannerEngine`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or out-of-range input. Raised before any I/O.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced banner or association does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The write would give a (tag, feature) pair a second banner.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Store or cache could not be reached in time.
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// Anything unexpected, including serialization failures.
    #[error("internal error: {0}")]
    Internal(String),

    /// The caller's capability does not allow the operation.
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Conflict(_) => ErrorKind::Conflict,
            Error::Unavailable(_) => ErrorKind::Unavailable,
            Error::Internal(_) => ErrorKind::Internal,
            Error::PermissionDenied(_) => ErrorKind::PermissionDenied,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => Error::NotFound(msg),
            StoreError::Conflict(msg) => Error::Conflict(msg),
            StoreError::Unavailable(msg) => Error::Unavailable(msg),
            StoreError::Backend(msg) => Error::Internal(format!("store backend: {msg}")),
            StoreError::Encode(msg) => Error::Internal(format!("store encode: {msg}")),
            StoreError::Decode(msg) => Error::Internal(format!("store decode: {msg}")),
        }
    }
}

impl From<CacheError> for Error {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Miss(key) => Error::NotFound(format!("no cache entry for {key}")),
            CacheError::Unavailable(msg) => Error::Unavailable(msg),
            CacheError::Backend(msg) => Error::Internal(format!("cache backend: {msg}")),
            CacheError::Encode(msg) => Error::Internal(format!("cache encode: {msg}")),
            CacheError::Decode(msg) => Error::Internal(format!("cache decode: {msg}")),
        }
    }
}
