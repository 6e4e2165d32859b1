//! Error types for S3 URL handling.
//!
//! [`S3UrlError`] separates three groups of failures:
//!
//! - input that is not a URL, or is a URL of the wrong shape
//!   ([`InvalidUrl`](S3UrlError::InvalidUrl),
//!   [`NoMatchingFormat`](S3UrlError::NoMatchingFormat),
//!   [`FormatMismatch`](S3UrlError::FormatMismatch))
//! - a required field that is missing or blank
//!   ([`InvalidBucket`](S3UrlError::InvalidBucket),
//!   [`InvalidKey`](S3UrlError::InvalidKey),
//!   [`InvalidRegion`](S3UrlError::InvalidRegion))
//! - a format tag outside the known set
//!   ([`UnknownFormat`](S3UrlError::UnknownFormat)), which is a caller bug
//!   rather than bad data.

use crate::types::S3UrlFormat;

/// Error type for parsing, formatting, and validating S3 URLs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum S3UrlError {
    /// The input is not a syntactically valid URL.
    #[error("invalid URL: {url:?}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
    },

    /// The input is a valid URL but matches none of the known S3 URL shapes.
    #[error("S3 URL does not match any format: {url}")]
    NoMatchingFormat {
        /// The rejected URL.
        url: String,
    },

    /// The input does not match the explicitly requested format.
    #[error("S3 URL does not match format {format}: {url}")]
    FormatMismatch {
        /// The rejected URL.
        url: String,
        /// The format that was requested.
        format: S3UrlFormat,
    },

    /// The bucket is empty or whitespace-only.
    #[error("invalid S3 bucket: {bucket:?}")]
    InvalidBucket {
        /// The rejected bucket value.
        bucket: String,
    },

    /// The key is empty or whitespace-only.
    #[error("invalid S3 key: {key:?}")]
    InvalidKey {
        /// The rejected key value.
        key: String,
    },

    /// The region is missing, empty, or whitespace-only where one is required.
    #[error("invalid S3 region: {region:?}")]
    InvalidRegion {
        /// The rejected region value, `None` when it was absent.
        region: Option<String>,
    },

    /// The format tag is not one of the nine known tags.
    #[error("unknown S3 URL format: {format:?}")]
    UnknownFormat {
        /// The unrecognized tag.
        format: String,
    },
}

impl S3UrlError {
    /// Returns `true` for the per-field validation errors (bucket, key, region).
    #[must_use]
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBucket { .. } | Self::InvalidKey { .. } | Self::InvalidRegion { .. }
        )
    }

    /// Returns `true` when the caller passed a format tag outside the known set.
    #[must_use]
    pub fn is_unknown_format(&self) -> bool {
        matches!(self, Self::UnknownFormat { .. })
    }
}

/// Convenience result type for S3 URL operations.
pub type S3UrlResult<T> = Result<T, S3UrlError>;
