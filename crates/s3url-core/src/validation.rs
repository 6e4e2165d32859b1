//! Field validation for bucket, key, and region values.
//!
//! Only presence is checked. Bucket naming rules (length, character set, DNS
//! compliance) are left to the service; see
//! <https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html>.

use s3url_model::{S3UrlError, S3UrlResult};

/// How strict a field check is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    /// Reject only the empty string. Used on text captured from a URL.
    NonEmpty,
    /// Reject empty and whitespace-only strings. Used before building a URL.
    NonBlank,
}

impl FieldCheck {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::NonEmpty => !value.is_empty(),
            Self::NonBlank => !value.trim().is_empty(),
        }
    }
}

/// Validate a bucket name.
///
/// # Errors
///
/// Returns [`S3UrlError::InvalidBucket`] if the value fails `check`.
///
/// # Examples
///
/// ```
/// use s3url_core::validation::{FieldCheck, validate_bucket};
///
/// assert!(validate_bucket("my-bucket", FieldCheck::NonBlank).is_ok());
/// assert!(validate_bucket("  ", FieldCheck::NonBlank).is_err());
/// ```
pub fn validate_bucket(bucket: &str, check: FieldCheck) -> S3UrlResult<()> {
    if check.accepts(bucket) {
        Ok(())
    } else {
        Err(S3UrlError::InvalidBucket {
            bucket: bucket.to_owned(),
        })
    }
}

/// Validate an object key.
///
/// # Errors
///
/// Returns [`S3UrlError::InvalidKey`] if the value fails `check`.
pub fn validate_key(key: &str, check: FieldCheck) -> S3UrlResult<()> {
    if check.accepts(key) {
        Ok(())
    } else {
        Err(S3UrlError::InvalidKey {
            key: key.to_owned(),
        })
    }
}

/// Validate a region that the caller requires to be present.
///
/// Returns the region on success so callers can use it directly.
///
/// # Errors
///
/// Returns [`S3UrlError::InvalidRegion`] if the region is absent or fails
/// `check`.
pub fn validate_region(region: Option<&str>, check: FieldCheck) -> S3UrlResult<&str> {
    match region {
        Some(region) if check.accepts(region) => Ok(region),
        _ => Err(S3UrlError::InvalidRegion {
            region: region.map(str::to_owned),
        }),
    }
}
