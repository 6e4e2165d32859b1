//! Recognize, parse, and format S3 object URLs.
//!
//! Callers that talk to S3 receive object locations in many spellings. This
//! crate accepts all of them without the caller knowing which one it has:
//!
//! | Format | Example |
//! |--------|---------|
//! | `s3-global-path` | `s3://my-bucket/key` |
//! | `s3-legacy-path` / `https-legacy-path` | `s3://s3.amazonaws.com/my-bucket/key` |
//! | `s3-legacy-virtual-host` / `https-legacy-virtual-host` | `https://my-bucket.s3.amazonaws.com/key` |
//! | `s3-region-path` / `https-region-path` | `s3://s3.us-west-2.amazonaws.com/my-bucket/key` |
//! | `s3-region-virtual-host` / `https-region-virtual-host` | `https://my-bucket.s3.us-west-2.amazonaws.com/key` |
//!
//! Regional formats also accept the deprecated `s3-<region>` hostname on
//! input; output always uses `s3.<region>`.
//!
//! # Architecture
//!
//! ```text
//!  &str ──> detect (precedence) ──> matcher ──> validation ──> S3Object
//!  S3Object ──> validation ──> format ──> String
//! ```
//!
//! The free functions below use [`S3UrlConfig::default`]. Use
//! [`S3UrlCodec`] to change the default output format or to stop accepting
//! dash-region hostnames.
//!
//! # Examples
//!
//! ```
//! use s3url_core::{format_s3_url, parse_s3_url};
//! use s3url_model::S3UrlFormat;
//!
//! let object = parse_s3_url("s3://s3-us-west-2.amazonaws.com/b/k", None)?;
//! assert_eq!(
//!     format_s3_url(&object, Some(S3UrlFormat::S3RegionPath))?,
//!     "s3://s3.us-west-2.amazonaws.com/b/k"
//! );
//! # Ok::<(), s3url_model::S3UrlError>(())
//! ```

mod codec;
pub mod config;
pub mod detect;
mod format;
pub mod matcher;
mod parse;
pub mod validation;

pub use codec::S3UrlCodec;
pub use config::S3UrlConfig;
pub use detect::{DETECTION_ORDER, is_url};
pub use s3url_model::{
    S3Object, S3UrlError, S3UrlFormat, S3UrlProtocol, S3UrlResult, S3UrlStyle,
};
use serde_json::Value;

/// Report whether `value` is an S3 URL, optionally of one specific format.
///
/// See [`S3UrlCodec::is_s3_url`].
///
/// # Examples
///
/// ```
/// use s3url_core::is_s3_url;
/// use s3url_model::S3UrlFormat;
///
/// assert!(is_s3_url("s3://my-bucket/key", None));
/// assert!(is_s3_url("s3://my-bucket/key", Some(S3UrlFormat::S3GlobalPath)));
/// assert!(!is_s3_url("s3://my-bucket/", None));
/// ```
#[must_use]
pub fn is_s3_url(value: &str, format: Option<S3UrlFormat>) -> bool {
    S3UrlCodec::default().is_s3_url(value, format)
}

/// Report whether a JSON value is a string holding an S3 URL.
///
/// See [`S3UrlCodec::is_s3_url_value`].
#[must_use]
pub fn is_s3_url_value(value: &Value, format: Option<S3UrlFormat>) -> bool {
    S3UrlCodec::default().is_s3_url_value(value, format)
}

/// Parse an S3 URL into an [`S3Object`].
///
/// # Errors
///
/// See [`S3UrlCodec::parse`].
pub fn parse_s3_url(value: &str, format: Option<S3UrlFormat>) -> S3UrlResult<S3Object> {
    S3UrlCodec::default().parse(value, format)
}

/// Parse a JSON value holding an S3 URL into an [`S3Object`].
///
/// # Errors
///
/// See [`S3UrlCodec::parse_value`].
pub fn parse_s3_url_value(value: &Value, format: Option<S3UrlFormat>) -> S3UrlResult<S3Object> {
    S3UrlCodec::default().parse_value(value, format)
}

/// Format an [`S3Object`] as a URL, `s3-global-path` when `format` is `None`.
///
/// # Errors
///
/// See [`S3UrlCodec::format`].
pub fn format_s3_url(object: &S3Object, format: Option<S3UrlFormat>) -> S3UrlResult<String> {
    S3UrlCodec::default().format(object, format)
}

/// Identify the concrete format of an S3 URL.
///
/// # Examples
///
/// ```
/// use s3url_core::detect_s3_url_format;
/// use s3url_model::S3UrlFormat;
///
/// assert_eq!(
///     detect_s3_url_format("https://s3.amazonaws.com/my-bucket/key"),
///     Some(S3UrlFormat::HttpsLegacyPath)
/// );
/// assert_eq!(detect_s3_url_format("https://example.com/key"), None);
/// ```
#[must_use]
pub fn detect_s3_url_format(value: &str) -> Option<S3UrlFormat> {
    S3UrlCodec::default().detect_format(value)
}
