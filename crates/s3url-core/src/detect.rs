//! Classification of strings as S3 URLs.
//!
//! Auto-detection walks [`DETECTION_ORDER`] and stops at the first shape
//! that matches. Global path comes last: `s3://<anything>/<anything>` is a
//! syntactic superset of every other `s3://` shape, so
//! `s3://s3.amazonaws.com/bucket/key` would otherwise be read as a global URL
//! for bucket `s3.amazonaws.com`.

use s3url_model::{S3UrlFormat, S3UrlStyle};
use tracing::trace;

use crate::config::S3UrlConfig;
use crate::matcher;

/// Order in which shapes are tried when no format is given.
pub const DETECTION_ORDER: [S3UrlStyle; 5] = [
    S3UrlStyle::RegionPath,
    S3UrlStyle::RegionVirtualHost,
    S3UrlStyle::LegacyPath,
    S3UrlStyle::LegacyVirtualHost,
    S3UrlStyle::GlobalPath,
];

/// Report whether `value` is a syntactically valid absolute URL of any scheme.
///
/// # Examples
///
/// ```
/// use s3url_core::is_url;
///
/// assert!(is_url("s3://bucket/key"));
/// assert!(is_url("mailto:someone@example.com"));
/// assert!(!is_url(""));
/// assert!(!is_url("bucket/key"));
/// ```
#[must_use]
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// First shape in [`DETECTION_ORDER`] that `url` matches.
pub fn detect_style(url: &str, config: &S3UrlConfig) -> Option<S3UrlStyle> {
    let style = DETECTION_ORDER
        .into_iter()
        .find(|style| matcher::test(*style, url, config.accept_dash_region));
    trace!(url, style = ?style, "detected S3 URL style");
    style
}

pub(crate) fn is_s3_url_with(
    value: &str,
    format: Option<S3UrlFormat>,
    config: &S3UrlConfig,
) -> bool {
    if !is_url(value) {
        return false;
    }

    match format {
        Some(format) => matcher::test(format.style(), value, config.accept_dash_region),
        None => detect_style(value, config).is_some(),
    }
}

pub(crate) fn detect_format_with(value: &str, config: &S3UrlConfig) -> Option<S3UrlFormat> {
    if !is_url(value) {
        return None;
    }

    let style = detect_style(value, config)?;
    let raw = matcher::captures(style, value, config.accept_dash_region)?;
    S3UrlFormat::from_parts(style, raw.protocol)
}
