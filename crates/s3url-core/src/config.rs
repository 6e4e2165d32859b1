//! Codec configuration.
//!
//! Provides [`S3UrlConfig`] for tuning an [`S3UrlCodec`](crate::S3UrlCodec).
//! The defaults reproduce the behavior of the crate-level free functions.

use s3url_model::S3UrlFormat;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Configuration for an [`S3UrlCodec`](crate::S3UrlCodec).
///
/// # Examples
///
/// ```
/// use s3url_core::S3UrlConfig;
/// use s3url_model::S3UrlFormat;
///
/// let config = S3UrlConfig::default();
/// assert_eq!(config.default_format, S3UrlFormat::S3GlobalPath);
/// assert!(config.accept_dash_region);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase", default)]
pub struct S3UrlConfig {
    /// Format used when formatting without an explicit format.
    #[builder(default = S3UrlFormat::S3GlobalPath)]
    pub default_format: S3UrlFormat,

    /// Whether the deprecated `s3-<region>` hostname spelling is recognized
    /// on input.
    #[builder(default = true)]
    pub accept_dash_region: bool,
}

impl Default for S3UrlConfig {
    fn default() -> Self {
        Self {
            default_format: S3UrlFormat::S3GlobalPath,
            accept_dash_region: true,
        }
    }
}
