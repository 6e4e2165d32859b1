//! Configured entry point for checking, parsing, and formatting S3 URLs.

use s3url_model::{S3Object, S3UrlError, S3UrlFormat, S3UrlResult};
use serde_json::Value;

use crate::config::S3UrlConfig;
use crate::{detect, format, parse};

/// Checks, parses, and formats S3 URLs under a fixed [`S3UrlConfig`].
///
/// Every method is a pure function of its arguments and the configuration, so
/// a codec can be shared freely between threads.
///
/// # Examples
///
/// ```
/// use s3url_core::S3UrlCodec;
/// use s3url_model::S3UrlFormat;
///
/// let codec = S3UrlCodec::default();
/// let object = codec.parse("https://my-bucket.s3-us-west-2.amazonaws.com/a/b", None)?;
/// assert_eq!(object.region(), Some("us-west-2"));
///
/// let url = codec.format(&object, Some(S3UrlFormat::HttpsRegionVirtualHost))?;
/// assert_eq!(url, "https://my-bucket.s3.us-west-2.amazonaws.com/a/b");
/// # Ok::<(), s3url_model::S3UrlError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct S3UrlCodec {
    config: S3UrlConfig,
}

impl S3UrlCodec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub fn new(config: S3UrlConfig) -> Self {
        Self { config }
    }

    /// The configuration this codec was built with.
    #[must_use]
    pub fn config(&self) -> &S3UrlConfig {
        &self.config
    }

    /// Report whether `value` is an S3 URL, optionally of one specific format.
    ///
    /// Never fails: anything that is not a URL, or not of the requested
    /// shape, yields `false`. With an explicit format only the shape is
    /// checked; `s3-region-path` and `https-region-path` accept the same
    /// URLs.
    #[must_use]
    pub fn is_s3_url(&self, value: &str, format: Option<S3UrlFormat>) -> bool {
        detect::is_s3_url_with(value, format, &self.config)
    }

    /// [`is_s3_url`](Self::is_s3_url) for an arbitrary JSON value.
    ///
    /// Only JSON strings can be S3 URLs.
    #[must_use]
    pub fn is_s3_url_value(&self, value: &Value, format: Option<S3UrlFormat>) -> bool {
        value
            .as_str()
            .is_some_and(|value| self.is_s3_url(value, format))
    }

    /// Parse `value` into an [`S3Object`].
    ///
    /// # Errors
    ///
    /// - [`S3UrlError::InvalidUrl`] if `value` is not a URL
    /// - [`S3UrlError::FormatMismatch`] if `format` is given and does not match
    /// - [`S3UrlError::NoMatchingFormat`] if `format` is `None` and no shape
    ///   matches
    /// - a field error if a captured bucket, key, or region is empty
    pub fn parse(&self, value: &str, format: Option<S3UrlFormat>) -> S3UrlResult<S3Object> {
        parse::parse_with(value, format, &self.config)
    }

    /// [`parse`](Self::parse) for an arbitrary JSON value.
    ///
    /// # Errors
    ///
    /// Non-string values fail with [`S3UrlError::InvalidUrl`]; strings fail as
    /// in [`parse`](Self::parse).
    pub fn parse_value(&self, value: &Value, format: Option<S3UrlFormat>) -> S3UrlResult<S3Object> {
        match value {
            Value::String(value) => self.parse(value, format),
            other => Err(S3UrlError::InvalidUrl {
                url: other.to_string(),
            }),
        }
    }

    /// Format `object` as a URL. `None` uses the configured default format.
    ///
    /// # Errors
    ///
    /// Returns a field error if the bucket or key is blank, or if the format
    /// is regional and the region is missing or blank.
    pub fn format(&self, object: &S3Object, format: Option<S3UrlFormat>) -> S3UrlResult<String> {
        format::format_with(object, format, &self.config)
    }

    /// Identify the concrete format of `value`, scheme included.
    ///
    /// Uses the same precedence as auto-detecting [`parse`](Self::parse).
    #[must_use]
    pub fn detect_format(&self, value: &str) -> Option<S3UrlFormat> {
        detect::detect_format_with(value, &self.config)
    }
}
