//! S3 URL parsing.
//!
//! With an explicit format only that format's shape is tried. Without one the
//! shapes are tried in [`DETECTION_ORDER`](crate::detect::DETECTION_ORDER).
//! Either way the captured fields are validated before an [`S3Object`] is
//! returned, and the region is set exactly when the shape carries one.

use s3url_model::{S3Object, S3UrlError, S3UrlFormat, S3UrlResult, S3UrlStyle};
use tracing::debug;

use crate::config::S3UrlConfig;
use crate::detect::{detect_style, is_url};
use crate::matcher::{self, RawS3Url};
use crate::validation::{FieldCheck, validate_bucket, validate_key, validate_region};

pub(crate) fn parse_with(
    value: &str,
    format: Option<S3UrlFormat>,
    config: &S3UrlConfig,
) -> S3UrlResult<S3Object> {
    if !is_url(value) {
        return Err(S3UrlError::InvalidUrl {
            url: value.to_owned(),
        });
    }

    let style = match format {
        Some(format) => {
            let style = format.style();
            if !matcher::test(style, value, config.accept_dash_region) {
                return Err(S3UrlError::FormatMismatch {
                    url: value.to_owned(),
                    format,
                });
            }
            style
        }
        None => detect_style(value, config).ok_or_else(|| S3UrlError::NoMatchingFormat {
            url: value.to_owned(),
        })?,
    };

    let raw = matcher::captures(style, value, config.accept_dash_region).ok_or_else(|| {
        S3UrlError::NoMatchingFormat {
            url: value.to_owned(),
        }
    })?;
    let object = to_object(style, &raw)?;

    debug!(
        style = %style,
        bucket = %object.bucket,
        key = %object.key,
        region = ?object.region,
        dash_region = raw.dash_region,
        "parsed S3 URL"
    );
    Ok(object)
}

fn to_object(style: S3UrlStyle, raw: &RawS3Url<'_>) -> S3UrlResult<S3Object> {
    validate_bucket(raw.bucket, FieldCheck::NonEmpty)?;
    validate_key(raw.key, FieldCheck::NonEmpty)?;
    let region = if style.is_regional() {
        Some(validate_region(raw.region, FieldCheck::NonEmpty)?.to_owned())
    } else {
        None
    };

    Ok(S3Object {
        bucket: raw.bucket.to_owned(),
        key: raw.key.to_owned(),
        region,
    })
}
