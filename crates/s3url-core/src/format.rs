//! S3 URL formatting.
//!
//! Regions are always rendered in dot form (`s3.<region>.amazonaws.com`).
//! The deprecated dash form is accepted by the parser but never produced, so
//! a dash-region URL that is parsed and formatted again comes back in dot
//! form.

use s3url_model::{S3Object, S3UrlFormat, S3UrlResult, S3UrlStyle};
use tracing::debug;

use crate::config::S3UrlConfig;
use crate::validation::{FieldCheck, validate_bucket, validate_key, validate_region};

pub(crate) fn format_with(
    object: &S3Object,
    format: Option<S3UrlFormat>,
    config: &S3UrlConfig,
) -> S3UrlResult<String> {
    let format = format.unwrap_or(config.default_format);
    let protocol = format.protocol();

    let bucket = &object.bucket;
    let key = &object.key;
    validate_bucket(bucket, FieldCheck::NonBlank)?;
    validate_key(key, FieldCheck::NonBlank)?;

    let url = match format.style() {
        S3UrlStyle::GlobalPath => format!("{protocol}://{bucket}/{key}"),
        S3UrlStyle::LegacyPath => format!("{protocol}://s3.amazonaws.com/{bucket}/{key}"),
        S3UrlStyle::LegacyVirtualHost => format!("{protocol}://{bucket}.s3.amazonaws.com/{key}"),
        S3UrlStyle::RegionPath => {
            let region = validate_region(object.region(), FieldCheck::NonBlank)?;
            format!("{protocol}://s3.{region}.amazonaws.com/{bucket}/{key}")
        }
        S3UrlStyle::RegionVirtualHost => {
            let region = validate_region(object.region(), FieldCheck::NonBlank)?;
            format!("{protocol}://{bucket}.s3.{region}.amazonaws.com/{key}")
        }
    };

    debug!(format = %format, url = %url, "formatted S3 URL");
    Ok(url)
}
