//! S3 object and URL format types.
//!
//! Amazon S3 addresses an object with one of several URL dialects. Two layouts
//! exist: path-style (`s3.<region>.amazonaws.com/<bucket>/<key>`) and
//! virtual-hosted-style (`<bucket>.s3.<region>.amazonaws.com/<key>`), each
//! usable with the `s3` or `https` scheme, with or without a region in the
//! hostname. Older regions also accept `s3-<region>` in place of
//! `s3.<region>`; that spelling is recognized on input only.
//!
//! See <https://docs.aws.amazon.com/AmazonS3/latest/userguide/VirtualHosting.html>.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{S3UrlError, S3UrlResult};

// ---------------------------------------------------------------------------
// S3UrlProtocol
// ---------------------------------------------------------------------------

/// URI scheme of an S3 URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum S3UrlProtocol {
    /// `s3://`
    #[default]
    #[serde(rename = "s3")]
    S3,
    /// `https://`
    #[serde(rename = "https")]
    Https,
}

impl S3UrlProtocol {
    /// Returns the scheme without the `://` separator.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for S3UrlProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for S3UrlProtocol {
    type Err = S3UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s3" => Ok(Self::S3),
            "https" => Ok(Self::Https),
            _ => Err(S3UrlError::InvalidUrl { url: s.to_owned() }),
        }
    }
}

// ---------------------------------------------------------------------------
// S3UrlStyle
// ---------------------------------------------------------------------------

/// The five URL shapes, independent of scheme.
///
/// Legacy and regional shapes are shared by an `s3-*` and an `https-*`
/// [`S3UrlFormat`]; the global path shape exists only for `s3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum S3UrlStyle {
    /// `s3://<bucket>/<key>`
    GlobalPath,
    /// `<scheme>://s3.amazonaws.com/<bucket>/<key>`
    LegacyPath,
    /// `<scheme>://<bucket>.s3.amazonaws.com/<key>`
    LegacyVirtualHost,
    /// `<scheme>://s3.<region>.amazonaws.com/<bucket>/<key>`
    RegionPath,
    /// `<scheme>://<bucket>.s3.<region>.amazonaws.com/<key>`
    RegionVirtualHost,
}

impl S3UrlStyle {
    /// Whether URLs of this shape carry a region in the hostname.
    #[must_use]
    pub fn is_regional(&self) -> bool {
        matches!(self, Self::RegionPath | Self::RegionVirtualHost)
    }

    /// Whether the bucket is a subdomain of the host rather than a path segment.
    #[must_use]
    pub fn is_virtual_host(&self) -> bool {
        matches!(self, Self::LegacyVirtualHost | Self::RegionVirtualHost)
    }

    /// Returns a short human-readable name for the shape.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GlobalPath => "global-path",
            Self::LegacyPath => "legacy-path",
            Self::LegacyVirtualHost => "legacy-virtual-host",
            Self::RegionPath => "region-path",
            Self::RegionVirtualHost => "region-virtual-host",
        }
    }
}

impl fmt::Display for S3UrlStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// S3UrlFormat
// ---------------------------------------------------------------------------

/// A named S3 URL dialect.
///
/// Each tag is a pair of [`S3UrlStyle`] and [`S3UrlProtocol`]. Both
/// directions of that mapping are exhaustive matches, so a new tag cannot be
/// added without updating every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum S3UrlFormat {
    /// `s3://<bucket>/<key>`
    #[default]
    #[serde(rename = "s3-global-path")]
    S3GlobalPath,
    /// `s3://s3.amazonaws.com/<bucket>/<key>`
    #[serde(rename = "s3-legacy-path")]
    S3LegacyPath,
    /// `s3://<bucket>.s3.amazonaws.com/<key>`
    #[serde(rename = "s3-legacy-virtual-host")]
    S3LegacyVirtualHost,
    /// `s3://s3.<region>.amazonaws.com/<bucket>/<key>`
    #[serde(rename = "s3-region-path")]
    S3RegionPath,
    /// `s3://<bucket>.s3.<region>.amazonaws.com/<key>`
    #[serde(rename = "s3-region-virtual-host")]
    S3RegionVirtualHost,
    /// `https://s3.amazonaws.com/<bucket>/<key>`
    #[serde(rename = "https-legacy-path")]
    HttpsLegacyPath,
    /// `https://<bucket>.s3.amazonaws.com/<key>`
    #[serde(rename = "https-legacy-virtual-host")]
    HttpsLegacyVirtualHost,
    /// `https://s3.<region>.amazonaws.com/<bucket>/<key>`
    #[serde(rename = "https-region-path")]
    HttpsRegionPath,
    /// `https://<bucket>.s3.<region>.amazonaws.com/<key>`
    #[serde(rename = "https-region-virtual-host")]
    HttpsRegionVirtualHost,
}

impl S3UrlFormat {
    /// All format tags, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::S3GlobalPath,
        Self::S3LegacyPath,
        Self::S3LegacyVirtualHost,
        Self::S3RegionPath,
        Self::S3RegionVirtualHost,
        Self::HttpsLegacyPath,
        Self::HttpsLegacyVirtualHost,
        Self::HttpsRegionPath,
        Self::HttpsRegionVirtualHost,
    ];

    /// Returns the kebab-case tag, e.g. `"https-region-path"`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S3GlobalPath => "s3-global-path",
            Self::S3LegacyPath => "s3-legacy-path",
            Self::S3LegacyVirtualHost => "s3-legacy-virtual-host",
            Self::S3RegionPath => "s3-region-path",
            Self::S3RegionVirtualHost => "s3-region-virtual-host",
            Self::HttpsLegacyPath => "https-legacy-path",
            Self::HttpsLegacyVirtualHost => "https-legacy-virtual-host",
            Self::HttpsRegionPath => "https-region-path",
            Self::HttpsRegionVirtualHost => "https-region-virtual-host",
        }
    }

    /// The URL shape this tag selects.
    #[must_use]
    pub fn style(&self) -> S3UrlStyle {
        match self {
            Self::S3GlobalPath => S3UrlStyle::GlobalPath,
            Self::S3LegacyPath | Self::HttpsLegacyPath => S3UrlStyle::LegacyPath,
            Self::S3LegacyVirtualHost | Self::HttpsLegacyVirtualHost => {
                S3UrlStyle::LegacyVirtualHost
            }
            Self::S3RegionPath | Self::HttpsRegionPath => S3UrlStyle::RegionPath,
            Self::S3RegionVirtualHost | Self::HttpsRegionVirtualHost => {
                S3UrlStyle::RegionVirtualHost
            }
        }
    }

    /// The scheme this tag renders with.
    #[must_use]
    pub fn protocol(&self) -> S3UrlProtocol {
        match self {
            Self::S3GlobalPath
            | Self::S3LegacyPath
            | Self::S3LegacyVirtualHost
            | Self::S3RegionPath
            | Self::S3RegionVirtualHost => S3UrlProtocol::S3,
            Self::HttpsLegacyPath
            | Self::HttpsLegacyVirtualHost
            | Self::HttpsRegionPath
            | Self::HttpsRegionVirtualHost => S3UrlProtocol::Https,
        }
    }

    /// Looks up the tag for a shape and scheme.
    ///
    /// Returns `None` for `https` global path, which is not a dialect.
    #[must_use]
    pub fn from_parts(style: S3UrlStyle, protocol: S3UrlProtocol) -> Option<Self> {
        match (style, protocol) {
            (S3UrlStyle::GlobalPath, S3UrlProtocol::S3) => Some(Self::S3GlobalPath),
            (S3UrlStyle::GlobalPath, S3UrlProtocol::Https) => None,
            (S3UrlStyle::LegacyPath, S3UrlProtocol::S3) => Some(Self::S3LegacyPath),
            (S3UrlStyle::LegacyPath, S3UrlProtocol::Https) => Some(Self::HttpsLegacyPath),
            (S3UrlStyle::LegacyVirtualHost, S3UrlProtocol::S3) => Some(Self::S3LegacyVirtualHost),
            (S3UrlStyle::LegacyVirtualHost, S3UrlProtocol::Https) => {
                Some(Self::HttpsLegacyVirtualHost)
            }
            (S3UrlStyle::RegionPath, S3UrlProtocol::S3) => Some(Self::S3RegionPath),
            (S3UrlStyle::RegionPath, S3UrlProtocol::Https) => Some(Self::HttpsRegionPath),
            (S3UrlStyle::RegionVirtualHost, S3UrlProtocol::S3) => Some(Self::S3RegionVirtualHost),
            (S3UrlStyle::RegionVirtualHost, S3UrlProtocol::Https) => {
                Some(Self::HttpsRegionVirtualHost)
            }
        }
    }
}

impl fmt::Display for S3UrlFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for S3UrlFormat {
    type Err = S3UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| S3UrlError::UnknownFormat {
                format: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// S3Object
// ---------------------------------------------------------------------------

/// An object addressed by an S3 URL.
///
/// `region` is set only for objects taken from (or destined for) a regional
/// URL. Fields are public; [`S3Object::new`] and [`S3Object::regional`] are
/// the checked way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct S3Object {
    /// Bucket name.
    pub bucket: String,
    /// Object key, may contain `/`.
    pub key: String,
    /// Region code such as `us-west-2`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl S3Object {
    /// Create an object reference without a region.
    ///
    /// # Errors
    /// Returns [`S3UrlError::InvalidBucket`] or [`S3UrlError::InvalidKey`] if
    /// either value is empty or whitespace-only.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> S3UrlResult<Self> {
        let bucket = bucket.into();
        if is_blank(&bucket) {
            return Err(S3UrlError::InvalidBucket { bucket });
        }
        let key = key.into();
        if is_blank(&key) {
            return Err(S3UrlError::InvalidKey { key });
        }
        Ok(Self {
            bucket,
            key,
            region: None,
        })
    }

    /// Create an object reference in a specific region.
    ///
    /// # Errors
    /// Same as [`S3Object::new`], plus [`S3UrlError::InvalidRegion`] for a
    /// blank region.
    pub fn regional(
        bucket: impl Into<String>,
        key: impl Into<String>,
        region: impl Into<String>,
    ) -> S3UrlResult<Self> {
        Self::new(bucket, key)?.with_region(region)
    }

    /// Set the region, replacing any previous one.
    ///
    /// # Errors
    /// Returns [`S3UrlError::InvalidRegion`] if the region is blank.
    pub fn with_region(mut self, region: impl Into<String>) -> S3UrlResult<Self> {
        let region = region.into();
        if is_blank(&region) {
            return Err(S3UrlError::InvalidRegion {
                region: Some(region),
            });
        }
        self.region = Some(region);
        Ok(self)
    }

    /// Returns the region as a string slice, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
