//! Pattern matchers for the S3 URL shapes.
//!
//! One matcher per [`S3UrlStyle`]. The two regional shapes each have a dot
//! pattern (`s3.<region>`) and a dash pattern (`s3-<region>`); the dash one
//! is an input-only affordance for deprecated hostnames and can be switched
//! off by the caller.
//!
//! Matching is purely syntactic:
//!
//! - a path-style bucket runs up to the first `/`
//! - a virtual-host bucket runs up to the first `.`
//! - a region runs up to the next `.`
//! - the key is everything after the bucket separator, `/` included
//!
//! Captured text is returned verbatim, never percent-decoded.
//!
//! See <https://docs.aws.amazon.com/AmazonS3/latest/userguide/VirtualHosting.html>.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use s3url_model::{S3UrlProtocol, S3UrlStyle};

/// `s3://<bucket>/<key>`
static GLOBAL_PATH: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^s3://(?P<bucket>[^/]+)/(?P<key>.+)$"));

/// `<s3|https>://s3.amazonaws.com/<bucket>/<key>`
static LEGACY_PATH: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<protocol>s3|https)://s3\.amazonaws\.com/(?P<bucket>[^/]+)/(?P<key>.+)$")
});

/// `<s3|https>://<bucket>.s3.amazonaws.com/<key>`
static LEGACY_VIRTUAL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?P<protocol>s3|https)://(?P<bucket>[^.]+)\.s3\.amazonaws\.com/(?P<key>.+)$")
});

/// `<s3|https>://s3.<region>.amazonaws.com/<bucket>/<key>`
static DOT_REGION_PATH: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?P<protocol>s3|https)://s3\.(?P<region>[^.]+)\.amazonaws\.com/(?P<bucket>[^/]+)/(?P<key>.+)$",
    )
});

/// `<s3|https>://s3-<region>.amazonaws.com/<bucket>/<key>`
static DASH_REGION_PATH: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?P<protocol>s3|https)://s3-(?P<region>[^.]+)\.amazonaws\.com/(?P<bucket>[^/]+)/(?P<key>.+)$",
    )
});

/// `<s3|https>://<bucket>.s3.<region>.amazonaws.com/<key>`
static DOT_REGION_VIRTUAL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?P<protocol>s3|https)://(?P<bucket>[^.]+)\.s3\.(?P<region>[^.]+)\.amazonaws\.com/(?P<key>.+)$",
    )
});

/// `<s3|https>://<bucket>.s3-<region>.amazonaws.com/<key>`
static DASH_REGION_VIRTUAL_HOST: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?P<protocol>s3|https)://(?P<bucket>[^.]+)\.s3-(?P<region>[^.]+)\.amazonaws\.com/(?P<key>.+)$",
    )
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("S3 URL pattern must compile")
}

/// Fields captured from a URL, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawS3Url<'a> {
    /// Scheme of the URL. Always `s3` for the global path shape.
    pub protocol: S3UrlProtocol,
    /// Captured bucket segment.
    pub bucket: &'a str,
    /// Captured key, including any embedded `/`.
    pub key: &'a str,
    /// Captured region, for regional shapes only.
    pub region: Option<&'a str>,
    /// Whether the deprecated `s3-<region>` spelling was used.
    pub dash_region: bool,
}

/// The dot pattern and, for regional shapes, the dash pattern of a style.
fn patterns(style: S3UrlStyle) -> (&'static Regex, Option<&'static Regex>) {
    match style {
        S3UrlStyle::GlobalPath => (&*GLOBAL_PATH, None),
        S3UrlStyle::LegacyPath => (&*LEGACY_PATH, None),
        S3UrlStyle::LegacyVirtualHost => (&*LEGACY_VIRTUAL_HOST, None),
        S3UrlStyle::RegionPath => (&*DOT_REGION_PATH, Some(&*DASH_REGION_PATH)),
        S3UrlStyle::RegionVirtualHost => {
            (&*DOT_REGION_VIRTUAL_HOST, Some(&*DASH_REGION_VIRTUAL_HOST))
        }
    }
}

/// Report whether `url` has the given shape.
///
/// No field-level validation happens here.
#[must_use]
pub fn test(style: S3UrlStyle, url: &str, accept_dash_region: bool) -> bool {
    let (dot, dash) = patterns(style);
    dot.is_match(url) || (accept_dash_region && dash.is_some_and(|re| re.is_match(url)))
}

/// Extract the raw fields of `url` for the given shape.
///
/// The dot spelling wins when both could apply.
#[must_use]
pub fn captures(style: S3UrlStyle, url: &str, accept_dash_region: bool) -> Option<RawS3Url<'_>> {
    let (dot, dash) = patterns(style);
    if let Some(caps) = dot.captures(url) {
        return Some(raw_from(&caps, false));
    }
    if !accept_dash_region {
        return None;
    }
    dash.and_then(|re| re.captures(url))
        .map(|caps| raw_from(&caps, true))
}

fn raw_from<'a>(caps: &Captures<'a>, dash_region: bool) -> RawS3Url<'a> {
    let group = |name: &str| caps.name(name).map(|m| m.as_str());
    let protocol = match group("protocol") {
        Some("https") => S3UrlProtocol::Https,
        _ => S3UrlProtocol::S3,
    };

    RawS3Url {
        protocol,
        bucket: group("bucket").unwrap_or_default(),
        key: group("key").unwrap_or_default(),
        region: group("region"),
        dash_region,
    }
}
