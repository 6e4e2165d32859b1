//! URL parsing tests.

#[cfg(test)]
mod tests {
    use s3url_core::{S3UrlError, S3UrlFormat, parse_s3_url, parse_s3_url_value};

    use crate::{
        INVALID_GLOBAL_URLS, INVALID_LEGACY_URLS, INVALID_REGION_URLS, LEGACY_FORMATS,
        REGION_FORMATS, S3_LEGACY_PATH, all_cases, global_cases, init_tracing, invalid_values,
        legacy_cases, regional_cases,
    };

    #[test]
    fn test_should_parse_global_urls() {
        init_tracing();
        for case in global_cases() {
            assert_eq!(parse_s3_url(case.url, None).unwrap(), case.object);
            assert_eq!(
                parse_s3_url(case.url, Some(case.format)).unwrap(),
                case.object
            );
        }
    }

    #[test]
    fn test_should_parse_legacy_urls_without_region() {
        init_tracing();
        for case in legacy_cases() {
            let object = parse_s3_url(case.url, None).unwrap();
            assert_eq!(object, case.object, "{}", case.url);
            assert_eq!(object.region, None);
            assert_eq!(
                parse_s3_url(case.url, Some(case.format)).unwrap(),
                case.object
            );
        }
    }

    #[test]
    fn test_should_parse_regional_urls_with_region() {
        init_tracing();
        for case in regional_cases() {
            let object = parse_s3_url(case.url, None).unwrap();
            assert_eq!(object, case.object, "{}", case.url);
            assert_eq!(object.region(), Some("us-west-2"));
            assert_eq!(
                parse_s3_url(case.url, Some(case.format)).unwrap(),
                case.object
            );
        }
    }

    #[test]
    fn test_should_prefer_legacy_path_over_global_path() {
        init_tracing();
        let object = parse_s3_url(S3_LEGACY_PATH, None).unwrap();
        assert_eq!(object.bucket, "my-bucket");
        assert_eq!(object.key, "key-1/key-2");
        assert_eq!(object.region, None);
    }

    #[test]
    fn test_should_reject_invalid_global_urls() {
        init_tracing();
        for url in INVALID_GLOBAL_URLS {
            assert!(parse_s3_url(url, None).is_err(), "{url}");
            for format in S3UrlFormat::ALL {
                assert!(parse_s3_url(url, Some(format)).is_err(), "{format}: {url}");
            }
        }
    }

    #[test]
    fn test_should_reject_invalid_legacy_and_region_urls() {
        init_tracing();
        for url in INVALID_LEGACY_URLS.into_iter().chain(INVALID_REGION_URLS) {
            for format in LEGACY_FORMATS {
                assert!(
                    matches!(
                        parse_s3_url(url, Some(format)),
                        Err(S3UrlError::FormatMismatch { .. })
                    ),
                    "{format}: {url}"
                );
            }
        }
        for url in INVALID_REGION_URLS {
            for format in REGION_FORMATS {
                assert!(parse_s3_url(url, Some(format)).is_err(), "{format}: {url}");
            }
        }
    }

    #[test]
    fn test_should_reject_non_url_values() {
        init_tracing();
        for value in invalid_values() {
            assert!(
                matches!(
                    parse_s3_url_value(&value, None),
                    Err(S3UrlError::InvalidUrl { .. })
                ),
                "{value}"
            );
        }
    }

    #[test]
    fn test_should_distinguish_no_match_from_mismatch() {
        init_tracing();
        assert!(matches!(
            parse_s3_url("https://example.com/bucket/key", None),
            Err(S3UrlError::NoMatchingFormat { .. })
        ));
        assert!(matches!(
            parse_s3_url(
                "https://example.com/bucket/key",
                Some(S3UrlFormat::HttpsLegacyPath)
            ),
            Err(S3UrlError::FormatMismatch {
                format: S3UrlFormat::HttpsLegacyPath,
                ..
            })
        ));
    }

    #[test]
    fn test_should_reject_mismatched_explicit_format() {
        init_tracing();
        for case in all_cases() {
            for format in S3UrlFormat::ALL {
                if format.style() == case.format.style() {
                    continue;
                }
                // Global path also matches `s3://` legacy and dash-region path URLs.
                if format == S3UrlFormat::S3GlobalPath && case.url.starts_with("s3://") {
                    continue;
                }
                assert!(
                    parse_s3_url(case.url, Some(format)).is_err(),
                    "{format}: {}",
                    case.url
                );
            }
        }
    }
}
