//! URL formatting tests.

#[cfg(test)]
mod tests {
    use s3url_core::{S3Object, S3UrlError, S3UrlFormat, format_s3_url, parse_s3_url};

    use crate::{
        BLANK_FIELDS, REGION_FORMATS, S3_DASH_REGION_PATH, dot_region_cases, global_cases,
        global_object, init_tracing, legacy_cases, region_object,
    };

    #[test]
    fn test_should_format_global_urls() {
        init_tracing();
        for case in global_cases() {
            assert_eq!(format_s3_url(&case.object, None).unwrap(), case.url);
            assert_eq!(
                format_s3_url(&case.object, Some(case.format)).unwrap(),
                case.url
            );
        }
    }

    #[test]
    fn test_should_format_legacy_urls() {
        init_tracing();
        for case in legacy_cases() {
            assert_ne!(format_s3_url(&case.object, None).unwrap(), case.url);
            assert_eq!(
                format_s3_url(&case.object, Some(case.format)).unwrap(),
                case.url
            );
        }
    }

    #[test]
    fn test_should_format_regional_urls_in_dot_form() {
        init_tracing();
        for case in dot_region_cases() {
            assert_ne!(format_s3_url(&case.object, None).unwrap(), case.url);
            assert_eq!(
                format_s3_url(&case.object, Some(case.format)).unwrap(),
                case.url
            );
        }
    }

    #[test]
    fn test_should_round_trip_through_parse() {
        init_tracing();
        for case in global_cases()
            .into_iter()
            .chain(legacy_cases())
            .chain(dot_region_cases())
        {
            let url = format_s3_url(&case.object, Some(case.format)).unwrap();
            assert_eq!(
                parse_s3_url(&url, Some(case.format)).unwrap(),
                case.object,
                "{url}"
            );
        }
    }

    #[test]
    fn test_should_normalize_dash_region_to_dot_region() {
        init_tracing();
        let object = parse_s3_url(S3_DASH_REGION_PATH, None).unwrap();
        assert_eq!(
            format_s3_url(&object, Some(S3UrlFormat::S3RegionPath)).unwrap(),
            "s3://s3.us-west-2.amazonaws.com/my-bucket/key-1/key-2"
        );

        let object = parse_s3_url("s3://s3-us-west-2.amazonaws.com/b/k", None).unwrap();
        assert_eq!(
            format_s3_url(&object, Some(S3UrlFormat::S3RegionPath)).unwrap(),
            "s3://s3.us-west-2.amazonaws.com/b/k"
        );
    }

    #[test]
    fn test_should_reject_blank_bucket() {
        init_tracing();
        for bucket in BLANK_FIELDS {
            let object = S3Object {
                bucket: bucket.to_owned(),
                ..global_object()
            };
            for format in S3UrlFormat::ALL {
                assert!(
                    matches!(
                        format_s3_url(&object, Some(format)),
                        Err(S3UrlError::InvalidBucket { .. })
                    ),
                    "{format}: {bucket:?}"
                );
            }
        }
    }

    #[test]
    fn test_should_reject_blank_key() {
        init_tracing();
        for key in BLANK_FIELDS {
            let object = S3Object {
                key: key.to_owned(),
                ..region_object()
            };
            for format in S3UrlFormat::ALL {
                assert!(
                    matches!(
                        format_s3_url(&object, Some(format)),
                        Err(S3UrlError::InvalidKey { .. })
                    ),
                    "{format}: {key:?}"
                );
            }
        }
    }

    #[test]
    fn test_should_reject_blank_or_missing_region() {
        init_tracing();
        let regions = BLANK_FIELDS
            .into_iter()
            .map(|region| Some(region.to_owned()))
            .chain([None]);
        for region in regions {
            let object = S3Object {
                region: region.clone(),
                ..region_object()
            };
            for format in REGION_FORMATS {
                let err = format_s3_url(&object, Some(format)).unwrap_err();
                assert!(err.is_field_error(), "{format}: {region:?}");
                assert_eq!(
                    err,
                    S3UrlError::InvalidRegion {
                        region: region.clone()
                    }
                );
            }
        }
    }

    #[test]
    fn test_should_format_region_object_with_virtual_host() {
        init_tracing();
        assert_eq!(
            format_s3_url(&region_object(), Some(S3UrlFormat::S3RegionVirtualHost)).unwrap(),
            "s3://my-bucket.s3.us-west-2.amazonaws.com/key-1/key-2"
        );
        assert_eq!(
            format_s3_url(&global_object(), None).unwrap(),
            "s3://my-bucket/key-1/key-2"
        );
    }
}
