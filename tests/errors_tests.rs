use geolookup::errors::{GeolookupError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_invalid_service_error() {
        let error = GeolookupError::invalid_service("unknown service \"premium\"");

        assert!(matches!(error, GeolookupError::InvalidService(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Invalid Service"));
        assert!(error.to_string().contains("premium"));
    }

    #[test]
    fn test_invalid_target_error() {
        let error = GeolookupError::invalid_target("\"example.com\" is not an IP literal");

        assert!(matches!(error, GeolookupError::InvalidTarget(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Invalid Target"));
    }

    #[test]
    fn test_request_failed_error() {
        let error = GeolookupError::request_failed("connection refused");

        assert!(matches!(error, GeolookupError::RequestFailed(_)));
        assert_eq!(error.code(), "E003");
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_invalid_data_error() {
        let error = GeolookupError::invalid_data("EOF while parsing a value");

        assert!(matches!(error, GeolookupError::InvalidData(_)));
        assert_eq!(error.code(), "E004");
        assert!(error.to_string().contains("Invalid Data"));
    }

    #[test]
    fn test_api_error_with_code() {
        let error = GeolookupError::api(
            Some("AUTHORIZATION_INVALID".to_string()),
            "invalid license key",
        );

        assert!(matches!(error, GeolookupError::Api { .. }));
        assert_eq!(error.code(), "E005");
        assert_eq!(error.api_code(), Some("AUTHORIZATION_INVALID"));
        assert_eq!(error.message(), "invalid license key");
        // 远端代码要出现在显示输出里
        assert!(error.to_string().contains("AUTHORIZATION_INVALID"));
        assert!(error.to_string().contains("invalid license key"));
    }

    #[test]
    fn test_api_error_without_code() {
        let error = GeolookupError::api(None, "something broke");

        assert_eq!(error.api_code(), None);
        assert_eq!(error.format_simple(), "API Error: something broke");
    }

    #[test]
    fn test_api_code_absent_on_other_variants() {
        assert_eq!(GeolookupError::invalid_data("x").api_code(), None);
        assert_eq!(GeolookupError::request_failed("x").api_code(), None);
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: GeolookupError = json_error.into();

        assert!(matches!(error, GeolookupError::InvalidData(_)));
    }

    #[test]
    fn test_error_trait_object() {
        let error = GeolookupError::invalid_service("bad");
        let boxed: Box<dyn Error> = Box::new(error);

        assert!(boxed.to_string().contains("Invalid Service"));
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> Result<()> {
            Err(GeolookupError::invalid_target("nope"))
        }

        assert!(fails().is_err());
    }

    #[test]
    fn test_errors_are_cloneable_and_comparable() {
        let error = GeolookupError::api(Some("OUT_OF_QUERIES".to_string()), "out of queries");
        let clone = error.clone();

        assert_eq!(error, clone);
    }
}
