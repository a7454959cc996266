//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod ffl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_is_upstream_unavailable() {
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let ffl_error = FflError::from(result.unwrap_err());

        assert!(matches!(ffl_error, FflError::Http(_)));
        assert_eq!(ffl_error.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn test_json_error_is_upstream_unavailable() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ffl_error = FflError::from(json_error);

        assert!(matches!(ffl_error, FflError::Json(_)));
        assert_eq!(ffl_error.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ffl_error = FflError::from(io_error);

        assert!(matches!(ffl_error, FflError::Io(_)));
        assert_eq!(ffl_error.kind(), ErrorKind::AssetMissing);
    }

    #[test]
    fn test_invalid_header_error_is_configuration() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let ffl_error = FflError::from(header_error);

        assert!(matches!(ffl_error, FflError::InvalidHeader(_)));
        assert_eq!(ffl_error.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let ffl_error = FflError::from(parse_error);

        assert!(matches!(ffl_error, FflError::InvalidNumber(_)));
        assert_eq!(ffl_error.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_team_index_out_of_range_message() {
        let error = FflError::TeamIndexOutOfRange {
            index: 12,
            team_count: 10,
        };

        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert_eq!(
            error.to_string(),
            "Team index 12 is out of range for a league of 10 teams"
        );
    }

    #[test]
    fn test_missing_setting_message() {
        let error = FflError::MissingSetting {
            name: "OPENAI_API_KEY".to_string(),
        };

        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(error.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_validation_errors() {
        let missing = FflError::MissingField {
            field: "message".to_string(),
        };
        let body = FflError::InvalidBody {
            message: "expected value".to_string(),
        };

        assert_eq!(missing.kind(), ErrorKind::Validation);
        assert_eq!(body.kind(), ErrorKind::Validation);
        assert_eq!(missing.to_string(), "Request field `message` is missing or empty");
    }

    #[test]
    fn test_template_missing() {
        let error = FflError::TemplateMissing {
            name: "index.html".to_string(),
        };

        assert_eq!(error.kind(), ErrorKind::AssetMissing);
        assert_eq!(error.to_string(), "Template not found: index.html");
    }

    #[test]
    fn test_no_data_names_provider() {
        let error = FflError::NoData { provider: "ESPN" };
        assert_eq!(error.to_string(), "ESPN returned no usable data");
        assert_eq!(error.kind(), ErrorKind::UpstreamUnavailable);
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(ErrorKind::Configuration.reason(), "configuration_error");
        assert_eq!(ErrorKind::UpstreamUnavailable.reason(), "upstream_unavailable");
        assert_eq!(ErrorKind::Validation.reason(), "validation_error");
        assert_eq!(ErrorKind::AssetMissing.reason(), "asset_missing");
    }
}
