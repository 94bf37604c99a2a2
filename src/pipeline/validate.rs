//! Request validation: field presence, framework name, API credential.
//!
//! Checks run in a fixed order so the caller always gets the most actionable
//! error first: missing fields before an unrecognised framework, and both
//! before the credential check. The credential check is an operational
//! precondition, not a per-request issue, but it runs here so a misconfigured
//! process rejects work before any upstream call is attempted.

use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::request::{Framework, GenerateRequest, ValidRequest};

/// Validate the raw request against the config.
///
/// No side effects beyond the checks; on success returns the strictly-typed
/// [`ValidRequest`] the rest of the pipeline works with.
pub fn validate_request(
    request: &GenerateRequest,
    config: &GenerationConfig,
) -> Result<ValidRequest, GenerateError> {
    let image = request
        .image
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(GenerateError::MissingField { field: "image" })?;

    let framework_str = request
        .framework
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(GenerateError::MissingField { field: "framework" })?;

    let framework: Framework =
        framework_str
            .parse()
            .map_err(|_| GenerateError::UnsupportedFramework {
                value: framework_str.to_string(),
            })?;

    if config.api_key.is_empty() {
        return Err(GenerateError::MissingApiKey);
    }

    Ok(ValidRequest {
        image: image.to_string(),
        framework,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenerationConfig {
        GenerationConfig::builder().api_key("test-key").build().unwrap()
    }

    fn request(image: Option<&str>, framework: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            image: image.map(String::from),
            framework: framework.map(String::from),
        }
    }

    #[test]
    fn accepts_well_formed_request() {
        let valid =
            validate_request(&request(Some("data:image/png;base64,AAAA"), Some("vue")), &config())
                .expect("valid request");
        assert_eq!(valid.framework, Framework::Vue);
        assert_eq!(valid.image, "data:image/png;base64,AAAA");
    }

    #[test]
    fn missing_image_reported_first() {
        let err = validate_request(&request(None, Some("react")), &config()).unwrap_err();
        assert!(matches!(err, GenerateError::MissingField { field: "image" }));
    }

    #[test]
    fn empty_image_counts_as_missing() {
        let err = validate_request(&request(Some(""), Some("react")), &config()).unwrap_err();
        assert!(matches!(err, GenerateError::MissingField { field: "image" }));
    }

    #[test]
    fn missing_framework_rejected() {
        let err = validate_request(&request(Some("data:..."), None), &config()).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::MissingField { field: "framework" }
        ));
    }

    #[test]
    fn unknown_framework_rejected() {
        let err =
            validate_request(&request(Some("data:..."), Some("angular")), &config()).unwrap_err();
        match err {
            GenerateError::UnsupportedFramework { value } => assert_eq!(value, "angular"),
            other => panic!("expected UnsupportedFramework, got {other:?}"),
        }
    }

    #[test]
    fn missing_api_key_checked_after_fields() {
        let no_key = GenerationConfig::default();
        let err =
            validate_request(&request(Some("data:..."), Some("html")), &no_key).unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));

        // Field errors still win over the credential error.
        let err = validate_request(&request(None, None), &no_key).unwrap_err();
        assert!(matches!(err, GenerateError::MissingField { field: "image" }));
    }
}
