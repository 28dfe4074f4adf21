use bookmark_saver::types::errors::*;

// === ApiError Tests ===

#[test]
fn api_error_display_variants() {
    assert_eq!(
        ApiError::Network("connection refused".to_string()).to_string(),
        "Network error: connection refused"
    );
    assert_eq!(ApiError::Status(404).to_string(), "Unexpected HTTP status: 404");
    assert_eq!(
        ApiError::Decode("expected array".to_string()).to_string(),
        "Malformed response body: expected array"
    );
    assert_eq!(
        ApiError::InvalidBaseUrl("nope".to_string()).to_string(),
        "Invalid API base URL: nope"
    );
}

#[test]
fn api_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(ApiError::Status(500));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        SettingsError::InvalidKey("api.port".to_string()).to_string(),
        "Invalid settings key: api.port"
    );
    assert_eq!(
        SettingsError::InvalidValue("not a number".to_string()).to_string(),
        "Invalid settings value: not a number"
    );
}
