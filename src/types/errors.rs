use std::fmt;

// === ApiError ===

/// Errors raised while talking to the bookmark backend.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, reset).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The response body could not be decoded into the expected shape.
    Decode(String),
    /// The configured base URL is not a valid absolute URL.
    InvalidBaseUrl(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Decode(msg) => write!(f, "Malformed response body: {}", msg),
            ApiError::InvalidBaseUrl(url) => write!(f, "Invalid API base URL: {}", url),
        }
    }
}

impl std::error::Error for ApiError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
