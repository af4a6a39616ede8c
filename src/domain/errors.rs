//! Domain error types
//!
//! This module defines the error hierarchy for Vigia. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Vigia error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VigiaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern catalog errors (invalid TOML, bad regex, unknown category)
    #[error("Pattern catalog error: {0}")]
    Catalog(String),

    /// The external recognizer could not be reached or returned garbage.
    /// Classification fails atomically; the boundary layer translates this
    /// into a service-level response.
    #[error("Analysis unavailable: {0}")]
    AnalysisUnavailable(#[from] RecognizerError),

    /// Audit trail errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Recognizer-specific errors
///
/// Errors that occur when querying the external named-entity recognizer.
/// These errors don't expose the HTTP client's types.
#[derive(Debug, Error)]
pub enum RecognizerError {
    /// Failed to connect to the recognizer service
    #[error("Failed to connect to recognizer: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the service
    #[error("Invalid response from recognizer: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Recognizer server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Recognizer client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Recognizer request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VigiaError {
    fn from(err: std::io::Error) -> Self {
        VigiaError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VigiaError {
    fn from(err: serde_json::Error) -> Self {
        VigiaError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VigiaError {
    fn from(err: toml::de::Error) -> Self {
        VigiaError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vigia_error_display() {
        let err = VigiaError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_recognizer_error_conversion() {
        let rec_err = RecognizerError::ConnectionFailed("Network error".to_string());
        let err: VigiaError = rec_err.into();
        assert!(matches!(err, VigiaError::AnalysisUnavailable(_)));
        assert!(err.to_string().starts_with("Analysis unavailable"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: VigiaError = io_err.into();
        assert!(matches!(err, VigiaError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: VigiaError = json_err.into();
        assert!(matches!(err, VigiaError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: VigiaError = toml_err.into();
        assert!(matches!(err, VigiaError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = VigiaError::Audit("test".to_string());
        let _: &dyn std::error::Error = &err;
        let rec = RecognizerError::Timeout("5s".to_string());
        let _: &dyn std::error::Error = &rec;
    }
}
