//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types such as
//! `reqwest::Error` to the rest of the application.

use thiserror::Error;

/// Main Portico error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PorticoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Drupal source errors
    #[error("Drupal error: {0}")]
    Drupal(#[from] DrupalError),

    /// Storyblok destination errors
    #[error("Storyblok error: {0}")]
    Storyblok(#[from] StoryblokError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

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

/// Drupal-specific errors
///
/// Errors that occur when querying the source site's JSON:API endpoint.
#[derive(Debug, Error)]
pub enum DrupalError {
    /// Failed to reach the Drupal site
    #[error("Failed to connect to Drupal: {0}")]
    ConnectionFailed(String),

    /// The JSON:API query returned a non-success status
    #[error("Query failed: {status} - {message}")]
    QueryFailed { status: u16, message: String },

    /// Response body could not be interpreted
    #[error("Invalid response from Drupal: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Storyblok-specific errors
///
/// Errors that occur when calling the Storyblok Management API. The asset
/// upload handshake surfaces as a single error regardless of which phase
/// failed; the orchestrator never needs to see the sub-steps.
#[derive(Debug, Error)]
pub enum StoryblokError {
    /// Failed to reach the Storyblok API
    #[error("Failed to connect to Storyblok: {0}")]
    ConnectionFailed(String),

    /// A call returned a status other than the one the contract expects
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// Asset bytes could not be read from disk
    #[error("Failed to read asset file: {0}")]
    AssetRead(String),

    /// Response body could not be interpreted
    #[error("Invalid response from Storyblok: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PorticoError {
    fn from(err: std::io::Error) -> Self {
        PorticoError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PorticoError {
    fn from(err: serde_json::Error) -> Self {
        PorticoError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PorticoError {
    fn from(err: toml::de::Error) -> Self {
        PorticoError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portico_error_display() {
        let err = PorticoError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_drupal_error_conversion() {
        let drupal_err = DrupalError::ConnectionFailed("Network error".to_string());
        let err: PorticoError = drupal_err.into();
        assert!(matches!(err, PorticoError::Drupal(_)));
    }

    #[test]
    fn test_storyblok_error_conversion() {
        let sb_err = StoryblokError::UnexpectedStatus {
            status: 422,
            message: "slug taken".to_string(),
        };
        let err: PorticoError = sb_err.into();
        assert!(matches!(err, PorticoError::Storyblok(_)));
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PorticoError = io_err.into();
        assert!(matches!(err, PorticoError::Io(_)));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = PorticoError::Export("Test error".to_string());
        let _: &dyn std::error::Error = &err;
        let err = StoryblokError::ConnectionFailed("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
