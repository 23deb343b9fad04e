//! Error types for the trigger client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the trigger client
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Host returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the host
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// No trigger with the given name is known
    #[error("Unknown trigger: {0}")]
    UnknownTrigger(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownTrigger(_)) || matches!(self, Self::ApiError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(ClientError::api_error(404, "missing").is_not_found());
        assert!(ClientError::UnknownTrigger("x".into()).is_not_found());
        assert!(!ClientError::api_error(500, "boom").is_not_found());
        assert!(!ClientError::InvalidRequest("bad".into()).is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::api_error(404, "No function registered");
        assert_eq!(
            err.to_string(),
            "API error (status 404): No function registered"
        );
    }
}
