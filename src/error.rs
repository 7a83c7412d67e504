//! Error types for the booking form.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when delivering a request through the email transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Transport returned an error status code
    #[error("{message}")]
    ApiError { status: u16, message: String },

    /// Transport answered with a status other than 200
    #[error("Unexpected response from server.")]
    UnexpectedStatus(u16),

    /// Failed to serialize the request body
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("timeout")]
    Timeout,

    /// Credentials rejected by the transport
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Error raised by a transport implementation with optional message text
    #[error("{}", .0.as_deref().unwrap_or("transport error"))]
    Other(Option<String>),
}

impl TransportError {
    /// Message text suitable for the feedback region, if the error carries one.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::ApiError { message, .. } if message.trim().is_empty() => None,
            Self::Other(message) => message
                .as_ref()
                .filter(|m| !m.trim().is_empty())
                .cloned(),
            _ => Some(self.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while decoding form events from the driver input.
#[derive(Error, Debug)]
pub enum EventError {
    /// Line was not a valid event
    #[error("Malformed event: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Line was not UTF-8 text
    #[error("Event line is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Convenience type alias for Results with TransportError
pub type TransportResult<T> = Result<T, TransportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransportError::Timeout;
        assert_eq!(err.to_string(), "timeout");

        let err = ConfigError::MissingVar("EMAILJS_SERVICE_ID".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: EMAILJS_SERVICE_ID"
        );

        let err = EventError::from(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(err.to_string().starts_with("Malformed event"));

        let err = EventError::from(String::from_utf8(vec![0xff]).unwrap_err());
        assert!(err.to_string().starts_with("Event line is not valid UTF-8"));
    }

    #[test]
    fn test_api_error_uses_body_text() {
        let err = TransportError::ApiError {
            status: 400,
            message: "The service ID is invalid".to_string(),
        };
        assert_eq!(err.user_message().as_deref(), Some("The service ID is invalid"));
    }

    #[test]
    fn test_user_message_absent() {
        assert_eq!(TransportError::Other(None).user_message(), None);
        assert_eq!(TransportError::Other(Some("  ".into())).user_message(), None);
        let err = TransportError::ApiError {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), None);
    }

    #[test]
    fn test_unexpected_status_message() {
        let err = TransportError::UnexpectedStatus(202);
        assert_eq!(
            err.user_message().as_deref(),
            Some("Unexpected response from server.")
        );
    }
}
