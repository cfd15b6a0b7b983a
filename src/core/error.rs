use std::time::Duration;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures reported by a chat model.
///
/// Completion adapters return these exactly as the underlying [`ChatModel`]
/// produced them.
///
/// [`ChatModel`]: crate::core::ChatModel
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<Duration>,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxError,
    },

    /// The model rejected one of the message content blocks.
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),
}

impl LlmError {
    /// HTTP status attached to the error, if the model reported one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            LlmError::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    /// Whether the chat model would consider the failure transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::RateLimit { .. } | LlmError::Network { .. } => true,
            LlmError::Api {
                status_code: Some(code),
                ..
            } => *code >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_and_status() {
        let err = LlmError::Api {
            message: "upstream unavailable".to_string(),
            status_code: Some(503),
            source: None,
        };

        assert_eq!(err.to_string(), "API error: upstream unavailable");
        assert_eq!(err.status_code(), Some(503));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        let err = LlmError::Api {
            message: "bad image".to_string(),
            status_code: Some(400),
            source: None,
        };
        assert!(!err.is_retryable());
        assert!(!LlmError::Authentication("expired key".into()).is_retryable());
        assert!(!LlmError::InvalidContent("unsupported block".into()).is_retryable());
    }

    #[test]
    fn test_rate_limit_reports_429() {
        let err = LlmError::RateLimit {
            message: "slow down".to_string(),
            retry_after: Some(Duration::from_secs(2)),
        };
        assert_eq!(err.status_code(), Some(429));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_network_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = LlmError::Network {
            message: "Request failed (attempt 1/4)".to_string(),
            source: Box::new(io),
        };

        let source = std::error::Error::source(&err).expect("source should be kept");
        assert_eq!(source.to_string(), "reset by peer");
    }
}
