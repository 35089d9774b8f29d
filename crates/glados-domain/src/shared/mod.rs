use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Configuration (1xxx)
    InvalidConfiguration = 1001,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Configuration(_) => ErrorCode::InvalidConfiguration,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::Configuration(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::InvalidInput(msg) => msg,
        }
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_strips_prefix() {
        let err = DomainError::Infrastructure("connection refused".to_string());
        assert_eq!(err.message(), "connection refused");
        assert_eq!(err.to_string(), "Infrastructure error: connection refused");
    }

    #[test]
    fn test_format_with_code() {
        let err = DomainError::InvalidInput("blank credential".to_string());
        assert_eq!(
            err.format_with_code(),
            "[6002] Invalid input: blank credential"
        );

        let err = DomainError::Configuration("bad url".to_string());
        assert_eq!(err.code(), ErrorCode::InvalidConfiguration);
        assert_eq!(err.code().code(), 1001);
    }
}
