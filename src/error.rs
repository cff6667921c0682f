/// Error types for the Cloudpost wrappers
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudpostError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Email error: {0}")]
    Email(String),

    #[error("Message composition error: {0}")]
    Compose(String),

    #[error("SMS error: {0}")]
    Sms(String),
}

impl CloudpostError {
    /// Determines if an error is retriable
    ///
    /// The library never retries on its own; this only classifies errors for
    /// callers that want to.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Storage(_) => true,
            Self::Email(_) => true,
            Self::Sms(_) => true,
            Self::Config(_) => false,
            Self::Validation(_) => false,
            Self::Compose(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retriable_errors() {
        assert!(CloudpostError::Storage("test".to_string()).is_retriable());
        assert!(CloudpostError::Email("test".to_string()).is_retriable());
        assert!(!CloudpostError::Config("test".to_string()).is_retriable());
        assert!(!CloudpostError::Validation("test".to_string()).is_retriable());
    }

    #[test]
    fn test_error_display() {
        let err = CloudpostError::Validation("max presign duration is 7 days".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: max presign duration is 7 days"
        );
    }
}
