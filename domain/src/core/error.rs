//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed question set: {0}")]
    MalformedQuestionSet(String),

    #[error("Invalid answer value {0} (expected -2..=2)")]
    InvalidAnswer(i64),

    #[error("Invalid result key format: '{0}' (expected IDEO-XXXX-YYYY)")]
    InvalidKeyFormat(String),
}

impl DomainError {
    /// Check if this error is fatal to quiz initialization
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::MalformedQuestionSet(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let error = DomainError::InvalidKeyFormat("FOO".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid result key format: 'FOO' (expected IDEO-XXXX-YYYY)"
        );
    }

    #[test]
    fn test_is_fatal_check() {
        assert!(DomainError::MalformedQuestionSet("empty".to_string()).is_fatal());
        assert!(!DomainError::InvalidAnswer(3).is_fatal());
        assert!(!DomainError::InvalidKeyFormat("x".to_string()).is_fatal());
    }
}
