//! Error types for EmoLearn

use thiserror::Error;

/// Main error type for EmoLearn operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmoError {
    /// Identifier is not one of the five catalog emotions
    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    /// Session event could not be parsed
    #[error("Invalid session event: {0}")]
    InvalidEvent(String),
}

/// Result type alias using EmoError
pub type EmoResult<T> = Result<T, EmoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EmoError::UnknownEmotion("bored".to_string());
        assert_eq!(format!("{}", err), "Unknown emotion: bored");
    }

    #[test]
    fn test_invalid_event_display() {
        let err = EmoError::InvalidEvent("jump".to_string());
        assert_eq!(err.to_string(), "Invalid session event: jump");
    }
}
