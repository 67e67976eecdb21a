//! Error types for the quiz engine.
//!
//! Malformed player input never produces one of these; it is recovered by
//! the resolver defaults or scored as a wrong answer. These cover the
//! console itself failing and programmatic misuse.

use thiserror::Error;

/// Errors surfaced by the mathquiz library.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration built with [`crate::model::QuizConfig::new`] broke an invariant.
    #[error("invalid quiz configuration: {0}")]
    InvalidConfig(String),

    /// The settings file could not be read or parsed.
    #[error("invalid settings: {0}")]
    Settings(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: QuizError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, QuizError::Io(_)));
        assert!(err.to_string().starts_with("console I/O failed"));
    }
}
