//! Error types for conio-core.

use thiserror::Error;

/// Errors raised by console output and prompt operations.
///
/// End of input and rejected prompt answers are not errors: they are
/// resolved by the prompt operations themselves.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The default passed to a choice prompt does not point at a choice.
    #[error("Default choice must be between 1 and {max}")]
    InvalidDefaultChoice {
        /// The rejected 1-based default.
        default: usize,
        /// Number of available choices.
        max: usize,
    },

    /// A choice prompt was called without any choices.
    #[error("No choices were provided")]
    NoChoices,

    /// The configuration file could not be read or parsed.
    #[error("Config invalid: {0}")]
    InvalidConfig(String),

    /// Reading from or writing to the underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across conio-core.
pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_default_message() {
        let err = ConsoleError::InvalidDefaultChoice { default: 5, max: 3 };
        assert_eq!(err.to_string(), "Default choice must be between 1 and 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ConsoleError = io.into();
        assert!(matches!(err, ConsoleError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
