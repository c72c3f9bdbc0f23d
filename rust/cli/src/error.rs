//! Error types for the CLI application.

use std::fmt;

use leher_engine::errors::EngineError;
use leher_strategy::StrategyError;

/// Custom error type for CLI operations.
///
/// Covers everything a handler can fail on, so handlers propagate with `?`
/// and the dispatcher maps any error to exit code 2.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<StrategyError> for CliError {
    fn from(error: StrategyError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_their_category() {
        let e = CliError::InvalidInput("games must be >= 1".to_string());
        assert_eq!(e.to_string(), "Invalid input: games must be >= 1");

        let e: CliError = EngineError::GameNotFinished.into();
        assert!(e.to_string().starts_with("Engine error:"));
    }

    #[test]
    fn io_errors_convert_and_expose_a_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("disk gone").into();
        assert!(e.source().is_some());
    }
}
