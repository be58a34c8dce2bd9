//! Error types for catalog helpers.

use thiserror::Error;

/// A specialized Result type for period parsing.
pub type PeriodResult<T> = Result<T, PeriodError>;

/// Errors raised while reading period text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    /// The text is not a recognised period or range.
    #[error("Invalid input \"{input}\"!")]
    InvalidInput {
        /// The offending text.
        input: String,
    },
}

impl PeriodError {
    /// Creates an invalid-input error.
    #[must_use]
    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PeriodError::invalid_input("1 ms").to_string(),
            "Invalid input \"1 ms\"!"
        );
    }
}
