//! Field error types.

use thiserror::Error;

/// A specialized Result type for field conversions.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors raised while converting input through a field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The input does not name a member of the field's enumeration.
    #[error("Invalid input: '{value}' is not a valid constant.")]
    InvalidConstant {
        /// The rejected input, as text.
        value: String,
    },

    /// The input is not among the offered choices.
    #[error("\"{input}\" is not a valid choice.")]
    InvalidChoice {
        /// The rejected input, as text.
        input: String,
    },

    /// A multiple selection was empty where that is not allowed.
    #[error("This selection may not be empty.")]
    EmptySelection,

    /// Null input on a non-nullable field.
    #[error("This field cannot be null.")]
    NullNotAllowed,

    /// Blank input on a field that requires a value.
    #[error("This field cannot be blank.")]
    BlankNotAllowed,

    /// A member filter was given for choices that are not an enumeration.
    #[error("`filter_by` cannot be applied on non constant choices.")]
    FilterOnPlainChoices,

    /// Field metadata could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FieldError {
    /// Creates an invalid-constant error.
    #[must_use]
    pub fn invalid_constant(value: impl ToString) -> Self {
        Self::InvalidConstant {
            value: value.to_string(),
        }
    }

    /// Creates an invalid-choice error.
    #[must_use]
    pub fn invalid_choice(input: impl Into<String>) -> Self {
        Self::InvalidChoice {
            input: input.into(),
        }
    }

    /// Returns true for errors caused by the field's declaration rather than its input.
    #[must_use]
    pub fn is_declaration_error(&self) -> bool {
        matches!(self, Self::FilterOnPlainChoices | Self::Serialization(_))
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::invalid_constant("XXX").to_string(),
            "Invalid input: 'XXX' is not a valid constant."
        );
        assert_eq!(
            FieldError::invalid_choice("7M").to_string(),
            "\"7M\" is not a valid choice."
        );
        assert_eq!(
            FieldError::EmptySelection.to_string(),
            "This selection may not be empty."
        );
        assert_eq!(
            FieldError::FilterOnPlainChoices.to_string(),
            "`filter_by` cannot be applied on non constant choices."
        );
    }

    #[test]
    fn test_declaration_errors() {
        assert!(FieldError::FilterOnPlainChoices.is_declaration_error());
        assert!(!FieldError::EmptySelection.is_declaration_error());
    }
}
