//! Field options and their validation.
//!
//! Options can be built in code or read from TOML:
//!
//! ```rust
//! use origin_fields::config::{FieldOptions, Validate};
//!
//! let options = FieldOptions::from_toml_str("null = true\nmax_length = 12").unwrap();
//! assert!(options.null);
//! assert_eq!(options.max_length, Some(12));
//! assert!(options.is_valid());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound accepted for an explicit `max_length`.
pub const MAX_CHAR_LENGTH: usize = 65_535;

/// Result of reading or validating field options.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while reading or validating field options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One option is out of range.
    #[error("invalid field option {0}")]
    Validation(ValidationError),

    /// Several options are out of range.
    #[error("{} invalid field options: {}", .0.len(), join(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// The source text could not be read as options.
    #[error("unreadable field options: {0}")]
    Deserialization(String),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// An out-of-range option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{field}` {message} [{rule}]")]
pub struct ValidationError {
    /// The offending option.
    pub field: &'static str,
    /// Short name of the broken rule, e.g. `min` or `fits_choices`.
    pub rule: &'static str,
    /// What is wrong with the value.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(field: &'static str, rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

/// Checks option ranges before a field is used.
pub trait Validate {
    /// Every broken rule, or nothing.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if no rule is broken.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Fails with the broken rules, if any.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => Err(ConfigError::Validation(errors.remove(0))),
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

/// Options shared by model and serializer fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Accept null input.
    pub null: bool,
    /// Accept blank input.
    pub blank: bool,
    /// Explicit character limit; derived from the choices when unset.
    pub max_length: Option<usize>,
    /// Accept an empty multiple selection.
    pub allow_empty: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            null: false,
            blank: false,
            max_length: None,
            allow_empty: true,
        }
    }
}

impl FieldOptions {
    /// Sets whether null input is accepted.
    pub fn with_null(mut self, null: bool) -> Self {
        self.null = null;
        self
    }

    /// Sets whether blank input is accepted.
    pub fn with_blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// Sets an explicit character limit.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets whether an empty multiple selection is accepted.
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Reads and validates options from TOML.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let options: Self = toml::from_str(text)?;
        options.validate_or_error()?;
        Ok(options)
    }

    /// Reads and validates options from JSON.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate_or_error()?;
        Ok(options)
    }
}

impl Validate for FieldOptions {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        match self.max_length {
            Some(0) => errors.push(ValidationError::new("max_length", "min", "must be positive")),
            Some(length) if length > MAX_CHAR_LENGTH => errors.push(ValidationError::new(
                "max_length",
                "max",
                format!("must not exceed {MAX_CHAR_LENGTH}"),
            )),
            _ => {}
        }
        errors
    }
}
