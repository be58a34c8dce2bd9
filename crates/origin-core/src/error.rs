//! Error types for the enumeration registry.
//!
//! Lookup misses, immutability violations and declaration errors are kept
//! as distinct variants so callers can tell a bad key from a bad catalog.

use thiserror::Error;

/// A specialized Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// The error type for registry and constant operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No member matches the requested value, label, name or constant.
    #[error("Key not found in {registry}: '{key}'")]
    KeyNotFound {
        /// Name of the registry that was searched.
        registry: String,
        /// The key that was looked up, rendered as text.
        key: String,
    },

    /// A write was attempted while the target was frozen.
    #[error("Cannot change constant values: '{attribute}' is read-only")]
    Immutable {
        /// The attribute the caller tried to write.
        attribute: String,
    },

    /// Two members of one enumeration carry the same value.
    #[error("Multiple constants have the same value '{value}' in {registry} ({first}, {second})")]
    DuplicateValue {
        /// Name of the registry being declared.
        registry: String,
        /// The clashing value, rendered as text.
        value: String,
        /// Member name that declared the value first.
        first: String,
        /// Member name that repeated it.
        second: String,
    },

    /// An ordering was requested against a value that is not a member.
    #[error("Cannot compare members of {registry} with '{value}'")]
    TypeMismatch {
        /// Name of the registry performing the comparison.
        registry: String,
        /// The foreign operand, rendered as text.
        value: String,
    },
}

impl RegistryError {
    /// Creates a lookup-miss error.
    #[must_use]
    pub fn key_not_found(registry: impl Into<String>, key: impl ToString) -> Self {
        Self::KeyNotFound {
            registry: registry.into(),
            key: key.to_string(),
        }
    }

    /// Creates an immutability error for the given attribute.
    #[must_use]
    pub fn immutable(attribute: impl Into<String>) -> Self {
        Self::Immutable {
            attribute: attribute.into(),
        }
    }

    /// Creates a duplicate-value declaration error.
    #[must_use]
    pub fn duplicate_value(
        registry: impl Into<String>,
        value: impl ToString,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateValue {
            registry: registry.into(),
            value: value.to_string(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Creates a comparison type-mismatch error.
    #[must_use]
    pub fn type_mismatch(registry: impl Into<String>, value: impl ToString) -> Self {
        Self::TypeMismatch {
            registry: registry.into(),
            value: value.to_string(),
        }
    }

    /// Returns true for lookup misses.
    #[must_use]
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound { .. })
    }

    /// Returns true for declaration errors, which are never recoverable at runtime.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::DuplicateValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistryError::key_not_found("DayCounts", "NoSuchValue");
        assert_eq!(
            err.to_string(),
            "Key not found in DayCounts: 'NoSuchValue'"
        );

        let err = RegistryError::immutable("label");
        assert!(err.to_string().starts_with("Cannot change constant values"));

        let err = RegistryError::duplicate_value("Currencies", "USD", "usd", "dollar");
        assert_eq!(
            err.to_string(),
            "Multiple constants have the same value 'USD' in Currencies (usd, dollar)"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(RegistryError::key_not_found("X", 1).is_key_not_found());
        assert!(!RegistryError::key_not_found("X", 1).is_configuration_error());
        assert!(RegistryError::duplicate_value("X", 1, "a", "b").is_configuration_error());
        assert!(!RegistryError::type_mismatch("X", 1).is_key_not_found());
    }
}
