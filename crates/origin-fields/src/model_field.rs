//! Model fields storing a catalog member by its raw value.
//!
//! A [`ConstantField`] stores the member's value in a column whose type is
//! chosen by the value type, and hands the shared member back on load.

use std::any::type_name;
use std::fmt;
use std::sync::Arc;

use origin_constants::prelude::*;
use origin_core::{Choice, Constants, Enumerated, Member};
use tracing::debug;

use crate::config::{FieldOptions, Validate, ValidationError};
use crate::error::{FieldError, FieldResult};

/// Column storage for a field's raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    /// Bounded text.
    Char,
    /// Integer.
    Integer,
    /// Duration.
    Duration,
}

impl StorageType {
    /// The column type name.
    #[must_use]
    pub fn internal_type(&self) -> &'static str {
        match self {
            Self::Char => "CharField",
            Self::Integer => "IntegerField",
            Self::Duration => "DurationField",
        }
    }
}

/// A member value type that can be stored in a column.
pub trait FieldValue: origin_core::ConstantValue {
    /// How values of this type are stored.
    const STORAGE: StorageType;

    /// Length in characters once stored as text.
    fn char_len(&self) -> usize {
        self.to_string().chars().count()
    }

    /// Whether the value counts as blank input.
    fn is_blank(&self) -> bool {
        false
    }
}

impl FieldValue for String {
    const STORAGE: StorageType = StorageType::Char;

    fn char_len(&self) -> usize {
        self.chars().count()
    }

    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl FieldValue for i32 {
    const STORAGE: StorageType = StorageType::Integer;
}

impl FieldValue for Period {
    const STORAGE: StorageType = StorageType::Duration;
}

/// Input handed to a model field.
pub enum FieldInput<'a, M: Member> {
    /// No value.
    Null,
    /// A raw stored value.
    Value(M::Value),
    /// A member, passed through.
    Constant(&'a M),
}

impl<M: Member> fmt::Debug for FieldInput<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Constant(member) => f.debug_tuple("Constant").field(member).finish(),
        }
    }
}

/// What a migration needs to rebuild a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Deconstructed {
    /// Fully qualified type of the field.
    pub path: String,
    /// Non-default constructor arguments.
    pub kwargs: serde_json::Map<String, serde_json::Value>,
}

/// A model field holding one member of an enumeration.
pub struct ConstantField<M: Member> {
    registry: &'static Constants<M>,
    choices: Option<Arc<[Choice<M::Value>]>>,
    options: FieldOptions,
}

impl<M> ConstantField<M>
where
    M: Enumerated,
    M::Value: FieldValue,
{
    /// A field over the member type's default registry.
    pub fn new() -> Self {
        Self::for_registry(M::registry())
    }
}

impl<M> Default for ConstantField<M>
where
    M: Enumerated,
    M::Value: FieldValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ConstantField<M>
where
    M: Member,
    M::Value: FieldValue,
{
    /// A field over an explicit registry, e.g. the CD funding bases.
    pub fn for_registry(registry: &'static Constants<M>) -> Self {
        Self {
            registry,
            choices: None,
            options: FieldOptions::default(),
        }
    }

    /// Replaces the field options.
    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    /// Restricts the field to explicit choices.
    pub fn with_choices(mut self, choices: impl IntoIterator<Item = Choice<M::Value>>) -> Self {
        self.choices = Some(choices.into_iter().collect());
        self
    }

    /// The registry backing the field.
    pub fn registry(&self) -> &'static Constants<M> {
        self.registry
    }

    /// The field options.
    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    /// Offered choices: the explicit ones, or every registry member.
    pub fn choices(&self) -> Arc<[Choice<M::Value>]> {
        match &self.choices {
            Some(choices) => Arc::clone(choices),
            None => self.registry.to_choices(),
        }
    }

    /// Character limit for text storage: explicit, else the longest choice value.
    pub fn max_length(&self) -> Option<usize> {
        if M::Value::STORAGE != StorageType::Char {
            return self.options.max_length;
        }
        self.options.max_length.or_else(|| {
            self.choices()
                .iter()
                .map(|(value, _)| value.char_len())
                .max()
        })
    }

    /// The column type name.
    pub fn internal_type(&self) -> &'static str {
        M::Value::STORAGE.internal_type()
    }

    /// Converts stored or assigned input into a member.
    ///
    /// Null and blank input convert to `None`.
    pub fn to_python(&self, input: FieldInput<'_, M>) -> FieldResult<Option<Arc<M>>> {
        match input {
            FieldInput::Null => Ok(None),
            FieldInput::Constant(member) => self
                .registry
                .get_constant(member)
                .map(Some)
                .map_err(|_| self.reject(&member.value())),
            FieldInput::Value(value) => match self.registry.get(&value) {
                Ok(member) => Ok(Some(member)),
                Err(_) if value.is_blank() => Ok(None),
                Err(_) => Err(self.reject(&value)),
            },
        }
    }

    /// The raw value to store.
    pub fn get_prep_value(&self, input: FieldInput<'_, M>) -> Option<M::Value> {
        match input {
            FieldInput::Null => None,
            FieldInput::Value(value) => Some(value),
            FieldInput::Constant(member) => Some(member.value()),
        }
    }

    /// Converts input and enforces the null, blank and choice constraints.
    pub fn clean(&self, input: FieldInput<'_, M>) -> FieldResult<Option<Arc<M>>> {
        match &input {
            FieldInput::Null if !self.options.null => return Err(FieldError::NullNotAllowed),
            FieldInput::Value(value) if value.is_blank() && !self.options.blank => {
                return Err(FieldError::BlankNotAllowed)
            }
            _ => {}
        }

        let member = self.to_python(input)?;
        if let (Some(member), Some(choices)) = (&member, &self.choices) {
            let value = member.value();
            if !choices.iter().any(|(choice, _)| *choice == value) {
                return Err(FieldError::invalid_choice(value.to_string()));
            }
        }
        Ok(member)
    }

    /// Path and non-default arguments of the field.
    pub fn deconstruct(&self) -> FieldResult<Deconstructed> {
        let mut kwargs = serde_json::Map::new();
        if let Some(max_length) = self.max_length() {
            kwargs.insert("max_length".to_string(), max_length.into());
        }
        if self.options.null {
            kwargs.insert("null".to_string(), true.into());
        }
        if self.options.blank {
            kwargs.insert("blank".to_string(), true.into());
        }
        if let Some(choices) = &self.choices {
            if **choices != *self.registry.to_choices() {
                kwargs.insert("choices".to_string(), serde_json::to_value(&**choices)?);
            }
        }
        Ok(Deconstructed {
            path: type_name::<Self>().to_string(),
            kwargs,
        })
    }

    fn reject(&self, value: &M::Value) -> FieldError {
        debug!(registry = %self.registry.name(), value = %value, "rejected constant input");
        FieldError::invalid_constant(value)
    }
}

impl<M> Validate for ConstantField<M>
where
    M: Member,
    M::Value: FieldValue,
{
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.options.validate();
        if let (StorageType::Char, Some(limit)) = (M::Value::STORAGE, self.options.max_length) {
            let longest = self
                .choices()
                .iter()
                .map(|(value, _)| value.char_len())
                .max()
                .unwrap_or(0);
            if longest > limit {
                errors.push(ValidationError::new(
                    "max_length",
                    "fits_choices",
                    format!("{limit} is shorter than the longest choice ({longest})"),
                ));
            }
        }
        errors
    }
}

impl<M: Member> fmt::Debug for ConstantField<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstantField")
            .field("registry", &self.registry.name())
            .field("explicit_choices", &self.choices.is_some())
            .field("options", &self.options)
            .finish()
    }
}

/// Field storing an [`Adjustment`].
pub type AdjustmentField = ConstantField<Adjustment>;
/// Field storing a [`BusinessDayConvention`].
pub type BusinessDayConventionField = ConstantField<BusinessDayConvention>;
/// Field storing a [`Calendar`].
pub type CalendarField = ConstantField<Calendar>;
/// Field storing a [`Currency`].
pub type CurrencyField = ConstantField<Currency>;
/// Field storing a [`DayCount`].
pub type DayCountField = ConstantField<DayCount>;
/// Field storing a [`FundingBasis`].
pub type FundingBasisField = ConstantField<FundingBasis>;
/// Field storing a [`PaymentFrequency`].
pub type PaymentFrequencyField = ConstantField<PaymentFrequency>;
/// Field storing a [`Tenor`].
pub type TenorField = ConstantField<Tenor>;
