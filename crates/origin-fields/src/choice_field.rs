//! Serializer fields that validate input against a catalog.
//!
//! Validation returns the shared catalog member rather than the raw value,
//! so callers never need a second lookup.
//!
//! # Example
//!
//! ```rust
//! use origin_constants::prelude::*;
//! use origin_fields::choice_field::{ChoiceField, ChoiceInput, ChoiceValue};
//!
//! let field = ChoiceField::from_constants(PaymentFrequencies::global().registry());
//! match field.to_internal_value(ChoiceInput::Text("3")).unwrap() {
//!     ChoiceValue::Constant(member) => assert_eq!(member.label(), "Quarterly"),
//!     ChoiceValue::Plain(_) => unreachable!(),
//! }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use origin_core::{Constant, Constants, Member};
use tracing::trace;

use crate::config::FieldOptions;
use crate::error::{FieldError, FieldResult};

/// Where a choice field draws its choices from.
pub enum Choices<'a, M: Member> {
    /// The members of an enumeration.
    Constants(&'a Constants<M>),
    /// Plain `(key, label)` pairs.
    Plain(Vec<(String, String)>),
}

/// Input accepted by a choice field.
pub enum ChoiceInput<'a, M: Member> {
    /// A member.
    Constant(&'a M),
    /// A raw value.
    Value(M::Value),
    /// Text from a request payload.
    Text(&'a str),
}

/// A validated choice.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum ChoiceValue<M> {
    /// The member, when choices come from an enumeration.
    Constant(Arc<M>),
    /// The key, when choices are plain pairs.
    Plain(String),
}

impl<M> Clone for ChoiceValue<M> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(member) => Self::Constant(Arc::clone(member)),
            Self::Plain(key) => Self::Plain(key.clone()),
        }
    }
}

impl<M> ChoiceValue<M> {
    /// The member, if any.
    pub fn as_constant(&self) -> Option<&Arc<M>> {
        match self {
            Self::Constant(member) => Some(member),
            Self::Plain(_) => None,
        }
    }
}

type Predicate<'a, M> = Box<dyn Fn(&M) -> bool + Send + Sync + 'a>;

/// A single-choice serializer field.
pub struct ChoiceField<'a, M: Member> {
    source: Choices<'a, M>,
    filter: Option<Predicate<'a, M>>,
    label_indexed: bool,
}

/// A choice field over plain pairs.
pub type PlainChoiceField<'a> = ChoiceField<'a, Constant<String>>;

impl<'a, M: Member> ChoiceField<'a, M> {
    /// A field over the given source.
    pub fn new(source: Choices<'a, M>) -> Self {
        Self {
            source,
            filter: None,
            label_indexed: false,
        }
    }

    /// A field offering every member of `registry`.
    pub fn from_constants(registry: &'a Constants<M>) -> Self {
        Self::new(Choices::Constants(registry))
    }

    /// A field offering plain pairs.
    pub fn from_plain<K, L>(pairs: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self::new(Choices::Plain(
            pairs
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        ))
    }

    /// Offers only the members matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FilterOnPlainChoices`] for plain sources.
    pub fn filter_by(mut self, predicate: impl Fn(&M) -> bool + Send + Sync + 'a) -> FieldResult<Self> {
        if let Choices::Plain(_) = self.source {
            return Err(FieldError::FilterOnPlainChoices);
        }
        self.filter = Some(Box::new(predicate));
        Ok(self)
    }

    /// Keys choices by label instead of value. Used where values have no
    /// stable text form, such as tenors.
    pub fn label_indexed(mut self, label_indexed: bool) -> Self {
        self.label_indexed = label_indexed;
        self
    }

    /// The offered `(key, label)` pairs in order.
    pub fn choices(&self) -> Vec<(String, String)> {
        match &self.source {
            Choices::Constants(_) => self
                .offered()
                .iter()
                .map(|member| (self.key_of(member), member.label()))
                .collect(),
            Choices::Plain(pairs) => pairs.clone(),
        }
    }

    /// Validates input, returning the member or plain key it selects.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidChoice`] when the input is not offered.
    pub fn to_internal_value(&self, input: ChoiceInput<'_, M>) -> FieldResult<ChoiceValue<M>> {
        let key = self.input_key(&input);
        self.lookup(&key).ok_or_else(|| {
            trace!(input = %key, "rejected choice");
            FieldError::invalid_choice(key)
        })
    }

    /// Maps a stored value back to its choice, or to the key itself when it
    /// is no longer offered.
    pub fn to_representation(&self, input: ChoiceInput<'_, M>) -> ChoiceValue<M> {
        let key = self.input_key(&input);
        self.lookup(&key).unwrap_or(ChoiceValue::Plain(key))
    }

    fn offered(&self) -> Vec<Arc<M>> {
        match &self.source {
            Choices::Constants(registry) => registry
                .iter()
                .filter(|member| self.filter.as_ref().map_or(true, |keep| keep(&**member)))
                .collect(),
            Choices::Plain(_) => Vec::new(),
        }
    }

    fn key_of(&self, member: &M) -> String {
        if self.label_indexed {
            member.label()
        } else {
            member.value().to_string()
        }
    }

    fn input_key(&self, input: &ChoiceInput<'_, M>) -> String {
        match input {
            ChoiceInput::Constant(member) => self.key_of(member),
            ChoiceInput::Value(value) => match (&self.source, self.label_indexed) {
                (Choices::Constants(registry), true) => registry
                    .get_label(value)
                    .unwrap_or_else(|_| value.to_string()),
                _ => value.to_string(),
            },
            ChoiceInput::Text(text) => (*text).to_string(),
        }
    }

    fn lookup(&self, key: &str) -> Option<ChoiceValue<M>> {
        match &self.source {
            Choices::Constants(_) => self
                .offered()
                .into_iter()
                .find(|member| self.key_of(member) == key)
                .map(ChoiceValue::Constant),
            Choices::Plain(pairs) => pairs
                .iter()
                .find(|(candidate, _)| candidate == key)
                .map(|(candidate, _)| ChoiceValue::Plain(candidate.clone())),
        }
    }
}

impl<M: Member> fmt::Debug for ChoiceField<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            Choices::Constants(registry) => registry.name().to_string(),
            Choices::Plain(pairs) => format!("{} plain choices", pairs.len()),
        };
        f.debug_struct("ChoiceField")
            .field("source", &source)
            .field("filtered", &self.filter.is_some())
            .field("label_indexed", &self.label_indexed)
            .finish()
    }
}

/// A multiple-choice serializer field.
pub struct MultipleChoiceField<'a, M: Member> {
    field: ChoiceField<'a, M>,
    allow_empty: bool,
}

impl<'a, M: Member> MultipleChoiceField<'a, M> {
    /// A field over the given source. Empty selections are allowed.
    pub fn new(source: Choices<'a, M>) -> Self {
        Self {
            field: ChoiceField::new(source),
            allow_empty: true,
        }
    }

    /// A field offering every member of `registry`.
    pub fn from_constants(registry: &'a Constants<M>) -> Self {
        Self::new(Choices::Constants(registry))
    }

    /// A field offering plain pairs.
    pub fn from_plain<K, L>(pairs: impl IntoIterator<Item = (K, L)>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            field: ChoiceField::from_plain(pairs),
            allow_empty: true,
        }
    }

    /// Offers only the members matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::FilterOnPlainChoices`] for plain sources.
    pub fn filter_by(mut self, predicate: impl Fn(&M) -> bool + Send + Sync + 'a) -> FieldResult<Self> {
        self.field = self.field.filter_by(predicate)?;
        Ok(self)
    }

    /// Keys choices by label instead of value.
    pub fn label_indexed(mut self, label_indexed: bool) -> Self {
        self.field = self.field.label_indexed(label_indexed);
        self
    }

    /// Sets whether an empty selection is accepted.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Takes `allow_empty` from field options.
    pub fn with_options(self, options: &FieldOptions) -> Self {
        self.allow_empty(options.allow_empty)
    }

    /// The offered `(key, label)` pairs in order.
    pub fn choices(&self) -> Vec<(String, String)> {
        self.field.choices()
    }

    /// Validates every input, returning the distinct selections.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::EmptySelection`] for an empty selection when not
    /// allowed, or the first [`FieldError::InvalidChoice`].
    pub fn to_internal_value<'i>(
        &self,
        inputs: impl IntoIterator<Item = ChoiceInput<'i, M>>,
    ) -> FieldResult<HashSet<ChoiceValue<M>>> {
        let selected = inputs
            .into_iter()
            .map(|input| self.field.to_internal_value(input))
            .collect::<FieldResult<HashSet<_>>>()?;
        if selected.is_empty() && !self.allow_empty {
            return Err(FieldError::EmptySelection);
        }
        Ok(selected)
    }

    /// Maps stored values back to their choices.
    pub fn to_representation<'i>(
        &self,
        inputs: impl IntoIterator<Item = ChoiceInput<'i, M>>,
    ) -> HashSet<ChoiceValue<M>> {
        inputs
            .into_iter()
            .map(|input| self.field.to_representation(input))
            .collect()
    }
}

impl<M: Member> fmt::Debug for MultipleChoiceField<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipleChoiceField")
            .field("field", &self.field)
            .field("allow_empty", &self.allow_empty)
            .finish()
    }
}
