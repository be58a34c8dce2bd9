//! Explicit registration of enumeration members.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::constant::Member;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::{Constants, Entry};

/// Collects members in declaration order and produces a [`Constants`].
///
/// Members are ranked by the order of the `member` calls. Re-declaring a
/// name replaces the earlier member at its original position, which is how
/// a derived catalog overrides part of its parent.
pub struct ConstantsBuilder<M: Member> {
    name: String,
    entries: Vec<Entry<M>>,
    mutable: bool,
}

impl<M: Member> ConstantsBuilder<M> {
    /// Starts an empty enumeration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            mutable: false,
        }
    }

    /// Starts from the members of an existing enumeration, sharing them.
    pub fn derive_from(name: impl Into<String>, parent: &Constants<M>) -> Self {
        Self {
            name: name.into(),
            entries: parent.entries(),
            mutable: false,
        }
    }

    /// Declares a member.
    pub fn member(mut self, name: impl Into<String>, member: impl Into<Arc<M>>) -> Self {
        let name = name.into();
        let member = member.into();
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.member = member,
            None => self.entries.push(Entry { name, member }),
        }
        self
    }

    /// Leaves the built enumeration open for writes. Frozen by default.
    pub fn mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }

    /// Number of members declared so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates the declaration, ranks every member and builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateValue`] when two members share a value.
    pub fn build(self) -> RegistryResult<Constants<M>> {
        let mut seen: HashMap<M::Value, &str> = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            let value = entry.member.value();
            if let Some(first) = seen.get(&value) {
                warn!(
                    registry = %self.name,
                    value = %value,
                    first = %first,
                    second = %entry.name,
                    "duplicate enumeration value"
                );
                return Err(RegistryError::duplicate_value(
                    &self.name,
                    &value,
                    *first,
                    &entry.name,
                ));
            }
            seen.insert(value, &entry.name);
        }

        debug!(
            registry = %self.name,
            members = self.entries.len(),
            mutable = self.mutable,
            "enumeration built"
        );
        Ok(Constants::from_entries(self.name, self.entries, self.mutable))
    }
}
