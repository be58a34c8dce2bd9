//! The ordered, indexed enumeration registry.
//!
//! # Example
//!
//! ```rust
//! use origin_core::prelude::*;
//!
//! let day_counts: Constants<Constant<String>> = ConstantsBuilder::new("DayCounts")
//!     .member("act_365", Constant::new("Actual365Fixed", "ACT/365F"))
//!     .member("act_360", Constant::new("Actual360", "ACT/360"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(day_counts.get_label(&"Actual360".to_string()).unwrap(), "ACT/360");
//! assert!(day_counts.get(&"NoSuchValue".to_string()).is_err());
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::constant::{Epoch, Member};
use crate::error::{RegistryError, RegistryResult};
use crate::operand::Operand;

/// A `(value, label)` pair as rendered in a choice list.
pub type Choice<V> = (V, String);

/// A named predicate over members whose projection is cached per registry.
pub struct ChoiceFilter<M> {
    name: &'static str,
    predicate: fn(&M) -> bool,
}

impl<M> ChoiceFilter<M> {
    /// Creates a filter. The name is the cache key and must be unique per member type.
    pub const fn new(name: &'static str, predicate: fn(&M) -> bool) -> Self {
        Self { name, predicate }
    }

    /// The cache key of this filter.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the predicate.
    pub fn matches(&self, member: &M) -> bool {
        (self.predicate)(member)
    }
}

impl<M> fmt::Debug for ChoiceFilter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceFilter")
            .field("name", &self.name)
            .finish()
    }
}

/// Binds a member type to its process-wide default registry.
pub trait Enumerated: Member + Sized {
    /// The registry holding every declared member of this type.
    fn registry() -> &'static Constants<Self>;
}

pub(crate) struct Entry<M> {
    pub(crate) name: String,
    pub(crate) member: Arc<M>,
}

impl<M> Clone for Entry<M> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            member: Arc::clone(&self.member),
        }
    }
}

struct Indexes<V> {
    revision: u64,
    by_value: HashMap<V, usize>,
    by_label: HashMap<String, usize>,
}

impl<V: crate::ConstantValue> Indexes<V> {
    fn build<M: Member<Value = V>>(entries: &[Entry<M>], revision: u64) -> Self {
        let mut by_value = HashMap::with_capacity(entries.len());
        let mut by_label = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            by_value.entry(entry.member.value()).or_insert(position);
            by_label.entry(entry.member.label()).or_insert(position);
        }
        Self {
            revision,
            by_value,
            by_label,
        }
    }
}

struct ChoiceCache<V> {
    revision: u64,
    all: Option<Arc<[Choice<V>]>>,
    filtered: HashMap<&'static str, Arc<[Choice<V>]>>,
}

impl<V> ChoiceCache<V> {
    fn new() -> Self {
        Self {
            revision: 0,
            all: None,
            filtered: HashMap::new(),
        }
    }

    fn refresh(&mut self, revision: u64) {
        if self.revision != revision {
            self.revision = revision;
            self.all = None;
            self.filtered.clear();
        }
    }
}

/// An ordered enumeration of members with value and label indexes.
///
/// Built by [`ConstantsBuilder`](crate::ConstantsBuilder) or the
/// [`constants!`](crate::constants) macro. Members iterate in declaration
/// order; lookups return shared handles to the declared members.
pub struct Constants<M: Member> {
    name: String,
    entries: RwLock<Vec<Entry<M>>>,
    indexes: RwLock<Option<Arc<Indexes<M::Value>>>>,
    choices: RwLock<ChoiceCache<M::Value>>,
    mutable: AtomicBool,
    epoch: Arc<Epoch>,
}

impl<M: Member> Constants<M> {
    pub(crate) fn from_entries(name: String, entries: Vec<Entry<M>>, mutable: bool) -> Self {
        let epoch = Arc::new(Epoch::default());
        for (position, entry) in entries.iter().enumerate() {
            entry.member.constant().bind_order(position);
            entry.member.constant().bind_epoch(&epoch);
        }
        let registry = Self {
            name,
            entries: RwLock::new(entries),
            indexes: RwLock::new(None),
            choices: RwLock::new(ChoiceCache::new()),
            mutable: AtomicBool::new(true),
            epoch,
        };
        if !mutable {
            registry.make_immutable();
        }
        registry
    }

    pub(crate) fn entries(&self) -> Vec<Entry<M>> {
        self.entries.read().clone()
    }

    /// The enumeration's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the enumeration has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot of the members in declaration order.
    #[must_use]
    pub fn members(&self) -> Vec<Arc<M>> {
        self.entries
            .read()
            .iter()
            .map(|entry| Arc::clone(&entry.member))
            .collect()
    }

    /// Fresh traversal of the members in declaration order.
    pub fn iter(&self) -> std::vec::IntoIter<Arc<M>> {
        self.members().into_iter()
    }

    /// Declared member names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries
            .read()
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    /// Returns true if some member carries `value`.
    pub fn contains(&self, value: &M::Value) -> bool {
        self.indexes().by_value.contains_key(value)
    }

    /// Returns true if `member` equals one of the declared members.
    pub fn contains_constant(&self, member: &M) -> bool {
        self.entries
            .read()
            .iter()
            .any(|entry| *entry.member == *member)
    }

    /// Looks a member up by its value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] when no member has that value.
    pub fn get(&self, value: &M::Value) -> RegistryResult<Arc<M>> {
        let position = self.indexes().by_value.get(value).copied();
        position
            .and_then(|position| self.member_at(position))
            .ok_or_else(|| RegistryError::key_not_found(&self.name, value))
    }

    /// Returns the registered handle for `member`.
    ///
    /// A member declared here comes back as the same shared handle; an equal
    /// member resolves to the declared one.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] for members of other registries.
    pub fn get_constant(&self, member: &M) -> RegistryResult<Arc<M>> {
        let identical = self
            .entries
            .read()
            .iter()
            .find(|entry| std::ptr::eq(Arc::as_ptr(&entry.member), member))
            .map(|entry| Arc::clone(&entry.member));
        match identical {
            Some(found) => Ok(found),
            None => self.get(&member.value()),
        }
    }

    /// Resolves either kind of operand to its registered member.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] when the operand is not a member.
    pub fn resolve(&self, operand: Operand<'_, M>) -> RegistryResult<Arc<M>> {
        match operand {
            Operand::Constant(member) => self.get_constant(member),
            Operand::Value(value) => self.get(value),
        }
    }

    /// Looks a member up by its declared name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] for unknown names.
    pub fn by_name(&self, name: &str) -> RegistryResult<Arc<M>> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| Arc::clone(&entry.member))
            .ok_or_else(|| RegistryError::key_not_found(&self.name, name))
    }

    /// Returns the value of the member with the given label.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] for unknown labels.
    pub fn get_value(&self, label: &str) -> RegistryResult<M::Value> {
        self.get_by_label(label).map(|member| member.value())
    }

    /// Returns the label of the member with the given value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] for unknown values.
    pub fn get_label(&self, value: &M::Value) -> RegistryResult<String> {
        self.get(value).map(|member| member.label())
    }

    /// Looks a member up by its label. Repeated labels resolve to the first declared.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] for unknown labels.
    pub fn get_by_label(&self, label: &str) -> RegistryResult<Arc<M>> {
        let position = self.indexes().by_label.get(label).copied();
        position
            .and_then(|position| self.member_at(position))
            .ok_or_else(|| RegistryError::key_not_found(&self.name, label))
    }

    /// The `(value, label)` projection of every member, in declaration order.
    ///
    /// Cached until the next write to this registry or one of its members.
    pub fn to_choices(&self) -> Arc<[Choice<M::Value>]> {
        let revision = self.epoch.current();
        {
            let cache = self.choices.read();
            if cache.revision == revision {
                if let Some(all) = &cache.all {
                    return Arc::clone(all);
                }
            }
        }

        let choices: Arc<[Choice<M::Value>]> = self.to_choices_where(|_| true).into();
        let mut cache = self.choices.write();
        cache.refresh(revision);
        cache.all = Some(Arc::clone(&choices));
        choices
    }

    /// The projection of the members matching `filter`, cached under its name.
    pub fn to_choices_filtered(&self, filter: &ChoiceFilter<M>) -> Arc<[Choice<M::Value>]> {
        let revision = self.epoch.current();
        {
            let cache = self.choices.read();
            if cache.revision == revision {
                if let Some(filtered) = cache.filtered.get(filter.name()) {
                    return Arc::clone(filtered);
                }
            }
        }

        let choices: Arc<[Choice<M::Value>]> =
            self.to_choices_where(|member| filter.matches(member)).into();
        let mut cache = self.choices.write();
        cache.refresh(revision);
        cache
            .filtered
            .insert(filter.name(), Arc::clone(&choices));
        choices
    }

    /// The projection of the members matching an ad-hoc predicate. Not cached.
    pub fn to_choices_where(&self, mut predicate: impl FnMut(&M) -> bool) -> Vec<Choice<M::Value>> {
        self.entries
            .read()
            .iter()
            .filter(|entry| predicate(&entry.member))
            .map(|entry| (entry.member.value(), entry.member.label()))
            .collect()
    }

    /// Compares two operands by declaration order, resolving raw values first.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TypeMismatch`] when either operand is not a member.
    pub fn compare(&self, lhs: Operand<'_, M>, rhs: Operand<'_, M>) -> RegistryResult<Ordering> {
        let lhs = self.position_of(&lhs)?;
        let rhs = self.position_of(&rhs)?;
        Ok(lhs.cmp(&rhs))
    }

    /// Returns true while `insert` is permitted.
    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.mutable.load(AtomicOrdering::Acquire)
    }

    /// Re-opens the registry and every member for writes.
    pub fn make_mutable(&self) {
        self.mutable.store(true, AtomicOrdering::Release);
        for entry in self.entries.read().iter() {
            entry.member.constant().make_mutable();
        }
        debug!(registry = %self.name, "enumeration made mutable");
    }

    /// Freezes the registry and every member.
    pub fn make_immutable(&self) {
        self.mutable.store(false, AtomicOrdering::Release);
        for entry in self.entries.read().iter() {
            entry.member.constant().make_immutable();
        }
        debug!(registry = %self.name, "enumeration frozen");
    }

    /// Adds a member, or replaces the member of the same name in place.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Immutable`] while frozen and
    /// [`RegistryError::DuplicateValue`] when another member already has the value.
    pub fn insert(&self, name: impl Into<String>, member: impl Into<Arc<M>>) -> RegistryResult<()> {
        let name = name.into();
        if !self.is_mutable() {
            return Err(RegistryError::immutable(name));
        }

        let member = member.into();
        let value = member.value();
        let mut entries = self.entries.write();
        if let Some(clash) = entries
            .iter()
            .find(|entry| entry.name != name && entry.member.value() == value)
        {
            return Err(RegistryError::duplicate_value(
                &self.name,
                &value,
                &clash.name,
                name,
            ));
        }

        match entries.iter().position(|entry| entry.name == name) {
            Some(position) => {
                member.constant().bind_order(position);
                member.constant().bind_epoch(&self.epoch);
                entries[position].member = member;
            }
            None => {
                member.constant().bind_order(entries.len());
                member.constant().bind_epoch(&self.epoch);
                entries.push(Entry { name, member });
            }
        }
        self.epoch.bump();
        debug!(registry = %self.name, len = entries.len(), "member inserted");
        Ok(())
    }

    /// JSON hook: the ordered list of member values.
    #[must_use]
    pub fn to_json(&self) -> Vec<M::Value> {
        self.entries
            .read()
            .iter()
            .map(|entry| entry.member.value())
            .collect()
    }

    fn member_at(&self, position: usize) -> Option<Arc<M>> {
        self.entries
            .read()
            .get(position)
            .map(|entry| Arc::clone(&entry.member))
    }

    fn position_of(&self, operand: &Operand<'_, M>) -> RegistryResult<usize> {
        let value = operand.value();
        self.indexes()
            .by_value
            .get(&value)
            .copied()
            .ok_or_else(|| RegistryError::type_mismatch(&self.name, &value))
    }

    fn indexes(&self) -> Arc<Indexes<M::Value>> {
        let revision = self.epoch.current();
        if let Some(indexes) = self
            .indexes
            .read()
            .as_ref()
            .filter(|indexes| indexes.revision == revision)
        {
            return Arc::clone(indexes);
        }

        let built = {
            let entries = self.entries.read();
            Arc::new(Indexes::build(&entries, revision))
        };
        trace!(registry = %self.name, revision, "value and label indexes rebuilt");
        *self.indexes.write() = Some(Arc::clone(&built));
        built
    }
}

impl<'a, M: Member> IntoIterator for &'a Constants<M> {
    type Item = Arc<M>;
    type IntoIter = std::vec::IntoIter<Arc<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M: Member> fmt::Debug for Constants<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constants")
            .field("name", &self.name)
            .field("len", &self.len())
            .field("mutable", &self.is_mutable())
            .finish()
    }
}

impl<M: Member> Serialize for Constants<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.entries.read();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for entry in entries.iter() {
            seq.serialize_element(entry.member.constant())?;
        }
        seq.end()
    }
}
