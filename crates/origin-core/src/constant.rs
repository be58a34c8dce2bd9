//! A single enumerated member.
//!
//! A [`Constant`] pairs a machine value with a display label. It is created
//! mutable, receives its declaration rank when a registry is built, and is
//! frozen by that registry for the rest of the process lifetime.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use serde::{Serialize, Serializer};

use crate::error::{RegistryError, RegistryResult};

/// A registry's revision counter, shared with the members it holds.
///
/// The registry stamps its indexes and choice caches with the counter and
/// rebuilds them when it moves. Writes to a member bump the counter of every
/// registry holding that member, and nothing else.
#[derive(Debug, Default)]
pub(crate) struct Epoch(AtomicU64);

impl Epoch {
    pub(crate) fn current(&self) -> u64 {
        self.0.load(AtomicOrdering::Acquire)
    }

    pub(crate) fn bump(&self) {
        self.0.fetch_add(1, AtomicOrdering::AcqRel);
    }
}

/// Bounds required of a member's machine value.
///
/// Implemented for every type that qualifies, so `String`, integers and
/// duration types all work without ceremony.
pub trait ConstantValue:
    Clone + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
}

impl<T> ConstantValue for T where
    T: Clone + Eq + Hash + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static
{
}

struct Fields<T> {
    value: T,
    label: String,
}

/// One member of an enumeration.
pub struct Constant<T> {
    fields: RwLock<Fields<T>>,
    order: OnceLock<usize>,
    mutable: AtomicBool,
    epochs: RwLock<Vec<Arc<Epoch>>>,
}

impl<T: ConstantValue> Constant<T> {
    /// Creates a new, mutable and unranked constant.
    pub fn new(value: impl Into<T>, label: impl Into<String>) -> Self {
        Self {
            fields: RwLock::new(Fields {
                value: value.into(),
                label: label.into(),
            }),
            order: OnceLock::new(),
            mutable: AtomicBool::new(true),
            epochs: RwLock::new(Vec::new()),
        }
    }

    /// Returns the machine value.
    #[must_use]
    pub fn value(&self) -> T {
        self.fields.read().value.clone()
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> String {
        self.fields.read().label.clone()
    }

    /// Runs `f` against the value without cloning it.
    pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.fields.read().value)
    }

    /// Returns the declaration rank, or `None` if the constant was never registered.
    #[must_use]
    pub fn order(&self) -> Option<usize> {
        self.order.get().copied()
    }

    /// Returns true while writes are permitted.
    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.mutable.load(AtomicOrdering::Acquire)
    }

    /// Permits writes to the value and label.
    pub fn make_mutable(&self) {
        self.mutable.store(true, AtomicOrdering::Release);
    }

    /// Forbids writes to the value and label.
    pub fn make_immutable(&self) {
        self.mutable.store(false, AtomicOrdering::Release);
    }

    /// Replaces the value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Immutable`] while the constant is frozen.
    pub fn set_value(&self, value: impl Into<T>) -> RegistryResult<()> {
        self.ensure_mutable("value")?;
        self.fields.write().value = value.into();
        self.touch();
        Ok(())
    }

    /// Replaces the label.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Immutable`] while the constant is frozen.
    pub fn set_label(&self, label: impl Into<String>) -> RegistryResult<()> {
        self.ensure_mutable("label")?;
        self.fields.write().label = label.into();
        self.touch();
        Ok(())
    }

    /// JSON hook: a constant encodes as its raw value.
    #[must_use]
    pub fn to_json(&self) -> T {
        self.value()
    }

    pub(crate) fn bind_order(&self, position: usize) {
        // A member shared by a derived registry keeps the rank it was first given.
        let _ = self.order.set(position);
    }

    pub(crate) fn bind_epoch(&self, epoch: &Arc<Epoch>) {
        let mut epochs = self.epochs.write();
        if !epochs.iter().any(|bound| Arc::ptr_eq(bound, epoch)) {
            epochs.push(Arc::clone(epoch));
        }
    }

    fn touch(&self) {
        for epoch in self.epochs.read().iter() {
            epoch.bump();
        }
    }

    fn ensure_mutable(&self, attribute: &str) -> RegistryResult<()> {
        if self.is_mutable() {
            Ok(())
        } else {
            Err(RegistryError::immutable(attribute))
        }
    }
}

impl<T: ConstantValue> PartialEq for Constant<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other) || self.value() == other.value()
    }
}

impl<T: ConstantValue> Eq for Constant<T> {}

impl<T: ConstantValue> Hash for Constant<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.read().value.hash(state);
    }
}

impl<T: ConstantValue> PartialOrd for Constant<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match (self.order(), other.order()) {
            (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
            _ => None,
        }
    }
}

impl<T: ConstantValue> fmt::Display for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.read();
        write!(f, "value={}, label={}", fields.value, fields.label)
    }
}

impl<T: ConstantValue> fmt::Debug for Constant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.read();
        f.debug_struct("Constant")
            .field("value", &fields.value)
            .field("label", &fields.label)
            .field("order", &self.order())
            .field("mutable", &self.is_mutable())
            .finish()
    }
}

impl<T: ConstantValue> Serialize for Constant<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.read().value.serialize(serializer)
    }
}

/// A type usable as a registry member.
///
/// Every member embeds exactly one [`Constant`]; richer domain types add
/// their own attributes next to it. Most implementations come from the
/// [`impl_member!`](crate::impl_member) and
/// [`constant_type!`](crate::constant_type) macros.
pub trait Member: fmt::Debug + Eq + Hash + Send + Sync + 'static {
    /// The machine value type.
    type Value: ConstantValue;

    /// The embedded constant.
    fn constant(&self) -> &Constant<Self::Value>;

    /// Returns the machine value.
    fn value(&self) -> Self::Value {
        self.constant().value()
    }

    /// Returns the display label.
    fn label(&self) -> String {
        self.constant().label()
    }

    /// Returns the declaration rank.
    fn order(&self) -> Option<usize> {
        self.constant().order()
    }

    /// JSON hook: the raw value.
    fn to_json(&self) -> Self::Value {
        self.constant().to_json()
    }
}

impl<T: ConstantValue> Member for Constant<T> {
    type Value = T;

    fn constant(&self) -> &Constant<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_constant_is_mutable_and_unranked() {
        let c: Constant<String> = Constant::new("Actual360", "ACT/360");
        assert!(c.is_mutable());
        assert_eq!(c.order(), None);
        assert_eq!(c.value(), "Actual360");
        assert_eq!(c.label(), "ACT/360");
    }

    #[test]
    fn test_display() {
        let c: Constant<i32> = Constant::new(3, "Quarterly");
        assert_eq!(c.to_string(), "value=3, label=Quarterly");
    }

    #[test]
    fn test_immutability_toggle() {
        let c: Constant<String> = Constant::new("a", "A");
        c.make_immutable();
        assert!(matches!(
            c.set_label("B"),
            Err(RegistryError::Immutable { .. })
        ));
        assert!(c.set_value("b").is_err());
        assert_eq!(c.label(), "A");

        c.make_mutable();
        c.set_label("B").unwrap();
        c.set_value("b").unwrap();
        assert_eq!(c.value(), "b");
        assert_eq!(c.label(), "B");
    }

    #[test]
    fn test_equality_and_hash_follow_value() {
        let a: Constant<i32> = Constant::new(6, "Semi-Annually");
        let b: Constant<i32> = Constant::new(6, "Half-yearly");
        let c: Constant<i32> = Constant::new(12, "Annually");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<&Constant<i32>> = [&a, &b, &c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_unranked_constants_are_incomparable() {
        let a: Constant<i32> = Constant::new(1, "one");
        let b: Constant<i32> = Constant::new(2, "two");
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));

        a.bind_order(1);
        b.bind_order(0);
        assert!(b < a);
    }

    #[test]
    fn test_order_is_bound_once() {
        let a: Constant<i32> = Constant::new(1, "one");
        a.bind_order(4);
        a.bind_order(9);
        assert_eq!(a.order(), Some(4));
    }

    #[test]
    fn test_serialize_as_value() {
        let c: Constant<String> = Constant::new("Actual365Fixed", "ACT/365F");
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"Actual365Fixed\"");
        assert_eq!(c.to_json(), "Actual365Fixed");

        let n: Constant<i32> = Constant::new(12, "Annually");
        assert_eq!(serde_json::to_value(&n).unwrap(), serde_json::json!(12));
    }

    #[test]
    fn test_writes_bump_bound_epochs_only() {
        let bound = Arc::new(Epoch::default());
        let other = Arc::new(Epoch::default());
        let c: Constant<i32> = Constant::new(1, "one");
        c.bind_epoch(&bound);
        c.bind_epoch(&bound);

        c.set_label("uno").unwrap();
        assert_eq!(bound.current(), 1);
        assert_eq!(other.current(), 0);

        let loose: Constant<i32> = Constant::new(2, "two");
        loose.set_value(3).unwrap();
        assert_eq!(bound.current(), 1);
    }
}
