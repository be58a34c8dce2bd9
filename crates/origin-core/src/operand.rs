//! Mixing members and raw values in one operation.

use std::fmt;

use crate::constant::Member;

/// One side of an operation: a member or a bare value of the member's type.
///
/// Both sides of an operation share the member type `M`, so combining
/// members of two different enumerations does not compile.
pub enum Operand<'a, M: Member> {
    /// A declared member.
    Constant(&'a M),
    /// A raw value.
    Value(&'a M::Value),
}

impl<'a, M: Member> Operand<'a, M> {
    /// The raw value this operand stands for.
    #[must_use]
    pub fn value(&self) -> M::Value {
        match self {
            Self::Constant(member) => member.value(),
            Self::Value(value) => (*value).clone(),
        }
    }

    /// Returns true for the member variant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

impl<M: Member> Clone for Operand<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Member> Copy for Operand<'_, M> {}

impl<'a, M: Member> From<&'a M> for Operand<'a, M> {
    fn from(member: &'a M) -> Self {
        Self::Constant(member)
    }
}

impl<M: Member> fmt::Debug for Operand<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(member) => f.debug_tuple("Constant").field(member).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Applies `op` to the raw values behind two operands.
///
/// ```rust
/// use origin_core::{perform_on_constant, Constant, Operand};
///
/// let three: Constant<i32> = Constant::new(3, "Quarterly");
/// let sum = perform_on_constant(Operand::Constant(&three), Operand::Value(&6), |a, b| a + b);
/// assert_eq!(sum, 9);
/// ```
pub fn perform_on_constant<M, R>(
    lhs: Operand<'_, M>,
    rhs: Operand<'_, M>,
    op: impl FnOnce(M::Value, M::Value) -> R,
) -> R
where
    M: Member,
{
    op(lhs.value(), rhs.value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constant;

    #[test]
    fn test_both_constants() {
        let a: Constant<i32> = Constant::new(3, "Quarterly");
        let b: Constant<i32> = Constant::new(12, "Annually");
        assert!(perform_on_constant(Operand::from(&a), Operand::from(&b), |x, y| x < y));
        assert_eq!(perform_on_constant(Operand::Constant(&a), Operand::Constant(&b), |x, y| y - x), 9);
    }

    #[test]
    fn test_one_raw_operand() {
        let a: Constant<String> = Constant::new("USD", "USD");
        let raw = "USD".to_string();
        assert!(perform_on_constant(
            Operand::Constant(&a),
            Operand::Value(&raw),
            |x, y| x == y
        ));
        assert!(!Operand::<Constant<String>>::Value(&raw).is_constant());
    }
}
