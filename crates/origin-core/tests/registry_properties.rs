//! Property tests for the enumeration registry.
//!
//! These tests verify the guarantees every catalog relies on:
//! - One instance per enumeration type
//! - Iteration and choices follow declaration order
//! - Value and label lookups round-trip to the declared member
//! - Duplicate values are rejected
//! - Freezing cascades to members and can be undone

use std::sync::Arc;

use origin_core::prelude::*;
use proptest::prelude::*;

origin_core::constants! {
    /// The worked example: two day counts, declared out of alphabetical order.
    pub struct DayCounts<Constant<String>> {
        act_365 = Constant::new("Actual365Fixed", "ACT/365F"),
        act_360 = Constant::new("Actual360", "ACT/360"),
    }
}

origin_core::constants! {
    pub struct Frequencies<Constant<i32>> {
        zulu = Constant::new(0, "At Maturity"),
        alpha = Constant::new(3, "Quarterly"),
        mike = Constant::new(6, "Semi-Annually"),
        bravo = Constant::new(12, "Annually"),
    }
}

origin_core::constants! {
    pub struct Mutables<Constant<String>> {
        first = Constant::new("a", "A"),
        second = Constant::new("b", "B"),
    }
}

fn build(values: &[i32]) -> RegistryResult<Constants<Constant<i32>>> {
    values
        .iter()
        .enumerate()
        .fold(ConstantsBuilder::new("Generated"), |builder, (i, value)| {
            builder.member(format!("m{i}"), Constant::new(*value, format!("label {value}")))
        })
        .build()
}

// =============================================================================
// WORKED EXAMPLE
// =============================================================================

#[test]
fn test_day_counts_example() {
    let day_counts = DayCounts::global();

    let first = day_counts.iter().next().unwrap();
    assert!(Arc::ptr_eq(&first, &day_counts.act_365));

    let act_360 = day_counts.get(&"Actual360".to_string()).unwrap();
    assert!(Arc::ptr_eq(&act_360, &day_counts.act_360));

    assert_eq!(
        day_counts.to_choices().to_vec(),
        vec![
            ("Actual365Fixed".to_string(), "ACT/365F".to_string()),
            ("Actual360".to_string(), "ACT/360".to_string()),
        ]
    );

    let err = day_counts.get(&"NoSuchValue".to_string()).unwrap_err();
    assert!(err.is_key_not_found());
}

// =============================================================================
// P1: SINGLETON
// =============================================================================

#[test]
fn test_singleton_per_type() {
    assert!(std::ptr::eq(DayCounts::global(), DayCounts::global()));
    assert!(std::ptr::eq(Frequencies::global(), Frequencies::global()));
    assert_ne!(
        DayCounts::global() as *const DayCounts as usize,
        Frequencies::global() as *const Frequencies as usize
    );
}

#[test]
fn test_singleton_across_threads() {
    let addresses: Vec<usize> = (0..8)
        .map(|_| std::thread::spawn(|| Frequencies::global() as *const Frequencies as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

// =============================================================================
// P2: ORDERING
// =============================================================================

#[test]
fn test_declaration_order_not_alphabetical() {
    let frequencies = Frequencies::global();
    assert_eq!(frequencies.names(), vec!["zulu", "alpha", "mike", "bravo"]);
    let values: Vec<i32> = frequencies.iter().map(|m| m.value()).collect();
    assert_eq!(values, vec![0, 3, 6, 12]);
    assert!(frequencies.zulu < frequencies.alpha);
    assert!(frequencies.bravo > frequencies.mike);
}

// =============================================================================
// P3/P4: LOOKUPS AND CONTAINMENT
// =============================================================================

#[test]
fn test_lookup_round_trip() {
    let frequencies = Frequencies::global();
    for member in frequencies.iter() {
        assert!(Arc::ptr_eq(&frequencies.get(&member.value()).unwrap(), &member));
        assert!(Arc::ptr_eq(&frequencies.get_by_label(&member.label()).unwrap(), &member));
        assert!(frequencies.contains(&member.value()));
    }
    assert!(!frequencies.contains(&1));
    assert!(frequencies.get_by_label("Monthly").unwrap_err().is_key_not_found());
}

// =============================================================================
// P6: IMMUTABILITY
// =============================================================================

#[test]
fn test_immutability_cascades() {
    let mutables = Mutables::global();
    assert!(mutables.first.set_label("changed").is_err());
    assert!(mutables.insert("third", Constant::new("c", "C")).is_err());

    mutables.make_mutable();
    mutables.first.set_label("A2").unwrap();
    mutables.insert("third", Constant::new("c", "C")).unwrap();
    assert_eq!(mutables.get_value("A2").unwrap(), "a");

    mutables.make_immutable();
    assert!(matches!(
        mutables.second.set_value("z"),
        Err(RegistryError::Immutable { .. })
    ));
    assert!(mutables.iter().all(|m| !m.is_mutable()));
}

// =============================================================================
// P7/P8: PROJECTIONS
// =============================================================================

#[test]
fn test_json_projection() {
    let day_counts = DayCounts::global();
    assert_eq!(
        serde_json::to_value(&*day_counts.act_360).unwrap(),
        serde_json::json!("Actual360")
    );
    assert_eq!(
        serde_json::to_string(day_counts).unwrap(),
        r#"["Actual365Fixed","Actual360"]"#
    );
}

proptest! {
    #[test]
    fn prop_choices_match_iteration(values in prop::collection::hash_set(any::<i32>(), 0..40)) {
        let values: Vec<i32> = values.into_iter().collect();
        let registry = build(&values).unwrap();

        let expected: Vec<(i32, String)> = registry.iter().map(|m| (m.value(), m.label())).collect();
        prop_assert_eq!(registry.to_choices().to_vec(), expected);
        prop_assert_eq!(registry.to_json(), values.clone());

        for (position, value) in values.iter().enumerate() {
            let member = registry.get(value).unwrap();
            prop_assert_eq!(member.order(), Some(position));
            prop_assert!(Arc::ptr_eq(&member, &registry.get_by_label(&member.label()).unwrap()));
        }
    }

    #[test]
    fn prop_duplicates_rejected(
        values in prop::collection::hash_set(any::<i32>(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut values: Vec<i32> = values.into_iter().collect();
        let repeated = values[pick.index(values.len())];
        values.push(repeated);

        let err = build(&values).unwrap_err();
        prop_assert!(err.is_configuration_error());
        prop_assert!(
            matches!(err, RegistryError::DuplicateValue { ref value, .. } if *value == repeated.to_string()),
            "unexpected error"
        );
    }
}
