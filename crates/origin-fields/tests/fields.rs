//! Integration tests for the field adapters.
//!
//! Model fields must store a member as its raw value and load back the very
//! same shared member. Serializer fields must accept exactly what they offer.

use std::sync::Arc;

use origin_constants::prelude::*;
use origin_fields::prelude::*;
use proptest::prelude::*;

fn assert_store_and_load<M>(field: &ConstantField<M>)
where
    M: Member,
    M::Value: origin_fields::FieldValue,
{
    for member in field.registry().iter() {
        let stored = field.get_prep_value(FieldInput::Constant(&*member)).unwrap();
        let loaded = field.to_python(FieldInput::Value(stored)).unwrap().unwrap();
        assert!(Arc::ptr_eq(&loaded, &member), "{member:?} did not round trip");
    }
}

// =============================================================================
// MODEL FIELDS
// =============================================================================

#[test]
fn test_every_catalog_stores_and_loads() {
    assert_store_and_load(&AdjustmentField::new());
    assert_store_and_load(&BusinessDayConventionField::new());
    assert_store_and_load(&CalendarField::new());
    assert_store_and_load(&CurrencyField::new());
    assert_store_and_load(&DayCountField::new());
    assert_store_and_load(&FundingBasisField::new());
    assert_store_and_load(&PaymentFrequencyField::new());
    assert_store_and_load(&TenorField::new());
    assert_store_and_load(&FundingBasisField::for_registry(cd_funding_bases()));
}

#[test]
fn test_storage_types() {
    assert_eq!(CurrencyField::new().internal_type(), "CharField");
    assert_eq!(PaymentFrequencyField::new().internal_type(), "IntegerField");
    assert_eq!(TenorField::new().internal_type(), "DurationField");
    assert_eq!(TenorField::new().max_length(), None);
    assert_eq!(CurrencyField::new().max_length(), Some(3));
}

#[test]
fn test_tenor_field_loads_from_duration() {
    let tenors = Tenors::global();
    let field = TenorField::new();
    let loaded = field
        .to_python(FieldInput::Value(Period::parse("6M").unwrap()))
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(&loaded, &tenors.six_month));
    assert!(field
        .to_python(FieldInput::Value(Period::days(3.0)))
        .unwrap_err()
        .to_string()
        .starts_with("Invalid input:"));
}

#[test]
fn test_cd_field_uses_cd_members() {
    let field = FundingBasisField::for_registry(cd_funding_bases());
    let usd_fixed = field
        .to_python(FieldInput::Value("FIXED_USD".to_string()))
        .unwrap()
        .unwrap();
    let mtn_usd_fixed = &FundingBases::global().usd_fixed;
    assert!(!Arc::ptr_eq(&usd_fixed, mtn_usd_fixed));
    assert_eq!(usd_fixed.value(), mtn_usd_fixed.value());
}

#[test]
fn test_options_from_toml_drive_clean() {
    let options = FieldOptions::from_toml_str("null = true\nblank = true").unwrap();
    let field = DayCountField::new().with_options(options);
    assert_eq!(field.clean(FieldInput::Null).unwrap(), None);
    assert_eq!(field.clean(FieldInput::Value(String::new())).unwrap(), None);

    let strict = DayCountField::new();
    assert_eq!(strict.clean(FieldInput::Null).unwrap_err(), FieldError::NullNotAllowed);
    assert_eq!(
        strict.clean(FieldInput::Value(String::new())).unwrap_err(),
        FieldError::BlankNotAllowed
    );
}

// =============================================================================
// SERIALIZER FIELDS
// =============================================================================

#[test]
fn test_callable_funding_bases() {
    let bases = FundingBases::global();
    let field = ChoiceField::from_constants(bases.registry())
        .filter_by(FundingBasis::is_callable_basis)
        .unwrap();

    let offered = field.choices();
    let callable = bases.to_choices_filtered(&origin_constants::funding_bases::CALLABLE);
    assert_eq!(offered.len(), callable.len());

    let usd_3m = field.to_internal_value(ChoiceInput::Text("3M_USD")).unwrap();
    assert!(usd_3m.as_constant().is_some_and(|basis| basis.is_floating_basis()));
    assert!(bases.contains(&"3M_CZK".to_string()));
    assert!(field.to_internal_value(ChoiceInput::Text("3M_CZK")).is_err());
    assert!(field.to_internal_value(ChoiceInput::Text("FIXED_USD")).is_err());
}

#[test]
fn test_multiple_tenors_by_label() {
    let tenors = Tenors::global();
    let field = MultipleChoiceField::from_constants(tenors.registry())
        .label_indexed(true)
        .allow_empty(false);

    let selected = field
        .to_internal_value([
            ChoiceInput::Text("1Y"),
            ChoiceInput::Constant(&*tenors.year_5),
            ChoiceInput::Value(Period::years(10.0)),
        ])
        .unwrap();
    assert_eq!(selected.len(), 3);
    assert!(selected.contains(&ChoiceValue::Constant(Arc::clone(&tenors.year_10))));
    assert_eq!(field.to_internal_value(Vec::new()).unwrap_err(), FieldError::EmptySelection);
}

proptest! {
    #[test]
    fn prop_unknown_codes_rejected(code in "[A-Z]{3}") {
        let currencies = Currencies::global();
        let field = ChoiceField::from_constants(currencies.registry());
        let model = CurrencyField::new();
        let known = currencies.contains(&code);

        prop_assert_eq!(field.to_internal_value(ChoiceInput::Text(&code)).is_ok(), known);
        prop_assert_eq!(model.to_python(FieldInput::Value(code.clone())).is_ok(), known);
    }
}
