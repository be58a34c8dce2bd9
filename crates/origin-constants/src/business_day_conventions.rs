//! Business day conventions.

use origin_core::{Constants, Enumerated};

origin_core::constant_type! {
    /// How a date falling on a holiday is rolled.
    pub struct BusinessDayConvention(String);
}

origin_core::constants! {
    /// Rolling conventions for non-business days.
    pub struct BusinessDayConventions<BusinessDayConvention> {
        following = BusinessDayConvention::from_value("Following"),
        preceding = BusinessDayConvention::from_value("Preceding"),
        modified_following = BusinessDayConvention::from_value("Modified Following"),
        modified_preceding = BusinessDayConvention::from_value("Modified Preceding"),
        half_month_modified_following =
            BusinessDayConvention::from_value("Half Month Modified Following"),
    }
}

impl Enumerated for BusinessDayConvention {
    fn registry() -> &'static Constants<Self> {
        BusinessDayConventions::global().registry()
    }
}
