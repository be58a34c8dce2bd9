//! Date adjustment flags.

use origin_core::{Constants, Enumerated};

origin_core::constant_type! {
    /// Whether accrual dates are moved onto business days.
    pub struct Adjustment(String);
}

origin_core::constants! {
    /// Accrual date adjustment.
    pub struct Adjustments<Adjustment> {
        adjusted = Adjustment::from_value("Adjusted"),
        unadjusted = Adjustment::from_value("Unadjusted"),
    }
}

impl Enumerated for Adjustment {
    fn registry() -> &'static Constants<Self> {
        Adjustments::global().registry()
    }
}
