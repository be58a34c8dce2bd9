//! Coupon payment frequencies, valued in months between payments.

use origin_core::{Constants, Enumerated, Member};

origin_core::constant_type! {
    /// Months between coupon payments; zero pays once at maturity.
    pub struct PaymentFrequency(i32);
}

impl PaymentFrequency {
    /// Number of payments per year, or `None` for a single payment at maturity.
    #[must_use]
    pub fn payments_per_year(&self) -> Option<i32> {
        match self.value() {
            0 => None,
            months => Some(12 / months),
        }
    }
}

origin_core::constants! {
    /// Supported coupon frequencies.
    pub struct PaymentFrequencies<PaymentFrequency> {
        at_maturity = PaymentFrequency::new(0, "At Maturity"),
        quarterly = PaymentFrequency::new(3, "Quarterly"),
        semi_annually = PaymentFrequency::new(6, "Semi-Annually"),
        annually = PaymentFrequency::new(12, "Annually"),
    }
}

impl Enumerated for PaymentFrequency {
    fn registry() -> &'static Constants<Self> {
        PaymentFrequencies::global().registry()
    }
}
