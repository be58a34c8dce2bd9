//! Day count conventions.
//!
//! Values are the QuantLib class names; labels are the market shorthand.

use origin_core::{Constants, Enumerated};

origin_core::constant_type! {
    /// An accrual day count fraction.
    pub struct DayCount(String);
}

origin_core::constants! {
    /// Supported day count fractions.
    pub struct DayCounts<DayCount> {
        actual_actual_icma = DayCount::new("ActualActualICMA", "ACT/ACT (ICMA)"),
        actual_365 = DayCount::new("Actual365Fixed", "ACT/365F"),
        actual_365_nl = DayCount::new("Actual365NoLeap", "NL/365"),
        thirty_360 = DayCount::new("Thirty360", "30/360"),
        actual_360 = DayCount::new("Actual360", "ACT/360"),
    }
}

impl Enumerated for DayCount {
    fn registry() -> &'static Constants<Self> {
        DayCounts::global().registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use origin_core::Member;

    #[test]
    fn test_value_label_pairs() {
        let day_counts = DayCounts::global();
        assert_eq!(day_counts.get_label(&"Thirty360".to_string()).unwrap(), "30/360");
        assert_eq!(day_counts.get_value("ACT/365F").unwrap(), "Actual365Fixed");
        assert_eq!(day_counts.actual_360.value(), "Actual360");
        assert!(day_counts.get(&"ActualActualISDA".to_string()).is_err());
    }
}
