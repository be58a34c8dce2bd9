//! Standard tenors.
//!
//! A tenor's value is its [`Period`], so tenors compare, hash and serialize by
//! duration. Labels use the short market form (`O/N`, `3M`, `1.5Y`).

use origin_core::{ChoiceFilter, Constant, Constants, Enumerated, Member};

use crate::period::Period;

const MONTH_TOLERANCE: f64 = 1e-6;

/// A standard tenor with its chart colour.
#[derive(Debug)]
pub struct Tenor {
    constant: Constant<Period>,
    color_code: String,
}

origin_core::impl_member!(Tenor, Period, constant);

impl Tenor {
    /// Creates a tenor.
    pub fn new(period: Period, label: impl Into<String>, color_code: impl Into<String>) -> Self {
        Self {
            constant: Constant::new(period, label),
            color_code: color_code.into(),
        }
    }

    /// Hex colour used when charting the tenor.
    pub fn color_code(&self) -> &str {
        &self.color_code
    }

    /// Length in average months; one day is a thirtieth-and-a-bit of a month.
    pub fn number_of_months(&self) -> f64 {
        self.value().total_months()
    }

    /// Whether an issue of this tenor may carry a call schedule.
    ///
    /// True for one month, whole quarters and anything of a year or more.
    pub fn is_callable_tenor(&self) -> bool {
        let months = self.number_of_months();
        let whole_months = months.round();
        if (months - whole_months).abs() > MONTH_TOLERANCE {
            return months >= 12.0;
        }
        whole_months >= 12.0 || whole_months == 1.0 || (whole_months as i64) % 3 == 0
    }
}

/// Restricts choices to callable tenors.
pub const CALLABLE: ChoiceFilter<Tenor> = ChoiceFilter::new("callable", Tenor::is_callable_tenor);

origin_core::constants! {
    /// Tenors offered for issuance, shortest first.
    pub struct Tenors<Tenor> {
        overnight = Tenor::new(Period::overnight(), "O/N", "#665241"),
        one_week = Tenor::new(Period::weeks(1.0), "1W", "#C1B591"),
        two_week = Tenor::new(Period::weeks(2.0), "2W", "#426B94"),
        one_month = Tenor::new(Period::months(1.0), "1M", "#426B94"),
        two_month = Tenor::new(Period::months(2.0), "2M", "#C4A77D"),
        three_month = Tenor::new(Period::months(3.0), "3M", "#FF6666"),
        four_month = Tenor::new(Period::months(4.0), "4M", "#F9613C"),
        five_month = Tenor::new(Period::months(5.0), "5M", "#F3DFC1"),
        six_month = Tenor::new(Period::months(6.0), "6M", "#856A5D"),
        seven_month = Tenor::new(Period::months(7.0), "7M", "#1B3022"),
        eight_month = Tenor::new(Period::months(8.0), "8M", "#395756"),
        nine_month = Tenor::new(Period::months(9.0), "9M", "#FFB30F"),
        ten_month = Tenor::new(Period::months(10.0), "10M", "#01295F"),
        eleven_month = Tenor::new(Period::months(11.0), "11M", "#849324"),
        year_1 = Tenor::new(Period::years(1.0), "1Y", "#204B57"),
        one_and_half_year = Tenor::new(Period::months(18.0), "1.5Y", "#8A716A"),
        year_2 = Tenor::new(Period::years(2.0), "2Y", "#EF946C"),
        year_3 = Tenor::new(Period::years(3.0), "3Y", "#45C7A6"),
        year_4 = Tenor::new(Period::years(4.0), "4Y", "#2F2963"),
        year_5 = Tenor::new(Period::years(5.0), "5Y", "#3A435E"),
        year_6 = Tenor::new(Period::years(6.0), "6Y", "#B2C9AB"),
        year_7 = Tenor::new(Period::years(7.0), "7Y", "#C6D8FF"),
        year_8 = Tenor::new(Period::years(8.0), "8Y", "#92B6B1"),
        year_9 = Tenor::new(Period::years(9.0), "9Y", "#71A9F7"),
        year_10 = Tenor::new(Period::years(10.0), "10Y", "#788AA3"),
        year_11 = Tenor::new(Period::years(11.0), "11Y", "#CF995F"),
        year_12 = Tenor::new(Period::years(12.0), "12Y", "#780116"),
        year_13 = Tenor::new(Period::years(13.0), "13Y", "#7F9C96"),
        year_14 = Tenor::new(Period::years(14.0), "14Y", "#F9C80E"),
        year_15 = Tenor::new(Period::years(15.0), "15Y", "#F86624"),
        year_16 = Tenor::new(Period::years(16.0), "16Y", "#495325"),
        year_17 = Tenor::new(Period::years(17.0), "17Y", "#AEB88A"),
        year_18 = Tenor::new(Period::years(18.0), "18Y", "#1D4324"),
        year_19 = Tenor::new(Period::years(19.0), "19Y", "#6F9475"),
        year_20 = Tenor::new(Period::years(20.0), "20Y", "#EA3546"),
        year_21 = Tenor::new(Period::years(21.0), "21Y", "#FCAA46"),
        year_22 = Tenor::new(Period::years(22.0), "22Y", "#B8ED5C"),
        year_23 = Tenor::new(Period::years(23.0), "23Y", "#CAAFD0"),
        year_24 = Tenor::new(Period::years(24.0), "24Y", "#2782A8"),
        year_25 = Tenor::new(Period::years(25.0), "25Y", "#C933F6"),
        year_26 = Tenor::new(Period::years(26.0), "26Y", "#7B29FA"),
        year_27 = Tenor::new(Period::years(27.0), "27Y", "#F68A9A"),
        year_28 = Tenor::new(Period::years(28.0), "28Y", "#4F10DB"),
        year_29 = Tenor::new(Period::years(29.0), "29Y", "#D199B6"),
        year_30 = Tenor::new(Period::years(30.0), "30Y", "#D2C11A"),
        year_31 = Tenor::new(Period::years(31.0), "31Y", "#2A5934"),
        year_32 = Tenor::new(Period::years(32.0), "32Y", "#987313"),
        year_33 = Tenor::new(Period::years(33.0), "33Y", "#B05C9B"),
        year_34 = Tenor::new(Period::years(34.0), "34Y", "#53418A"),
        year_35 = Tenor::new(Period::years(35.0), "35Y", "#7A06E1"),
        year_36 = Tenor::new(Period::years(36.0), "36Y", "#C5312D"),
        year_37 = Tenor::new(Period::years(37.0), "37Y", "#B89772"),
        year_38 = Tenor::new(Period::years(38.0), "38Y", "#499791"),
        year_39 = Tenor::new(Period::years(39.0), "39Y", "#9CAF24"),
        year_40 = Tenor::new(Period::years(40.0), "40Y", "#6FE546"),
        year_41 = Tenor::new(Period::years(41.0), "41Y", "#F0123F"),
        year_42 = Tenor::new(Period::years(42.0), "42Y", "#CB4BAA"),
        year_43 = Tenor::new(Period::years(43.0), "43Y", "#285306"),
        year_44 = Tenor::new(Period::years(44.0), "44Y", "#7C90DB"),
        year_45 = Tenor::new(Period::years(45.0), "45Y", "#F396BE"),
        year_46 = Tenor::new(Period::years(46.0), "46Y", "#905A82"),
        year_47 = Tenor::new(Period::years(47.0), "47Y", "#455217"),
        year_48 = Tenor::new(Period::years(48.0), "48Y", "#2C7326"),
        year_49 = Tenor::new(Period::years(49.0), "49Y", "#C3F73A"),
        year_50 = Tenor::new(Period::years(50.0), "50Y", "#226453"),
    }
}

impl Enumerated for Tenor {
    fn registry() -> &'static Constants<Self> {
        Tenors::global().registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use origin_core::{Operand, RegistryError};
    use std::cmp::Ordering;

    #[test]
    fn test_labels_and_colours() {
        let tenors = Tenors::global();
        assert_eq!(tenors.len(), 65);
        assert_eq!(tenors.overnight.label(), "O/N");
        assert_eq!(tenors.one_and_half_year.label(), "1.5Y");
        assert_eq!(tenors.one_and_half_year.color_code(), "#8A716A");
        assert_eq!(tenors.year_50.color_code(), "#226453");
    }

    #[test]
    fn test_number_of_months() {
        let tenors = Tenors::global();
        assert_relative_eq!(tenors.three_month.number_of_months(), 3.0, epsilon = 1e-9);
        assert_relative_eq!(tenors.year_2.number_of_months(), 24.0, epsilon = 1e-9);
        assert_relative_eq!(tenors.one_and_half_year.number_of_months(), 18.0, epsilon = 1e-9);
        assert_relative_eq!(
            tenors.overnight.number_of_months(),
            1.0 / crate::period::DAYS_IN_A_MONTH,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            tenors.one_week.number_of_months(),
            crate::period::DAYS_IN_A_WEEK / crate::period::DAYS_IN_A_MONTH,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_callable_tenors() {
        let tenors = Tenors::global();
        for tenor in [
            &tenors.overnight,
            &tenors.one_week,
            &tenors.two_week,
            &tenors.two_month,
            &tenors.four_month,
            &tenors.five_month,
            &tenors.seven_month,
            &tenors.eight_month,
            &tenors.ten_month,
            &tenors.eleven_month,
        ] {
            assert!(!tenor.is_callable_tenor(), "{} should not be callable", tenor.label());
        }
        for tenor in [
            &tenors.one_month,
            &tenors.three_month,
            &tenors.six_month,
            &tenors.nine_month,
            &tenors.year_1,
            &tenors.one_and_half_year,
            &tenors.year_30,
        ] {
            assert!(tenor.is_callable_tenor(), "{} should be callable", tenor.label());
        }
        let callable = tenors.to_choices_filtered(&CALLABLE);
        assert_eq!(callable.len(), 65 - 10);
    }

    #[test]
    fn test_ordering_by_declaration() {
        let tenors = Tenors::global();
        assert!(tenors.overnight < tenors.one_week);
        assert!(tenors.year_1 < tenors.one_and_half_year);
        assert!(tenors.one_and_half_year < tenors.year_2);
        assert_eq!(
            tenors
                .compare(Operand::Constant(&*tenors.year_5), Operand::Value(&Period::years(10.0)))
                .unwrap(),
            Ordering::Less
        );
        assert!(matches!(
            tenors.compare(Operand::Constant(&*tenors.year_5), Operand::Value(&Period::days(17.0))),
            Err(RegistryError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_lookup_by_parsed_period() {
        let tenors = Tenors::global();
        let three_months = Period::parse("3M").unwrap();
        assert_eq!(tenors.get(&three_months).unwrap().label(), "3M");
        assert_eq!(tenors.get_by_label("10Y").unwrap().value(), Period::years(10.0));
    }

    #[test]
    fn test_serializes_as_short_period() {
        let tenors = Tenors::global();
        assert_eq!(serde_json::to_string(&*tenors.three_month).unwrap(), "\"3M\"");
        assert_eq!(serde_json::to_string(&*tenors.year_10).unwrap(), "\"10Y\"");
    }
}
