//! Durations measured in market calendar units.
//!
//! A [`Period`] is a microsecond-precision [`TimeDelta`] built from
//! fractional days. Weeks, months and years use the average lengths below,
//! so `12M`, `1Y` and `52W` are the same period.
//!
//! # Example
//!
//! ```rust
//! use origin_constants::period::{FormatOptions, Period};
//!
//! let period = Period::parse("nc 18m").unwrap();
//! assert_eq!(period.to_string(), "1.5Y");
//! assert_eq!(period.format(FormatOptions::quantlib()), "1Y6M");
//! assert_eq!(Period::months(10.0).format(FormatOptions::long()), "10 Months");
//! ```

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::TimeDelta;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PeriodError, PeriodResult};

/// Average days in a year.
pub const DAYS_IN_A_YEAR: f64 = 365.25;
/// Average days in a month.
pub const DAYS_IN_A_MONTH: f64 = DAYS_IN_A_YEAR / 12.0;
/// Average days in a week.
pub const DAYS_IN_A_WEEK: f64 = DAYS_IN_A_YEAR / 52.0;

const MICROS_PER_DAY: i64 = 86_400_000_000;

static PERIOD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn period_pattern() -> &'static Regex {
    PERIOD_PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^\s*(?:nc)?\s*(\d+(?:\.\d+)?)\s*(m(?:onths?)?|y(?:ea)?(?:rs?)?|w(?:ee)?(?:ks?)?)?\*?\s*$",
        )
        .expect("period pattern is a valid regex")
    })
}

/// The unit a period is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    /// One day, written `O/N`.
    Overnight,
    /// Weeks.
    Week,
    /// Months.
    Month,
    /// Years.
    Year,
}

impl PeriodUnit {
    /// The short suffix used in compact period text.
    #[must_use]
    pub fn initial(&self) -> &'static str {
        match self {
            PeriodUnit::Overnight => "O/N",
            PeriodUnit::Week => "W",
            PeriodUnit::Month => "M",
            PeriodUnit::Year => "Y",
        }
    }

    /// The full singular name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PeriodUnit::Overnight => "Overnight",
            PeriodUnit::Week => "Week",
            PeriodUnit::Month => "Month",
            PeriodUnit::Year => "Year",
        }
    }

    /// Average number of days in one unit.
    #[must_use]
    pub fn days(&self) -> f64 {
        match self {
            PeriodUnit::Overnight => 1.0,
            PeriodUnit::Week => DAYS_IN_A_WEEK,
            PeriodUnit::Month => DAYS_IN_A_MONTH,
            PeriodUnit::Year => DAYS_IN_A_YEAR,
        }
    }

    fn from_suffix(suffix: &str) -> Self {
        match suffix.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('w') => PeriodUnit::Week,
            Some('m') => PeriodUnit::Month,
            _ => PeriodUnit::Year,
        }
    }
}

/// Unitless numbers are years, and so is anything that is not weeks or months.
fn days_per_unit(unit: Option<PeriodUnit>) -> f64 {
    match unit {
        Some(PeriodUnit::Week) => DAYS_IN_A_WEEK,
        Some(PeriodUnit::Month) => DAYS_IN_A_MONTH,
        _ => DAYS_IN_A_YEAR,
    }
}

/// Expands a unit initial (`W`, `M`, `Y`) to its name. Anything else is returned as is.
#[must_use]
pub fn expand_duration_unit(unit: &str) -> &str {
    match unit {
        "W" => "Week",
        "M" => "Month",
        "Y" => "Year",
        other => other,
    }
}

/// How [`Period::format`] renders a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// `2Y` rather than `2 Years`.
    pub only_initial: bool,
    /// Round the unit count to this many decimal places.
    pub round_ndigits: Option<u32>,
    /// Only switch to years on whole quarters; otherwise stay in months.
    pub only_quarter_years: bool,
    /// QuantLib period text: `1D` overnight, composite `1Y6M` for fractions.
    pub for_quantlib: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            only_initial: true,
            round_ndigits: None,
            only_quarter_years: true,
            for_quantlib: false,
        }
    }
}

impl FormatOptions {
    /// Long form: `Overnight`, `1 Week`, `10 Years`.
    #[must_use]
    pub fn long() -> Self {
        Self {
            only_initial: false,
            ..Self::default()
        }
    }

    /// QuantLib form. Always uses initials.
    #[must_use]
    pub fn quantlib() -> Self {
        Self {
            for_quantlib: true,
            ..Self::default()
        }
    }

    /// Sets the rounding precision.
    #[must_use]
    pub fn with_round_ndigits(mut self, ndigits: u32) -> Self {
        self.round_ndigits = Some(ndigits);
        self
    }

    /// Sets the quarter-year rule.
    #[must_use]
    pub fn with_only_quarter_years(mut self, only_quarter_years: bool) -> Self {
        self.only_quarter_years = only_quarter_years;
        self
    }
}

/// A duration such as a tenor or a maturity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period(TimeDelta);

impl Period {
    /// The empty period.
    #[must_use]
    pub fn zero() -> Self {
        Self(TimeDelta::zero())
    }

    /// A period of fractional days, rounded to the microsecond.
    #[must_use]
    pub fn days(days: f64) -> Self {
        let micros = (days * MICROS_PER_DAY as f64).round() as i64;
        Self(TimeDelta::microseconds(micros))
    }

    /// One day.
    #[must_use]
    pub fn overnight() -> Self {
        Self::days(1.0)
    }

    /// A number of average weeks.
    #[must_use]
    pub fn weeks(weeks: f64) -> Self {
        Self::days(weeks * DAYS_IN_A_WEEK)
    }

    /// A number of average months.
    #[must_use]
    pub fn months(months: f64) -> Self {
        Self::days(months * DAYS_IN_A_MONTH)
    }

    /// A number of average years.
    #[must_use]
    pub fn years(years: f64) -> Self {
        Self::days(years * DAYS_IN_A_YEAR)
    }

    /// A count of the given unit.
    #[must_use]
    pub fn of(count: f64, unit: PeriodUnit) -> Self {
        Self::days(count * unit.days())
    }

    /// Wraps a chrono delta.
    #[must_use]
    pub fn from_delta(delta: TimeDelta) -> Self {
        Self(delta)
    }

    /// The underlying chrono delta.
    #[must_use]
    pub fn as_delta(&self) -> TimeDelta {
        self.0
    }

    /// Length in fractional days.
    #[must_use]
    pub fn total_days(&self) -> f64 {
        self.micros() as f64 / MICROS_PER_DAY as f64
    }

    /// Length in average months.
    #[must_use]
    pub fn total_months(&self) -> f64 {
        self.total_days() / DAYS_IN_A_MONTH
    }

    /// Returns true for the empty period.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.micros() == 0
    }

    /// Reads a single period: `O/N`, `overnight`, `3M`, `2 weeks`, `nc10y*`, or a
    /// bare number of years.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidInput`] for anything else, ranges included.
    pub fn parse(input: &str) -> PeriodResult<Self> {
        parse_with_unit(input).map(|(period, _)| period)
    }

    /// Reads a range such as `1-10Y` or `1M - 10 Y`.
    ///
    /// A unitless start takes the end's unit. The end must not precede the start.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidInput`] for malformed or inverted ranges.
    pub fn parse_range(input: &str) -> PeriodResult<(Self, Self)> {
        let (start, end) = input
            .split_once('-')
            .ok_or_else(|| PeriodError::invalid_input(input))?;
        let (mut start, start_unit) = parse_with_unit(start)?;
        let (end, end_unit) = parse_with_unit(end)?;

        if start_unit.is_none() {
            start = Self::days(start.total_days() / DAYS_IN_A_YEAR * days_per_unit(end_unit));
        }
        if end < start {
            return Err(PeriodError::invalid_input(input));
        }
        Ok((start, end))
    }

    /// Renders the period as text.
    #[must_use]
    pub fn format(&self, options: FormatOptions) -> String {
        let micros = self.micros();
        if micros == 0 {
            return "0".to_string();
        }
        if micros == MICROS_PER_DAY {
            let text = if options.for_quantlib {
                "1D"
            } else if options.only_initial {
                "O/N"
            } else {
                "Overnight"
            };
            return text.to_string();
        }

        let (value, unit) = self.in_largest_unit(options.round_ndigits, options.only_quarter_years);
        if options.for_quantlib && value.fract() != 0.0 {
            let whole = Self::of(value.trunc(), unit);
            let rest = Self::of(value.fract(), unit);
            return format!("{whole}{rest}");
        }

        let number = format_number(value);
        if options.only_initial || options.for_quantlib {
            format!("{number}{}", unit.initial())
        } else if value > 1.0 {
            format!("{number} {}s", unit.name())
        } else {
            format!("{number} {}", unit.name())
        }
    }

    fn in_largest_unit(&self, round_ndigits: Option<u32>, only_quarter_years: bool) -> (f64, PeriodUnit) {
        let total_days = self.total_days();
        let quarter = Self::months(3.0).micros();
        let (mut value, unit) = if total_days < DAYS_IN_A_MONTH {
            // Weeks are whole; the nudge absorbs microsecond rounding.
            ((total_days / DAYS_IN_A_WEEK + 1e-9).floor(), PeriodUnit::Week)
        } else if total_days < DAYS_IN_A_YEAR || (only_quarter_years && self.micros() % quarter != 0) {
            (total_days / DAYS_IN_A_MONTH, PeriodUnit::Month)
        } else {
            (total_days / DAYS_IN_A_YEAR, PeriodUnit::Year)
        };

        if let Some(ndigits) = round_ndigits {
            let scale = 10f64.powi(ndigits as i32);
            value = (value * scale).round() / scale;
        }
        (value, unit)
    }

    fn micros(&self) -> i64 {
        self.0.num_microseconds().unwrap_or(i64::MAX)
    }
}

fn parse_with_unit(input: &str) -> PeriodResult<(Period, Option<PeriodUnit>)> {
    if let Some(captures) = period_pattern().captures(input) {
        let count: f64 = captures[1]
            .parse()
            .map_err(|_| PeriodError::invalid_input(input))?;
        let unit = captures
            .get(2)
            .map(|suffix| PeriodUnit::from_suffix(suffix.as_str()));
        return Ok((Period::days(count * days_per_unit(unit)), unit));
    }

    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("overnight") || trimmed.eq_ignore_ascii_case("o/n") {
        return Ok((Period::overnight(), Some(PeriodUnit::Overnight)));
    }
    Err(PeriodError::invalid_input(trimmed))
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatOptions::default()))
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Period {
    type Output = Period;

    fn add(self, rhs: Period) -> Period {
        Period(self.0 + rhs.0)
    }
}

impl Sub for Period {
    type Output = Period;

    fn sub(self, rhs: Period) -> Period {
        Period(self.0 - rhs.0)
    }
}

impl From<TimeDelta> for Period {
    fn from(delta: TimeDelta) -> Self {
        Self::from_delta(delta)
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Period::parse(&text).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_duration_unit() {
        assert_eq!(expand_duration_unit("W"), "Week");
        assert_eq!(expand_duration_unit("M"), "Month");
        assert_eq!(expand_duration_unit("Y"), "Year");
        assert_eq!(expand_duration_unit("O/N"), "O/N");
    }

    #[test]
    fn test_parse_matches() {
        let cases = [
            ("Overnight", Period::days(1.0)),
            ("O/N", Period::days(1.0)),
            ("1w", Period::weeks(1.0)),
            ("1W", Period::weeks(1.0)),
            ("1 week", Period::weeks(1.0)),
            ("1week", Period::weeks(1.0)),
            ("1 wk", Period::weeks(1.0)),
            ("1wk", Period::weeks(1.0)),
            ("2 weeks", Period::weeks(2.0)),
            ("2 wks", Period::weeks(2.0)),
            ("1", Period::years(1.0)),
            ("1Y", Period::years(1.0)),
            ("1 year", Period::years(1.0)),
            ("1year", Period::years(1.0)),
            ("1 yr", Period::years(1.0)),
            ("1yr", Period::years(1.0)),
            ("10years", Period::years(10.0)),
            ("10 years", Period::years(10.0)),
            ("10yrs", Period::years(10.0)),
            ("10 yrs", Period::years(10.0)),
            ("10y", Period::years(10.0)),
            ("10 y", Period::years(10.0)),
            ("10 Y", Period::years(10.0)),
            ("1m", Period::months(1.0)),
            ("1M", Period::months(1.0)),
            ("1 month", Period::months(1.0)),
            ("1month", Period::months(1.0)),
            ("10months", Period::months(10.0)),
            ("10 months", Period::months(10.0)),
        ];
        for (input, expected) in cases {
            assert_eq!(Period::parse(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_parse_rejects() {
        for input in ["1 yonth", "1 meay", "1 ms", "1 ys", "month", "year", "m", "y", "1-2Y"] {
            assert!(Period::parse(input).is_err(), "{input}");
        }
    }

    #[test]
    fn test_parse_ignores_decorations() {
        assert_eq!(Period::parse("1Y*").unwrap(), Period::years(1.0));
        assert_eq!(Period::parse("10m*").unwrap(), Period::months(10.0));
        for input in [" 1Y", "1Y ", " 1Y ", "1 Y", "1      Y", "1\tY", "1\tY\t\t", "1\nY"] {
            assert_eq!(Period::parse(input).unwrap(), Period::years(1.0), "{input:?}");
        }
        assert_eq!(Period::parse("NC1Y").unwrap(), Period::years(1.0));
        assert_eq!(Period::parse("nc10m").unwrap(), Period::months(10.0));
        assert_eq!(Period::parse(" nc 10m").unwrap(), Period::months(10.0));
    }

    #[test]
    fn test_parse_range() {
        let months = (Period::months(1.0), Period::months(10.0));
        let years = (Period::years(1.0), Period::years(10.0));
        assert_eq!(Period::parse_range("1-10M").unwrap(), months);
        for input in [
            "1-10", "1-10Y", "1-10 year", "1-10year", "1-10 yr", "1-10yr", "1 - 10years",
            "1 - 10 years",
        ] {
            assert_eq!(Period::parse_range(input).unwrap(), years, "{input}");
        }
        assert_eq!(
            Period::parse_range("1M - 10 Y").unwrap(),
            (Period::months(1.0), Period::years(10.0))
        );
        assert_eq!(
            Period::parse_range("  O/n    - 1Y").unwrap(),
            (Period::overnight(), Period::years(1.0))
        );
    }

    #[test]
    fn test_parse_range_rejects() {
        assert!(Period::parse_range("1Y - 10M").is_err());
        assert!(Period::parse_range("1Y -- 10Y").is_err());
        assert!(Period::parse_range("10Y").is_err());
    }

    #[test]
    fn test_long_form() {
        let cases = [
            (Period::zero(), "0"),
            (Period::days(1.0), "Overnight"),
            (Period::weeks(1.0), "1 Week"),
            (Period::weeks(2.0), "2 Weeks"),
            (Period::months(1.0), "1 Month"),
            (Period::months(10.0), "10 Months"),
            (Period::years(1.0), "1 Year"),
            (Period::years(10.0), "10 Years"),
        ];
        for (period, label) in cases {
            assert_eq!(period.format(FormatOptions::long()), label);
        }
    }

    #[test]
    fn test_short_form() {
        assert_eq!(Period::zero().to_string(), "0");
        assert_eq!(Period::days(1.0).to_string(), "O/N");
        assert_eq!(Period::weeks(2.0).to_string(), "2W");
        assert_eq!(Period::months(6.0).to_string(), "6M");
        assert_eq!(Period::years(1.0).to_string(), "1Y");
        assert_eq!(Period::years(99.0).to_string(), "99Y");
        assert_eq!(Period::months(54.0).to_string(), "4.5Y");
    }

    #[test]
    fn test_months_until_whole_quarter() {
        let expected = [
            (13.0, "13M"),
            (14.0, "14M"),
            (15.0, "1.25Y"),
            (16.0, "16M"),
            (17.0, "17M"),
            (18.0, "1.5Y"),
            (19.0, "19M"),
            (20.0, "20M"),
            (21.0, "1.75Y"),
            (22.0, "22M"),
            (23.0, "23M"),
            (24.0, "2Y"),
        ];
        for (months, label) in expected {
            assert_eq!(Period::months(months).to_string(), label);
        }
    }

    #[test]
    fn test_quantlib_form() {
        let options = FormatOptions::quantlib();
        assert_eq!(Period::days(1.0).format(options), "1D");
        assert_eq!(Period::years(1.5).format(options), "1Y6M");
        assert_eq!(Period::months(18.0).format(options), "1Y6M");
        assert_eq!(Period::years(5.0).format(options), "5Y");
    }

    #[test]
    fn test_rounding() {
        let period = Period::parse("10.234Y").unwrap();
        let options = FormatOptions::default()
            .with_round_ndigits(3)
            .with_only_quarter_years(false);
        assert_eq!(period.format(options), "10.234Y");
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        assert_eq!(Period::years(1.0) + Period::months(6.0), Period::months(18.0));
        assert_eq!(Period::years(1.0) - Period::months(12.0), Period::zero());
        assert!(Period::weeks(2.0) < Period::months(1.0));
        assert!((Period::years(2.0).total_months() - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde() {
        let period = Period::months(18.0);
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, "\"1.5Y\"");
        let parsed: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, period);
        assert!(serde_json::from_str::<Period>("\"soon\"").is_err());
    }
}
