//! Rate fixing conventions for floating benchmarks.
//!
//! Fixing descriptions are shared by several funding bases and are not an
//! enumeration in their own right: LIBOR appears twice with different lags.
//!
//! # Example
//!
//! ```rust
//! use origin_constants::fixings::Fixings;
//!
//! let sonia = &Fixings::global().sonia;
//! assert_eq!(sonia.benchmark_base(), "SONIA");
//! assert_eq!(sonia.days_prior_to_fixing(), 5);
//! ```

use std::sync::{Arc, OnceLock};

use chrono::NaiveTime;
use origin_core::{Constant, Member};

use crate::calendars::{Calendar, Calendars};

/// When and where a floating benchmark is fixed.
#[derive(Debug)]
pub struct FixingInfo {
    constant: Constant<String>,
    days_prior_to_fixing: u32,
    fixing_time: NaiveTime,
    fixing_location: String,
    calendar: Arc<Calendar>,
}

origin_core::impl_member!(FixingInfo, String, constant);

impl FixingInfo {
    /// Creates a frozen fixing description. The benchmark name is both value and label.
    pub fn new(
        benchmark_base: impl Into<String>,
        days_prior_to_fixing: u32,
        fixing_time: NaiveTime,
        fixing_location: impl Into<String>,
        calendar: Arc<Calendar>,
    ) -> Self {
        let benchmark_base = benchmark_base.into();
        let info = Self {
            constant: Constant::new(benchmark_base.clone(), benchmark_base),
            days_prior_to_fixing,
            fixing_time,
            fixing_location: fixing_location.into(),
            calendar,
        };
        info.constant.make_immutable();
        info
    }

    /// Benchmark name, e.g. `EURIBOR`.
    pub fn benchmark_base(&self) -> String {
        self.value()
    }

    /// Business days between fixing and the start of the period.
    pub fn days_prior_to_fixing(&self) -> u32 {
        self.days_prior_to_fixing
    }

    /// Local publication time.
    pub fn fixing_time(&self) -> NaiveTime {
        self.fixing_time
    }

    /// Where the fixing is published.
    pub fn fixing_location(&self) -> &str {
        &self.fixing_location
    }

    /// Calendar used to count fixing days.
    pub fn calendar(&self) -> &Arc<Calendar> {
        &self.calendar
    }
}

/// The fixing descriptions used by the funding basis catalog.
#[derive(Debug)]
pub struct Fixings {
    /// EURIBOR, two days prior, 11:00 Brussels.
    pub euribor: Arc<FixingInfo>,
    /// LIBOR, two days prior, 11:00 London.
    pub libor_two_days: Arc<FixingInfo>,
    /// LIBOR, same day, 11:00 London.
    pub libor_zero_days: Arc<FixingInfo>,
    /// SONIA, five days prior, 09:00 London.
    pub sonia: Arc<FixingInfo>,
    /// BBSW, same day, 10:00 Sydney.
    pub bbsw: Arc<FixingInfo>,
    /// STIBOR, two days prior, 11:00 CET.
    pub stibor: Arc<FixingInfo>,
    /// NIBOR, two days prior, 11:00 CET.
    pub nibor: Arc<FixingInfo>,
    /// CDOR, same day, 10:00 Toronto.
    pub cad_ba_cdor: Arc<FixingInfo>,
    /// NZD bank bill rate, same day, 11:00 Auckland.
    pub bank_bill_rate: Arc<FixingInfo>,
    /// PRIBOR, two days prior, 11:00 Prague.
    pub pribor: Arc<FixingInfo>,
    /// HIBOR, same day, 11:00 Hong Kong.
    pub hibor: Arc<FixingInfo>,
    /// SIBOR, same day, 11:00 Singapore.
    pub sibor: Arc<FixingInfo>,
    /// JIBAR, same day, 12:00 Johannesburg.
    pub jibar: Arc<FixingInfo>,
}

static GLOBAL_FIXINGS: OnceLock<Fixings> = OnceLock::new();

fn at(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
}

fn fixing(
    benchmark_base: &str,
    days_prior_to_fixing: u32,
    hour: u32,
    fixing_location: &str,
    calendar: &Arc<Calendar>,
) -> Arc<FixingInfo> {
    Arc::new(FixingInfo::new(
        benchmark_base,
        days_prior_to_fixing,
        at(hour),
        fixing_location,
        Arc::clone(calendar),
    ))
}

impl Fixings {
    fn new() -> Self {
        let calendars = Calendars::global();
        Self {
            euribor: fixing("EURIBOR", 2, 11, "Brussels", &calendars.target2),
            libor_two_days: fixing("LIBOR", 2, 11, "London", &calendars.london),
            libor_zero_days: fixing("LIBOR", 0, 11, "London", &calendars.london),
            sonia: fixing("SONIA", 5, 9, "London", &calendars.london),
            bbsw: fixing("BBSW", 0, 10, "Sydney", &calendars.sydney),
            stibor: fixing("STIBOR", 2, 11, "(CET)", &calendars.stockholm),
            nibor: fixing("NIBOR", 2, 11, "(CET)", &calendars.oslo),
            cad_ba_cdor: fixing("CAD-BA-CDOR", 0, 10, "Toronto", &calendars.toronto),
            bank_bill_rate: fixing("Bank Bill Rate", 0, 11, "Auckland", &calendars.auckland),
            pribor: fixing("PRIBOR", 2, 11, "Prague", &calendars.prague),
            hibor: fixing("HIBOR", 0, 11, "Hong Kong", &calendars.hong_kong),
            sibor: fixing("SIBOR", 0, 11, "Singapore", &calendars.singapore),
            jibar: fixing("JIBAR", 0, 12, "Johannesburg", &calendars.johannesburg),
        }
    }

    /// The process-wide fixing descriptions.
    pub fn global() -> &'static Self {
        GLOBAL_FIXINGS.get_or_init(Self::new)
    }
}
