//! # Origin Constants
//!
//! Reference-data catalogs for fixed income issuance.
//!
//! This crate provides:
//!
//! - **Conventions**: calendars, adjustments, business day conventions,
//!   day counts and payment frequencies
//! - **Currencies**: ISO currencies with symbols, G10 membership and calendars
//! - **Tenors**: standard tenors valued by [`Period`](period::Period)
//! - **Funding Bases**: the MTN catalog and the derived CD catalog
//! - **Periods**: parsing and formatting of tenor text such as `3M` or `1-10Y`
//!
//! Every catalog is an [`origin_core::Constants`] enumeration with a lazily
//! built, frozen, process-wide instance.
//!
//! ## Example
//!
//! ```rust
//! use origin_constants::prelude::*;
//!
//! let currencies = Currencies::global();
//! assert_eq!(currencies.get_name("USD").unwrap(), "US Dollar (USD)");
//!
//! let tenors = Tenors::global();
//! let three_months = Period::parse("3M").unwrap();
//! assert_eq!(tenors.get(&three_months).unwrap().label(), "3M");
//! assert!(tenors.one_month.is_callable_tenor());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]

pub mod adjustments;
pub mod business_day_conventions;
pub mod calendars;
pub mod currencies;
pub mod day_counts;
pub mod error;
pub mod fixings;
pub mod funding_bases;
pub mod payment_frequencies;
pub mod period;
pub mod tenors;

pub use error::{PeriodError, PeriodResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adjustments::{Adjustment, Adjustments};
    pub use crate::business_day_conventions::{BusinessDayConvention, BusinessDayConventions};
    pub use crate::calendars::{Calendar, Calendars};
    pub use crate::currencies::{Currencies, Currency};
    pub use crate::day_counts::{DayCount, DayCounts};
    pub use crate::error::{PeriodError, PeriodResult};
    pub use crate::fixings::{FixingInfo, Fixings};
    pub use crate::funding_bases::{
        cd_funding_bases, BasisKind, BasisTerms, BasisType, FloatingTerms, FundingBases,
        FundingBasis, MidSwapTerms, MtnFundingBases,
    };
    pub use crate::payment_frequencies::{PaymentFrequencies, PaymentFrequency};
    pub use crate::period::{expand_duration_unit, FormatOptions, Period, PeriodUnit};
    pub use crate::tenors::{Tenor, Tenors};
    pub use origin_core::prelude::*;
}
