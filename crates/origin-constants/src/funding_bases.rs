//! Funding bases: the rate conventions an issuer can fund at.
//!
//! A basis is floating (an IBOR or overnight index), fixed, mid-swap against
//! a floating basis, or a government bond benchmark. Two catalogs exist: the
//! MTN catalog declared here, and a CD catalog derived from it that swaps in
//! money-market conventions for the USD, EUR and GBP fixed bases.
//!
//! # Example
//!
//! ```rust
//! use origin_constants::funding_bases::{BasisType, FundingBases};
//! use origin_core::Member;
//!
//! let bases = FundingBases::global();
//! assert_eq!(bases.eur_3m.basis_type(), BasisType::Floating);
//! assert_eq!(bases.eur_fixed.value(), "FIXED_EUR");
//! assert_eq!(bases.eur_fixed.legal_label(), Some("Fixed Rate EUR"));
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use origin_core::{Choice, ChoiceFilter, Constant, Constants, ConstantsBuilder, Enumerated};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjustments::{Adjustment, Adjustments};
use crate::business_day_conventions::{BusinessDayConvention, BusinessDayConventions};
use crate::calendars::{Calendar, Calendars};
use crate::currencies::{Currencies, Currency};
use crate::day_counts::{DayCount, DayCounts};
use crate::fixings::{FixingInfo, Fixings};
use crate::payment_frequencies::{PaymentFrequencies, PaymentFrequency};

/// The four families of funding basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasisType {
    /// Government bond benchmark.
    Govie,
    /// Mid-swap against a floating basis.
    Ms,
    /// Fixed coupon.
    Fixed,
    /// Floating index.
    Floating,
}

impl BasisType {
    /// Lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Govie => "govie",
            Self::Ms => "ms",
            Self::Fixed => "fixed",
            Self::Floating => "floating",
        }
    }
}

impl fmt::Display for BasisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conventions shared by every kind of basis.
#[derive(Debug, Clone)]
pub struct BasisTerms {
    currency: Arc<Currency>,
    payment_frequency: Arc<PaymentFrequency>,
    day_count: Arc<DayCount>,
    sorting: i32,
    adjustment: Option<Arc<Adjustment>>,
    business_day_convention: Option<Arc<BusinessDayConvention>>,
    pricing: bool,
    calendars_for_payment: Vec<Arc<Calendar>>,
}

impl BasisTerms {
    /// Terms with no adjustment, no payment calendars, priced.
    pub fn new(
        currency: &Arc<Currency>,
        payment_frequency: &Arc<PaymentFrequency>,
        day_count: &Arc<DayCount>,
        sorting: i32,
    ) -> Self {
        Self {
            currency: Arc::clone(currency),
            payment_frequency: Arc::clone(payment_frequency),
            day_count: Arc::clone(day_count),
            sorting,
            adjustment: None,
            business_day_convention: None,
            pricing: true,
            calendars_for_payment: Vec::new(),
        }
    }

    /// Sets the accrual adjustment.
    pub fn adjustment(mut self, adjustment: &Arc<Adjustment>) -> Self {
        self.adjustment = Some(Arc::clone(adjustment));
        self
    }

    /// Sets the business day convention.
    pub fn business_day_convention(mut self, convention: &Arc<BusinessDayConvention>) -> Self {
        self.business_day_convention = Some(Arc::clone(convention));
        self
    }

    /// Excludes the basis from pricing screens.
    pub fn not_priced(mut self) -> Self {
        self.pricing = false;
        self
    }

    /// Sets the calendars used to roll payment dates.
    pub fn payment_calendars<'a>(
        mut self,
        calendars: impl IntoIterator<Item = &'a Arc<Calendar>>,
    ) -> Self {
        self.calendars_for_payment = calendars.into_iter().map(Arc::clone).collect();
        self
    }
}

/// Attributes specific to a floating basis.
#[derive(Debug, Clone)]
pub struct FloatingTerms {
    index: i32,
    screen_page: String,
    fixing_info: Option<Arc<FixingInfo>>,
    callable: bool,
}

impl FloatingTerms {
    /// A callable floating basis on the given index tenor (in months) and screen page.
    pub fn new(index: i32, screen_page: impl Into<String>) -> Self {
        Self {
            index,
            screen_page: screen_page.into(),
            fixing_info: None,
            callable: true,
        }
    }

    /// Sets how the index is fixed.
    pub fn fixing_info(mut self, fixing_info: &Arc<FixingInfo>) -> Self {
        self.fixing_info = Some(Arc::clone(fixing_info));
        self
    }

    /// Marks the basis as unavailable for callable issues.
    pub fn not_callable(mut self) -> Self {
        self.callable = false;
        self
    }
}

/// Attributes specific to a mid-swap basis.
#[derive(Debug, Clone)]
pub struct MidSwapTerms {
    floating_basis: Arc<FundingBasis>,
    ms_payment_frequency: Arc<PaymentFrequency>,
    display_payment_frequency: Arc<PaymentFrequency>,
    ms_day_count: Arc<DayCount>,
}

impl MidSwapTerms {
    /// Swap terms against `floating_basis`.
    pub fn new(
        floating_basis: &Arc<FundingBasis>,
        ms_payment_frequency: &Arc<PaymentFrequency>,
        display_payment_frequency: &Arc<PaymentFrequency>,
        ms_day_count: &Arc<DayCount>,
    ) -> Self {
        Self {
            floating_basis: Arc::clone(floating_basis),
            ms_payment_frequency: Arc::clone(ms_payment_frequency),
            display_payment_frequency: Arc::clone(display_payment_frequency),
            ms_day_count: Arc::clone(ms_day_count),
        }
    }
}

/// Kind-specific attributes of a basis.
#[derive(Debug, Clone)]
pub enum BasisKind {
    /// A floating index.
    Floating(FloatingTerms),
    /// A fixed coupon.
    Fixed,
    /// Mid-swap against a floating basis.
    MidSwap(MidSwapTerms),
    /// A government benchmark.
    Govie {
        /// Short issuer name, e.g. `Rep Italy`.
        issuer_short_name: String,
    },
}

/// One funding basis.
#[derive(Debug)]
pub struct FundingBasis {
    constant: Constant<String>,
    terms: BasisTerms,
    legal_label: Option<String>,
    kind: BasisKind,
}

origin_core::impl_member!(FundingBasis, String, constant);

impl FundingBasis {
    /// A floating basis.
    pub fn floating(
        value: impl Into<String>,
        label: impl Into<String>,
        floating: FloatingTerms,
        terms: BasisTerms,
    ) -> Self {
        Self {
            constant: Constant::new(value, label),
            terms,
            legal_label: None,
            kind: BasisKind::Floating(floating),
        }
    }

    /// A fixed basis, valued `FIXED_<ccy>` and labelled `<ccy> Fixed`.
    pub fn fixed(terms: BasisTerms) -> Self {
        let code = terms.currency.code();
        Self {
            constant: Constant::new(format!("FIXED_{code}"), format!("{code} Fixed")),
            legal_label: Some(format!("Fixed Rate {code}")),
            terms,
            kind: BasisKind::Fixed,
        }
    }

    /// A mid-swap basis, valued `MS_<ccy>` and labelled `<ccy> M/S`.
    pub fn mid_swap(mid_swap: MidSwapTerms, terms: BasisTerms) -> Self {
        let code = terms.currency.code();
        Self {
            constant: Constant::new(format!("MS_{code}"), format!("{code} M/S")),
            legal_label: None,
            terms,
            kind: BasisKind::MidSwap(mid_swap),
        }
    }

    /// A government benchmark basis.
    pub fn govie(
        value: impl Into<String>,
        label: impl Into<String>,
        issuer_short_name: impl Into<String>,
        terms: BasisTerms,
    ) -> Self {
        Self {
            constant: Constant::new(value, label),
            terms,
            legal_label: None,
            kind: BasisKind::Govie {
                issuer_short_name: issuer_short_name.into(),
            },
        }
    }

    /// Sets the wording used in legal documentation.
    pub fn with_legal_label(mut self, legal_label: impl Into<String>) -> Self {
        self.legal_label = Some(legal_label.into());
        self
    }

    /// Which family the basis belongs to.
    pub fn basis_type(&self) -> BasisType {
        match self.kind {
            BasisKind::Floating(_) => BasisType::Floating,
            BasisKind::Fixed => BasisType::Fixed,
            BasisKind::MidSwap(_) => BasisType::Ms,
            BasisKind::Govie { .. } => BasisType::Govie,
        }
    }

    /// Kind-specific attributes.
    pub fn kind(&self) -> &BasisKind {
        &self.kind
    }

    /// Returns true for a fixed basis.
    pub fn is_fixed_basis(&self) -> bool {
        matches!(self.kind, BasisKind::Fixed)
    }

    /// Returns true for a floating basis.
    pub fn is_floating_basis(&self) -> bool {
        matches!(self.kind, BasisKind::Floating(_))
    }

    /// Returns true for a mid-swap basis.
    pub fn is_ms_basis(&self) -> bool {
        matches!(self.kind, BasisKind::MidSwap(_))
    }

    /// Returns true for a government benchmark.
    pub fn is_govie_basis(&self) -> bool {
        matches!(self.kind, BasisKind::Govie { .. })
    }

    /// Only floating bases can back a callable issue, and not all of them.
    pub fn is_callable_basis(&self) -> bool {
        matches!(&self.kind, BasisKind::Floating(floating) if floating.callable)
    }

    /// Index tenor in months; zero for anything but a floating basis.
    pub fn index(&self) -> i32 {
        match &self.kind {
            BasisKind::Floating(floating) => floating.index,
            _ => 0,
        }
    }

    /// Rate source page of a floating basis.
    pub fn screen_page(&self) -> Option<&str> {
        match &self.kind {
            BasisKind::Floating(floating) => Some(&floating.screen_page),
            _ => None,
        }
    }

    /// Fixing convention of a floating basis.
    pub fn fixing_info(&self) -> Option<&Arc<FixingInfo>> {
        match &self.kind {
            BasisKind::Floating(floating) => floating.fixing_info.as_ref(),
            _ => None,
        }
    }

    /// The floating leg of a mid-swap basis.
    pub fn floating_basis(&self) -> Option<&Arc<FundingBasis>> {
        match &self.kind {
            BasisKind::MidSwap(mid_swap) => Some(&mid_swap.floating_basis),
            _ => None,
        }
    }

    /// Swap leg frequency of a mid-swap basis.
    pub fn ms_payment_frequency(&self) -> Option<&Arc<PaymentFrequency>> {
        match &self.kind {
            BasisKind::MidSwap(mid_swap) => Some(&mid_swap.ms_payment_frequency),
            _ => None,
        }
    }

    /// Frequency shown to users for a mid-swap basis.
    pub fn display_payment_frequency(&self) -> Option<&Arc<PaymentFrequency>> {
        match &self.kind {
            BasisKind::MidSwap(mid_swap) => Some(&mid_swap.display_payment_frequency),
            _ => None,
        }
    }

    /// Swap leg day count of a mid-swap basis.
    pub fn ms_day_count(&self) -> Option<&Arc<DayCount>> {
        match &self.kind {
            BasisKind::MidSwap(mid_swap) => Some(&mid_swap.ms_day_count),
            _ => None,
        }
    }

    /// Issuer of a government benchmark.
    pub fn issuer_short_name(&self) -> Option<&str> {
        match &self.kind {
            BasisKind::Govie { issuer_short_name } => Some(issuer_short_name),
            _ => None,
        }
    }

    /// Wording used in legal documentation.
    pub fn legal_label(&self) -> Option<&str> {
        self.legal_label.as_deref()
    }

    /// Currency of the basis.
    pub fn currency(&self) -> &Arc<Currency> {
        &self.terms.currency
    }

    /// The currency's display symbol.
    pub fn symbol(&self) -> &str {
        self.terms.currency.symbol()
    }

    /// Coupon frequency.
    pub fn payment_frequency(&self) -> &Arc<PaymentFrequency> {
        &self.terms.payment_frequency
    }

    /// Coupon day count.
    pub fn day_count(&self) -> &Arc<DayCount> {
        &self.terms.day_count
    }

    /// Display rank; non-decreasing in declaration order.
    pub fn sorting(&self) -> i32 {
        self.terms.sorting
    }

    /// Accrual adjustment, if any.
    pub fn adjustment(&self) -> Option<&Arc<Adjustment>> {
        self.terms.adjustment.as_ref()
    }

    /// Business day convention, if any.
    pub fn business_day_convention(&self) -> Option<&Arc<BusinessDayConvention>> {
        self.terms.business_day_convention.as_ref()
    }

    /// Whether the basis appears on pricing screens.
    pub fn pricing(&self) -> bool {
        self.terms.pricing
    }

    /// Calendars used to roll payment dates.
    pub fn calendars_for_payment(&self) -> &[Arc<Calendar>] {
        &self.terms.calendars_for_payment
    }
}

/// Restricts choices to callable bases.
pub const CALLABLE: ChoiceFilter<FundingBasis> =
    ChoiceFilter::new("callable", FundingBasis::is_callable_basis);

/// Restricts choices to priced bases.
pub const PRICING: ChoiceFilter<FundingBasis> = ChoiceFilter::new("pricing", FundingBasis::pricing);

const CALLABLE_PRICING: ChoiceFilter<FundingBasis> =
    ChoiceFilter::new("callable_pricing", |basis| basis.is_callable_basis() && basis.pricing());
const CALLABLE_NOT_PRICING: ChoiceFilter<FundingBasis> =
    ChoiceFilter::new("callable_not_pricing", |basis| basis.is_callable_basis() && !basis.pricing());
const NOT_CALLABLE: ChoiceFilter<FundingBasis> =
    ChoiceFilter::new("not_callable", |basis| !basis.is_callable_basis());
const NOT_CALLABLE_PRICING: ChoiceFilter<FundingBasis> =
    ChoiceFilter::new("not_callable_pricing", |basis| !basis.is_callable_basis() && basis.pricing());
const NOT_CALLABLE_NOT_PRICING: ChoiceFilter<FundingBasis> = ChoiceFilter::new(
    "not_callable_not_pricing",
    |basis| !basis.is_callable_basis() && !basis.pricing(),
);
const NOT_PRICING: ChoiceFilter<FundingBasis> =
    ChoiceFilter::new("not_pricing", |basis| !basis.pricing());

/// Choices of `registry` whose callable and pricing flags match the given
/// values. `None` leaves a flag unconstrained. Each combination is cached.
pub fn choices_for(
    registry: &Constants<FundingBasis>,
    is_callable_basis: Option<bool>,
    pricing: Option<bool>,
) -> Arc<[Choice<String>]> {
    let filter = match (is_callable_basis, pricing) {
        (None, None) => return registry.to_choices(),
        (Some(true), None) => &CALLABLE,
        (Some(false), None) => &NOT_CALLABLE,
        (None, Some(true)) => &PRICING,
        (None, Some(false)) => &NOT_PRICING,
        (Some(true), Some(true)) => &CALLABLE_PRICING,
        (Some(true), Some(false)) => &CALLABLE_NOT_PRICING,
        (Some(false), Some(true)) => &NOT_CALLABLE_PRICING,
        (Some(false), Some(false)) => &NOT_CALLABLE_NOT_PRICING,
    };
    registry.to_choices_filtered(filter)
}

fn currencies() -> &'static Currencies {
    Currencies::global()
}

fn frequencies() -> &'static PaymentFrequencies {
    PaymentFrequencies::global()
}

fn day_counts() -> &'static DayCounts {
    DayCounts::global()
}

fn adjustments() -> &'static Adjustments {
    Adjustments::global()
}

fn conventions() -> &'static BusinessDayConventions {
    BusinessDayConventions::global()
}

fn calendars() -> &'static Calendars {
    Calendars::global()
}

fn fixings() -> &'static Fixings {
    Fixings::global()
}

fn terms(
    currency: &Arc<Currency>,
    payment_frequency: &Arc<PaymentFrequency>,
    day_count: &Arc<DayCount>,
    sorting: i32,
) -> BasisTerms {
    BasisTerms::new(currency, payment_frequency, day_count, sorting)
}

origin_core::constants! {
    /// The MTN funding basis catalog, in display order.
    pub struct FundingBases<FundingBasis> {
        eur_3m = FundingBasis::floating(
            "3M_EUR",
            "3mEURIBOR",
            FloatingTerms::new(3, "EURIBOR01")
                .fixing_info(&fixings().euribor),
            terms(&currencies().eur, &frequencies().quarterly, &day_counts().actual_360, 0)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        )
        .with_legal_label("3 month EURIBOR"),
        eur_6m = FundingBasis::floating(
            "6M_EUR",
            "6mEURIBOR",
            FloatingTerms::new(6, "EURIBOR01")
                .fixing_info(&fixings().euribor),
            terms(&currencies().eur, &frequencies().semi_annually, &day_counts().actual_360, 10)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        )
        .with_legal_label("6 month EURIBOR"),
        eur_fixed = FundingBasis::fixed(
            terms(&currencies().eur, &frequencies().annually, &day_counts().actual_actual_icma, 20)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().following)
                .payment_calendars([&calendars().target2]),
        ),
        eur_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &eur_6m,
                &frequencies().semi_annually,
                &frequencies().annually,
                &day_counts().actual_360,
            ),
            terms(&currencies().eur, &frequencies().annually, &day_counts().thirty_360, 30)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        ),
        usd_3m = FundingBasis::floating(
            "3M_USD",
            "3mUSD-LIBOR",
            FloatingTerms::new(3, "LIBOR01")
                .fixing_info(&fixings().libor_two_days),
            terms(&currencies().usd, &frequencies().quarterly, &day_counts().actual_360, 40)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().new_york]),
        )
        .with_legal_label("3 month USD LIBOR"),
        usd_6m = FundingBasis::floating(
            "6M_USD",
            "6mUSD-LIBOR",
            FloatingTerms::new(6, "LIBOR01")
                .fixing_info(&fixings().libor_two_days),
            terms(&currencies().usd, &frequencies().semi_annually, &day_counts().actual_360, 50)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().new_york]),
        )
        .with_legal_label("6 month USD LIBOR"),
        usd_fixed = FundingBasis::fixed(
            terms(&currencies().usd, &frequencies().semi_annually, &day_counts().thirty_360, 60)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().following)
                .payment_calendars([&calendars().new_york]),
        ),
        usd_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &usd_3m,
                &frequencies().quarterly,
                &frequencies().semi_annually,
                &day_counts().actual_360,
            ),
            terms(&currencies().usd, &frequencies().semi_annually, &day_counts().thirty_360, 70)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().new_york]),
        ),
        gbp_sonia = FundingBasis::floating(
            "SONIA",
            "SONIA",
            FloatingTerms::new(0, "SONIA")
                .fixing_info(&fixings().sonia),
            terms(&currencies().gbp, &frequencies().quarterly, &day_counts().actual_365, 75)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .not_priced()
                .payment_calendars([&calendars().london]),
        )
        .with_legal_label("Compounded Daily SONIA"),
        gbp_3m = FundingBasis::floating(
            "3M_GBP",
            "3mGBP-LIBOR",
            FloatingTerms::new(3, "LIBOR01")
                .fixing_info(&fixings().libor_zero_days),
            terms(&currencies().gbp, &frequencies().quarterly, &day_counts().actual_365, 80)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london]),
        )
        .with_legal_label("3 month GBP LIBOR"),
        gbp_6m = FundingBasis::floating(
            "6M_GBP",
            "6mGBP-LIBOR",
            FloatingTerms::new(6, "LIBOR01")
                .fixing_info(&fixings().libor_zero_days),
            terms(&currencies().gbp, &frequencies().semi_annually, &day_counts().actual_365, 90)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london]),
        )
        .with_legal_label("6 month GBP LIBOR"),
        gbp_fixed = FundingBasis::fixed(
            terms(&currencies().gbp, &frequencies().annually, &day_counts().actual_actual_icma, 100)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().following)
                .payment_calendars([&calendars().london]),
        ),
        gbp_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &gbp_6m,
                &frequencies().semi_annually,
                &frequencies().semi_annually,
                &day_counts().actual_365,
            ),
            terms(&currencies().gbp, &frequencies().semi_annually, &day_counts().actual_365, 110)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london]),
        ),
        jpy_3m = FundingBasis::floating(
            "3M_JPY",
            "3mJPY-LIBOR",
            FloatingTerms::new(3, "LIBOR01")
                .fixing_info(&fixings().libor_two_days),
            terms(&currencies().jpy, &frequencies().quarterly, &day_counts().actual_360, 120)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().tokyo]),
        )
        .with_legal_label("3 month JPY LIBOR"),
        jpy_6m = FundingBasis::floating(
            "6M_JPY",
            "6mJPY-LIBOR",
            FloatingTerms::new(6, "LIBOR01")
                .fixing_info(&fixings().libor_two_days),
            terms(&currencies().jpy, &frequencies().semi_annually, &day_counts().actual_360, 130)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().tokyo]),
        )
        .with_legal_label("6 month JPY LIBOR"),
        jpy_fixed = FundingBasis::fixed(
            terms(&currencies().jpy, &frequencies().semi_annually, &day_counts().thirty_360, 140)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().tokyo]),
        ),
        jpy_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &jpy_6m,
                &frequencies().semi_annually,
                &frequencies().semi_annually,
                &day_counts().actual_360,
            ),
            terms(&currencies().jpy, &frequencies().semi_annually, &day_counts().actual_365_nl, 150)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().tokyo]),
        ),
        chf_3m = FundingBasis::floating(
            "3M_CHF",
            "3mCHF-LIBOR",
            FloatingTerms::new(3, "LIBOR01")
                .fixing_info(&fixings().libor_two_days),
            terms(&currencies().chf, &frequencies().quarterly, &day_counts().actual_360, 160)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().zurich]),
        )
        .with_legal_label("3 month CHF LIBOR"),
        chf_6m = FundingBasis::floating(
            "6M_CHF",
            "6mCHF-LIBOR",
            FloatingTerms::new(6, "LIBOR01")
                .fixing_info(&fixings().libor_two_days),
            terms(&currencies().chf, &frequencies().semi_annually, &day_counts().actual_360, 170)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().zurich]),
        )
        .with_legal_label("6 month CHF LIBOR"),
        chf_fixed = FundingBasis::fixed(
            terms(&currencies().chf, &frequencies().annually, &day_counts().thirty_360, 180)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().following)
                .payment_calendars([&calendars().zurich]),
        ),
        chf_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &chf_6m,
                &frequencies().semi_annually,
                &frequencies().annually,
                &day_counts().actual_360,
            ),
            terms(&currencies().chf, &frequencies().annually, &day_counts().thirty_360, 190)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().london, &calendars().zurich]),
        ),
        aud_3m = FundingBasis::floating(
            "3M_AUD",
            "3mBBSW",
            FloatingTerms::new(3, "BBSW")
                .fixing_info(&fixings().bbsw),
            terms(&currencies().aud, &frequencies().quarterly, &day_counts().actual_365, 200)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().sydney]),
        )
        .with_legal_label("3 month BBSW"),
        aud_6m = FundingBasis::floating(
            "6M_AUD",
            "6mBBSW",
            FloatingTerms::new(6, "BBSW")
                .fixing_info(&fixings().bbsw),
            terms(&currencies().aud, &frequencies().semi_annually, &day_counts().actual_365, 210)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().sydney]),
        )
        .with_legal_label("6 month BBSW"),
        aud_fixed = FundingBasis::fixed(
            terms(&currencies().aud, &frequencies().semi_annually, &day_counts().actual_actual_icma, 220)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().sydney]),
        ),
        aud_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &aud_3m,
                &frequencies().quarterly,
                &frequencies().quarterly,
                &day_counts().actual_365,
            ),
            terms(&currencies().aud, &frequencies().semi_annually, &day_counts().actual_365, 230)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().sydney]),
        ),
        sek_3m = FundingBasis::floating(
            "3M_SEK",
            "3mSTIBOR",
            FloatingTerms::new(3, "SIDE")
                .fixing_info(&fixings().stibor),
            terms(&currencies().sek, &frequencies().quarterly, &day_counts().actual_360, 240)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().stockholm]),
        )
        .with_legal_label("3 month STIBOR"),
        sek_fixed = FundingBasis::fixed(
            terms(&currencies().sek, &frequencies().annually, &day_counts().thirty_360, 250)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().following)
                .payment_calendars([&calendars().stockholm]),
        )
        .with_legal_label("SEK Fixed Rate"),
        sek_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &sek_3m,
                &frequencies().quarterly,
                &frequencies().annually,
                &day_counts().actual_360,
            ),
            terms(&currencies().sek, &frequencies().annually, &day_counts().thirty_360, 260)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().stockholm]),
        ),
        nok_3m = FundingBasis::floating(
            "3M_NOK",
            "3mNIBOR",
            FloatingTerms::new(3, "ORIBOR")
                .fixing_info(&fixings().nibor),
            terms(&currencies().nok, &frequencies().quarterly, &day_counts().actual_360, 270)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().oslo]),
        )
        .with_legal_label("3 month NIBOR"),
        nok_6m = FundingBasis::floating(
            "6M_NOK",
            "6mNIBOR",
            FloatingTerms::new(6, "ORIBOR")
                .fixing_info(&fixings().nibor),
            terms(&currencies().nok, &frequencies().semi_annually, &day_counts().actual_360, 280)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().oslo]),
        )
        .with_legal_label("6 month NIBOR"),
        nok_fixed = FundingBasis::fixed(
            terms(&currencies().nok, &frequencies().annually, &day_counts().actual_actual_icma, 290)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().following)
                .payment_calendars([&calendars().oslo]),
        )
        .with_legal_label("NOK Fixed Rate"),
        nok_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &nok_6m,
                &frequencies().quarterly,
                &frequencies().annually,
                &day_counts().actual_360,
            ),
            terms(&currencies().nok, &frequencies().annually, &day_counts().thirty_360, 300)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().oslo]),
        ),
        cad_3m = FundingBasis::floating(
            "3M_CAD",
            "3mCAD-BA-CDOR",
            FloatingTerms::new(3, "CDOR")
                .fixing_info(&fixings().cad_ba_cdor),
            terms(&currencies().cad, &frequencies().quarterly, &day_counts().actual_365, 310)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().toronto]),
        )
        .with_legal_label("3 month BA-CDOR"),
        cad_fixed = FundingBasis::fixed(
            terms(&currencies().cad, &frequencies().semi_annually, &day_counts().actual_365, 320)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().toronto]),
        )
        .with_legal_label("CAD Fixed Rate"),
        cad_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &cad_3m,
                &frequencies().quarterly,
                &frequencies().semi_annually,
                &day_counts().actual_365,
            ),
            terms(&currencies().cad, &frequencies().semi_annually, &day_counts().actual_365, 330)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().toronto]),
        ),
        nzd_3m = FundingBasis::floating(
            "3M_NZD",
            "3mNZD-BB",
            FloatingTerms::new(3, "")
                .fixing_info(&fixings().bank_bill_rate),
            terms(&currencies().nzd, &frequencies().quarterly, &day_counts().actual_365, 340)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().auckland]),
        )
        .with_legal_label("3 month NZD-BB"),
        nzd_fixed = FundingBasis::fixed(
            terms(&currencies().nzd, &frequencies().semi_annually, &day_counts().actual_actual_icma, 350)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().auckland]),
        ),
        nzd_ms = FundingBasis::mid_swap(
            MidSwapTerms::new(
                &nzd_3m,
                &frequencies().quarterly,
                &frequencies().semi_annually,
                &day_counts().actual_365,
            ),
            terms(&currencies().nzd, &frequencies().semi_annually, &day_counts().actual_365, 360)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().auckland]),
        ),
        hkd_3m = FundingBasis::floating(
            "3M_HKD",
            "3mHIBOR",
            FloatingTerms::new(3, "HKABHIBOR")
                .fixing_info(&fixings().hibor),
            terms(&currencies().hkd, &frequencies().quarterly, &day_counts().actual_365, 368)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().hong_kong]),
        )
        .with_legal_label("3 month HIBOR"),
        hkd_6m = FundingBasis::floating(
            "6M_HKD",
            "6mHIBOR",
            FloatingTerms::new(6, "HKABHIBOR")
                .fixing_info(&fixings().hibor),
            terms(&currencies().hkd, &frequencies().semi_annually, &day_counts().actual_365, 369)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().hong_kong]),
        )
        .with_legal_label("6 month HIBOR"),
        hkd_fixed = FundingBasis::fixed(
            terms(&currencies().hkd, &frequencies().quarterly, &day_counts().actual_365, 370)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().hong_kong]),
        ),
        sgd_3m = FundingBasis::floating(
            "3M_SGD",
            "3mSIBOR",
            FloatingTerms::new(3, "ABSIRFIX01")
                .fixing_info(&fixings().sibor),
            terms(&currencies().sgd, &frequencies().quarterly, &day_counts().actual_365, 373)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().singapore]),
        )
        .with_legal_label("3 month SIBOR"),
        sgd_6m = FundingBasis::floating(
            "6M_SGD",
            "6mSIBOR",
            FloatingTerms::new(6, "ABSIRFIX01")
                .fixing_info(&fixings().sibor),
            terms(&currencies().sgd, &frequencies().semi_annually, &day_counts().actual_365, 374)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().singapore]),
        )
        .with_legal_label("6 month SIBOR"),
        sgd_fixed = FundingBasis::fixed(
            terms(&currencies().sgd, &frequencies().semi_annually, &day_counts().actual_365, 375)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().singapore]),
        ),
        cnh_fixed = FundingBasis::fixed(
            terms(&currencies().cnh, &frequencies().annually, &day_counts().actual_365, 380)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following),
        ),
        cny_fixed = FundingBasis::fixed(
            terms(&currencies().cny, &frequencies().annually, &day_counts().actual_365, 381)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .not_priced(),
        ),
        krw_fixed = FundingBasis::fixed(
            terms(&currencies().krw, &frequencies().annually, &day_counts().actual_365, 382)
                .not_priced(),
        ),
        czk_3m = FundingBasis::floating(
            "3M_CZK",
            "3mPRIBOR",
            FloatingTerms::new(3, "PRIBOR")
                .fixing_info(&fixings().pribor)
                .not_callable(),
            terms(&currencies().czk, &frequencies().quarterly, &day_counts().actual_360, 383)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .not_priced(),
        )
        .with_legal_label("3 month PRIBOR"),
        czk_6m = FundingBasis::floating(
            "6M_CZK",
            "6mPRIBOR",
            FloatingTerms::new(6, "PRIBOR")
                .fixing_info(&fixings().pribor)
                .not_callable(),
            terms(&currencies().czk, &frequencies().semi_annually, &day_counts().actual_360, 384)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .not_priced(),
        )
        .with_legal_label("6 month PRIBOR"),
        czk_fixed = FundingBasis::fixed(
            terms(&currencies().czk, &frequencies().annually, &day_counts().actual_365, 384)
                .not_priced(),
        ),
        zar_3m = FundingBasis::floating(
            "3M_ZAR",
            "3mJIBAR",
            FloatingTerms::new(3, "SAFEY")
                .fixing_info(&fixings().jibar),
            terms(&currencies().zar, &frequencies().quarterly, &day_counts().actual_365, 385)
                .not_priced()
                .payment_calendars([&calendars().johannesburg]),
        )
        .with_legal_label("3 month JIBAR"),
        zar_6m = FundingBasis::floating(
            "6M_ZAR",
            "6mJIBAR",
            FloatingTerms::new(6, "SAFEY")
                .fixing_info(&fixings().jibar),
            terms(&currencies().zar, &frequencies().semi_annually, &day_counts().actual_365, 386)
                .not_priced()
                .payment_calendars([&calendars().johannesburg]),
        )
        .with_legal_label("6 month JIBAR"),
        zar_fixed = FundingBasis::fixed(
            terms(&currencies().zar, &frequencies().annually, &day_counts().actual_365, 387)
                .not_priced()
                .payment_calendars([&calendars().johannesburg]),
        ),
        ron_fixed = FundingBasis::fixed(
            terms(&currencies().ron, &frequencies().annually, &day_counts().actual_actual_icma, 388)
                .adjustment(&adjustments().unadjusted)
                .business_day_convention(&conventions().following)
                .not_priced()
                .payment_calendars([&calendars().bucharest]),
        ),
        btp = FundingBasis::govie(
            "BTP",
            "BTP",
            "Rep Italy",
            terms(&currencies().eur, &frequencies().semi_annually, &day_counts().actual_actual_icma, 390)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        ),
        oat = FundingBasis::govie(
            "OAT",
            "OAT",
            "French Rep",
            terms(&currencies().eur, &frequencies().annually, &day_counts().actual_actual_icma, 400)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        ),
        olo = FundingBasis::govie(
            "OLO",
            "OLO",
            "Kdom Belgium",
            terms(&currencies().eur, &frequencies().annually, &day_counts().actual_actual_icma, 410)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        ),
        ragb = FundingBasis::govie(
            "RAGB",
            "RAGB",
            "Rep Austria",
            terms(&currencies().eur, &frequencies().annually, &day_counts().actual_actual_icma, 420)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        ),
        spgb = FundingBasis::govie(
            "SPGB",
            "SPGB",
            "Kdom Spain",
            terms(&currencies().eur, &frequencies().annually, &day_counts().actual_actual_icma, 430)
                .adjustment(&adjustments().adjusted)
                .business_day_convention(&conventions().modified_following)
                .payment_calendars([&calendars().target2]),
        ),
    }
}

/// The MTN catalog is the default funding basis catalog.
pub type MtnFundingBases = FundingBases;

impl Enumerated for FundingBasis {
    fn registry() -> &'static Constants<Self> {
        FundingBases::global().registry()
    }
}

impl FundingBases {
    /// Choices filtered by the callable and pricing flags.
    pub fn choices(&self, is_callable_basis: Option<bool>, pricing: Option<bool>) -> Arc<[Choice<String>]> {
        choices_for(self.registry(), is_callable_basis, pricing)
    }
}

static CD_FUNDING_BASES: OnceLock<Constants<FundingBasis>> = OnceLock::new();

/// Derives the CD catalog from `mtn`.
///
/// Every MTN basis is shared, except the USD, EUR and GBP fixed bases, which
/// are replaced in place by adjusted, money-market-day-count variants.
///
/// # Errors
///
/// Returns a declaration error if a replacement clashes with another value.
pub fn build_cd_funding_bases(
    mtn: &Constants<FundingBasis>,
) -> origin_core::RegistryResult<Constants<FundingBasis>> {
    let adjusted = &adjustments().adjusted;
    let modified_following = &conventions().modified_following;
    let registry = ConstantsBuilder::derive_from("CdFundingBases", mtn)
        .member(
            "usd_fixed",
            FundingBasis::fixed(
                terms(&currencies().usd, &frequencies().semi_annually, &day_counts().actual_360, 60)
                    .adjustment(adjusted)
                    .business_day_convention(modified_following)
                    .payment_calendars([&calendars().new_york]),
            ),
        )
        .member(
            "eur_fixed",
            FundingBasis::fixed(
                terms(&currencies().eur, &frequencies().annually, &day_counts().actual_360, 20)
                    .adjustment(adjusted)
                    .business_day_convention(modified_following)
                    .payment_calendars([&calendars().target2]),
            ),
        )
        .member(
            "gbp_fixed",
            FundingBasis::fixed(
                terms(&currencies().gbp, &frequencies().annually, &day_counts().actual_365, 100)
                    .adjustment(adjusted)
                    .business_day_convention(modified_following)
                    .payment_calendars([&calendars().london]),
            ),
        )
        .build()?;
    debug!(members = registry.len(), "CD funding bases derived");
    Ok(registry)
}

/// The process-wide CD funding basis catalog.
///
/// # Panics
///
/// Panics on first access if the derived declaration is invalid.
pub fn cd_funding_bases() -> &'static Constants<FundingBasis> {
    CD_FUNDING_BASES.get_or_init(|| match build_cd_funding_bases(FundingBases::global()) {
        Ok(registry) => registry,
        Err(err) => panic!("invalid CdFundingBases declaration: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use origin_core::Member;

    #[test]
    fn test_catalog_size_and_order() {
        let bases = FundingBases::global();
        assert_eq!(bases.len(), 59);
        let sorting: Vec<i32> = bases.iter().map(|basis| basis.sorting()).collect();
        assert!(sorting.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(bases.eur_3m < bases.spgb);
    }

    #[test]
    fn test_floating_basis() {
        let bases = FundingBases::global();
        let eur_3m = &bases.eur_3m;
        assert_eq!(eur_3m.value(), "3M_EUR");
        assert_eq!(eur_3m.label(), "3mEURIBOR");
        assert!(eur_3m.is_floating_basis());
        assert!(eur_3m.is_callable_basis());
        assert_eq!(eur_3m.index(), 3);
        assert_eq!(eur_3m.screen_page(), Some("EURIBOR01"));
        assert_eq!(eur_3m.legal_label(), Some("3 month EURIBOR"));
        assert_eq!(eur_3m.symbol(), "€");
        assert_eq!(eur_3m.fixing_info().unwrap().benchmark_base(), "EURIBOR");
        assert_eq!(eur_3m.basis_type().as_str(), "floating");
    }

    #[test]
    fn test_fixed_basis_defaults() {
        let bases = FundingBases::global();
        assert_eq!(bases.usd_fixed.label(), "USD Fixed");
        assert_eq!(bases.usd_fixed.legal_label(), Some("Fixed Rate USD"));
        assert_eq!(bases.sek_fixed.legal_label(), Some("SEK Fixed Rate"));
        assert_eq!(bases.usd_fixed.index(), 0);
        assert!(!bases.usd_fixed.is_callable_basis());
        assert!(bases.krw_fixed.adjustment().is_none());
        assert!(bases.cnh_fixed.calendars_for_payment().is_empty());
    }

    #[test]
    fn test_mid_swap_basis() {
        let bases = FundingBases::global();
        let eur_ms = &bases.eur_ms;
        assert_eq!(eur_ms.value(), "MS_EUR");
        assert_eq!(eur_ms.label(), "EUR M/S");
        assert!(eur_ms.is_ms_basis());
        assert!(Arc::ptr_eq(eur_ms.floating_basis().unwrap(), &bases.eur_6m));
        assert_eq!(eur_ms.ms_payment_frequency().unwrap().value(), 6);
        assert_eq!(eur_ms.display_payment_frequency().unwrap().value(), 12);
        assert_eq!(eur_ms.ms_day_count().unwrap().value(), "Actual360");
        assert_eq!(eur_ms.basis_type(), BasisType::Ms);
    }

    #[test]
    fn test_govie_basis() {
        let bases = FundingBases::global();
        assert!(bases.btp.is_govie_basis());
        assert_eq!(bases.btp.issuer_short_name(), Some("Rep Italy"));
        assert_eq!(bases.oat.issuer_short_name(), Some("French Rep"));
        assert_eq!(bases.btp.currency().code(), "EUR");
    }

    #[test]
    fn test_prague_bases_are_not_callable() {
        let bases = FundingBases::global();
        assert!(bases.czk_3m.is_floating_basis());
        assert!(!bases.czk_3m.is_callable_basis());
        assert!(!bases.czk_6m.is_callable_basis());
        assert!(!bases.czk_3m.pricing());
    }

    #[test]
    fn test_filtered_choices() {
        let bases = FundingBases::global();
        let callable = bases.choices(Some(true), None);
        assert!(callable.iter().any(|(value, _)| value == "3M_EUR"));
        assert!(!callable.iter().any(|(value, _)| value == "FIXED_EUR"));
        assert!(!callable.iter().any(|(value, _)| value == "3M_CZK"));

        let not_priced = bases.choices(None, Some(false));
        assert!(not_priced.iter().any(|(value, _)| value == "SONIA"));
        assert!(not_priced.iter().all(|(value, _)| !bases.get(value).unwrap().pricing()));

        let both = bases.choices(Some(true), Some(true));
        assert!(!both.iter().any(|(value, _)| value == "SONIA"));
        assert_eq!(bases.choices(None, None).len(), bases.len());
        assert!(Arc::ptr_eq(&both, &bases.choices(Some(true), Some(true))));
    }

    #[test]
    fn test_basis_type_serde() {
        assert_eq!(serde_json::to_string(&BasisType::Ms).unwrap(), "\"ms\"");
        let parsed: BasisType = serde_json::from_str("\"govie\"").unwrap();
        assert_eq!(parsed, BasisType::Govie);
    }

    #[test]
    fn test_cd_catalog_overrides_fixed_bases() {
        let mtn = FundingBases::global();
        let cd = cd_funding_bases();
        assert_eq!(cd.name(), "CdFundingBases");
        assert_eq!(cd.len(), mtn.len());
        assert_eq!(cd.names(), mtn.names());

        let usd_fixed = cd.get(&"FIXED_USD".to_string()).unwrap();
        assert!(!Arc::ptr_eq(&usd_fixed, &mtn.usd_fixed));
        assert_eq!(usd_fixed.day_count().value(), "Actual360");
        assert_eq!(usd_fixed.order(), mtn.usd_fixed.order());
        assert_eq!(mtn.usd_fixed.day_count().value(), "Thirty360");

        let gbp_fixed = cd.get(&"FIXED_GBP".to_string()).unwrap();
        assert_eq!(gbp_fixed.adjustment().unwrap().value(), "Adjusted");

        let eur_3m = cd.get(&"3M_EUR".to_string()).unwrap();
        assert!(Arc::ptr_eq(&eur_3m, &mtn.eur_3m));
        assert!(!cd.is_mutable());
        assert!(std::ptr::eq(cd, cd_funding_bases()));
    }
}
