//! ISO currencies with their display metadata.
//!
//! Each [`Currency`] is valued and labelled by its ISO code. The G10 subset is
//! exposed as a cached choice filter.

use std::sync::Arc;

use origin_core::{Choice, ChoiceFilter, Constant, Constants, Enumerated, Member, RegistryResult};

use crate::calendars::{Calendar, Calendars};

/// A currency with its symbol, G10 membership and related holiday calendars.
#[derive(Debug)]
pub struct Currency {
    constant: Constant<String>,
    name: String,
    symbol: String,
    is_g10: bool,
    related_calendars: Vec<Arc<Calendar>>,
}

origin_core::impl_member!(Currency, String, constant);

impl Currency {
    /// Creates a non-G10 currency whose symbol is its code.
    pub fn new(code: impl Into<String>, name: &str) -> Self {
        let code = code.into();
        Self {
            name: format!("{name} ({code})"),
            symbol: code.clone(),
            constant: Constant::new(code.clone(), code),
            is_g10: false,
            related_calendars: Vec::new(),
        }
    }

    /// Sets the display symbol.
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Marks the currency as a G10 currency.
    pub fn g10(mut self) -> Self {
        self.is_g10 = true;
        self
    }

    /// Sets the holiday calendars relevant to the currency.
    pub fn with_calendars(mut self, calendars: impl IntoIterator<Item = Arc<Calendar>>) -> Self {
        self.related_calendars = calendars.into_iter().collect();
        self
    }

    /// The ISO code, same as the value.
    pub fn code(&self) -> String {
        self.value()
    }

    /// Full name with the code appended, e.g. `"US Dollar (USD)"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display symbol; the code when the currency has no symbol of its own.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether the currency belongs to the G10 group.
    pub fn is_g10(&self) -> bool {
        self.is_g10
    }

    /// Holiday calendars observed for the currency.
    pub fn related_calendars(&self) -> &[Arc<Calendar>] {
        &self.related_calendars
    }
}

/// Restricts choices to G10 currencies.
pub const G10: ChoiceFilter<Currency> = ChoiceFilter::new("g10", Currency::is_g10);

fn on(calendars: &[&Arc<Calendar>]) -> Vec<Arc<Calendar>> {
    calendars.iter().map(|calendar| Arc::clone(calendar)).collect()
}

origin_core::constants! {
    /// Currencies known to the platform, G10 first.
    pub struct Currencies<Currency> {
        usd = Currency::new("USD", "US Dollar")
            .with_symbol("$")
            .g10()
            .with_calendars(on(&[&Calendars::global().new_york])),
        eur = Currency::new("EUR", "Euro")
            .with_symbol("€")
            .g10()
            .with_calendars(on(&[&Calendars::global().target2])),
        gbp = Currency::new("GBP", "Pound Sterling")
            .with_symbol("£")
            .g10()
            .with_calendars(on(&[&Calendars::global().london])),
        jpy = Currency::new("JPY", "Yen")
            .with_symbol("¥")
            .g10()
            .with_calendars(on(&[&Calendars::global().tokyo])),
        chf = Currency::new("CHF", "Swiss Franc")
            .g10()
            .with_calendars(on(&[&Calendars::global().zurich])),
        aud = Currency::new("AUD", "Australian Dollar")
            .g10()
            .with_calendars(on(&[&Calendars::global().sydney])),
        nzd = Currency::new("NZD", "New Zealand Dollar")
            .g10()
            .with_calendars(on(&[&Calendars::global().auckland, &Calendars::global().wellington])),
        cad = Currency::new("CAD", "Canadian Dollar")
            .g10()
            .with_calendars(on(&[&Calendars::global().toronto])),
        sek = Currency::new("SEK", "Swedish Krona")
            .g10()
            .with_calendars(on(&[&Calendars::global().stockholm])),
        nok = Currency::new("NOK", "Norwegian Krone")
            .g10()
            .with_calendars(on(&[&Calendars::global().oslo])),
        hkd = Currency::new("HKD", "Hong Kong Dollar")
            .with_calendars(on(&[&Calendars::global().hong_kong])),
        aed = Currency::new("AED", "UAE Dirham")
            .with_calendars(on(&[&Calendars::global().dubai])),
        amd = Currency::new("AMD", "Armenian Dram"),
        ars = Currency::new("ARS", "Argentine Peso"),
        brl = Currency::new("BRL", "Brazilian Real"),
        clp = Currency::new("CLP", "Chilean peso"),
        cnh = Currency::new("CNH", "Yuan Renminbi (Offshore)")
            .with_calendars(on(&[&Calendars::global().beijing])),
        cny = Currency::new("CNY", "Yuan Renminbi")
            .with_calendars(on(&[&Calendars::global().shanghai])),
        cop = Currency::new("COP", "Colombian peso"),
        czk = Currency::new("CZK", "Czech Koruna")
            .with_calendars(on(&[&Calendars::global().prague])),
        dkk = Currency::new("DKK", "Danish Krone")
            .with_calendars(on(&[&Calendars::global().copenhagen])),
        eek = Currency::new("EEK", "Estonian Kroon"),
        gel = Currency::new("GEL", "Lari"),
        huf = Currency::new("HUF", "Forint"),
        idr = Currency::new("IDR", "Rupiah"),
        inr = Currency::new("INR", "Indian Rupee"),
        isk = Currency::new("ISK", "Iceland Krona")
            .with_calendars(on(&[&Calendars::global().reykjavik])),
        kgs = Currency::new("KGS", "Som"),
        krw = Currency::new("KRW", "Won")
            .with_symbol("₩")
            .with_calendars(on(&[&Calendars::global().seoul])),
        kzt = Currency::new("KZT", "Tenge"),
        mxn = Currency::new("MXN", "Mexican peso"),
        myr = Currency::new("MYR", "Malaysian Ringgit"),
        ntd = Currency::new("NTD", "New Taiwan dollar"),
        pen = Currency::new("PEN", "Peruvian Sol"),
        php = Currency::new("PHP", "Philippine Peso"),
        pln = Currency::new("PLN", "Zloty")
            .with_calendars(on(&[&Calendars::global().warsaw])),
        qar = Currency::new("QAR", "Qatari Rial")
            .with_calendars(on(&[&Calendars::global().doha])),
        ron = Currency::new("RON", "Romanian Leu")
            .with_calendars(on(&[&Calendars::global().bucharest])),
        rsd = Currency::new("RSD", "Serbian Dinar"),
        rub = Currency::new("RUB", "Russian Ruble")
            .with_calendars(on(&[&Calendars::global().moscow])),
        sgd = Currency::new("SGD", "Singapore Dollar")
            .with_calendars(on(&[&Calendars::global().singapore])),
        skk = Currency::new("SKK", "Slovak Koruna"),
        r#try = Currency::new("TRY", "Turkish Lira")
            .with_calendars(on(&[&Calendars::global().istanbul])),
        uah = Currency::new("UAH", "Hryvnia"),
        uyu = Currency::new("UYU", "Uruguayan peso"),
        vnd = Currency::new("VND", "Dong"),
        zar = Currency::new("ZAR", "Rand")
            .with_calendars(on(&[&Calendars::global().johannesburg])),
        // ISO has since replaced ZMK with ZMW.
        zmk = Currency::new("ZMK", "Zambian Kwacha"),
    }
}

impl Enumerated for Currency {
    fn registry() -> &'static Constants<Self> {
        Currencies::global().registry()
    }
}

impl Currencies {
    /// Full name of the currency with the given code.
    pub fn get_name(&self, code: &str) -> RegistryResult<String> {
        self.get(&code.to_string()).map(|currency| currency.name().to_string())
    }

    /// Looks a currency up by code, ignoring case.
    pub fn from_code(&self, code: &str) -> RegistryResult<Arc<Currency>> {
        self.get(&code.trim().to_ascii_uppercase())
    }

    /// Choices restricted to G10 currencies, in declaration order.
    pub fn g10_choices(&self) -> Arc<[Choice<String>]> {
        self.to_choices_filtered(&G10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_attributes() {
        let currencies = Currencies::global();
        let usd = &currencies.usd;
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.label(), "USD");
        assert_eq!(usd.name(), "US Dollar (USD)");
        assert_eq!(usd.symbol(), "$");
        assert!(usd.is_g10());
        assert_eq!(usd.related_calendars().len(), 1);
        assert_eq!(usd.related_calendars()[0].value(), "New York");

        let chf = &currencies.chf;
        assert_eq!(chf.symbol(), "CHF");
        assert!(currencies.amd.related_calendars().is_empty());
        assert_eq!(currencies.nzd.related_calendars().len(), 2);
    }

    #[test]
    fn test_get_name() {
        let currencies = Currencies::global();
        assert_eq!(currencies.get_name("GBP").unwrap(), "Pound Sterling (GBP)");
        assert!(currencies.get_name("XXX").is_err());
    }

    #[test]
    fn test_from_code_ignores_case() {
        let currencies = Currencies::global();
        assert!(Arc::ptr_eq(&currencies.from_code("eur").unwrap(), &currencies.eur));
        assert!(currencies.from_code("zzz").unwrap_err().is_key_not_found());
    }

    #[test]
    fn test_g10_choices() {
        let currencies = Currencies::global();
        let codes: Vec<String> = currencies.g10_choices().iter().map(|(v, _)| v.clone()).collect();
        assert_eq!(
            codes,
            vec!["USD", "EUR", "GBP", "JPY", "CHF", "AUD", "NZD", "CAD", "SEK", "NOK"]
        );
        assert!(Arc::ptr_eq(&currencies.g10_choices(), &currencies.g10_choices()));
        assert_eq!(currencies.to_choices().len(), 48);
        assert_eq!(currencies.by_name("try").unwrap().code(), "TRY");
        assert!(currencies.by_name("r#try").unwrap_err().is_key_not_found());
    }

    #[test]
    fn test_related_calendars_share_catalog_members() {
        let currencies = Currencies::global();
        assert!(Arc::ptr_eq(
            &currencies.gbp.related_calendars()[0],
            &Calendars::global().london
        ));
    }
}
