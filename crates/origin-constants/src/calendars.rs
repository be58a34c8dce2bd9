//! Holiday calendars.
//!
//! Calendar members carry their display name as both value and label.

use origin_core::{Constants, Enumerated};

origin_core::constant_type! {
    /// A named holiday calendar.
    pub struct Calendar(String);
}

origin_core::constants! {
    /// Every holiday calendar known to the platform.
    pub struct Calendars<Calendar> {
        amsterdam = Calendar::from_value("Amsterdam"),
        auckland = Calendar::from_value("Auckland"),
        beijing = Calendar::from_value("Beijing"),
        brussels = Calendar::from_value("Brussels"),
        bucharest = Calendar::from_value("Bucharest"),
        copenhagen = Calendar::from_value("Copenhagen"),
        doha = Calendar::from_value("Doha"),
        dubai = Calendar::from_value("Dubai"),
        dublin = Calendar::from_value("Dublin"),
        frankfurt = Calendar::from_value("Frankfurt"),
        helsinki = Calendar::from_value("Helsinki"),
        hong_kong = Calendar::from_value("Hong Kong"),
        istanbul = Calendar::from_value("Istanbul"),
        johannesburg = Calendar::from_value("Johannesburg"),
        london = Calendar::from_value("London"),
        luxembourg = Calendar::from_value("Luxembourg"),
        madrid = Calendar::from_value("Madrid"),
        moscow = Calendar::from_value("Moscow"),
        macau = Calendar::from_value("Macau"),
        new_york = Calendar::from_value("New York"),
        oslo = Calendar::from_value("Oslo"),
        paris = Calendar::from_value("Paris"),
        prague = Calendar::from_value("Prague"),
        reykjavik = Calendar::from_value("Reykjavik"),
        seoul = Calendar::from_value("Seoul"),
        shanghai = Calendar::from_value("Shanghai"),
        singapore = Calendar::from_value("Singapore"),
        stockholm = Calendar::from_value("Stockholm"),
        sydney = Calendar::from_value("Sydney"),
        target2 = Calendar::from_value("TARGET2"),
        tokyo = Calendar::from_value("Tokyo"),
        toronto = Calendar::from_value("Toronto"),
        vienna = Calendar::from_value("Vienna"),
        warsaw = Calendar::from_value("Warsaw"),
        wellington = Calendar::from_value("Wellington"),
        zurich = Calendar::from_value("Zurich"),
    }
}

impl Enumerated for Calendar {
    fn registry() -> &'static Constants<Self> {
        Calendars::global().registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use origin_core::Member;

    #[test]
    fn test_labels_mirror_values() {
        let calendars = Calendars::global();
        assert_eq!(calendars.len(), 36);
        assert!(calendars.iter().all(|c| c.value() == c.label()));
        assert_eq!(calendars.hong_kong.value(), "Hong Kong");
        assert_eq!(calendars.target2.label(), "TARGET2");
    }

    #[test]
    fn test_declaration_order() {
        let calendars = Calendars::global();
        // Macau is declared after Moscow.
        assert!(calendars.moscow < calendars.macau);
        assert_eq!(calendars.names().first().map(String::as_str), Some("amsterdam"));
        assert_eq!(Calendar::registry().get(&"Zurich".to_string()).unwrap().order(), Some(35));
    }
}
