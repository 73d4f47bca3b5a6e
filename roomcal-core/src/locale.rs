//! Display locales for month and weekday names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoomCalError;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const BOKMAL_MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

const ENGLISH_WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const BOKMAL_WEEKDAYS: [&str; 7] = ["ma", "ti", "on", "to", "fr", "lø", "sø"];

/// Language used for month names and weekday headers.
///
/// Deserializes through [`FromStr`], so config files accept the same codes
/// as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "nb")]
    NorwegianBokmal,
}

impl Locale {
    /// Full name of `month` (1..=12).
    pub fn month_name(self, month: u32) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        match self {
            Locale::English => ENGLISH_MONTHS[index],
            Locale::NorwegianBokmal => BOKMAL_MONTHS[index],
        }
    }

    /// Two-letter weekday headers, Monday first.
    pub fn weekday_abbreviations(self) -> [&'static str; 7] {
        match self {
            Locale::English => ENGLISH_WEEKDAYS,
            Locale::NorwegianBokmal => BOKMAL_WEEKDAYS,
        }
    }

    /// Column header for the ISO week number.
    pub fn week_label(self) -> &'static str {
        match self {
            Locale::English => "Wk",
            Locale::NorwegianBokmal => "Uke",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::NorwegianBokmal => "nb",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = RoomCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::English),
            "nb" | "nb-no" | "no" | "norsk" => Ok(Locale::NorwegianBokmal),
            other => Err(RoomCalError::UnknownLocale(other.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = RoomCalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_per_locale() {
        assert_eq!(Locale::English.month_name(1), "January");
        assert_eq!(Locale::English.month_name(12), "December");
        assert_eq!(Locale::NorwegianBokmal.month_name(5), "mai");
        assert_eq!(Locale::NorwegianBokmal.month_name(12), "desember");
    }

    #[test]
    fn weekday_headers_start_on_monday() {
        assert_eq!(Locale::English.weekday_abbreviations()[0], "Mo");
        assert_eq!(Locale::English.weekday_abbreviations()[6], "Su");
        assert_eq!(Locale::NorwegianBokmal.weekday_abbreviations()[5], "lø");
    }

    #[test]
    fn parse_locale_codes() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::English);
        assert_eq!("NB".parse::<Locale>().unwrap(), Locale::NorwegianBokmal);
        assert_eq!(" nb-NO ".parse::<Locale>().unwrap(), Locale::NorwegianBokmal);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(RoomCalError::UnknownLocale(code)) if code == "fr"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for locale in [Locale::English, Locale::NorwegianBokmal] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn deserializes_from_code() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let parsed: Wrapper = toml::from_str("locale = \"nb\"").unwrap();
        assert_eq!(parsed.locale, Locale::NorwegianBokmal);

        // regional codes work the same as on the command line
        let parsed: Wrapper = toml::from_str("locale = \"en-GB\"").unwrap();
        assert_eq!(parsed.locale, Locale::English);
        let parsed: Wrapper = toml::from_str("locale = \"nb-NO\"").unwrap();
        assert_eq!(parsed.locale, Locale::NorwegianBokmal);
        assert!(toml::from_str::<Wrapper>("locale = \"fr\"").is_err());
    }
}
