// SPDX-License-Identifier: MPL-2.0
//! Display language and text direction.
//!
//! Podium ships exactly two locales. Hebrew is the primary locale and lays
//! the page out right-to-left; English is the secondary locale and lays it
//! out left-to-right. The [`store`] submodule owns the active locale and its
//! persistence.

pub mod store;

pub use store::{LocaleStore, LANGUAGE_KEY};

use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// One of the two supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Hebrew, the primary locale.
    #[default]
    Hebrew,
    /// English, the secondary locale.
    English,
}

impl Locale {
    pub const PRIMARY: Locale = Locale::Hebrew;
    pub const ALL: [Locale; 2] = [Locale::Hebrew, Locale::English];

    /// Short code stored in preferences and used for bundle lookup.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Hebrew => "he",
            Locale::English => "en",
        }
    }

    /// Parses a stored code. Only the exact codes `he` and `en` are accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "he" => Some(Locale::Hebrew),
            "en" => Some(Locale::English),
            _ => None,
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Locale::Hebrew => Direction::Rtl,
            Locale::English => Direction::Ltr,
        }
    }

    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }

    /// The other locale.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Locale::Hebrew => Locale::English,
            Locale::English => Locale::Hebrew,
        }
    }

    /// Label shown on the language toggle while this locale is active: the
    /// name of the locale the button switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::Hebrew => "EN",
            Locale::English => "עב",
        }
    }

    #[must_use]
    pub fn language_identifier(self) -> LanguageIdentifier {
        // Both codes are valid BCP-47 primary language subtags.
        self.code().parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unsupported locale code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale code: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Layout direction derived from the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Attribute value (`ltr` / `rtl`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Document-level attributes that follow the active locale.
///
/// The views read these instead of the locale directly, so every piece of
/// layout that depends on direction goes through one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub dir: Direction,
    pub lang: Locale,
}

impl DocumentAttributes {
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            dir: locale.direction(),
            lang: locale,
        }
    }
}

impl Default for DocumentAttributes {
    fn default() -> Self {
        Self::for_locale(Locale::PRIMARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_locale_is_hebrew_and_rtl() {
        assert_eq!(Locale::default(), Locale::Hebrew);
        assert!(Locale::Hebrew.is_primary());
        assert_eq!(Locale::Hebrew.direction(), Direction::Rtl);
        assert_eq!(Locale::English.direction(), Direction::Ltr);
    }

    #[test]
    fn codes_parse_back_to_the_same_locale() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code("HE"), None);
        assert_eq!(Locale::from_code(""), None);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn from_str_trims_whitespace() {
        assert_eq!(" en ".parse::<Locale>(), Ok(Locale::English));
    }

    #[test]
    fn toggled_switches_between_the_two_locales() {
        assert_eq!(Locale::Hebrew.toggled(), Locale::English);
        assert_eq!(Locale::English.toggled(), Locale::Hebrew);
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Locale::Hebrew.toggle_label(), "EN");
        assert_eq!(Locale::English.toggle_label(), "עב");
    }

    #[test]
    fn document_attributes_follow_locale() {
        let attrs = DocumentAttributes::for_locale(Locale::English);
        assert_eq!(attrs.dir.as_str(), "ltr");
        assert_eq!(attrs.lang, Locale::English);
        assert!(DocumentAttributes::default().dir.is_rtl());
    }
}
