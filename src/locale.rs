// SPDX-License-Identifier: MPL-2.0
//! The closed set of display languages and the text-direction policy.
//!
//! The supported locales are fixed at build time. Everything downstream
//! (translation bundles, flag icons, document direction) is keyed by the
//! [`Locale`] enum, so an unsupported code can only enter the system through
//! [`Locale::parse`], which rejects it.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Locale adopted when nothing valid is persisted or requested.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// A supported display language plus its presentation metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Ar,
    Fr,
}

impl Locale {
    /// Every supported locale, in switcher display order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ar, Locale::Fr];

    /// The short code persisted to storage and used as the document
    /// language tag.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
            Locale::Fr => "fr",
        }
    }

    /// Validates an externally supplied code (storage, CLI) against the
    /// supported set.
    pub fn parse(code: &str) -> Result<Self, InvalidLocaleError> {
        match code {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            "fr" => Ok(Locale::Fr),
            other => Err(InvalidLocaleError::new(other)),
        }
    }

    /// Language identifier used to construct the Fluent bundle.
    pub fn lang_id(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("supported locale codes are valid language identifiers")
    }

    /// Text direction for this locale.
    ///
    /// This match is the single authoritative direction table. Adding a new
    /// right-to-left locale means extending the first arm, nothing else.
    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::RightToLeft,
            Locale::En | Locale::Fr => Direction::LeftToRight,
        }
    }

    /// Canonical flag icon asset for the switcher control.
    pub fn icon(self) -> &'static str {
        match self {
            Locale::En => "flags/united-states.svg",
            Locale::Ar => "flags/egypt.svg",
            Locale::Fr => "flags/france.svg",
        }
    }

    /// i18n key for the descriptive switch label exposed to assistive
    /// technology (e.g. "Switch to Arabic").
    pub fn switch_label_key(self) -> &'static str {
        match self {
            Locale::En => "switch-to-en",
            Locale::Ar => "switch-to-ar",
            Locale::Fr => "switch-to-fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text-flow orientation of the shell, derived solely from the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    /// The document direction attribute value.
    pub fn attr(self) -> &'static str {
        match self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::RightToLeft
    }
}

/// A code outside the supported set was received from storage or external
/// input. Recovered locally by falling back to [`DEFAULT_LOCALE`]; never
/// surfaced as a user-facing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLocaleError {
    code: String,
}

impl InvalidLocaleError {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }

    /// The rejected code.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for InvalidLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale code: {}", self.code)
    }
}

impl std::error::Error for InvalidLocaleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_rtl_only_for_arabic() {
        for locale in Locale::ALL {
            let expected = locale == Locale::Ar;
            assert_eq!(locale.direction().is_rtl(), expected, "locale {locale}");
        }
    }

    #[test]
    fn direction_attrs_match_table() {
        assert_eq!(Locale::Ar.direction().attr(), "rtl");
        assert_eq!(Locale::En.direction().attr(), "ltr");
        assert_eq!(Locale::Fr.direction().attr(), "ltr");
    }

    #[test]
    fn parse_accepts_every_supported_code() {
        for locale in Locale::ALL {
            assert_eq!(Locale::parse(locale.code()), Ok(locale));
        }
    }

    #[test]
    fn parse_rejects_unsupported_codes() {
        for code in ["de", "EN", "en-US", "", "arabic"] {
            let err = Locale::parse(code).expect_err("should be rejected");
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn codes_round_trip_through_display() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn each_locale_has_a_distinct_icon() {
        let icons: Vec<_> = Locale::ALL.iter().map(|l| l.icon()).collect();
        for (i, icon) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(icon), "duplicate icon {icon}");
        }
    }

    #[test]
    fn lang_ids_parse_for_all_locales() {
        for locale in Locale::ALL {
            assert_eq!(locale.lang_id().language.as_str(), locale.code());
        }
    }
}
