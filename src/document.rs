// SPDX-License-Identifier: MPL-2.0
//! Document-level presentation state.
//!
//! The website this shell mirrors mutates two ambient attributes on the
//! root document element when the language changes: the text direction
//! (`ltr`/`rtl`) and the language tag. Here they live in an owned state object
//! whose only writer is the locale store; the shell's views read it to
//! decide layout mirroring.

use crate::locale::{Direction, Locale, DEFAULT_LOCALE};

/// The direction and language-tag attributes of the ambient document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentState {
    dir: Direction,
    lang: Locale,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both attributes from the locale. Idempotent: applying the same
    /// locale twice leaves the same observable state as applying it once.
    pub fn apply(&mut self, locale: Locale) {
        self.dir = locale.direction();
        self.lang = locale;
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// The direction attribute value (`"ltr"` or `"rtl"`).
    pub fn dir_attr(&self) -> &'static str {
        self.dir.attr()
    }

    /// The language-tag attribute value (the locale code).
    pub fn lang_attr(&self) -> &'static str {
        self.lang.code()
    }
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            dir: DEFAULT_LOCALE.direction(),
            lang: DEFAULT_LOCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_english_ltr() {
        let doc = DocumentState::new();
        assert_eq!(doc.lang_attr(), "en");
        assert_eq!(doc.dir_attr(), "ltr");
    }

    #[test]
    fn apply_arabic_sets_rtl_and_lang() {
        let mut doc = DocumentState::new();
        doc.apply(Locale::Ar);
        assert_eq!(doc.dir_attr(), "rtl");
        assert_eq!(doc.lang_attr(), "ar");
    }

    #[test]
    fn apply_is_idempotent() {
        let mut once = DocumentState::new();
        once.apply(Locale::Fr);

        let mut twice = DocumentState::new();
        twice.apply(Locale::Fr);
        twice.apply(Locale::Fr);

        assert_eq!(once, twice);
    }

    #[test]
    fn apply_switches_back_to_ltr() {
        let mut doc = DocumentState::new();
        doc.apply(Locale::Ar);
        doc.apply(Locale::En);
        assert_eq!(doc.dir_attr(), "ltr");
        assert_eq!(doc.lang_attr(), "en");
    }
}
