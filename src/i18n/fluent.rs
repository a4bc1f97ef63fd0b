// SPDX-License-Identifier: MPL-2.0
use crate::locale::{Locale, DEFAULT_LOCALE};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Translation lookup keyed by the closed [`Locale`] set.
pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    active: Locale,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl I18n {
    pub fn new(active: Locale) -> Self {
        let mut bundles = HashMap::new();
        for locale in Locale::ALL {
            match load_bundle(locale) {
                Some(bundle) => {
                    bundles.insert(locale, bundle);
                }
                None => eprintln!("Missing or invalid translation bundle for {}", locale),
            }
        }
        Self { bundles, active }
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.active = locale;
    }

    /// Resolves a translation key against the active locale.
    ///
    /// Falls back to the default locale's bundle, then to the key itself.
    /// A missing translation never fails the render.
    pub fn tr(&self, key: &str) -> String {
        self.format(self.active, key)
            .or_else(|| self.format(DEFAULT_LOCALE, key))
            .unwrap_or_else(|| key.to_string())
    }

    fn format(&self, locale: Locale, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

fn load_bundle(locale: Locale) -> Option<FluentBundle<FluentResource>> {
    let filename = format!("{}.ftl", locale.code());
    let content = Asset::get(&filename)?;
    let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
    let resource = FluentResource::try_new(source).ok()?;
    let mut bundle = FluentBundle::new(vec![locale.lang_id()]);
    bundle.add_resource(resource).ok()?;
    Some(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_a_bundle() {
        let i18n = I18n::default();
        for locale in Locale::ALL {
            assert!(
                i18n.bundles.contains_key(&locale),
                "missing bundle for {locale}"
            );
        }
    }

    #[test]
    fn tr_resolves_known_key() {
        let i18n = I18n::new(Locale::En);
        assert_eq!(i18n.tr("nav-about"), "About");
    }

    #[test]
    fn tr_changes_with_locale() {
        let mut i18n = I18n::new(Locale::En);
        let english = i18n.tr("nav-pricing");
        i18n.set_locale(Locale::Fr);
        let french = i18n.tr("nav-pricing");
        assert_ne!(english, french);
        assert_eq!(french, "Tarifs");
    }

    #[test]
    fn tr_falls_back_to_key_when_missing() {
        let i18n = I18n::new(Locale::En);
        assert_eq!(i18n.tr("no-such-key"), "no-such-key");
    }

    #[test]
    fn switch_labels_exist_for_all_locales() {
        let i18n = I18n::new(Locale::En);
        for locale in Locale::ALL {
            let label = i18n.tr(locale.switch_label_key());
            assert_ne!(label, locale.switch_label_key(), "label for {locale}");
        }
    }

    #[test]
    fn set_locale_updates_active() {
        let mut i18n = I18n::default();
        i18n.set_locale(Locale::Ar);
        assert_eq!(i18n.active(), Locale::Ar);
    }
}
