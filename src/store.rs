// SPDX-License-Identifier: MPL-2.0
//! The locale store: single owner of the active-locale state.
//!
//! Switching the language involves three things that must not drift apart:
//! the in-memory active locale, the persisted code in storage, and the
//! document-level direction/language attributes. [`LocaleStore::set_active`]
//! performs all three in one operation so no caller can update one without
//! the others.
//!
//! Storage is injected behind the [`LocaleStorage`] trait so tests can
//! substitute an in-memory fake for the TOML config file.

use crate::config;
use crate::document::DocumentState;
use crate::error::Result;
use crate::locale::{InvalidLocaleError, Locale, DEFAULT_LOCALE};
use std::fmt;
use std::path::PathBuf;

/// Durable client storage for the locale choice.
pub trait LocaleStorage {
    /// Reads the persisted locale code, if any.
    fn read(&self) -> Result<Option<String>>;

    /// Writes the locale code under the canonical key.
    fn write(&mut self, code: &str) -> Result<()>;
}

/// Non-fatal signal: the in-memory locale changed but could not be
/// persisted. The session keeps working with the new language; only the
/// next launch reverts. Distinct from [`InvalidLocaleError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    detail: String,
}

impl PersistenceWarning {
    /// i18n key for the user-facing toast.
    pub fn notification_key(&self) -> &'static str {
        "notification-language-save-error"
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "language choice not persisted: {}", self.detail)
    }
}

/// Owns the active locale, the document attributes it implies, and the
/// storage adapter. Single-writer: nothing else mutates these.
pub struct LocaleStore {
    active: Locale,
    document: DocumentState,
    storage: Box<dyn LocaleStorage>,
}

impl LocaleStore {
    /// Creates a store at the default locale. Call [`restore`](Self::restore)
    /// afterwards to adopt a persisted choice.
    pub fn new(storage: Box<dyn LocaleStorage>) -> Self {
        let mut document = DocumentState::new();
        document.apply(DEFAULT_LOCALE);
        Self {
            active: DEFAULT_LOCALE,
            document,
            storage,
        }
    }

    /// The currently active locale. Never fails.
    pub fn active(&self) -> Locale {
        self.active
    }

    /// The document attributes kept in sync with the active locale.
    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    /// Reads the persisted code and adopts it if valid, else falls back to
    /// the default locale. Storage is never re-written here, so an invalid
    /// persisted value is left untouched rather than clobbered.
    ///
    /// Idempotent and safe to call repeatedly; each call simply re-reads.
    pub fn restore(&mut self) -> Locale {
        let restored = match self.storage.read() {
            Ok(Some(code)) => Locale::parse(&code).unwrap_or_else(|err| {
                eprintln!("Ignoring persisted language: {}", err);
                DEFAULT_LOCALE
            }),
            Ok(None) => DEFAULT_LOCALE,
            Err(error) => {
                eprintln!("Failed to read persisted language: {}", error);
                DEFAULT_LOCALE
            }
        };
        self.adopt(restored);
        restored
    }

    /// Adopts a locale for this session without writing it to storage.
    /// Used for startup overrides (CLI flag, OS locale) that should not
    /// clobber the user's persisted choice.
    pub fn adopt(&mut self, locale: Locale) {
        self.active = locale;
        self.document.apply(locale);
    }

    /// Activates a locale: updates the in-memory state, re-applies the
    /// document attributes, and persists the code.
    ///
    /// A storage failure does not roll back the in-memory change; it is
    /// returned as a warning for the caller to surface. Idempotent with
    /// respect to the end state.
    pub fn set_active(&mut self, locale: Locale) -> Option<PersistenceWarning> {
        self.adopt(locale);
        match self.storage.write(locale.code()) {
            Ok(()) => None,
            Err(error) => Some(PersistenceWarning {
                detail: error.to_string(),
            }),
        }
    }

    /// Validating entry point for untrusted codes. An unsupported code
    /// leaves state, document, and storage untouched.
    pub fn set_active_code(
        &mut self,
        code: &str,
    ) -> std::result::Result<Option<PersistenceWarning>, InvalidLocaleError> {
        let locale = Locale::parse(code)?;
        Ok(self.set_active(locale))
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active)
            .field("document", &self.document)
            .finish()
    }
}

/// Production storage adapter backed by the `settings.toml` config file.
///
/// Reads and writes go through the config layer so the locale shares one
/// file (and one canonical `language` key) with any future preferences.
pub struct ConfigStorage {
    config_dir: Option<PathBuf>,
}

impl ConfigStorage {
    /// Uses the default config-dir resolution (CLI flag, env var, platform).
    pub fn new() -> Self {
        Self { config_dir: None }
    }

    /// Pins the storage to an explicit directory. Used by integration tests.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self {
            config_dir: Some(dir),
        }
    }
}

impl Default for ConfigStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleStorage for ConfigStorage {
    fn read(&self) -> Result<Option<String>> {
        let (cfg, _warning) = config::load_with_override(self.config_dir.clone());
        Ok(cfg.language)
    }

    fn write(&mut self, code: &str) -> Result<()> {
        let (mut cfg, _warning) = config::load_with_override(self.config_dir.clone());
        cfg.language = Some(code.to_string());
        config::save_with_override(&cfg, self.config_dir.clone())
    }
}
