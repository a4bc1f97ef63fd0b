// SPDX-License-Identifier: MPL-2.0
//! End-to-end locale persistence through the real TOML-backed storage.
//!
//! Each test pins the store to its own temporary config directory, so the
//! process-wide path overrides are never touched.

use nav_shell::config;
use nav_shell::locale::Locale;
use nav_shell::store::{ConfigStorage, LocaleStore};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn store_in(dir: &Path) -> LocaleStore {
    LocaleStore::new(Box::new(ConfigStorage::with_dir(dir.to_path_buf())))
}

#[test]
fn language_choice_survives_restart() {
    let dir = tempdir().expect("failed to create temp dir");

    let mut store = store_in(dir.path());
    store.restore();
    assert_eq!(store.active(), Locale::En);

    let warning = store.set_active(Locale::Fr);
    assert!(warning.is_none());

    // Simulated restart: a fresh store over the same directory.
    let mut reopened = store_in(dir.path());
    assert_eq!(reopened.restore(), Locale::Fr);
    assert_eq!(reopened.document().lang_attr(), "fr");
    assert_eq!(reopened.document().dir_attr(), "ltr");
}

#[test]
fn first_activation_creates_the_settings_file() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings = dir.path().join("settings.toml");
    assert!(!settings.exists());

    let mut store = store_in(dir.path());
    store.set_active(Locale::Ar);

    let content = fs::read_to_string(&settings).expect("settings file should exist");
    assert!(content.contains("language = \"ar\""));
}

#[test]
fn switching_to_arabic_flips_direction_and_persists() {
    let dir = tempdir().expect("failed to create temp dir");

    let mut store = store_in(dir.path());
    store.restore();
    store.set_active(Locale::Ar);
    assert_eq!(store.document().dir_attr(), "rtl");
    assert_eq!(store.document().lang_attr(), "ar");

    let mut reopened = store_in(dir.path());
    assert_eq!(reopened.restore(), Locale::Ar);
    assert_eq!(reopened.document().dir_attr(), "rtl");
}

#[test]
fn unsupported_persisted_code_falls_back_without_rewriting() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "language = \"de\"\n").expect("failed to seed settings");

    let mut store = store_in(dir.path());
    assert_eq!(store.restore(), Locale::En);
    assert_eq!(store.document().lang_attr(), "en");

    // The unsupported value is left in place, not clobbered.
    let content = fs::read_to_string(&settings).expect("settings file readable");
    assert!(content.contains("language = \"de\""));
}

#[test]
fn corrupt_settings_file_yields_warning_and_defaults() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings = dir.path().join("settings.toml");
    fs::write(&settings, "language = ").expect("failed to write corrupt settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(config.language.is_none());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));

    // The store still comes up on the default locale.
    let mut store = store_in(dir.path());
    assert_eq!(store.restore(), Locale::En);
}

#[test]
fn repeated_switches_keep_the_last_choice() {
    let dir = tempdir().expect("failed to create temp dir");

    let mut store = store_in(dir.path());
    store.set_active(Locale::Fr);
    store.set_active(Locale::En);

    let mut reopened = store_in(dir.path());
    assert_eq!(reopened.restore(), Locale::En);
}
