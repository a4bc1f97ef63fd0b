// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the shell.
//!
//! This module provides localization using the Fluent localization system.
//! Translation files are embedded at compile time, one `.ftl` file per
//! supported locale, and lookups fall back to the default locale and
//! finally to the key itself so the shell always renders a label.

pub mod fluent;
