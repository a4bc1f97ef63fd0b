// SPDX-License-Identifier: MPL-2.0
//! `nav_shell` is the navigation chrome of a marketing site rendered as a
//! desktop application with the Iced GUI framework.
//!
//! It demonstrates internationalization with Fluent, persisted language
//! selection, locale-driven right-to-left layout mirroring, and a
//! responsive navigation drawer.

pub mod app;
pub mod config;
pub mod document;
pub mod download;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod locale;
pub mod menu;
pub mod paths;
pub mod store;
pub mod ui;
