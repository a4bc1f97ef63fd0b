// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so repeated views reuse the same handle.

use crate::locale::Locale;
use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    menu,
    "icons/menu.svg",
    "Burger icon: three horizontal lines."
);
define_icon!(logo, "branding/nav_shell.svg", "Application logo.");
define_icon!(
    flag_united_states,
    "flags/united-states.svg",
    "United States flag, the English switch control."
);
define_icon!(
    flag_egypt,
    "flags/egypt.svg",
    "Egypt flag, the Arabic switch control."
);
define_icon!(
    flag_france,
    "flags/france.svg",
    "France flag, the French switch control."
);

/// The canonical flag icon for a locale's switch control.
pub fn flag(locale: Locale) -> Svg<'static> {
    match locale {
        Locale::En => flag_united_states(),
        Locale::Ar => flag_egypt(),
        Locale::Fr => flag_france(),
    }
}

/// Constrains an icon to a square of the given size.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(size).height(size)
}
