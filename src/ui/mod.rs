// SPDX-License-Identifier: MPL-2.0
//! UI layer: the shell's header, footer, drawer, switcher and shared
//! styling primitives.

pub mod design_tokens;
pub mod drawer;
pub mod footer;
pub mod header;
pub mod icons;
pub mod language_switcher;
pub mod nav_menu;
pub mod notifications;
pub mod page;
pub mod styles;
