// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and launch flags.

use crate::ui::{footer, header, notifications};

/// Messages handled by the root update loop.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Footer(footer::Message),
    Notification(notifications::Message),
    WindowResized(iced::Size),
    /// Periodic tick driving notification auto-dismiss.
    Tick(std::time::Instant),
}

/// Launch options parsed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Session language override (`--lang`), not persisted.
    pub lang: Option<String>,
    /// Config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
