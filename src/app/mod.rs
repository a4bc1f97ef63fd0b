// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the locale and navigation
//! shell.
//!
//! The `App` struct wires together the locale store, the i18n layer and the
//! shell regions (header, footer, page content). Policy decisions such as
//! the compact breakpoint and the startup locale resolution order live here
//! so user-facing behavior stays easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::locale::Locale;
use crate::menu::Route;
use crate::paths;
use crate::store::{ConfigStorage, LocaleStore};
use crate::ui::drawer::DrawerState;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Below this width the primary navigation collapses into the drawer.
pub const COMPACT_BREAKPOINT: f32 = 760.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    store: LocaleStore,
    drawer: DrawerState,
    route: Route,
    window_width: f32,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.store.active())
            .field("route", &self.route)
            .field("drawer", &self.drawer)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Maps the OS locale (e.g. "fr-FR") to a supported locale via its primary
/// language subtag. `None` when detection fails or the language is not
/// supported.
fn detect_os_locale() -> Option<Locale> {
    let raw = sys_locale::get_locale()?;
    let subtag = raw.split(['-', '_']).next()?.to_ascii_lowercase();
    Locale::parse(&subtag).ok()
}

impl App {
    /// Initializes the application state from `Flags` received from the
    /// launcher.
    ///
    /// Startup locale resolution order: CLI flag, persisted choice, OS
    /// locale, default. Only an explicit in-app switch ever writes storage;
    /// the CLI and OS sources are session-scoped overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();

        let mut store = LocaleStore::new(Box::new(ConfigStorage::new()));
        store.restore();

        if let Some(code) = flags.lang {
            match Locale::parse(&code) {
                Ok(locale) => store.adopt(locale),
                Err(error) => eprintln!("Ignoring --lang: {}", error),
            }
        } else if config.language.is_none() {
            if let Some(locale) = detect_os_locale() {
                store.adopt(locale);
            }
        }

        let i18n = I18n::new(store.active());

        let mut app = App {
            i18n,
            store,
            drawer: DrawerState::default(),
            route: Route::Home,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            notifications: notifications::Manager::new(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    /// Whether the window is below the compact breakpoint.
    fn is_compact(&self) -> bool {
        self.window_width < COMPACT_BREAKPOINT
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::store::testing::{MemoryHandle, MemoryStorage};

    /// Builds an `App` on in-memory storage, bypassing `App::new` so tests
    /// never touch the process-wide path overrides.
    pub(crate) fn app_with(storage: MemoryStorage) -> App {
        let mut store = LocaleStore::new(Box::new(storage));
        store.restore();
        let i18n = I18n::new(store.active());
        App {
            i18n,
            store,
            drawer: DrawerState::default(),
            route: Route::Home,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            notifications: notifications::Manager::new(),
        }
    }

    pub(crate) fn app() -> (App, MemoryHandle) {
        let (storage, handle) = MemoryStorage::empty();
        (app_with(storage), handle)
    }
}
