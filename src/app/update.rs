// SPDX-License-Identifier: MPL-2.0
//! The root update loop: routes shell events to the locale store, the
//! active route and the notification manager.

use super::{App, Message};
use crate::download;
use crate::locale::Locale;
use crate::menu::Route;
use crate::ui::notifications::Notification;
use crate::ui::{footer, header};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Header(msg) => {
            match header::update(msg, &mut app.drawer) {
                header::Event::None => {}
                header::Event::Navigate(route) => navigate(app, route),
                header::Event::Download(path) => download::trigger(path),
                header::Event::SwitchLocale(locale) => switch_locale(app, locale),
            }
            Task::none()
        }
        Message::Footer(msg) => {
            match footer::update(msg) {
                footer::Event::Navigate(route) => navigate(app, route),
                footer::Event::Download(path) => download::trigger(path),
                footer::Event::SwitchLocale(locale) => switch_locale(app, locale),
            }
            Task::none()
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(msg);
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_width = size.width;
            // The drawer only exists in the compact layout.
            if !app.is_compact() {
                app.drawer.close();
            }
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            Task::none()
        }
    }
}

fn navigate(app: &mut App, route: Route) {
    app.route = route;
}

/// Activates a locale and updates the rendered language in one step.
///
/// A persistence failure is surfaced as a toast; the session keeps the new
/// language regardless.
fn switch_locale(app: &mut App, locale: Locale) {
    if let Some(warning) = app.store.set_active(locale) {
        eprintln!("{}", warning);
        app.notifications
            .push(Notification::warning(warning.notification_key()));
    }
    app.i18n.set_locale(locale);
}
