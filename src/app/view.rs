// SPDX-License-Identifier: MPL-2.0
//! Composes the shell: header on top, page content filling the middle,
//! footer at the bottom, with toast overlays stacked above everything.

use super::{App, Message};
use crate::ui::{footer, header, notifications, page};
use iced::widget::{Column, Stack};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let dir = app.store.document().dir();

    let shell: Element<'_, Message> = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            header::view(header::ViewContext {
                i18n: &app.i18n,
                dir,
                drawer: app.drawer,
                compact: app.is_compact(),
                active_locale: app.store.active(),
            })
            .map(Message::Header),
        )
        .push(page::view(&app.i18n, app.route, dir))
        .push(
            footer::view(footer::ViewContext {
                i18n: &app.i18n,
                dir,
                active_locale: app.store.active(),
            })
            .map(Message::Footer),
        )
        .into();

    if app.notifications.visible_count() == 0 {
        return shell;
    }

    Stack::new()
        .push(shell)
        .push(
            notifications::view_overlay(&app.notifications, &app.i18n)
                .map(Message::Notification),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing;
    use crate::locale::Locale;
    use crate::store::testing::MemoryStorage;
    use crate::ui::notifications::Notification;

    #[test]
    fn view_renders_default_state() {
        let (app, _handle) = testing::app();
        let _element = view(&app);
    }

    #[test]
    fn view_renders_rtl_compact_with_toast() {
        let (storage, _handle) = MemoryStorage::seeded(Some("ar"));
        let mut app = testing::app_with(storage);
        assert_eq!(app.store.active(), Locale::Ar);

        app.window_width = 500.0;
        app.drawer.open();
        app.notifications
            .push(Notification::warning("notification-language-save-error"));

        let _element = view(&app);
    }
}
