// SPDX-License-Identifier: MPL-2.0
//! Shared rendering of a navigation entry list.
//!
//! The same fixed entries render as a horizontal row (wide header, footer)
//! or a vertical column (drawer). Labels resolve through i18n at view time,
//! so nothing here is re-created on locale change. Row order is reversed
//! under right-to-left direction so the visual order mirrors.

use crate::i18n::fluent::I18n;
use crate::locale::Direction;
use crate::menu::{self, MenuEntry, MenuRole, MenuTarget, Route};
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Messages emitted by a rendered menu entry.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Navigate(Route),
    Download(&'static str),
}

fn activation(entry: &MenuEntry) -> Message {
    match entry.target {
        MenuTarget::Route(route) => Message::Navigate(route),
        MenuTarget::Download(path) => Message::Download(path),
    }
}

fn link(i18n: &I18n, entry: &MenuEntry) -> Element<'static, Message> {
    button(Text::new(i18n.tr(entry.key)))
        .on_press(activation(entry))
        .style(styles::button::nav_link)
        .padding([spacing::XXS, spacing::SM])
        .into()
}

/// Horizontal rendering for the header bar and footer.
pub fn row_view(i18n: &I18n, role: MenuRole, dir: Direction) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::MD).align_y(Vertical::Center);

    let entries = menu::entries(role);
    if dir.is_rtl() {
        for entry in entries.iter().rev() {
            row = row.push(link(i18n, entry));
        }
    } else {
        for entry in entries {
            row = row.push(link(i18n, entry));
        }
    }

    row.into()
}

/// Vertical rendering for the drawer overlay.
pub fn column_view(i18n: &I18n, role: MenuRole, dir: Direction) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::XS).width(Length::Fill);

    for entry in menu::entries(role) {
        let entry_button = button(Text::new(i18n.tr(entry.key)))
            .on_press(activation(entry))
            .style(styles::button::nav_link)
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill);
        column = column.push(entry_button);
    }

    let align = if dir.is_rtl() {
        iced::alignment::Horizontal::Right
    } else {
        iced::alignment::Horizontal::Left
    };
    column.align_x(align).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn row_view_renders_for_both_roles() {
        let i18n = I18n::default();
        let _primary = row_view(&i18n, MenuRole::PrimaryNav, Direction::LeftToRight);
        let _footer = row_view(&i18n, MenuRole::FooterNav, Direction::LeftToRight);
    }

    #[test]
    fn row_view_renders_mirrored() {
        let i18n = I18n::new(Locale::Ar);
        let _element = row_view(&i18n, MenuRole::PrimaryNav, Direction::RightToLeft);
    }

    #[test]
    fn column_view_renders() {
        let i18n = I18n::default();
        let _element = column_view(&i18n, MenuRole::PrimaryNav, Direction::LeftToRight);
    }

    #[test]
    fn download_entry_maps_to_download_message() {
        let entry = MenuEntry {
            key: "nav-company-profile",
            target: MenuTarget::Download("docs/company-profile.pdf"),
        };
        assert!(matches!(activation(&entry), Message::Download(_)));
    }

    #[test]
    fn route_entry_maps_to_navigate_message() {
        let entry = MenuEntry {
            key: "nav-about",
            target: MenuTarget::Route(Route::About),
        };
        assert!(matches!(
            activation(&entry),
            Message::Navigate(Route::About)
        ));
    }
}
