// SPDX-License-Identifier: MPL-2.0
//! Placeholder page content for each route.
//!
//! The shell owns navigation; pages themselves are simple localized titles
//! until real content exists.

use crate::i18n::fluent::I18n;
use crate::locale::Direction;
use crate::menu::Route;
use crate::ui::design_tokens::{spacing, typography};
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

/// Render the content region for the active route.
pub fn view<Message: 'static>(i18n: &I18n, route: Route, dir: Direction) -> Element<'static, Message> {
    let align = if dir.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(align)
        .push(Text::new(i18n.tr(route.title_key())).size(typography::TITLE_LG));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
