// SPDX-License-Identifier: MPL-2.0
//! Footer region: contact call-to-action, office addresses, language block
//! and the secondary navigation row.
//!
//! The footer is stateless; every interaction is forwarded to the parent as
//! an event. Block order and text alignment mirror under right-to-left.

use crate::i18n::fluent::I18n;
use crate::locale::{Direction, Locale};
use crate::menu::{MenuRole, Route};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{language_switcher, nav_menu, styles};
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub dir: Direction,
    pub active_locale: Locale,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Nav(nav_menu::Message),
    Switcher(language_switcher::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Navigate(Route),
    Download(&'static str),
    SwitchLocale(Locale),
}

/// Process a footer message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Nav(nav_menu::Message::Navigate(route)) => Event::Navigate(route),
        Message::Nav(nav_menu::Message::Download(path)) => Event::Download(path),
        Message::Switcher(language_switcher::Message::Select(locale)) => {
            Event::SwitchLocale(locale)
        }
    }
}

fn block_title(text: String) -> Text<'static> {
    Text::new(text).size(typography::TITLE_MD)
}

fn contact_block(ctx: &ViewContext<'_>, align: Horizontal) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(align)
        .push(block_title(ctx.i18n.tr("footer-contact-title")))
        .push(Text::new(ctx.i18n.tr("footer-tell-us")))
        .push(Text::new(ctx.i18n.tr("footer-question")))
        .push(
            button(Text::new(ctx.i18n.tr("footer-lets-chat")))
                .on_press(Message::Nav(nav_menu::Message::Navigate(Route::Contact)))
                .style(styles::button::nav_link)
                .padding([spacing::XXS, spacing::SM]),
        )
        .into()
}

fn address_block(ctx: &ViewContext<'_>, align: Horizontal) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(align)
        .push(block_title(ctx.i18n.tr("footer-address-title")))
        .push(Text::new(ctx.i18n.tr("footer-address-maadi")))
        .push(Text::new(ctx.i18n.tr("footer-address-maadi-tel")))
        .push(Text::new(ctx.i18n.tr("footer-address-maadi-mobile")))
        .push(Text::new(ctx.i18n.tr("footer-address-zamalek")))
        .push(Text::new(ctx.i18n.tr("footer-address-zamalek-tel")))
        .push(Text::new(ctx.i18n.tr("footer-address-zamalek-mobile")))
        .into()
}

fn language_block(ctx: &ViewContext<'_>, align: Horizontal) -> Element<'static, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(align)
        .push(block_title(ctx.i18n.tr("footer-language-label")))
        .push(
            language_switcher::view(language_switcher::ViewContext {
                i18n: ctx.i18n,
                active: ctx.active_locale,
            })
            .map(Message::Switcher),
        )
        .into()
}

/// Render the footer.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let align = if ctx.dir.is_rtl() {
        Horizontal::Right
    } else {
        Horizontal::Left
    };

    let blocks: [Element<'static, Message>; 3] = [
        contact_block(&ctx, align),
        address_block(&ctx, align),
        language_block(&ctx, align),
    ];

    let mut block_row = Row::new().spacing(spacing::XL).width(Length::Fill);
    if ctx.dir.is_rtl() {
        for block in blocks.into_iter().rev() {
            block_row = block_row.push(block);
        }
    } else {
        for block in blocks {
            block_row = block_row.push(block);
        }
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(align)
        .push(block_row)
        .push(nav_menu::row_view(ctx.i18n, MenuRole::FooterNav, ctx.dir).map(Message::Nav));

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_maps_to_navigate_event() {
        let event = update(Message::Nav(nav_menu::Message::Navigate(Route::About)));
        assert_eq!(event, Event::Navigate(Route::About));
    }

    #[test]
    fn download_maps_to_download_event() {
        let event = update(Message::Nav(nav_menu::Message::Download(
            "docs/company-profile.pdf",
        )));
        assert_eq!(event, Event::Download("docs/company-profile.pdf"));
    }

    #[test]
    fn locale_selection_maps_to_switch_event() {
        let event = update(Message::Switcher(language_switcher::Message::Select(
            Locale::Ar,
        )));
        assert_eq!(event, Event::SwitchLocale(Locale::Ar));
    }

    #[test]
    fn footer_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            dir: Direction::LeftToRight,
            active_locale: Locale::En,
        });
    }

    #[test]
    fn footer_view_renders_mirrored() {
        let i18n = I18n::new(Locale::Ar);
        let _element = view(ViewContext {
            i18n: &i18n,
            dir: Direction::RightToLeft,
            active_locale: Locale::Ar,
        });
    }
}
