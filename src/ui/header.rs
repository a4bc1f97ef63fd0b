// SPDX-License-Identifier: MPL-2.0
//! Header region: logo, primary navigation, language switcher.
//!
//! On wide windows the navigation renders inline next to the switcher; on
//! narrow windows it collapses behind a burger control into the drawer
//! overlay. Selecting an entry inside the drawer auto-dismisses it.

use crate::i18n::fluent::I18n;
use crate::locale::{Direction, Locale};
use crate::menu::{MenuRole, Route};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::drawer::DrawerState;
use crate::ui::{icons, language_switcher, nav_menu, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, space, tooltip, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub dir: Direction,
    pub drawer: DrawerState,
    /// Whether the window is below the compact breakpoint.
    pub compact: bool,
    pub active_locale: Locale,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleDrawer,
    CloseDrawer,
    Logo,
    Nav(nav_menu::Message),
    Switcher(language_switcher::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    Download(&'static str),
    SwitchLocale(Locale),
}

/// Process a header message and return the corresponding event.
///
/// Navigation selections close the drawer so overlay navigation
/// auto-dismisses; locale switches leave it as-is.
pub fn update(message: Message, drawer: &mut DrawerState) -> Event {
    match message {
        Message::ToggleDrawer => {
            drawer.toggle();
            Event::None
        }
        Message::CloseDrawer => {
            drawer.close();
            Event::None
        }
        Message::Logo => {
            drawer.close();
            Event::Navigate(Route::Home)
        }
        Message::Nav(nav_menu::Message::Navigate(route)) => {
            drawer.close();
            Event::Navigate(route)
        }
        Message::Nav(nav_menu::Message::Download(path)) => {
            drawer.close();
            Event::Download(path)
        }
        Message::Switcher(language_switcher::Message::Select(locale)) => {
            Event::SwitchLocale(locale)
        }
    }
}

/// Render the header bar, plus the drawer overlay when open.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let logo: Element<'static, Message> = tooltip(
        button(
            icons::logo()
                .width(sizing::LOGO_WIDTH)
                .height(sizing::LOGO_HEIGHT),
        )
        .on_press(Message::Logo)
        .style(styles::button::icon)
        .padding(spacing::XXS),
        Text::new(ctx.i18n.tr("aria-homepage")),
        tooltip::Position::Bottom,
    )
    .into();

    let trailing: Element<'static, Message> = if ctx.compact {
        tooltip(
            button(icons::sized(icons::menu(), sizing::ICON_MD))
                .on_press(Message::ToggleDrawer)
                .style(styles::button::icon)
                .padding(spacing::XS),
            Text::new(ctx.i18n.tr("aria-toggle-menu")),
            tooltip::Position::Bottom,
        )
        .into()
    } else {
        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Center)
            .push(nav_menu::row_view(ctx.i18n, MenuRole::PrimaryNav, ctx.dir).map(Message::Nav))
            .push(
                language_switcher::view(language_switcher::ViewContext {
                    i18n: ctx.i18n,
                    active: ctx.active_locale,
                })
                .map(Message::Switcher),
            )
            .into()
    };

    // Mirror the bar under right-to-left direction.
    let bar = if ctx.dir.is_rtl() {
        Row::new()
            .push(trailing)
            .push(space::horizontal())
            .push(logo)
    } else {
        Row::new()
            .push(logo)
            .push(space::horizontal())
            .push(trailing)
    }
    .align_y(Vertical::Center)
    .padding([spacing::SM, spacing::LG])
    .width(Length::Fill);

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(bar)
            .width(Length::Fill)
            .style(styles::container::bar),
    );

    if ctx.compact && ctx.drawer.is_open() {
        content = content.push(build_drawer(&ctx));
    }

    content.into()
}

/// Build the drawer overlay panel shown below the bar on narrow windows.
fn build_drawer(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let title_row = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("drawer-menu-title")).size(typography::TITLE_MD))
        .push(space::horizontal())
        .push(
            button(icons::sized(icons::menu(), sizing::ICON_SM))
                .on_press(Message::CloseDrawer)
                .style(styles::button::icon)
                .padding(spacing::XXS),
        );

    let panel = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(title_row)
        .push(nav_menu::column_view(ctx.i18n, MenuRole::PrimaryNav, ctx.dir).map(Message::Nav))
        .push(
            language_switcher::view(language_switcher::ViewContext {
                i18n: ctx.i18n,
                active: ctx.active_locale,
            })
            .map(Message::Switcher),
        );

    // The drawer docks on the trailing edge, mirrored under RTL.
    let align = if ctx.dir.is_rtl() {
        Horizontal::Left
    } else {
        Horizontal::Right
    };

    Container::new(
        Container::new(panel)
            .width(sizing::DRAWER_WIDTH)
            .style(styles::container::drawer),
    )
    .width(Length::Fill)
    .align_x(align)
    .padding([0.0, spacing::SM])
    .into()
}
