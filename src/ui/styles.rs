// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the shell's widgets.

/// Button styles.
pub mod button {
    use crate::ui::design_tokens::{palette, radius};
    use iced::widget::button;
    use iced::{Background, Border, Theme};

    /// Plain navigation link: transparent at rest, subtle hover background.
    pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();

        match status {
            button::Status::Hovered => button::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: palette.background.base.text,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..button::Style::default()
            },
            button::Status::Pressed => button::Style {
                background: Some(palette.primary.strong.color.into()),
                text_color: palette.primary.strong.text,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..button::Style::default()
            },
            _ => button::Style {
                background: None,
                text_color: palette.background.base.text,
                border: Border::default(),
                ..button::Style::default()
            },
        }
    }

    /// Selected/active control (the current language's switch).
    pub fn selected(_theme: &Theme, _status: button::Status) -> button::Style {
        button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 2.0,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        }
    }

    /// Icon-only control (inactive language switches, burger).
    pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
        let palette = theme.extended_palette();

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(palette.background.weak.color.into()),
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..button::Style::default()
            },
            _ => button::Style {
                background: None,
                border: Border::default(),
                ..button::Style::default()
            },
        }
    }
}

/// Container styles.
pub mod container {
    use crate::ui::design_tokens::radius;
    use iced::widget::container;
    use iced::{Border, Theme};

    /// Fixed shell regions (header bar, footer).
    pub fn bar(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.weak.color.into()),
            ..Default::default()
        }
    }

    /// The drawer overlay panel on narrow windows.
    pub fn drawer(theme: &Theme) -> container::Style {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.base.color.into()),
            border: Border {
                radius: radius::MD.into(),
                width: 1.0,
                color: palette.background.strong.color,
            },
            ..Default::default()
        }
    }

    /// Toast surface; the severity accent is applied by the caller.
    pub fn toast(accent: iced::Color) -> impl Fn(&Theme) -> container::Style {
        move |theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    radius: radius::SM.into(),
                    width: 2.0,
                    color: accent,
                },
                ..Default::default()
            }
        }
    }
}
