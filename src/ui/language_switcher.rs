// SPDX-License-Identifier: MPL-2.0
//! The language switcher: one flag control per supported locale.
//!
//! The active locale's control is visually highlighted, and every control
//! carries its localized descriptive switch label (e.g. "Switch to Arabic")
//! so the action is announced independently of the flag rendering.
//! Selecting the already-active locale is permitted; the store treats it as
//! an idempotent no-op.

use crate::i18n::fluent::I18n;
use crate::locale::Locale;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::{icons, styles};
use iced::widget::{button, tooltip, Row, Text};
use iced::Element;

/// Contextual data needed to render the switcher.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Locale,
}

/// Messages emitted by the switcher.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Select(Locale),
}

/// Render one activation control per supported locale.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for locale in Locale::ALL {
        let control = button(icons::sized(icons::flag(locale), sizing::ICON_LG))
            .on_press(Message::Select(locale))
            .padding(spacing::XXS)
            .style(if locale == ctx.active {
                styles::button::selected
            } else {
                styles::button::icon
            });

        // The descriptive label doubles as the assistive-technology name
        // for the control.
        let label = ctx.i18n.tr(locale.switch_label_key());
        row = row.push(tooltip(
            control,
            Text::new(label),
            tooltip::Position::Bottom,
        ));
    }

    row.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switcher_renders_with_each_active_locale() {
        let i18n = I18n::default();
        for locale in Locale::ALL {
            let _element = view(ViewContext {
                i18n: &i18n,
                active: locale,
            });
        }
    }
}
