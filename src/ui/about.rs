// SPDX-License-Identifier: MPL-2.0
//! About screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Render the about screen. Emits no messages of its own.
pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let version = env!("CARGO_PKG_VERSION");

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("about-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("about-description")).size(typography::BODY))
        .push(
            Text::new(i18n.tr_with_args("about-version", &[("version", version)]))
                .size(typography::CAPTION),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}
