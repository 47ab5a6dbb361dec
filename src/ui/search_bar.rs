// SPDX-License-Identifier: MPL-2.0
//! URL entry row with the fetch trigger.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the search bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub url: &'a str,
}

/// Messages emitted by the search bar.
#[derive(Debug, Clone)]
pub enum Message {
    UrlChanged(String),
    Submitted,
}

/// Render the URL input and fetch button.
///
/// The button stays pressable while a fetch is in flight; overlapping
/// requests are resolved by the app in arrival order.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.url)
        .on_input(Message::UrlChanged)
        .on_submit(Message::Submitted)
        .size(typography::BODY_LG)
        .padding([spacing::XS, spacing::MD])
        .style(styles::text_input::search)
        .width(Length::Fill);

    let fetch_button = button(
        Text::new(ctx.i18n.tr("fetch-button"))
            .size(typography::BODY_LG)
            .align_y(Vertical::Center),
    )
    .on_press(Message::Submitted)
    .height(Length::Fixed(sizing::INPUT_HEIGHT))
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(input)
        .push(fetch_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_bar_renders_with_empty_url() {
        let i18n = I18n::default();
        let ctx = ViewContext { i18n: &i18n, url: "" };
        let _element = view(ctx);
    }

    #[test]
    fn search_bar_renders_with_typed_url() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            url: "https://example.com/page",
        };
        let _element = view(ctx);
    }
}
