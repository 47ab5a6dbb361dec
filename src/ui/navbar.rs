// SPDX-License-Identifier: MPL-2.0
//! Top navigation between the gallery, settings and about screens.

use crate::app::screen::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(Screen),
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tabs = [
        (Screen::Gallery, "navbar-gallery"),
        (Screen::Settings, "navbar-settings"),
        (Screen::About, "navbar-about"),
    ];

    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    for (screen, label_key) in tabs {
        let label = Text::new(ctx.i18n.tr(label_key));
        let tab = if screen == ctx.current {
            button(label).style(styles::button::selected)
        } else {
            button(label)
                .on_press(Message::ScreenSelected(screen))
                .style(styles::button::unselected)
        };
        row = row.push(tab.padding([spacing::XXS, spacing::SM]));
    }

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .into()
}
