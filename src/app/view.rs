// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every screen floats as a translucent card over the animated gradient
//! backdrop, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::background;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery_view::{self, ViewContext as GalleryViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::search_bar::{self, ViewContext as SearchBarViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{scrollable, Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub url_input: &'a str,
    pub endpoint_draft: &'a str,
    pub gallery: &'a Gallery,
    pub loading: bool,
    pub spinner_rotation: f32,
    pub theme_mode: ThemeMode,
    pub download_dir: Option<&'a Path>,
    pub background: &'a background::Cycle,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let card_content: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => view_gallery(&ctx),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            endpoint_draft: ctx.endpoint_draft,
            download_dir: ctx.download_dir,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
        Screen::About => about::view(ctx.i18n),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
    })
    .map(Message::Navbar);

    let card = Container::new(card_content)
        .max_width(sizing::CARD_MAX_WIDTH)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card);

    let content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(
            scrollable(
                Container::new(card)
                    .width(Length::Fill)
                    .padding(spacing::LG)
                    .align_x(Horizontal::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill),
        );

    let backdrop = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Top)
        .style(ctx.background.style());

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new().push(backdrop).push(toasts).into()
}

/// The main screen: heading, search bar and the result grid.
fn view_gallery<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_LG);
    let tagline = Text::new(ctx.i18n.tr("gallery-tagline")).size(typography::BODY);

    let search = search_bar::view(SearchBarViewContext {
        i18n: ctx.i18n,
        url: ctx.url_input,
    })
    .map(Message::SearchBar);

    let results = gallery_view::view(GalleryViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        loading: ctx.loading,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::GalleryView);

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(tagline)
        .push(search)
        .push(results)
        .into()
}
