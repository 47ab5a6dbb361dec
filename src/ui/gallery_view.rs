// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for the scraped result set.
//!
//! Entries render in the order the scraping service returned them. Cells
//! show a spinner while the thumbnail bytes are in flight, the decoded
//! image once ready, and a short notice when decoding failed. Every cell
//! carries a download strip regardless of thumbnail state.

use crate::gallery::{Gallery, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, text, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Theme,
};

/// Contextual data needed to render the gallery grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    /// Whether a fetch is currently in flight.
    pub loading: bool,
    /// Spinner rotation shared by all loading indicators.
    pub spinner_rotation: f32,
}

/// Messages emitted by the gallery grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// Download was requested for the entry at this index.
    DownloadPressed(usize),
}

/// Render the result section: loading indicator, empty hint, or the grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.loading && ctx.gallery.is_empty() {
        return loading_indicator(&ctx);
    }

    if ctx.gallery.is_empty() {
        return Container::new(
            Text::new(ctx.i18n.tr("empty-state-hint"))
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into();
    }

    let heading = Text::new(ctx.i18n.tr("gallery-download-heading")).size(typography::TITLE_SM);

    let mut grid = Column::new().spacing(spacing::SM).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);
    let mut in_row = 0;

    for (index, entry) in ctx.gallery.entries().enumerate() {
        row = row.push(cell(&ctx, index, entry.thumbnail()));
        in_row += 1;
        if in_row == sizing::GRID_COLUMNS {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::SM).width(Length::Fill);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    let mut section = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(heading);

    if ctx.loading {
        // A refetch over existing results keeps the old set visible.
        section = section.push(loading_indicator(&ctx));
    }

    section.push(grid).into()
}

/// Centered spinner with the loading caption.
fn loading_indicator<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
        .size(sizing::ICON_XL)
        .into_element();

    let caption = Text::new(ctx.i18n.tr("loading-images")).size(typography::BODY);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(caption),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .into()
}

/// One grid cell: thumbnail surface plus its download strip.
fn cell<'a>(ctx: &ViewContext<'a>, index: usize, thumbnail: &'a Thumbnail) -> Element<'a, Message> {
    let surface: Element<'a, Message> = match thumbnail {
        Thumbnail::Loading => Container::new(
            AnimatedSpinner::new(palette::PRIMARY_400, ctx.spinner_rotation)
                .size(sizing::ICON_MD)
                .into_element(),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
        Thumbnail::Ready { handle, .. } => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        Thumbnail::Failed => Container::new(
            Text::new(ctx.i18n.tr("thumbnail-failed"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let download_strip = button(
        Text::new(ctx.i18n.tr("download-button"))
            .size(typography::CAPTION)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::DownloadPressed(index))
    .width(Length::Fill)
    .padding(spacing::XXS)
    .style(styles::button::download);

    Container::new(Column::new().push(surface).push(download_strip))
        .width(Length::FillPortion(1))
        .style(styles::container::thumbnail_cell)
        .clip(true)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_renders_hint() {
        let i18n = I18n::default();
        let gallery = Gallery::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            gallery: &gallery,
            loading: false,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn loading_gallery_renders_spinner() {
        let i18n = I18n::default();
        let gallery = Gallery::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            gallery: &gallery,
            loading: true,
            spinner_rotation: 1.2,
        });
    }

    #[test]
    fn populated_gallery_renders_grid() {
        let i18n = I18n::default();
        let mut gallery = Gallery::default();
        gallery.apply_results(vec![
            "https://example.com/a.png".to_string(),
            "https://example.com/b.png".to_string(),
            "https://example.com/c.png".to_string(),
            "https://example.com/d.png".to_string(),
        ]);
        let _element = view(ViewContext {
            i18n: &i18n,
            gallery: &gallery,
            loading: false,
            spinner_rotation: 0.0,
        });
    }
}
