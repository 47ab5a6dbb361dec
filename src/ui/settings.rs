// SPDX-License-Identifier: MPL-2.0
//! Settings screen: endpoint, download directory, language and theme.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Endpoint as currently typed, committed on submit.
    pub endpoint_draft: &'a str,
    pub download_dir: Option<&'a Path>,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    EndpointChanged(String),
    EndpointSubmitted,
    BrowseDownloadDir,
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let endpoint_row = labeled_row(
        ctx.i18n.tr("settings-endpoint-label"),
        text_input(&ctx.i18n.tr("settings-endpoint-placeholder"), ctx.endpoint_draft)
            .on_input(Message::EndpointChanged)
            .on_submit(Message::EndpointSubmitted)
            .size(typography::BODY)
            .padding(spacing::XS)
            .width(Length::Fill)
            .into(),
    );

    let download_dir_label = ctx
        .download_dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| ctx.i18n.tr("settings-download-dir-unset"));
    let download_row = labeled_row(
        ctx.i18n.tr("settings-download-dir-label"),
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(download_dir_label).size(typography::BODY))
            .push(
                button(Text::new(ctx.i18n.tr("settings-download-dir-browse")).size(typography::BODY))
                    .on_press(Message::BrowseDownloadDir)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::unselected),
            )
            .into(),
    );

    let mut language_row = Row::new().spacing(spacing::XS);
    for locale in &ctx.i18n.available_locales {
        let name_key = format!("language-name-{locale}");
        let translated = ctx.i18n.tr(&name_key);
        let label = if translated.starts_with("MISSING:") {
            locale.to_string()
        } else {
            translated
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let style = if is_current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        language_row = language_row.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::LanguageSelected(locale.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
        );
    }
    let language_section = labeled_row(
        ctx.i18n.tr("settings-language-label"),
        language_row.into(),
    );

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let style = if mode == ctx.theme_mode {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        theme_row = theme_row.push(
            button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                .on_press(Message::ThemeSelected(mode))
                .padding([spacing::XXS, spacing::SM])
                .style(style),
        );
    }
    let theme_section = labeled_row(ctx.i18n.tr("settings-theme-label"), theme_row.into());

    Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_SM))
        .push(endpoint_row)
        .push(download_row)
        .push(language_section)
        .push(theme_section)
        .into()
}

/// Label above its control.
fn labeled_row<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::CAPTION))
        .push(control)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_renders_with_defaults() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            endpoint_draft: "https://example.com",
            download_dir: None,
            theme_mode: ThemeMode::System,
        });
    }

    #[test]
    fn settings_renders_with_download_dir() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            endpoint_draft: "",
            download_dir: Some(Path::new("/home/user/Downloads")),
            theme_mode: ThemeMode::Dark,
        });
    }
}
