// SPDX-License-Identifier: MPL-2.0
//! Centralized text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Theme};

/// Pill-shaped URL entry field.
pub fn search(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let is_light = matches!(theme, Theme::Light);

    let (surface, value, placeholder) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, palette::WHITE, palette::GRAY_200)
    };

    let border_color = match status {
        text_input::Status::Active | text_input::Status::Disabled => palette::GRAY_200,
        text_input::Status::Hovered => palette::GRAY_400,
        // Focused
        _ => palette::PRIMARY_500,
    };

    text_input::Style {
        background: Background::Color(surface),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        icon: placeholder,
        placeholder,
        value,
        selection: palette::PRIMARY_400,
    }
}
