// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The main card floating over the animated gradient.
pub fn card(theme: &Theme) -> container::Style {
    let (surface, text) = match theme {
        Theme::Light => (palette::WHITE, palette::GRAY_900),
        _ => (palette::GRAY_900, palette::WHITE),
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..surface
        })),
        text_color: Some(text),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::LG,
        ..container::Style::default()
    }
}

/// Cell framing one thumbnail and its download strip.
pub fn thumbnail_cell(theme: &Theme) -> container::Style {
    let surface = match theme {
        Theme::Light => palette::GRAY_100,
        _ => palette::GRAY_700,
    };

    container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_surface_is_translucent() {
        let style = card(&Theme::Light);
        if let Some(Background::Color(bg)) = style.background {
            assert!(bg.a < 1.0);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn thumbnail_cell_adapts_to_theme() {
        let light = thumbnail_cell(&Theme::Light);
        let dark = thumbnail_cell(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }
}
