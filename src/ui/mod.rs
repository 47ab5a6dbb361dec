// SPDX-License-Identifier: MPL-2.0
//! User interface components and visual design system.

pub mod about;
pub mod background;
pub mod design_tokens;
pub mod gallery_view;
pub mod navbar;
pub mod notifications;
pub mod search_bar;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;

pub use theming::ThemeMode;
