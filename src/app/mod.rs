// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, settings
//! and about views.
//!
//! The `App` struct wires together the domains (scraping, gallery state,
//! localization, persisted preferences) and translates messages into side
//! effects like network fetches or config persistence. Policy decisions
//! (window sizing, settlement order, persistence format) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::scrape::ScrapeClient;
use crate::ui::background;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging UI components, localization, the
/// scraping client and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// URL as typed in the search bar.
    url_input: String,
    /// Endpoint as typed on the settings screen, committed on submit.
    endpoint_draft: String,
    /// True strictly between a fetch trigger and its settlement.
    loading: bool,
    gallery: Gallery,
    client: ScrapeClient,
    config: Config,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Decorative gradient backdrop state.
    background: background::Cycle,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("loading", &self.loading)
            .field("gallery_len", &self.gallery.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Gallery,
            url_input: String::new(),
            endpoint_draft: String::new(),
            loading: false,
            gallery: Gallery::new(),
            client: ScrapeClient::new_or_default(config::DEFAULT_ENDPOINT),
            config: Config::default(),
            theme_mode: ThemeMode::default(),
            notifications: notifications::Manager::new(),
            background: background::Cycle::new(),
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_load_failed) = match config::load() {
            Ok(config) => (config, false),
            Err(_) => (Config::default(), true),
        };

        let i18n = I18n::new(flags.lang.clone(), &config);
        let endpoint = flags
            .endpoint
            .clone()
            .unwrap_or_else(|| config.effective_endpoint().to_string());

        let mut app = App {
            i18n,
            client: ScrapeClient::new_or_default(endpoint),
            theme_mode: config.theme_mode,
            config,
            ..Self::default()
        };

        if config_load_failed {
            app.notifications
                .push(Notification::error("notification-config-load-error"));
        }

        let task = match flags.start_url {
            Some(url) => {
                app.url_input = url;
                app.update(Message::SearchBar(
                    crate::ui::search_bar::Message::Submitted,
                ))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            url_input: &mut self.url_input,
            endpoint_draft: &mut self.endpoint_draft,
            loading: &mut self.loading,
            gallery: &mut self.gallery,
            client: &mut self.client,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            background: &mut self.background,
            spinner_rotation: &mut self.spinner_rotation,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            url_input: &self.url_input,
            endpoint_draft: &self.endpoint_draft,
            gallery: &self.gallery,
            loading: self.loading,
            spinner_rotation: self.spinner_rotation,
            theme_mode: self.theme_mode,
            download_dir: self.config.download_dir.as_deref(),
            background: &self.background,
            notifications: &self.notifications,
        })
    }
}
