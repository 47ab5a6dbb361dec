// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and all specialized
//! message handlers for different parts of the application.

use super::{Message, Screen};
use crate::config::{self, Config};
use crate::error::FetchError;
use crate::gallery::{Gallery, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::scrape::{download, FetchedImage, ScrapeClient};
use crate::ui::background;
use crate::ui::gallery_view;
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::search_bar;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Spinner advance per tick, a full turn roughly every 1.2 seconds.
const SPINNER_STEP: f32 = std::f32::consts::TAU
    * (background::TICK_INTERVAL.as_millis() as f32 / 1200.0);

/// Mutable application state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub url_input: &'a mut String,
    pub endpoint_draft: &'a mut String,
    pub loading: &'a mut bool,
    pub gallery: &'a mut Gallery,
    pub client: &'a mut ScrapeClient,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut Manager,
    pub background: &'a mut background::Cycle,
    pub spinner_rotation: &'a mut f32,
}

/// Single update entrypoint dispatching to the specialized handlers.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::SearchBar(msg) => handle_search_bar(ctx, msg),
        Message::GalleryView(msg) => handle_gallery_view(ctx, msg),
        Message::Navbar(msg) => handle_navbar(ctx, msg),
        Message::Settings(msg) => handle_settings(ctx, msg),
        Message::Notification(msg) => {
            ctx.notifications.handle_message(&msg);
            Task::none()
        }
        Message::FetchCompleted(result) => handle_fetch_completed(ctx, result),
        Message::ThumbnailLoaded {
            generation,
            url,
            result,
        } => handle_thumbnail_loaded(ctx, generation, &url, result),
        Message::SaveDialogResult { url, path } => handle_save_dialog_result(ctx, url, path),
        Message::DownloadCompleted { filename, result } => {
            handle_download_completed(ctx, &filename, result)
        }
        Message::DownloadDirSelected(dir) => handle_download_dir_selected(ctx, dir),
        Message::Tick(now) => handle_tick(ctx, now),
    }
}

fn handle_search_bar(ctx: &mut UpdateContext<'_>, message: search_bar::Message) -> Task<Message> {
    match message {
        search_bar::Message::UrlChanged(url) => {
            *ctx.url_input = url;
            Task::none()
        }
        search_bar::Message::Submitted => trigger_fetch(ctx),
    }
}

/// Validates the typed URL and issues the scrape request.
///
/// An empty URL is rejected without touching the network, the loading flag
/// or the current result set. Overlapping fetches are allowed; each
/// settlement is applied as it arrives.
pub fn trigger_fetch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let url = ctx.url_input.trim().to_string();
    if url.is_empty() {
        ctx.notifications
            .push(Notification::error("notification-validation-empty-url"));
        return Task::none();
    }

    *ctx.loading = true;

    let client = ctx.client.clone();
    Task::perform(
        async move { client.fetch_images(url).await },
        Message::FetchCompleted,
    )
}

/// Applies a settled scrape request.
///
/// Success replaces the whole result set, even with an empty one. Failure
/// leaves the current result set untouched. Either way the loading flag
/// drops, also when an older overlapping fetch is still in flight.
fn handle_fetch_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<String>, FetchError>,
) -> Task<Message> {
    *ctx.loading = false;

    match result {
        Ok(urls) => {
            ctx.notifications.clear_fetch_errors();

            let count = urls.len();
            let generation = ctx.gallery.apply_results(urls);

            if count == 0 {
                ctx.notifications
                    .push(Notification::info("notification-fetch-empty"));
                return Task::none();
            }

            ctx.notifications.push(
                Notification::success("notification-fetch-success")
                    .with_arg("count", count.to_string()),
            );

            spawn_thumbnail_tasks(ctx.gallery, ctx.client, generation)
        }
        Err(err) => {
            ctx.notifications.push(fetch_error_notification(&err));
            Task::none()
        }
    }
}

/// One GET per entry of the freshly applied result set.
fn spawn_thumbnail_tasks(
    gallery: &Gallery,
    client: &ScrapeClient,
    generation: u64,
) -> Task<Message> {
    let tasks: Vec<Task<Message>> = gallery
        .entries()
        .map(|entry| {
            let client = client.clone();
            let url = entry.url().to_string();
            Task::perform(
                async move {
                    let result = client.fetch_image_bytes(url.clone()).await;
                    (url, result)
                },
                move |(url, result)| Message::ThumbnailLoaded {
                    generation,
                    url,
                    result,
                },
            )
        })
        .collect();

    Task::batch(tasks)
}

fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    url: &str,
    result: Result<FetchedImage, FetchError>,
) -> Task<Message> {
    let thumbnail = match result {
        Ok(image) => Thumbnail::Ready {
            handle: iced::widget::image::Handle::from_bytes(image.bytes),
            width: image.width,
            height: image.height,
        },
        Err(_) => Thumbnail::Failed,
    };

    // A stale generation is silently discarded here.
    ctx.gallery.set_thumbnail(generation, url, thumbnail);
    Task::none()
}

fn handle_gallery_view(
    ctx: &mut UpdateContext<'_>,
    message: gallery_view::Message,
) -> Task<Message> {
    match message {
        gallery_view::Message::DownloadPressed(index) => {
            let Some(url) = ctx
                .gallery
                .entries()
                .nth(index)
                .map(|entry| entry.url().to_string())
            else {
                return Task::none();
            };

            let suggested = download::suggested_filename(&url);
            let directory = ctx.config.effective_download_dir();

            Task::perform(
                async move {
                    let mut dialog = rfd::AsyncFileDialog::new().set_file_name(&suggested);
                    if let Some(directory) = directory {
                        dialog = dialog.set_directory(directory);
                    }
                    let path = dialog
                        .save_file()
                        .await
                        .map(|handle| handle.path().to_path_buf());
                    (url, path)
                },
                |(url, path)| Message::SaveDialogResult { url, path },
            )
        }
    }
}

fn handle_save_dialog_result(
    ctx: &mut UpdateContext<'_>,
    url: String,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // Cancelled dialog, nothing to report.
        return Task::none();
    };

    let http = ctx.client.http();
    Task::perform(
        async move {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            let result = download::download_image(http, url, path).await;
            (filename, result)
        },
        |(filename, result)| Message::DownloadCompleted { filename, result },
    )
}

fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    filename: &str,
    result: Result<u64, FetchError>,
) -> Task<Message> {
    match result {
        Ok(_) => ctx.notifications.push(
            Notification::success("notification-download-success").with_arg("filename", filename),
        ),
        Err(err) => ctx.notifications.push(
            Notification::error("notification-download-error")
                .with_arg("reason", err.to_string()),
        ),
    }
    Task::none()
}

fn handle_navbar(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::ScreenSelected(screen) => {
            if screen == Screen::Settings {
                *ctx.endpoint_draft = ctx.client.endpoint().to_string();
            }
            *ctx.screen = screen;
            Task::none()
        }
    }
}

fn handle_settings(ctx: &mut UpdateContext<'_>, message: settings::Message) -> Task<Message> {
    match message {
        settings::Message::EndpointChanged(endpoint) => {
            *ctx.endpoint_draft = endpoint;
            Task::none()
        }
        settings::Message::EndpointSubmitted => {
            let endpoint = ctx.endpoint_draft.trim().to_string();
            if endpoint.is_empty() {
                *ctx.endpoint_draft = ctx.client.endpoint().to_string();
                return Task::none();
            }
            ctx.client.set_endpoint(endpoint.clone());
            ctx.config.endpoint = Some(endpoint);
            persist_config(ctx.config, ctx.notifications);
            Task::none()
        }
        settings::Message::BrowseDownloadDir => {
            let current = ctx.config.effective_download_dir();
            Task::perform(
                async move {
                    let mut dialog = rfd::AsyncFileDialog::new();
                    if let Some(current) = current {
                        dialog = dialog.set_directory(current);
                    }
                    dialog
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::DownloadDirSelected,
            )
        }
        settings::Message::LanguageSelected(locale) => {
            ctx.config.language = Some(locale.to_string());
            ctx.i18n.set_locale(locale);
            persist_config(ctx.config, ctx.notifications);
            Task::none()
        }
        settings::Message::ThemeSelected(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.theme_mode = mode;
            persist_config(ctx.config, ctx.notifications);
            Task::none()
        }
    }
}

fn handle_download_dir_selected(
    ctx: &mut UpdateContext<'_>,
    dir: Option<PathBuf>,
) -> Task<Message> {
    if let Some(dir) = dir {
        ctx.config.download_dir = Some(dir);
        persist_config(ctx.config, ctx.notifications);
    }
    Task::none()
}

fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.background.tick(now);
    ctx.notifications.tick();

    if *ctx.loading || ctx.gallery.pending_thumbnails() > 0 {
        *ctx.spinner_rotation = (*ctx.spinner_rotation + SPINNER_STEP) % std::f32::consts::TAU;
    }

    Task::none()
}

/// Writes the config to disk, reporting failure as a toast.
fn persist_config(config: &Config, notifications: &mut Manager) {
    if config::save(config).is_err() {
        notifications.push(Notification::error("notification-config-save-error"));
    }
}

/// Maps a fetch failure onto its localized notification.
fn fetch_error_notification(err: &FetchError) -> Notification {
    let notification = Notification::error(err.i18n_key());
    match err {
        FetchError::Status(code) => notification.with_arg("status", code.to_string()),
        FetchError::Other(reason) => notification.with_arg("reason", reason.clone()),
        _ => notification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_notification_carries_status_arg() {
        let notification = fetch_error_notification(&FetchError::Status(502));
        assert_eq!(
            notification.message_key(),
            "notification-fetch-error-status"
        );
        assert_eq!(
            notification.message_args(),
            &[("status".to_string(), "502".to_string())]
        );
    }

    #[test]
    fn fetch_error_notification_without_args() {
        let notification = fetch_error_notification(&FetchError::Timeout);
        assert!(notification.message_args().is_empty());
    }

    #[test]
    fn spinner_step_is_a_sane_fraction_of_a_turn() {
        assert!(SPINNER_STEP > 0.0);
        assert!(SPINNER_STEP < std::f32::consts::TAU / 4.0);
    }
}
