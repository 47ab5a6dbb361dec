// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::FetchError;
use crate::scrape::FetchedImage;
use crate::ui::gallery_view;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::search_bar;
use crate::ui::settings;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    GalleryView(gallery_view::Message),
    Navbar(navbar::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// A scrape request settled. Every settlement is applied in arrival
    /// order; with overlapping fetches the last one to resolve wins.
    FetchCompleted(Result<Vec<String>, FetchError>),
    /// Thumbnail bytes arrived for one entry of the tagged result set.
    ThumbnailLoaded {
        generation: u64,
        url: String,
        result: Result<FetchedImage, FetchError>,
    },
    /// The save dialog closed; `None` means the user cancelled.
    SaveDialogResult {
        url: String,
        path: Option<PathBuf>,
    },
    /// An image finished (or failed) writing to disk.
    DownloadCompleted {
        filename: String,
        result: Result<u64, FetchError>,
    },
    /// The download-directory picker closed.
    DownloadDirSelected(Option<PathBuf>),
    /// Periodic tick driving the background cycle, spinners and toast timers.
    Tick(Instant),
}

/// Runtime flags parsed from the command line in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override, e.g. `fr`.
    pub lang: Option<String>,
    /// Scraping endpoint override.
    pub endpoint: Option<String>,
    /// Page URL to fetch immediately on startup.
    pub start_url: Option<String>,
}
