// SPDX-License-Identifier: MPL-2.0
//! `webgrab` is a desktop gallery client for a remote image-scraping
//! service, built with the Iced GUI framework.
//!
//! It sends a page URL to the service, shows every image the service found
//! as a downloadable gallery, and demonstrates internationalization with
//! Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/webgrab/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod scrape;
pub mod ui;
