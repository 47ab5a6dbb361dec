// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are the only user-facing reporting channel: validation
//! rejections, fetch failures, and download outcomes all surface here.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
