// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::background;
use iced::{time, Subscription};

/// Creates the periodic tick subscription.
///
/// The tick runs unconditionally: the decorative background cycles whether
/// or not anything else is happening. The same tick also advances loading
/// spinners and notification auto-dismiss timers.
pub fn create_tick_subscription() -> Subscription<Message> {
    time::every(background::TICK_INTERVAL).map(Message::Tick)
}
