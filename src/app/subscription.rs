// SPDX-License-Identifier: MPL-2.0
//! Timer and window subscriptions for the application.
//!
//! Every timer exists only while its subscription is returned from
//! `App::subscription`. When a page is replaced or an animation finishes the
//! subscription disappears and iced cancels the timer, so no tick can reach
//! state that is no longer mounted.

use super::config::COUNTER_FRAME_MS;
use super::page::Page;
use super::Message;
use crate::ui::carousel;
use crate::ui::state::CountUp;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Interval of the notification auto-dismiss check.
const TICK_INTERVAL_MS: u64 = 100;

/// Auto-advance timers of the gallery and the testimonials, keyed on the
/// page's mount id.
pub fn create_carousel_subscription(page: &Page) -> Subscription<Message> {
    let gallery = page
        .gallery
        .as_ref()
        .map_or_else(Subscription::none, |rotator| {
            carousel::subscription(rotator, page.mount_id).map(Message::Gallery)
        });
    let testimonials = page
        .testimonials
        .as_ref()
        .map_or_else(Subscription::none, |rotator| {
            carousel::subscription(rotator, page.mount_id).map(Message::Testimonials)
        });

    Subscription::batch([gallery, testimonials])
}

/// Frame clock of the statistics count-up, while it is running.
///
/// Nothing ticks before the statistics have been scrolled into view or
/// after the animation has finished.
pub fn create_counter_subscription(counter: &CountUp) -> Subscription<Message> {
    if counter.is_running() {
        time::every(Duration::from_millis(COUNTER_FRAME_MS)).map(Message::CounterFrame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Window size changes, for the compact layout breakpoint.
pub fn create_window_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
