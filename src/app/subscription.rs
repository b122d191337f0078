// SPDX-License-Identifier: MPL-2.0
//! Tick subscription driving every time-based primitive.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Poll interval while idle with a mounted toast manager, so toasts
/// enqueued from other threads still show up.
const GLOBAL_POLL_MS: u64 = 250;

/// Creates the periodic tick subscription.
///
/// Ticks at frame rate while something animates or toasts are visible
/// (deadlines and the loading spinner), slowly while only the global toast
/// slot needs draining, and not at all otherwise.
pub fn create_tick_subscription(
    animating: bool,
    has_toasts: bool,
    listening: bool,
) -> Subscription<Message> {
    match tick_interval(animating, has_toasts, listening) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(animating: bool, has_toasts: bool, listening: bool) -> Option<Duration> {
    if animating || has_toasts {
        Some(Duration::from_millis(TICK_INTERVAL_MS))
    } else if listening {
        Some(Duration::from_millis(GLOBAL_POLL_MS))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_app_does_not_tick() {
        assert_eq!(tick_interval(false, false, false), None);
    }

    #[test]
    fn animation_or_toasts_tick_at_frame_rate() {
        let frame = Some(Duration::from_millis(TICK_INTERVAL_MS));
        assert_eq!(tick_interval(true, false, false), frame);
        assert_eq!(tick_interval(false, true, true), frame);
    }

    #[test]
    fn mounted_manager_polls_slowly() {
        assert_eq!(
            tick_interval(false, false, true),
            Some(Duration::from_millis(GLOBAL_POLL_MS))
        );
    }
}
