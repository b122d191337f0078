// SPDX-License-Identifier: MPL-2.0
//! Show/hide state machine with a delayed unmount.
//!
//! A [`Presence`] tracks a boolean `show` input and derives whether its
//! content should still be rendered. Hiding does not unmount right away: the
//! content stays mounted for the full transition duration so an exit
//! animation can play, and the pending unmount is cancelled by a later show
//! or replaced by a later hide.
//!
//! Time only moves through [`Presence::set_show`] and [`Presence::tick`],
//! which keeps the machine deterministic under test.

use super::timing::TransitionDuration;
use std::time::{Duration, Instant};

/// Coarse lifecycle phase derived from the presence state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not rendered.
    Hidden,
    /// Shown and animating towards the fully visible state.
    Entering,
    /// Shown and fully visible.
    Shown,
    /// Hidden but still mounted while the exit animation plays.
    Exiting,
}

#[derive(Debug, Clone)]
pub struct Presence {
    show: bool,
    mounted: bool,
    duration: TransitionDuration,
    /// Hold before the enter animation starts. Exits are never delayed.
    delay: Duration,
    /// Latest instant observed; progress is evaluated against it.
    clock: Option<Instant>,
    /// Start of the current enter or exit phase.
    phase_started: Option<Instant>,
    /// Progress at the moment the current phase began.
    progress_from: f32,
    /// Pending unmount deadline. Replaced on every hide, dropped on show.
    unmount_at: Option<Instant>,
}

impl Presence {
    /// Creates a hidden, unmounted presence.
    #[must_use]
    pub fn new(duration: TransitionDuration) -> Self {
        Self {
            show: false,
            mounted: false,
            duration,
            delay: Duration::ZERO,
            clock: None,
            phase_started: None,
            progress_from: 0.0,
            unmount_at: None,
        }
    }

    /// Creates a presence that starts fully shown, skipping the enter animation.
    #[must_use]
    pub fn visible(duration: TransitionDuration) -> Self {
        Self {
            show: true,
            mounted: true,
            progress_from: 1.0,
            ..Self::new(duration)
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn duration(&self) -> TransitionDuration {
        self.duration
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the duration used by the next phase. A pending unmount keeps
    /// the deadline it was scheduled with.
    pub fn set_duration(&mut self, duration: TransitionDuration) {
        self.duration = duration;
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Current value of the `show` input.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.show
    }

    /// Whether the content must be rendered. Always true while shown, and
    /// stays true until the exit duration has fully elapsed after the most
    /// recent hide.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.show || self.mounted
    }

    /// Pending unmount deadline, if an exit is in progress.
    #[must_use]
    pub fn unmount_deadline(&self) -> Option<Instant> {
        self.unmount_at
    }

    /// Updates the `show` input at `now`.
    ///
    /// Returns `true` when the input changed. Showing cancels any pending
    /// unmount; hiding schedules a fresh one `duration` after `now`.
    pub fn set_show(&mut self, show: bool, now: Instant) -> bool {
        if show == self.show {
            self.advance(now);
            return false;
        }

        let current = self.progress_at(now);
        self.show = show;
        self.progress_from = current;
        self.phase_started = Some(now);

        if show {
            self.mounted = true;
            self.unmount_at = None;
        } else {
            self.unmount_at = Some(now + self.duration.as_duration());
        }

        self.advance(now);
        true
    }

    /// Advances the clock, unmounting once the exit deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        self.advance(now);
    }

    fn advance(&mut self, now: Instant) {
        self.clock = Some(self.clock.map_or(now, |clock| clock.max(now)));

        if let Some(deadline) = self.unmount_at {
            if now >= deadline {
                self.mounted = false;
                self.unmount_at = None;
            }
        }
    }

    /// Linear progress at the last observed instant: 0.0 fully hidden,
    /// 1.0 fully shown.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.clock {
            Some(now) => self.progress_at(now),
            None => self.resting_progress(),
        }
    }

    fn resting_progress(&self) -> f32 {
        if self.show {
            1.0
        } else {
            0.0
        }
    }

    fn progress_at(&self, now: Instant) -> f32 {
        let Some(started) = self.phase_started else {
            return self.resting_progress();
        };

        let lead = if self.show { self.delay } else { Duration::ZERO };
        let elapsed = now.saturating_duration_since(started);
        if elapsed < lead {
            return self.progress_from;
        }
        let active = elapsed - lead;

        let t = if self.duration.is_instant() {
            1.0
        } else {
            active.as_secs_f32() / self.duration.as_duration().as_secs_f32()
        };

        if t >= 1.0 {
            return self.resting_progress();
        }

        if self.show {
            self.progress_from + (1.0 - self.progress_from) * t
        } else {
            self.progress_from * (1.0 - t)
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.show, self.should_render()) {
            (false, false) => Phase::Hidden,
            (false, true) => Phase::Exiting,
            (true, _) if self.progress() >= 1.0 => Phase::Shown,
            (true, _) => Phase::Entering,
        }
    }

    /// Whether ticks are still needed to finish the current phase.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase(), Phase::Entering | Phase::Exiting)
    }
}

impl Default for Presence {
    fn default() -> Self {
        Self::new(TransitionDuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn presence(duration_ms: u64) -> Presence {
        Presence::new(TransitionDuration::new(duration_ms))
    }

    #[test]
    fn new_presence_is_hidden_and_unmounted() {
        let p = presence(300);
        assert!(!p.is_shown());
        assert!(!p.should_render());
        assert_eq!(p.phase(), Phase::Hidden);
    }

    #[test]
    fn show_mounts_immediately() {
        let t0 = Instant::now();
        let mut p = presence(300);

        assert!(p.set_show(true, t0));
        assert!(p.should_render());
        assert_eq!(p.phase(), Phase::Entering);
    }

    #[test]
    fn hide_keeps_rendering_until_duration_elapses() {
        let t0 = Instant::now();
        let mut p = presence(300);
        p.set_show(true, t0);
        p.tick(t0 + ms(300));
        assert_eq!(p.phase(), Phase::Shown);

        let hide_at = t0 + ms(1000);
        p.set_show(false, hide_at);
        assert!(p.should_render());

        p.tick(hide_at + ms(299));
        assert!(p.should_render());
        assert_eq!(p.phase(), Phase::Exiting);

        p.tick(hide_at + ms(300));
        assert!(!p.should_render());
        assert_eq!(p.phase(), Phase::Hidden);
    }

    #[test]
    fn rapid_toggle_restarts_exit_timer_from_latest_hide() {
        let t0 = Instant::now();
        let mut p = presence(300);
        p.set_show(true, t0);

        p.set_show(false, t0 + ms(10));
        p.set_show(true, t0 + ms(100));
        p.set_show(false, t0 + ms(150));

        // The first hide's deadline would have been t0 + 310.
        p.tick(t0 + ms(310));
        assert!(p.should_render());

        p.tick(t0 + ms(449));
        assert!(p.should_render());

        p.tick(t0 + ms(450));
        assert!(!p.should_render());
    }

    #[test]
    fn show_cancels_pending_unmount() {
        let t0 = Instant::now();
        let mut p = presence(300);
        p.set_show(true, t0);
        p.set_show(false, t0 + ms(50));
        assert!(p.unmount_deadline().is_some());

        p.set_show(true, t0 + ms(100));
        assert!(p.unmount_deadline().is_none());

        p.tick(t0 + ms(10_000));
        assert!(p.should_render());
    }

    #[test]
    fn repeated_input_is_not_a_change() {
        let t0 = Instant::now();
        let mut p = presence(300);
        assert!(!p.set_show(false, t0));
        assert!(p.set_show(true, t0));
        assert!(!p.set_show(true, t0 + ms(5)));
    }

    #[test]
    fn progress_interpolates_linearly() {
        let t0 = Instant::now();
        let mut p = presence(300);
        p.set_show(true, t0);

        p.tick(t0 + ms(150));
        assert_abs_diff_eq!(p.progress(), 0.5, epsilon = 1e-4);

        p.tick(t0 + ms(300));
        assert_eq!(p.progress(), 1.0);
    }

    #[test]
    fn delay_holds_enter_progress_at_zero() {
        let t0 = Instant::now();
        let mut p = presence(200).with_delay(ms(100));
        p.set_show(true, t0);

        p.tick(t0 + ms(100));
        assert_eq!(p.progress(), 0.0);
        assert!(p.should_render());

        p.tick(t0 + ms(200));
        assert_abs_diff_eq!(p.progress(), 0.5, epsilon = 1e-4);

        p.tick(t0 + ms(300));
        assert_eq!(p.phase(), Phase::Shown);
    }

    #[test]
    fn zero_duration_still_waits_for_delay() {
        let t0 = Instant::now();
        let mut p = Presence::new(TransitionDuration::new(0)).with_delay(ms(100));

        p.set_show(true, t0);
        p.tick(t0 + ms(50));
        assert_eq!(p.progress(), 0.0);
        assert_eq!(p.phase(), Phase::Entering);
        assert!(p.is_animating());

        p.tick(t0 + ms(100));
        assert_eq!(p.progress(), 1.0);
        assert_eq!(p.phase(), Phase::Shown);
    }

    #[test]
    fn exit_starts_from_current_progress() {
        let t0 = Instant::now();
        let mut p = presence(200);
        p.set_show(true, t0);
        p.set_show(false, t0 + ms(100));

        assert_abs_diff_eq!(p.progress(), 0.5, epsilon = 1e-4);
        p.tick(t0 + ms(200));
        assert_abs_diff_eq!(p.progress(), 0.25, epsilon = 1e-4);
    }

    #[test]
    fn zero_duration_unmounts_on_hide() {
        let t0 = Instant::now();
        let mut p = presence(0);
        p.set_show(true, t0);
        assert_eq!(p.phase(), Phase::Shown);

        p.set_show(false, t0 + ms(1));
        assert!(!p.should_render());
    }

    #[test]
    fn visible_starts_shown_without_animation() {
        let p = Presence::visible(TransitionDuration::default());
        assert!(p.should_render());
        assert_eq!(p.phase(), Phase::Shown);
        assert!(!p.is_animating());
    }
}
