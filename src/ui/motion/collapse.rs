// SPDX-License-Identifier: MPL-2.0
//! Height-animated disclosure.
//!
//! Unlike the other transitions, collapsed content stays mounted: its
//! natural height must remain measurable while closed. [`Collapse::view`]
//! lays the content out without a height bound and reports its size through
//! a sensor; the host feeds that back into [`Collapse::measure`]. The
//! rendered height is interpolated between 0 and the measurement and the
//! content is clipped throughout.

use super::effect::ease_out_cubic;
use super::presence::Presence;
use super::timing::TransitionDuration;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{scrollable, sensor, Container};
use iced::{Element, Length, Size};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Collapse {
    presence: Presence,
    measured: Option<f32>,
}

impl Collapse {
    /// Creates a closed collapse.
    #[must_use]
    pub fn new(duration: TransitionDuration) -> Self {
        Self {
            presence: Presence::new(duration),
            measured: None,
        }
    }

    /// Records the natural height of the content.
    pub fn measure(&mut self, height: f32) {
        self.measured = Some(height.max(0.0));
    }

    #[must_use]
    pub fn measured_height(&self) -> Option<f32> {
        self.measured
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.presence.is_shown()
    }

    pub fn set_open(&mut self, open: bool, now: Instant) {
        self.presence.set_show(open, now);
    }

    pub fn toggle(&mut self, now: Instant) {
        let open = !self.is_open();
        self.set_open(open, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.presence.tick(now);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }

    /// Height the collapse is heading to: the measured height when open,
    /// zero when closed. `None` while open and not yet measured.
    #[must_use]
    pub fn target_height(&self) -> Option<f32> {
        if self.is_open() {
            self.measured
        } else {
            Some(0.0)
        }
    }

    /// Interpolated height at the last observed instant.
    #[must_use]
    pub fn current_height(&self) -> Option<f32> {
        self.measured
            .map(|height| height * ease_out_cubic(self.presence.progress()))
    }

    /// Rendered height: the interpolated measurement, the content's own
    /// height while open and unmeasured, or nothing while closed and
    /// unmeasured.
    #[must_use]
    pub fn height(&self) -> Length {
        match self.current_height() {
            Some(height) => Length::Fixed(height),
            None if self.is_open() => Length::Shrink,
            None => Length::Fixed(0.0),
        }
    }

    /// Renders `content` clipped to the current height.
    ///
    /// Content is always part of the tree. It is laid out with an unbounded
    /// height, so `on_measure` receives its natural height whenever that
    /// height changes, open or closed.
    pub fn view<'a, Message: 'a>(
        &self,
        content: impl Into<Element<'a, Message>>,
        on_measure: impl Fn(f32) -> Message + 'a,
    ) -> Element<'a, Message> {
        let measured = sensor(content).on_resize(move |size: Size| on_measure(size.height));
        let unbounded = scrollable(measured)
            .direction(Direction::Vertical(Scrollbar::hidden()))
            .width(Length::Fill);

        Container::new(unbounded)
            .width(Length::Fill)
            .height(self.height())
            .clip(true)
            .into()
    }
}

impl Default for Collapse {
    fn default() -> Self {
        Self::new(TransitionDuration::default())
    }
}
