// SPDX-License-Identifier: MPL-2.0
//! Transition dispatcher combining a [`Presence`] with an [`Effect`].
//!
//! # Usage
//!
//! ```ignore
//! use helix_ui::ui::motion::{Direction, Effect, Transition};
//!
//! let mut panel = Transition::new(Effect::Slide(Direction::Up));
//! panel.set_show(true, Instant::now());
//!
//! // On every `Tick(now)`:
//! panel.tick(now);
//!
//! // In `view`:
//! panel.view(content)
//! ```

use super::effect::{Effect, VisualState};
use super::presence::{Phase, Presence};
use super::timing::TransitionDuration;
use crate::ui::design_tokens::motion;
use iced::widget::{container, float, text, Container};
use iced::{Color, Element, Length, Theme, Vector};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Transition {
    effect: Effect,
    presence: Presence,
}

impl Transition {
    /// Creates a hidden transition with the default duration and no delay.
    #[must_use]
    pub fn new(effect: Effect) -> Self {
        Self {
            effect,
            presence: Presence::default(),
        }
    }

    /// Creates a transition that starts fully shown.
    #[must_use]
    pub fn visible(effect: Effect) -> Self {
        Self {
            effect,
            presence: Presence::visible(TransitionDuration::default()),
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<TransitionDuration>) -> Self {
        self.presence.set_duration(duration.into());
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.presence.set_delay(delay);
        self
    }

    #[must_use]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn set_effect(&mut self, effect: Effect) {
        self.effect = effect;
    }

    #[must_use]
    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    #[must_use]
    pub fn delay_value(&self) -> Duration {
        self.presence.delay()
    }

    /// Updates the `show` input. See [`Presence::set_show`].
    pub fn set_show(&mut self, show: bool, now: Instant) -> bool {
        self.presence.set_show(show, now)
    }

    pub fn toggle(&mut self, now: Instant) {
        let show = !self.presence.is_shown();
        self.presence.set_show(show, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.presence.tick(now);
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.presence.is_shown()
    }

    #[must_use]
    pub fn should_render(&self) -> bool {
        self.presence.should_render()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.presence.phase()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }

    /// Visual state at the last observed instant.
    #[must_use]
    pub fn visual(&self) -> VisualState {
        self.effect.visual(self.presence.progress())
    }

    /// Renders `content` with the current visual state, or an empty
    /// placeholder once the exit has finished.
    pub fn view<'a, Message: 'a>(
        &self,
        content: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        if !self.should_render() {
            return empty();
        }
        apply_visual(content.into(), self.visual())
    }
}

/// Element that takes no space, used for unmounted content.
pub(crate) fn empty<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

/// Translation handed to `float`.
///
/// `float` only transforms content that is translated or scaled up, so a
/// scaled-down element at rest is shifted by a sub-pixel amount.
fn float_offset(visual: VisualState) -> Vector {
    if visual.offset == Vector::ZERO && visual.scale < 1.0 {
        Vector::new(0.0, motion::FLOAT_NUDGE)
    } else {
        visual.offset
    }
}

fn tint(color: Color, visual: VisualState) -> Color {
    Color {
        r: (color.r * visual.brightness).clamp(0.0, 1.0),
        g: (color.g * visual.brightness).clamp(0.0, 1.0),
        b: (color.b * visual.brightness).clamp(0.0, 1.0),
        a: color.a * visual.opacity.clamp(0.0, 1.0),
    }
}

/// Renders `content` with `visual` applied.
///
/// Translation and scale go through `float`, which transforms the drawn
/// content without touching layout. Opacity and brightness tint the
/// inherited text color. Iced has no blur filter, so `blur` is only
/// available to custom renderers through [`Transition::visual`].
pub(crate) fn apply_visual<'a, Message: 'a>(
    content: Element<'a, Message>,
    visual: VisualState,
) -> Element<'a, Message> {
    let tinted = Container::new(content).style(move |theme: &Theme| container::Style {
        text_color: Some(tint(theme.palette().text, visual)),
        ..Default::default()
    });
    let offset = float_offset(visual);

    float(tinted)
        .scale(visual.scale)
        .translate(move |_bounds, _viewport| offset)
        .into()
}
