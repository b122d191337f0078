// SPDX-License-Identifier: MPL-2.0
//! Sequenced transitions over a list of children.
//!
//! Child `k` (zero-indexed) enters `k * stagger_delay` after the stagger is
//! shown. Each child owns an independent [`Transition`]; the stagger only
//! decides their delays and forwards `show`/`tick`.

use super::effect::Effect;
use super::timing::TransitionDuration;
use super::transition::Transition;
use iced::widget::Column;
use iced::Element;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Stagger {
    effect: Effect,
    duration: TransitionDuration,
    stagger_delay: Duration,
    shown: bool,
    items: Vec<Transition>,
}

/// Delay of the child at `index`.
#[must_use]
pub fn delay_for(index: usize, stagger_delay: Duration) -> Duration {
    stagger_delay.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

impl Stagger {
    #[must_use]
    pub fn new(effect: Effect, stagger_delay: Duration) -> Self {
        Self {
            effect,
            duration: TransitionDuration::default(),
            stagger_delay,
            shown: false,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: impl Into<TransitionDuration>) -> Self {
        self.duration = duration.into();
        for item in &mut self.items {
            *item = item.clone().duration(self.duration);
        }
        self
    }

    /// Builder form of [`Stagger::set_len`].
    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.set_len(len, None);
        self
    }

    fn child(&self, index: usize) -> Transition {
        Transition::new(self.effect)
            .duration(self.duration)
            .delay(delay_for(index, self.stagger_delay))
    }

    /// Resizes the sequence. New children start hidden, or enter right away
    /// (after their own delay) when the stagger is already shown and `now`
    /// is given.
    pub fn set_len(&mut self, len: usize, now: Option<Instant>) {
        self.items.truncate(len);
        while self.items.len() < len {
            let mut child = self.child(self.items.len());
            if let (true, Some(now)) = (self.shown, now) {
                child.set_show(true, now);
            }
            self.items.push(child);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn stagger_delay(&self) -> Duration {
        self.stagger_delay
    }

    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.items
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn set_show(&mut self, show: bool, now: Instant) {
        self.shown = show;
        for item in &mut self.items {
            item.set_show(show, now);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        for item in &mut self.items {
            item.tick(now);
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.items.iter().any(Transition::is_animating)
    }

    /// Renders `children` in a column, each wrapped in its own transition.
    /// Extra children beyond [`Stagger::len`] are rendered without motion.
    pub fn view<'a, Message: 'a>(
        &self,
        children: impl IntoIterator<Item = Element<'a, Message>>,
        spacing: f32,
    ) -> Element<'a, Message> {
        let column = children
            .into_iter()
            .enumerate()
            .fold(Column::new().spacing(spacing), |column, (index, child)| {
                match self.items.get(index) {
                    Some(transition) => column.push(transition.view(child)),
                    None => column.push(child),
                }
            });
        column.into()
    }
}
