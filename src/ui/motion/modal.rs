// SPDX-License-Identifier: MPL-2.0
//! Layered modal built from two independent transitions.
//!
//! The backdrop fades and dismisses the modal when clicked; the panel
//! scales in above it. Both layers unmount together once the backdrop's exit
//! has finished.

use super::effect::Effect;
use super::timing::TransitionDuration;
use super::transition::{apply_visual, Transition};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles::container as container_styles;
use iced::widget::{center, mouse_area, opaque, text, Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Modal {
    backdrop: Transition,
    panel: Transition,
}

impl Modal {
    /// Creates a closed modal whose layers share `duration`.
    #[must_use]
    pub fn new(duration: TransitionDuration) -> Self {
        Self {
            backdrop: Transition::new(Effect::Fade).duration(duration),
            panel: Transition::new(Effect::Scale).duration(duration),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.backdrop.is_shown()
    }

    pub fn set_open(&mut self, open: bool, now: Instant) {
        self.backdrop.set_show(open, now);
        self.panel.set_show(open, now);
    }

    pub fn open(&mut self, now: Instant) {
        self.set_open(true, now);
    }

    pub fn close(&mut self, now: Instant) {
        self.set_open(false, now);
    }

    pub fn tick(&mut self, now: Instant) {
        self.backdrop.tick(now);
        self.panel.tick(now);
    }

    /// Whether either layer is still mounted. Gated on the backdrop.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.backdrop.should_render()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.backdrop.is_animating() || self.panel.is_animating()
    }

    #[must_use]
    pub fn backdrop(&self) -> &Transition {
        &self.backdrop
    }

    #[must_use]
    pub fn panel(&self) -> &Transition {
        &self.panel
    }

    /// Layers the modal above `base`. Clicking the backdrop emits `on_close`.
    pub fn view<'a, Message: Clone + 'a>(
        &self,
        base: impl Into<Element<'a, Message>>,
        content: impl Into<Element<'a, Message>>,
        on_close: Message,
    ) -> Element<'a, Message> {
        let base = base.into();
        if !self.should_render() {
            return base;
        }

        let fade = self.backdrop.visual();
        let backdrop_layer = opaque(
            mouse_area(
                Container::new(text(""))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(container_styles::backdrop(fade.opacity)),
            )
            .on_press(on_close),
        );

        let panel = Container::new(content)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::LG)
            .style(container_styles::panel);
        let panel_layer = center(opaque(apply_visual(panel.into(), self.panel.visual())));

        Stack::new()
            .push(base)
            .push(backdrop_layer)
            .push(panel_layer)
            .into()
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new(TransitionDuration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::motion::Phase;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn layers_use_fade_and_scale() {
        let modal = Modal::default();
        assert_eq!(modal.backdrop().effect(), Effect::Fade);
        assert_eq!(modal.panel().effect(), Effect::Scale);
    }

    #[test]
    fn open_mounts_both_layers() {
        let t0 = Instant::now();
        let mut modal = Modal::default();
        modal.open(t0);

        assert!(modal.is_open());
        assert!(modal.backdrop().should_render());
        assert!(modal.panel().should_render());
    }

    #[test]
    fn close_unmounts_after_backdrop_exit() {
        let t0 = Instant::now();
        let mut modal = Modal::new(TransitionDuration::new(250));
        modal.open(t0);
        modal.tick(t0 + ms(250));

        modal.close(t0 + ms(1000));
        modal.tick(t0 + ms(1249));
        assert!(modal.should_render());
        assert_eq!(modal.backdrop().phase(), Phase::Exiting);

        modal.tick(t0 + ms(1250));
        assert!(!modal.should_render());
        assert!(!modal.panel().should_render());
    }
}
