// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts appear as small cards with a kind-colored accent, an optional
//! description and action, and a dismiss button when dismissible.

use super::manager::{Manager, Message};
use super::notification::{Toast, ToastAction, ToastKind};
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::widgets::{rotation_at, AnimatedSpinner};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Buttons trailing the toast text.
struct Controls<'a, A> {
    action: Option<&'a ToastAction<A>>,
    dismiss: bool,
}

fn controls<A>(toast: &Toast<A>) -> Controls<'_, A> {
    Controls {
        action: toast.action(),
        dismiss: toast.is_dismissible(),
    }
}

/// Renders a single toast. `now` drives the loading spinner.
pub fn view<'a, A: Clone + 'a>(toast: &'a Toast<A>, now: Option<Instant>) -> Element<'a, Message<A>> {
    let kind = toast.kind();
    let accent_color = kind.color();
    let id = toast.id();

    let marker: Element<'a, Message<A>> = if kind == ToastKind::Loading {
        let elapsed = now.map(|now| now.saturating_duration_since(toast.created_at()));
        AnimatedSpinner::new(accent_color, rotation_at(elapsed.unwrap_or_default()))
            .size(sizing::ICON_MD)
            .into_element()
    } else {
        Text::new(kind.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            })
            .into()
    };

    let mut body = Column::new().spacing(spacing::XXS).push(
        Text::new(toast.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            }),
    );
    if let Some(description) = toast.description() {
        body = body.push(Text::new(description).size(typography::BODY_SM).style(
            |theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            },
        ));
    }

    // Layout: [marker] [message] [action] [dismiss]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(marker).padding(spacing::XXS))
        .push(Container::new(body).width(Length::Fill));

    let controls = controls(toast);
    if let Some(action) = controls.action {
        content = content.push(
            button(Text::new(action.label.as_str()).size(typography::BODY_SM))
                .on_press(Message::Action(id, action.action.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(button_styles::primary),
        );
    }

    if controls.dismiss {
        content = content.push(
            button(Text::new("✕").size(typography::BODY_SM))
                .on_press(Message::Dismiss(id))
                .padding(spacing::XXS)
                .style(button_styles::ghost),
        );
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders every toast stacked in the bottom-right corner, oldest on top.
pub fn view_overlay<'a, A: Clone + 'a>(manager: &'a Manager<A>) -> Element<'a, Message<A>> {
    let now = manager.clock();
    let toasts: Vec<Element<'a, Message<A>>> =
        manager.visible().map(|toast| view(toast, now)).collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;
    use crate::ui::notifications::ToastInput;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500);

        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn loading_toast_has_no_dismiss_button() {
        let mut manager: Manager = Manager::new(5);
        let id = manager.loading("Syncing", None);
        let toast = manager.get(id).expect("present");

        let controls = controls(toast);
        assert!(!controls.dismiss);
        assert!(controls.action.is_none());
    }

    #[test]
    fn regular_toast_shows_action_and_dismiss() {
        let mut manager: Manager<u8> = Manager::new(5);
        let id = manager.show_toast(ToastInput::warning("Deleted").action("Undo", 7));
        let toast = manager.get(id).expect("present");

        let controls = controls(toast);
        assert!(controls.dismiss);
        assert_eq!(controls.action.map(|action| action.action), Some(7));
    }

    #[test]
    fn non_dismissible_toast_without_action_has_no_controls() {
        let mut manager: Manager = Manager::new(5);
        let id = manager.show_toast(ToastInput::error("Offline").dismissible(false));
        let controls = controls(manager.get(id).expect("present"));
        assert!(!controls.dismiss && controls.action.is_none());
    }

    #[test]
    fn overlay_builds_for_every_kind() {
        let mut manager: Manager<u8> = Manager::new(10);
        manager.success("saved", Some("3 files"));
        manager.error("failed", None);
        manager.loading("working", None);
        manager.show_toast(ToastInput::info("undo?").action("Undo", 1));
        manager.tick(Instant::now());

        let _overlay = view_overlay(&manager);
    }
}
