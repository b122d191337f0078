// SPDX-License-Identifier: MPL-2.0
//! Reusable error panel.
//!
//! Shows a title, a user-facing message, up to two action buttons and
//! optional collapsible technical details. The error boundary renders it as
//! its default fallback.
//!
//! # Usage
//!
//! ```ignore
//! use helix_ui::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title("Something went wrong")
//!     .message("The list could not be rendered.")
//!     .details("row 4: missing field `name`")
//!     .action("Try again", Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

const GLYPH: &str = "⚠";

/// Builder for the error panel.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    accent: Color,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action: Option<(String, Message)>,
    secondary_action: Option<(String, Message)>,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
    details_heading_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            accent: palette::ERROR_500,
            title: None,
            message: None,
            details: None,
            show_details: false,
            action: None,
            secondary_action: None,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
            details_heading_label: "Technical details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the accent used by the glyph and title.
    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (collapsible).
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    /// Primary action, e.g. "Try again".
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    /// Secondary action rendered next to the primary one.
    pub fn secondary_action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.secondary_action = Some((label.into(), message));
        self
    }

    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    pub fn details_labels(
        mut self,
        show_label: impl Into<String>,
        hide_label: impl Into<String>,
        heading_label: impl Into<String>,
    ) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self.details_heading_label = heading_label.into();
        self
    }

    /// Renders the error panel.
    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.accent;

        let glyph = Container::new(Text::new(GLYPH).size(sizing::ICON_LG).style(
            move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            },
        ))
        .width(Length::Shrink)
        .align_x(alignment::Horizontal::Center);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            content = content.push(Text::new(title_text).size(typography::TITLE_MD).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                },
            ));
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        let mut actions = Row::new().spacing(spacing::XS);
        let has_actions = self.action.is_some() || self.secondary_action.is_some();
        if let Some((label, msg)) = self.action {
            actions = actions.push(
                button(Text::new(label))
                    .on_press(msg)
                    .style(button_styles::primary),
            );
        }
        if let Some((label, msg)) = self.secondary_action {
            actions = actions.push(
                button(Text::new(label))
                    .on_press(msg)
                    .style(button_styles::secondary),
            );
        }
        if has_actions {
            content = content.push(Container::new(actions).padding(spacing::SM));
        }

        if let Some(details_text) = self.details {
            let toggle_label = if self.show_details {
                self.hide_details_label
            } else {
                self.show_details_label
            };

            if let Some(toggle_msg) = self.toggle_details_message {
                content = content.push(
                    button(Text::new(toggle_label).size(typography::BODY_SM))
                        .on_press(toggle_msg)
                        .style(button_styles::ghost),
                );
            }

            if self.show_details {
                let muted = |theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                };

                let details_column = Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(rule::horizontal(1))
                    .push(
                        Text::new(self.details_heading_label)
                            .size(typography::BODY)
                            .style(muted),
                    )
                    .push(Text::new(details_text).size(typography::CAPTION).style(muted));

                content = content.push(
                    Container::new(details_column)
                        .width(Length::Fill)
                        .padding(spacing::SM),
                );
            }
        }

        let main_row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(glyph)
            .push(content);

        Container::new(main_row)
            .width(Length::Fill)
            .max_width(sizing::ERROR_PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(panel_style)
            .into()
    }
}

fn panel_style(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(extended.background.weak.color)),
        border: iced::Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Centers an error panel in the available space.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}
