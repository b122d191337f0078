// SPDX-License-Identifier: MPL-2.0
//! View rendering for the showcase.

use super::{Breakage, Message, ToastAction, DETAIL_LINES};
use crate::error::RenderError;
use crate::ui::components::ErrorBoundary;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::motion::{Collapse, Effect, Modal, Stagger, Transition};
use crate::ui::notifications::{toast, Manager, ToastKind};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub theme_mode: ThemeMode,
    pub toasts: &'a Manager<ToastAction>,
    pub archived: usize,
    pub panel: &'a Transition,
    pub effect: Effect,
    pub list: &'a Stagger,
    pub list_items: &'a [String],
    pub details: &'a Collapse,
    pub modal: &'a Modal,
    pub boundary: &'a ErrorBoundary<Message>,
    pub breakage: Breakage,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let sections = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header(ctx.theme_mode))
        .push(toast_section(ctx.archived))
        .push(transition_section(ctx.panel, ctx.effect))
        .push(stagger_section(ctx.list, ctx.list_items))
        .push(collapse_section(ctx.details))
        .push(boundary_section(ctx.boundary, ctx.breakage))
        .push(section(
            "Modal",
            Row::new().push(action_button("Open modal", Message::OpenModal)),
        ));

    let base = scrollable(sections).height(Length::Fill);
    let with_modal = ctx.modal.view(base, modal_content(), Message::CloseModal);

    Stack::new()
        .push(with_modal)
        .push(toast::view_overlay(ctx.toasts).map(Message::Toast))
        .into()
}

fn header<'a>(theme_mode: ThemeMode) -> Element<'a, Message> {
    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new("Helix UI").size(typography::TITLE_LG)).width(Length::Fill),
        )
        .push(
            button(Text::new(format!("Theme: {}", theme_mode.label())))
                .on_press(Message::CycleTheme)
                .style(button_styles::secondary),
        )
        .into()
}

fn section<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::panel)
    .into()
}

fn action_button<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .style(button_styles::secondary)
        .into()
}

fn toast_section<'a>(archived: usize) -> Element<'a, Message> {
    let kinds = Row::new()
        .spacing(spacing::XS)
        .push(action_button("Success", Message::ShowToast(ToastKind::Success)))
        .push(action_button("Error", Message::ShowToast(ToastKind::Error)))
        .push(action_button("Warning", Message::ShowToast(ToastKind::Warning)))
        .push(action_button("Info", Message::ShowToast(ToastKind::Info)));

    let flows = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(action_button("Archive (undo)", Message::ArchiveItem))
        .push(action_button("Upload (loading)", Message::StartUpload))
        .push(action_button("Background job", Message::StartBackgroundJob))
        .push(Text::new(format!("Archived: {archived}")).size(typography::BODY_SM));

    section("Toasts", Column::new().spacing(spacing::XS).push(kinds).push(flows))
}

fn transition_section<'a>(panel: &'a Transition, effect: Effect) -> Element<'a, Message> {
    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(action_button("Toggle", Message::TogglePanel))
        .push(action_button("Next effect", Message::CycleEffect))
        .push(Text::new(format!("{effect:?}")).size(typography::BODY_SM));

    let card = Container::new(Text::new("Transitioned content").size(typography::BODY_LG))
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .style(container_styles::panel);

    section(
        "Transition",
        Column::new()
            .spacing(spacing::SM)
            .push(controls)
            .push(panel.view(card)),
    )
}

fn stagger_section<'a>(list: &'a Stagger, items: &'a [String]) -> Element<'a, Message> {
    let controls = Row::new()
        .spacing(spacing::XS)
        .push(action_button("Toggle list", Message::ToggleList))
        .push(action_button("Add item", Message::AddListItem));

    let rows = items.iter().map(|item| -> Element<'a, Message> {
        Container::new(Text::new(item.as_str()).size(typography::BODY))
            .height(Length::Fixed(sizing::LIST_ROW_HEIGHT))
            .align_y(alignment::Vertical::Center)
            .into()
    });

    section(
        "Stagger",
        Column::new()
            .spacing(spacing::SM)
            .push(controls)
            .push(list.view(rows, spacing::XXS)),
    )
}

fn collapse_section<'a>(details: &'a Collapse) -> Element<'a, Message> {
    let label = if details.is_open() {
        "Hide details"
    } else {
        "Show details"
    };

    let lines = DETAIL_LINES.iter().fold(Column::new(), |column, line| {
        column.push(
            Container::new(Text::new(*line).size(typography::BODY_SM))
                .height(Length::Fixed(sizing::LIST_ROW_HEIGHT))
                .align_y(alignment::Vertical::Center),
        )
    });

    section(
        "Collapse",
        Column::new()
            .spacing(spacing::SM)
            .push(action_button(label, Message::ToggleCollapse))
            .push(details.view(lines, Message::DetailsMeasured)),
    )
}

fn boundary_section<'a>(
    boundary: &'a ErrorBoundary<Message>,
    breakage: Breakage,
) -> Element<'a, Message> {
    let controls = Row::new()
        .spacing(spacing::XS)
        .push(action_button("Fail with error", Message::SetBreakage(Breakage::Error)))
        .push(action_button("Fail with panic", Message::SetBreakage(Breakage::Panic)))
        .push(action_button("Repair", Message::SetBreakage(Breakage::None)));

    section(
        "Error boundary",
        Column::new()
            .spacing(spacing::SM)
            .push(controls)
            .push(boundary.view(|| report_panel(breakage))),
    )
}

/// The panel guarded by the boundary.
fn report_panel<'a>(breakage: Breakage) -> Result<Element<'a, Message>, RenderError> {
    match breakage {
        Breakage::None => Ok(Text::new("Report rendered: 12 rows")
            .size(typography::BODY)
            .into()),
        Breakage::Error => Err(RenderError::new("Report data is malformed")
            .caused_by("row 4: missing field `amount`")),
        Breakage::Panic => panic!("report rows were not loaded"),
    }
}

fn modal_content<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(Text::new("Modal").size(typography::TITLE_MD))
        .push(
            text("The backdrop fades while this panel scales in. Click outside to close.")
                .size(typography::BODY),
        )
        .push(
            button(Text::new("Close"))
                .on_press(Message::CloseModal)
                .style(button_styles::primary),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_report_renders() {
        assert!(report_panel(Breakage::None).is_ok());
    }

    #[test]
    fn broken_report_carries_cause() {
        let err = report_panel(Breakage::Error).err().expect("error");
        assert_eq!(err.causes().len(), 1);
    }
}
