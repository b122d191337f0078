// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the showcase.

use crate::ui::components::error_boundary;
use crate::ui::notifications::{ToastKind, ToastMessage};
use std::path::PathBuf;
use std::time::Instant;

/// Payload carried by toast action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastAction {
    UndoArchive,
}

/// How the boundary-wrapped panel should fail on its next render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Breakage {
    #[default]
    None,
    Error,
    Panic,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    Toast(ToastMessage<ToastAction>),
    ShowToast(ToastKind),
    ArchiveItem,
    /// Shows a loading toast that later turns into a success toast.
    StartUpload,
    /// Enqueues a toast from a worker thread through the global helpers.
    StartBackgroundJob,
    TogglePanel,
    CycleEffect,
    ToggleList,
    AddListItem,
    ToggleCollapse,
    /// Natural height of the collapse content, reported by its sensor.
    DetailsMeasured(f32),
    OpenModal,
    CloseModal,
    SetBreakage(Breakage),
    Boundary(error_boundary::Message),
    CycleTheme,
}

impl From<error_boundary::Message> for Message {
    fn from(message: error_boundary::Message) -> Self {
        Message::Boundary(message)
    }
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Overrides `[toasts] max_toasts` from the config file.
    pub max_toasts: Option<usize>,
    /// Explicit config file path.
    pub config_path: Option<PathBuf>,
}
