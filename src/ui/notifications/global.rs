// SPDX-License-Identifier: MPL-2.0
//! Process-wide toast slot for code outside the widget tree.
//!
//! The slot holds the sending half of a channel. A mounted
//! [`Manager`](super::Manager) installs it and drains the receiving half on
//! every tick; dropping the returned [`GlobalToastGuard`] clears the slot
//! again. Calls made while nothing is installed are no-ops and return `None`.
//!
//! ```ignore
//! use helix_ui::ui::notifications::global::toast;
//!
//! fn on_export_finished() {
//!     toast::success("Export finished", None);
//! }
//! ```

use super::notification::{ToastId, ToastInput, ToastKind};
use std::sync::{PoisonError, RwLock};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A change enqueued through the global slot, applied in order on drain.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastRequest {
    /// Show a new toast under a pre-assigned id.
    Show { id: ToastId, input: ToastInput },
    /// Replace the content of an existing toast.
    Update { id: ToastId, input: ToastInput },
    Dismiss(ToastId),
}

impl ToastRequest {
    #[must_use]
    pub fn id(&self) -> ToastId {
        match self {
            ToastRequest::Show { id, .. } | ToastRequest::Update { id, .. } => *id,
            ToastRequest::Dismiss(id) => *id,
        }
    }
}

static SLOT: RwLock<Option<UnboundedSender<ToastRequest>>> = RwLock::new(None);

/// Clears the global slot on drop, unless another manager has replaced it.
#[derive(Debug)]
pub struct GlobalToastGuard {
    sender: UnboundedSender<ToastRequest>,
}

impl Drop for GlobalToastGuard {
    fn drop(&mut self) {
        let mut slot = SLOT.write().unwrap_or_else(PoisonError::into_inner);
        let owned = slot
            .as_ref()
            .is_some_and(|installed| installed.same_channel(&self.sender));
        if owned {
            *slot = None;
            tracing::debug!("global toast slot cleared");
        }
    }
}

/// Installs a fresh channel in the global slot, replacing any previous one.
pub fn install() -> (GlobalToastGuard, UnboundedReceiver<ToastRequest>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    *SLOT.write().unwrap_or_else(PoisonError::into_inner) = Some(sender.clone());
    tracing::debug!("global toast slot installed");
    (GlobalToastGuard { sender }, receiver)
}

/// Returns whether a manager is currently listening.
#[must_use]
pub fn is_installed() -> bool {
    SLOT.read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|sender| !sender.is_closed())
}

/// Enqueues `input` for the installed manager.
///
/// Returns the id the toast will carry, or `None` when no manager is
/// installed or it has gone away.
pub fn show(input: ToastInput) -> Option<ToastId> {
    let id = ToastId::new();
    send(ToastRequest::Show { id, input }).then_some(id)
}

/// Replaces the content of toast `id`, restarting its deadline. Typically
/// turns a [`toast::loading`] toast into its outcome.
///
/// Returns `false` when no manager is installed.
pub fn update(id: ToastId, input: ToastInput) -> bool {
    send(ToastRequest::Update { id, input })
}

/// Dismisses toast `id`. Dismissing an unknown id is a no-op on drain.
///
/// Returns `false` when no manager is installed.
pub fn dismiss(id: ToastId) -> bool {
    send(ToastRequest::Dismiss(id))
}

fn send(request: ToastRequest) -> bool {
    let slot = SLOT.read().unwrap_or_else(PoisonError::into_inner);
    slot.as_ref()
        .is_some_and(|sender| sender.send(request).is_ok())
}

/// Fixed-kind helpers over [`show`].
pub mod toast {
    use super::{show, ToastId, ToastInput, ToastKind};

    fn with_kind(kind: ToastKind, message: &str, description: Option<&str>) -> Option<ToastId> {
        let input = ToastInput::new(kind, message)
            .maybe_description(description.map(str::to_string));
        show(input)
    }

    pub fn success(message: &str, description: Option<&str>) -> Option<ToastId> {
        with_kind(ToastKind::Success, message, description)
    }

    pub fn error(message: &str, description: Option<&str>) -> Option<ToastId> {
        with_kind(ToastKind::Error, message, description)
    }

    pub fn warning(message: &str, description: Option<&str>) -> Option<ToastId> {
        with_kind(ToastKind::Warning, message, description)
    }

    pub fn info(message: &str, description: Option<&str>) -> Option<ToastId> {
        with_kind(ToastKind::Info, message, description)
    }

    pub fn loading(message: &str, description: Option<&str>) -> Option<ToastId> {
        let input =
            ToastInput::loading(message).maybe_description(description.map(str::to_string));
        show(input)
    }
}

/// Serializes tests that touch the process-wide slot.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::Mutex;
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}
