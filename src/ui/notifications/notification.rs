// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the [`Toast`] record owned by the manager, the
//! [`ToastInput`] callers hand to `show_toast`, and the [`ToastKind`] that
//! drives styling.

use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Unique identifier for a toast.
///
/// Combines the creation wall-clock millisecond with a process-wide
/// sequence number, so ids never collide within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId {
    created_ms: u64,
    seq: u64,
}

impl ToastId {
    /// Creates a new unique toast ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let created_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        Self {
            created_ms,
            seq: COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}-{}", self.created_ms, self.seq)
    }
}

/// Kind of toast; determines accent color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    /// Long-running operation; sticky until replaced or dismissed.
    Loading,
}

impl ToastKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Error => palette::ERROR_500,
            ToastKind::Warning => palette::WARNING_500,
            ToastKind::Info => palette::INFO_500,
            ToastKind::Loading => palette::LOADING_500,
        }
    }

    /// Text glyph shown next to the message. Loading toasts render a
    /// spinner instead.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "⚠",
            ToastKind::Info => "ℹ",
            ToastKind::Loading => "…",
        }
    }
}

/// Optional call-to-action rendered as a button on the toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastAction<A> {
    pub label: String,
    /// Emitted to the host when the button is pressed.
    pub action: A,
}

/// Caller-supplied description of a toast. Unset fields get defaults when
/// the toast is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastInput<A = ()> {
    pub kind: ToastKind,
    pub message: String,
    pub description: Option<String>,
    /// Auto-dismiss delay. `Some(Duration::ZERO)` makes the toast sticky.
    pub duration: Option<Duration>,
    pub dismissible: Option<bool>,
    pub action: Option<ToastAction<A>>,
}

impl<A> ToastInput<A> {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            description: None,
            duration: None,
            dismissible: None,
            action: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    /// Sticky, non-dismissible loading toast.
    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Loading, message)
            .duration(Duration::ZERO)
            .dismissible(false)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn maybe_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, action: A) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            action,
        });
        self
    }
}

/// A toast owned by the manager.
#[derive(Debug, Clone)]
pub struct Toast<A = ()> {
    id: ToastId,
    kind: ToastKind,
    message: String,
    description: Option<String>,
    duration: Duration,
    dismissible: bool,
    action: Option<ToastAction<A>>,
    created_at: Instant,
    /// Auto-dismiss deadline, set once when mounted. `None` for sticky toasts.
    dismiss_at: Option<Instant>,
}

impl<A> Toast<A> {
    /// Builds a toast from `input`, filling in defaults and scheduling its
    /// auto-dismiss deadline from `now`.
    pub(crate) fn mount(
        id: ToastId,
        input: ToastInput<A>,
        default_duration: Duration,
        now: Instant,
    ) -> Self {
        let duration = input.duration.unwrap_or(default_duration);
        let dismiss_at = (!duration.is_zero()).then(|| now + duration);

        Self {
            id,
            kind: input.kind,
            message: input.message,
            description: input.description,
            duration,
            dismissible: input.dismissible.unwrap_or(true),
            action: input.action,
            created_at: now,
            dismiss_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Auto-dismiss delay. Zero means sticky.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction<A>> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn dismiss_at(&self) -> Option<Instant> {
        self.dismiss_at
    }

    /// Returns whether this toast's deadline has passed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.dismiss_at.is_some_and(|deadline| now >= deadline)
    }
}

/// Default auto-dismiss delay for toasts that do not set one.
#[must_use]
pub fn default_duration() -> Duration {
    Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
}
