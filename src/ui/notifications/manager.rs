// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the ordered toast list. It caps the list at
//! `max_toasts` (evicting the oldest), expires auto-dismiss deadlines on
//! tick, and drains toasts enqueued through the [`global`](super::global)
//! slot while mounted.

use super::global::{self, GlobalToastGuard, ToastRequest};
use super::notification::{default_duration, Toast, ToastId, ToastInput, ToastKind};
use crate::config::{Config, DEFAULT_MAX_TOASTS, MIN_MAX_TOASTS};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;

/// Messages for toast state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<A = ()> {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// The action button of a toast was pressed.
    Action(ToastId, A),
}

#[derive(Debug)]
struct GlobalMount {
    _guard: GlobalToastGuard,
    receiver: UnboundedReceiver<ToastRequest>,
}

/// Manages the toast list (the "provider").
#[derive(Debug)]
pub struct Manager<A = ()> {
    /// Toasts in insertion order, oldest first.
    toasts: VecDeque<Toast<A>>,
    max_toasts: usize,
    default_duration: Duration,
    /// Latest instant seen by `tick`, used for spinner animation.
    clock: Option<Instant>,
    global: Option<GlobalMount>,
}

impl<A> Default for Manager<A> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOASTS)
    }
}

impl<A> Manager<A> {
    /// Creates an empty manager keeping at most `max_toasts` entries
    /// (at least one).
    #[must_use]
    pub fn new(max_toasts: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            max_toasts: max_toasts.max(MIN_MAX_TOASTS),
            default_duration: default_duration(),
            clock: None,
            global: None,
        }
    }

    /// Creates a manager from the `[toasts]` config section.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut manager = Self::new(config.max_toasts());
        manager.default_duration = config.toast_duration();
        manager
    }

    #[must_use]
    pub fn max_toasts(&self) -> usize {
        self.max_toasts
    }

    /// Installs this manager as the target of the global toast helpers.
    pub fn mount(&mut self) {
        let (guard, receiver) = global::install();
        self.global = Some(GlobalMount {
            _guard: guard,
            receiver,
        });
    }

    /// Releases the global slot. Pending global requests are discarded.
    pub fn unmount(&mut self) {
        self.global = None;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.global.is_some()
    }

    /// Shows a toast, returning its id.
    pub fn show_toast(&mut self, input: ToastInput<A>) -> ToastId {
        self.show_toast_at(input, Instant::now())
    }

    /// Shows a toast whose auto-dismiss deadline counts from `now`.
    pub fn show_toast_at(&mut self, input: ToastInput<A>, now: Instant) -> ToastId {
        let id = ToastId::new();
        self.insert(id, input, now);
        id
    }

    fn insert(&mut self, id: ToastId, input: ToastInput<A>, now: Instant) {
        self.toasts
            .push_back(Toast::mount(id, input, self.default_duration, now));

        while self.toasts.len() > self.max_toasts {
            if let Some(evicted) = self.toasts.pop_front() {
                tracing::debug!(id = %evicted.id(), "toast evicted by queue capacity");
            }
        }
    }

    /// Replaces the content of toast `id` in place, restarting its
    /// auto-dismiss deadline. Returns `false` if the toast is gone.
    pub fn update(&mut self, id: ToastId, input: ToastInput<A>) -> bool {
        self.update_at(id, input, Instant::now())
    }

    pub fn update_at(&mut self, id: ToastId, input: ToastInput<A>, now: Instant) -> bool {
        self.drain_global(now);
        self.replace(id, input, now)
    }

    fn replace(&mut self, id: ToastId, input: ToastInput<A>, now: Instant) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id() == id) {
            Some(toast) => {
                *toast = Toast::mount(id, input, self.default_duration, now);
                true
            }
            None => false,
        }
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed; dismissing an
    /// unknown or already dismissed id does nothing. Pending global requests
    /// are applied first, so an id handed out by the global helpers can be
    /// dismissed before the next tick.
    pub fn dismiss_toast(&mut self, id: &ToastId) -> bool {
        if self.global.is_some() {
            self.drain_global(self.clock.unwrap_or_else(Instant::now));
        }
        self.remove(id)
    }

    fn remove(&mut self, id: &ToastId) -> bool {
        match self.toasts.iter().position(|toast| toast.id() == *id) {
            Some(pos) => {
                self.toasts.remove(pos);
                true
            }
            None => false,
        }
    }

    fn with_kind(&mut self, kind: ToastKind, message: &str, description: Option<&str>) -> ToastId {
        let input = ToastInput::new(kind, message)
            .maybe_description(description.map(str::to_string));
        self.show_toast(input)
    }

    pub fn success(&mut self, message: &str, description: Option<&str>) -> ToastId {
        self.with_kind(ToastKind::Success, message, description)
    }

    pub fn error(&mut self, message: &str, description: Option<&str>) -> ToastId {
        self.with_kind(ToastKind::Error, message, description)
    }

    pub fn warning(&mut self, message: &str, description: Option<&str>) -> ToastId {
        self.with_kind(ToastKind::Warning, message, description)
    }

    pub fn info(&mut self, message: &str, description: Option<&str>) -> ToastId {
        self.with_kind(ToastKind::Info, message, description)
    }

    /// Shows a sticky, non-dismissible toast. Replace it with
    /// [`Manager::update`] or remove it with [`Manager::dismiss_toast`].
    pub fn loading(&mut self, message: &str, description: Option<&str>) -> ToastId {
        let input =
            ToastInput::loading(message).maybe_description(description.map(str::to_string));
        self.show_toast(input)
    }

    /// Drains global requests and removes toasts whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        self.clock = Some(self.clock.map_or(now, |clock| clock.max(now)));
        self.drain_global(now);
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    fn drain_global(&mut self, now: Instant) {
        let mut pending = Vec::new();
        if let Some(mount) = self.global.as_mut() {
            while let Ok(request) = mount.receiver.try_recv() {
                pending.push(request);
            }
        }
        for request in pending {
            match request {
                ToastRequest::Show { id, input } => self.insert(id, convert_global(input), now),
                ToastRequest::Update { id, input } => {
                    if !self.replace(id, convert_global(input), now) {
                        tracing::debug!(%id, "global update for unknown toast ignored");
                    }
                }
                ToastRequest::Dismiss(id) => {
                    self.remove(&id);
                }
            }
        }
    }

    /// Handles a toast message, returning the action payload for the host
    /// when an action button was pressed. Pressing an action dismisses the
    /// toast.
    pub fn handle_message(&mut self, message: Message<A>) -> Option<A> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss_toast(&id);
                None
            }
            Message::Action(id, action) => {
                self.dismiss_toast(&id).then_some(action)
            }
        }
    }

    /// Returns the toasts in insertion order, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast<A>> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast<A>> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether ticks are needed: toasts are showing or the global slot may
    /// deliver new ones.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        !self.toasts.is_empty() || self.global.is_some()
    }

    /// Latest instant observed by [`Manager::tick`].
    #[must_use]
    pub fn clock(&self) -> Option<Instant> {
        self.clock
    }

    /// Clears all toasts.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Global requests never carry actions, so they fit any action type.
fn convert_global<A>(input: ToastInput) -> ToastInput<A> {
    ToastInput {
        kind: input.kind,
        message: input.message,
        description: input.description,
        duration: input.duration,
        dismissible: input.dismissible,
        action: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::global::{test_lock, toast};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn messages<A>(manager: &Manager<A>) -> Vec<&str> {
        manager.visible().map(Toast::message).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager: Manager = Manager::new(3);
        assert_eq!(manager.len(), 0);
        assert!(manager.is_empty());
        assert!(!manager.needs_tick());
    }

    #[test]
    fn max_toasts_is_at_least_one() {
        let manager: Manager = Manager::new(0);
        assert_eq!(manager.max_toasts(), 1);
    }

    #[test]
    fn overflow_evicts_oldest_first() {
        let mut manager: Manager = Manager::new(3);
        for i in 0..5 {
            manager.info(&format!("toast-{i}"), None);
        }

        assert_eq!(manager.len(), 3);
        assert_eq!(messages(&manager), ["toast-2", "toast-3", "toast-4"]);
    }

    #[test]
    fn scenario_success_error_warning_with_capacity_two() {
        let mut manager: Manager = Manager::new(2);
        manager.success("A", None);
        manager.error("B", None);
        manager.warning("C", None);

        assert_eq!(messages(&manager), ["B", "C"]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager: Manager = Manager::new(5);
        let keep = manager.info("keep", None);
        let id = manager.info("drop", None);

        assert!(manager.dismiss_toast(&id));
        assert!(!manager.dismiss_toast(&id));
        assert!(!manager.dismiss_toast(&ToastId::new()));

        assert_eq!(manager.len(), 1);
        assert!(manager.get(keep).is_some());
    }

    #[test]
    fn tick_expires_only_due_toasts() {
        let t0 = Instant::now();
        let mut manager: Manager = Manager::new(5);
        manager.show_toast_at(ToastInput::info("short").duration(ms(100)), t0);
        manager.show_toast_at(ToastInput::info("long").duration(ms(1000)), t0);

        manager.tick(t0 + ms(99));
        assert_eq!(manager.len(), 2);

        manager.tick(t0 + ms(100));
        assert_eq!(messages(&manager), ["long"]);
    }

    #[test]
    fn default_duration_is_five_seconds() {
        let t0 = Instant::now();
        let mut manager: Manager = Manager::new(5);
        manager.show_toast_at(ToastInput::success("saved"), t0);

        manager.tick(t0 + ms(4999));
        assert_eq!(manager.len(), 1);
        manager.tick(t0 + ms(5000));
        assert!(manager.is_empty());
    }

    #[test]
    fn manual_dismiss_leaves_no_deadline_behind() {
        let t0 = Instant::now();
        let mut manager: Manager = Manager::new(5);
        let first = manager.show_toast_at(ToastInput::info("first").duration(ms(100)), t0);
        manager.dismiss_toast(&first);
        let second = manager.show_toast_at(ToastInput::info("second").duration(ms(500)), t0);

        manager.tick(t0 + ms(100));
        assert!(manager.get(second).is_some());
    }

    #[test]
    fn loading_toast_is_never_auto_dismissed() {
        let t0 = Instant::now();
        let mut manager: Manager = Manager::new(5);
        let id = manager.loading("Uploading", None);

        let toast = manager.get(id).expect("present");
        assert_eq!(toast.duration(), Duration::ZERO);
        assert!(!toast.is_dismissible());

        manager.tick(t0 + Duration::from_secs(24 * 3600));
        assert!(manager.get(id).is_some());

        assert!(manager.dismiss_toast(&id));
        assert!(manager.is_empty());
    }

    #[test]
    fn update_replaces_loading_with_result() {
        let t0 = Instant::now();
        let mut manager: Manager = Manager::new(5);
        let id = manager.show_toast_at(ToastInput::loading("Uploading"), t0);

        assert!(manager.update_at(id, ToastInput::success("Uploaded").duration(ms(200)), t0 + ms(50)));
        let toast = manager.get(id).expect("still present");
        assert_eq!(toast.kind(), ToastKind::Success);
        assert!(toast.is_dismissible());

        manager.tick(t0 + ms(250));
        assert!(manager.is_empty());
        assert!(!manager.update(id, ToastInput::info("late")));
    }

    #[test]
    fn action_message_returns_payload_and_dismisses() {
        let mut manager: Manager<&'static str> = Manager::new(5);
        let id = manager.show_toast(ToastInput::info("Archived").action("Undo", "undo"));

        assert_eq!(manager.handle_message(Message::Action(id, "undo")), Some("undo"));
        assert!(manager.is_empty());
        assert_eq!(manager.handle_message(Message::Action(id, "undo")), None);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager: Manager = Manager::new(5);
        let id = manager.info("test", None);

        assert_eq!(manager.handle_message(Message::Dismiss(id)), None);
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager: Manager = Manager::new(5);
        for i in 0..4 {
            manager.info(&format!("test-{i}"), None);
        }
        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn from_config_uses_toast_section() {
        let mut config = Config::default();
        config.toasts.max_toasts = Some(2);
        config.toasts.default_duration_ms = Some(750);

        let t0 = Instant::now();
        let mut manager: Manager = Manager::from_config(&config);
        assert_eq!(manager.max_toasts(), 2);

        manager.show_toast_at(ToastInput::info("configured"), t0);
        manager.tick(t0 + ms(750));
        assert!(manager.is_empty());
    }

    #[test]
    fn mounted_manager_receives_global_toasts() {
        let _lock = test_lock();
        let mut manager: Manager = Manager::new(5);
        manager.mount();

        let id = toast::error("From a helper", None).expect("mounted");
        assert!(manager.is_empty());

        manager.tick(Instant::now());
        let toast = manager.get(id).expect("drained on tick");
        assert_eq!(toast.kind(), ToastKind::Error);

        manager.unmount();
        assert_eq!(toast::info("after unmount", None), None);
    }

    #[test]
    fn global_loading_toast_dismissed_before_tick_stays_gone() {
        let _lock = test_lock();
        let t0 = Instant::now();
        let mut manager: Manager = Manager::new(5);
        manager.mount();

        let id = toast::loading("Syncing", None).expect("mounted");
        assert!(manager.dismiss_toast(&id));

        manager.tick(t0 + Duration::from_secs(3600));
        assert!(manager.get(id).is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn global_update_and_dismiss_drain_in_order() {
        let _lock = test_lock();
        let t0 = Instant::now();
        let mut manager: Manager = Manager::new(5);
        manager.mount();

        let id = toast::loading("Exporting", None).expect("mounted");
        manager.tick(t0);
        assert_eq!(manager.get(id).map(Toast::kind), Some(ToastKind::Loading));

        assert!(global::update(id, ToastInput::success("Exported").duration(ms(200))));
        manager.tick(t0 + ms(10));
        let toast = manager.get(id).expect("updated in place");
        assert_eq!(toast.kind(), ToastKind::Success);
        assert!(toast.is_dismissible());

        let sticky = toast::loading("Indexing", None).expect("mounted");
        assert!(global::dismiss(sticky));
        manager.tick(t0 + ms(20));
        assert!(manager.get(sticky).is_none());

        manager.tick(t0 + ms(210));
        assert!(manager.is_empty());
    }

    #[test]
    fn dropping_manager_clears_global_slot() {
        let _lock = test_lock();
        {
            let mut manager: Manager = Manager::new(5);
            manager.mount();
            assert!(global::is_installed());
        }
        assert!(!global::is_installed());
    }
}
