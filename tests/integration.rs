// SPDX-License-Identifier: MPL-2.0
use helix_ui::config::{self, Config};
use helix_ui::error::RenderError;
use helix_ui::ui::components::error_boundary::{self, ErrorBoundary};
use helix_ui::ui::motion::{stagger, Collapse, Effect, Modal, Stagger, Transition, TransitionDuration};
use helix_ui::ui::notifications::{global, global_toast, Manager, ToastInput, ToastKind};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn messages<A>(manager: &Manager<A>) -> Vec<String> {
    manager.visible().map(|toast| toast.message().to_string()).collect()
}

#[derive(Debug, Clone, PartialEq)]
enum HostMessage {
    Boundary(error_boundary::Message),
}

impl From<error_boundary::Message> for HostMessage {
    fn from(message: error_boundary::Message) -> Self {
        HostMessage::Boundary(message)
    }
}

#[test]
fn transition_unmounts_exactly_after_exit_duration() {
    let t0 = Instant::now();
    let mut transition = Transition::new(Effect::Fade).duration(TransitionDuration::new(300));

    transition.set_show(true, t0);
    assert!(transition.should_render());
    transition.tick(t0 + ms(5000));
    assert!(transition.should_render());

    let hidden_at = t0 + ms(6000);
    transition.set_show(false, hidden_at);
    transition.tick(hidden_at + ms(299));
    assert!(transition.should_render());

    transition.tick(hidden_at + ms(300));
    assert!(!transition.should_render());
}

#[test]
fn reshow_during_exit_cancels_unmount() {
    let t0 = Instant::now();
    let mut transition = Transition::new(Effect::Scale).duration(TransitionDuration::new(200));
    transition.set_show(true, t0);
    transition.set_show(false, t0 + ms(300));

    transition.set_show(true, t0 + ms(400));
    transition.tick(t0 + ms(10_000));
    assert!(transition.should_render());
}

#[test]
fn toast_scenario_keeps_last_two() {
    let mut manager: Manager = Manager::new(2);
    manager.success("A", None);
    manager.error("B", None);
    manager.warning("C", None);

    assert_eq!(messages(&manager), ["B", "C"]);
}

#[test]
fn toast_list_never_exceeds_capacity() {
    let mut manager: Manager = Manager::new(4);
    for i in 0..25 {
        manager.info(&format!("toast {i}"), None);
        assert!(manager.len() <= 4);
    }
    assert_eq!(
        messages(&manager),
        ["toast 21", "toast 22", "toast 23", "toast 24"]
    );
}

#[test]
fn dismiss_toast_is_idempotent() {
    let mut manager: Manager = Manager::new(5);
    let id = manager.warning("once", None);
    manager.info("other", None);

    assert!(manager.dismiss_toast(&id));
    assert!(!manager.dismiss_toast(&id));
    assert_eq!(messages(&manager), ["other"]);
}

#[test]
fn loading_toast_stays_until_dismissed() {
    let t0 = Instant::now();
    let mut manager: Manager = Manager::new(5);
    let id = manager.show_toast_at(ToastInput::loading("Syncing"), t0);
    manager.show_toast_at(ToastInput::success("quick").duration(ms(50)), t0);

    manager.tick(t0 + Duration::from_secs(600));
    assert_eq!(messages(&manager), ["Syncing"]);
    assert_eq!(manager.get(id).map(|t| t.kind()), Some(ToastKind::Loading));

    manager.dismiss_toast(&id);
    assert!(manager.is_empty());
}

#[test]
fn global_helpers_reach_mounted_manager_only() {
    assert_eq!(global_toast::info("before mount", None), None);

    let mut manager: Manager = Manager::new(5);
    manager.mount();
    assert!(global::is_installed());

    let worker = std::thread::spawn(|| global_toast::success("from worker", Some("done")));
    let id = worker.join().expect("worker thread").expect("manager mounted");

    manager.tick(Instant::now());
    let toast = manager.get(id).expect("drained");
    assert_eq!(toast.message(), "from worker");
    assert_eq!(toast.description(), Some("done"));

    drop(manager);
    assert!(!global::is_installed());
    assert_eq!(global_toast::info("after drop", None), None);
}

#[test]
fn boundary_shows_fallback_then_recovers_after_reset() {
    let mut boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();

    let failed = boundary.catch(|| Err::<(), _>(RenderError::new("bad data")));
    assert_eq!(failed, None);
    assert!(boundary.has_error());
    let _fallback = boundary.view(|| Ok::<_, RenderError>(iced::widget::text("never").into()));

    assert_eq!(boundary.update(error_boundary::Message::Reset), None);
    assert!(!boundary.has_error());

    let rendered = boundary.catch(|| Ok::<_, RenderError>("children"));
    assert_eq!(rendered, Some("children"));
}

#[test]
fn boundary_contains_panics() {
    let boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
    let rendered = boundary.catch(|| -> Result<u8, RenderError> { panic!("render blew up") });

    assert_eq!(rendered, None);
    let caught = boundary.error().expect("caught");
    assert!(caught.panicked());
    assert_eq!(caught.message(), "render blew up");
    assert!(caught
        .details()
        .is_some_and(|details| details.contains("tests/integration.rs")));
}

#[test]
fn collapse_targets_measured_height_or_zero() {
    let t0 = Instant::now();
    let mut collapse = Collapse::new(TransitionDuration::new(150));
    collapse.measure(96.0);

    collapse.set_open(true, t0);
    assert_eq!(collapse.target_height(), Some(96.0));
    collapse.tick(t0 + ms(150));
    assert_eq!(collapse.current_height(), Some(96.0));

    collapse.set_open(false, t0 + ms(500));
    assert_eq!(collapse.target_height(), Some(0.0));
    collapse.tick(t0 + ms(650));
    assert_eq!(collapse.current_height(), Some(0.0));
}

#[test]
fn stagger_delays_grow_linearly() {
    let d = ms(80);
    let list = Stagger::new(Effect::Fade, d).with_len(6);

    for (k, transition) in list.transitions().iter().enumerate() {
        assert_eq!(transition.delay_value(), d * k as u32);
        assert_eq!(stagger::delay_for(k, d), d * k as u32);
    }
}

#[test]
fn modal_unmounts_both_layers_after_exit() {
    let t0 = Instant::now();
    let mut modal = Modal::new(TransitionDuration::new(200));
    modal.open(t0);
    modal.tick(t0 + ms(200));
    assert!(modal.should_render());

    modal.close(t0 + ms(300));
    modal.tick(t0 + ms(499));
    assert!(modal.should_render());
    modal.tick(t0 + ms(500));
    assert!(!modal.should_render());
    assert!(!modal.panel().should_render());
}

#[test]
fn config_file_drives_manager_capacity() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut saved = Config::default();
    saved.toasts.max_toasts = Some(2);
    saved.toasts.default_duration_ms = Some(1000);
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, saved);

    let t0 = Instant::now();
    let mut manager: Manager = Manager::from_config(&loaded);
    for message in ["one", "two", "three"] {
        manager.show_toast_at(ToastInput::info(message), t0);
    }
    assert_eq!(messages(&manager), ["two", "three"]);

    manager.tick(t0 + ms(1000));
    assert!(manager.is_empty());
}
