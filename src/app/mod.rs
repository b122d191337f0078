// SPDX-License-Identifier: MPL-2.0
//! Showcase application exercising every primitive.
//!
//! The `App` owns one instance of each primitive, forwards ticks from a
//! `time::every` subscription to them, and wires buttons to their state
//! changes. Config is loaded once at boot; CLI flags override it.

mod message;
mod subscription;
mod view;

pub use message::{Breakage, Flags, Message, ToastAction};

use crate::config::{self, Config};
use crate::ui::components::error_boundary::{self, ErrorBoundary};
use crate::ui::motion::{Collapse, Direction, Effect, Modal, Stagger, Transition, TransitionDuration};
use crate::ui::notifications::{global, global_toast, Manager, ToastId, ToastInput, ToastKind};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Effects the demo panel cycles through.
pub const EFFECTS: [Effect; 6] = [
    Effect::Fade,
    Effect::Slide(Direction::Up),
    Effect::Slide(Direction::Left),
    Effect::Scale,
    Effect::Blur,
    Effect::Elevated,
];

/// Lines revealed by the collapse section.
pub const DETAIL_LINES: [&str; 4] = [
    "Collapsed content stays mounted",
    "Its height is reported by a sensor",
    "Opening interpolates from 0 to the measurement",
    "Overflow is clipped throughout",
];

const UPLOAD_TIME: Duration = Duration::from_millis(2500);
const BACKGROUND_JOB_TIME: Duration = Duration::from_millis(1200);

/// Root Iced application state.
pub struct App {
    theme_mode: ThemeMode,
    /// `theme_mode` resolved at boot and on every theme change.
    theme: Theme,
    toasts: Manager<ToastAction>,
    /// Pending upload: the loading toast and when it completes.
    upload: Option<(ToastId, Instant)>,
    archived: usize,
    panel: Transition,
    effect_index: usize,
    list: Stagger,
    list_items: Vec<String>,
    details: Collapse,
    modal: Modal,
    boundary: ErrorBoundary<Message>,
    breakage: Breakage,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("toasts", &self.toasts.len())
            .field("boundary_errored", &self.boundary.has_error())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the config named by the flags, or the default location, applying
/// CLI overrides. Returns a warning when the file could not be used.
fn load_config(flags: &Flags) -> (Config, Option<String>) {
    let (mut config, warning) = match flags.config_path.as_deref() {
        Some(path) => match config::load_from_path(path) {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to default config");
                (
                    Config::default(),
                    Some(format!("Could not read {}: {err}", path.display())),
                )
            }
        },
        None => config::load(),
    };

    if let Some(max_toasts) = flags.max_toasts {
        config.toasts.max_toasts = Some(max_toasts);
    }
    (config, warning)
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = load_config(&flags);
        (Self::from_config(&config, warning), Task::none())
    }

    fn from_config(config: &Config, warning: Option<String>) -> Self {
        let mut toasts = Manager::from_config(config);
        toasts.mount();
        if let Some(warning) = warning {
            toasts.warning("Settings not loaded", Some(&warning));
        }

        let duration = TransitionDuration::from(config.transition_duration());
        let list_items: Vec<String> = (1..=4).map(|n| format!("Item {n}")).collect();


        tracing::info!(
            max_toasts = toasts.max_toasts(),
            transition_ms = duration.millis(),
            "showcase started"
        );

        Self {
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.theme(),
            toasts,
            upload: None,
            archived: 0,
            panel: Transition::visible(EFFECTS[0]).duration(duration),
            effect_index: 0,
            list: Stagger::new(Effect::Slide(Direction::Up), config.stagger_delay())
                .duration(duration)
                .with_len(list_items.len()),
            list_items,
            details: Collapse::new(duration),
            modal: Modal::new(duration),
            boundary: ErrorBoundary::new()
                .error_message("The report panel crashed")
                .on_error(|err| tracing::error!(error = %err, "report panel failed")),
            breakage: Breakage::None,
        }
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => "Helix UI".to_string(),
            n => format!("Helix UI ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn is_animating(&self) -> bool {
        self.panel.is_animating()
            || self.list.is_animating()
            || self.details.is_animating()
            || self.modal.is_animating()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.is_animating(),
            !self.toasts.is_empty(),
            self.toasts.is_mounted(),
        )
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            theme_mode: self.theme_mode,
            toasts: &self.toasts,
            archived: self.archived,
            panel: &self.panel,
            effect: EFFECTS[self.effect_index],
            list: &self.list,
            list_items: &self.list_items,
            details: &self.details,
            modal: &self.modal,
            boundary: &self.boundary,
            breakage: self.breakage,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now());
        Task::none()
    }

    /// Applies `message` as if it arrived at `now`.
    fn update_at(&mut self, message: Message, now: Instant) {
        match message {
            Message::Tick(instant) => self.tick(instant),
            Message::Toast(toast_message) => {
                if let Some(ToastAction::UndoArchive) = self.toasts.handle_message(toast_message) {
                    self.archived = self.archived.saturating_sub(1);
                    self.toasts.info("Archive undone", None);
                }
            }
            Message::ShowToast(kind) => {
                self.show_sample(kind);
            }
            Message::ArchiveItem => {
                self.archived += 1;
                self.toasts.show_toast_at(
                    ToastInput::info("Item archived").action("Undo", ToastAction::UndoArchive),
                    now,
                );
            }
            Message::StartUpload => {
                if let Some((previous, _)) = self.upload.take() {
                    self.toasts.dismiss_toast(&previous);
                }
                let id = self.toasts.show_toast_at(
                    ToastInput::loading("Uploading report").description("report.pdf"),
                    now,
                );
                self.upload = Some((id, now + UPLOAD_TIME));
            }
            Message::StartBackgroundJob => {
                std::thread::spawn(|| {
                    let Some(id) = global_toast::loading("Background job running", None) else {
                        tracing::debug!("no toast manager mounted, job result dropped");
                        return;
                    };
                    std::thread::sleep(BACKGROUND_JOB_TIME);
                    let done = ToastInput::success("Background job finished")
                        .description("Sent from a worker thread");
                    if !global::update(id, done) {
                        tracing::debug!(%id, "toast manager went away before the job finished");
                    }
                });
            }
            Message::TogglePanel => self.panel.toggle(now),
            Message::CycleEffect => {
                self.effect_index = (self.effect_index + 1) % EFFECTS.len();
                self.panel.set_effect(EFFECTS[self.effect_index]);
            }
            Message::ToggleList => {
                let show = !self.list.is_shown();
                self.list.set_show(show, now);
            }
            Message::AddListItem => {
                self.list_items
                    .push(format!("Item {}", self.list_items.len() + 1));
                self.list.set_len(self.list_items.len(), Some(now));
            }
            Message::ToggleCollapse => self.details.toggle(now),
            Message::DetailsMeasured(height) => self.details.measure(height),
            Message::OpenModal => self.modal.open(now),
            Message::CloseModal => self.modal.close(now),
            Message::SetBreakage(breakage) => self.breakage = breakage,
            Message::Boundary(boundary_message) => {
                if let Some(error_boundary::Event::HomeRequested) =
                    self.boundary.update(boundary_message)
                {
                    self.breakage = Breakage::None;
                    self.toasts.info("Back to a safe state", None);
                }
            }
            Message::CycleTheme => {
                self.theme_mode = self.theme_mode.next();
                self.theme = self.theme_mode.theme();
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        self.toasts.tick(now);
        self.panel.tick(now);
        self.list.tick(now);
        self.details.tick(now);
        self.modal.tick(now);

        if let Some((id, done_at)) = self.upload {
            if now >= done_at {
                self.upload = None;
                self.toasts.update_at(
                    id,
                    ToastInput::success("Upload complete").description("report.pdf"),
                    now,
                );
            }
        }
    }

    fn show_sample(&mut self, kind: ToastKind) -> ToastId {
        match kind {
            ToastKind::Success => self.toasts.success("Changes saved", None),
            ToastKind::Error => self
                .toasts
                .error("Could not reach the server", Some("Check your connection")),
            ToastKind::Warning => self.toasts.warning("Storage almost full", Some("92% used")),
            ToastKind::Info => self.toasts.info("A new version is available", None),
            ToastKind::Loading => self.toasts.loading("Working", None),
        }
    }
}
