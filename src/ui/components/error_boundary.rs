// SPDX-License-Identifier: MPL-2.0
//! Render-failure containment.
//!
//! An [`ErrorBoundary`] wraps a fallible render closure. When the closure
//! returns `Err` or panics, the boundary records a [`CaughtError`], fires its
//! `on_error` hook once, and renders a fallback in place of the children
//! until [`ErrorBoundary::reset_error`] is called. The next render after a
//! reset re-attempts the children.
//!
//! Views take `&self`, so the caught state lives in a `RefCell`.
//!
//! ```ignore
//! let boundary: ErrorBoundary<AppMessage> = ErrorBoundary::new()
//!     .error_message("The report could not be shown")
//!     .on_error(|err| tracing::error!(%err, "report view failed"));
//!
//! boundary.view(|| report_view(&self.rows))
//! ```

use super::error_display::ErrorDisplay;
use crate::error::RenderError;
use iced::widget::Container;
use iced::{alignment, Element, Length};
use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

const DEFAULT_TITLE: &str = "Something went wrong";

/// Messages emitted by the default fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// "Try again": clear the error and re-render the children.
    Reset,
    ToggleDetails,
    /// "Go home": clear the error and ask the host to navigate away.
    GoHome,
}

/// Events the host must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    HomeRequested,
}

/// A failure recorded by the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct CaughtError {
    message: String,
    details: Option<String>,
    panicked: bool,
    caught_at: Instant,
}

impl CaughtError {
    fn from_render_error(err: RenderError) -> Self {
        let details = (!err.causes().is_empty()).then(|| err.causes().join("\n"));
        Self {
            message: err.message().to_string(),
            details,
            panicked: false,
            caught_at: Instant::now(),
        }
    }

    fn from_panic(payload: &(dyn Any + Send), site: Option<String>) -> Self {
        Self {
            message: panic_message(payload),
            details: Some(site.unwrap_or_else(|| "panicked while rendering".to_string())),
            panicked: true,
            caught_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Technical details: the cause chain one per line, or the panic
    /// location followed by a backtrace when `RUST_BACKTRACE` enables one.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Whether the children panicked rather than returning `Err`.
    #[must_use]
    pub fn panicked(&self) -> bool {
        self.panicked
    }

    #[must_use]
    pub fn caught_at(&self) -> Instant {
        self.caught_at
    }
}

impl fmt::Display for CaughtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

thread_local! {
    static RECORDING: Cell<bool> = const { Cell::new(false) };
    static PANIC_SITE: RefCell<Option<String>> = const { RefCell::new(None) };
}

static PANIC_HOOK: Once = Once::new();

/// Chains a panic hook that records where a panic happened on threads
/// currently inside [`run_recording_panics`]. The previous hook still runs.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if RECORDING.with(Cell::get) {
                let mut site = match info.location() {
                    Some(location) => format!("panicked at {location}"),
                    None => "panicked at an unknown location".to_string(),
                };
                let backtrace = Backtrace::capture();
                if backtrace.status() == BacktraceStatus::Captured {
                    site.push_str(&format!("\n\n{backtrace}"));
                }
                PANIC_SITE.with(|slot| *slot.borrow_mut() = Some(site));
            }
            previous(info);
        }));
    });
}

/// Runs `f`, catching a panic together with its recorded location.
fn run_recording_panics<R>(
    f: impl FnOnce() -> R,
) -> Result<R, (Box<dyn Any + Send>, Option<String>)> {
    install_panic_hook();
    PANIC_SITE.with(|slot| slot.borrow_mut().take());
    let was_recording = RECORDING.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    RECORDING.with(|flag| flag.set(was_recording));

    result.map_err(|payload| (payload, PANIC_SITE.with(|slot| slot.borrow_mut().take())))
}

type ErrorHook = Box<dyn Fn(&CaughtError)>;
type FallbackFn<M> = Box<dyn Fn(&CaughtError, M) -> Element<'static, M>>;

/// Wraps a render closure and swaps in a fallback when it fails.
///
/// `M` is the host message type; the default fallback's buttons are mapped
/// into it through `From<Message>`.
pub struct ErrorBoundary<M> {
    caught: RefCell<Option<CaughtError>>,
    show_details: bool,
    error_message: Option<String>,
    on_error: Option<ErrorHook>,
    fallback: Option<FallbackFn<M>>,
}

impl<M> fmt::Debug for ErrorBoundary<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBoundary")
            .field("caught", &self.caught)
            .field("show_details", &self.show_details)
            .field("error_message", &self.error_message)
            .field("on_error", &self.on_error.is_some())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<M> Default for ErrorBoundary<M> {
    fn default() -> Self {
        Self {
            caught: RefCell::new(None),
            show_details: false,
            error_message: None,
            on_error: None,
            fallback: None,
        }
    }
}

impl<M> ErrorBoundary<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default fallback title.
    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Hook fired once per caught failure. Panics inside it are logged and
    /// swallowed.
    #[must_use]
    pub fn on_error(mut self, hook: impl Fn(&CaughtError) + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Replaces the default fallback. The renderer receives the caught error
    /// and the message that resets the boundary.
    #[must_use]
    pub fn fallback(
        mut self,
        render: impl Fn(&CaughtError, M) -> Element<'static, M> + 'static,
    ) -> Self {
        self.fallback = Some(Box::new(render));
        self
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.caught.borrow().is_some()
    }

    #[must_use]
    pub fn error(&self) -> Option<CaughtError> {
        self.caught.borrow().clone()
    }

    /// Returns to the ready state; the next render re-attempts the children.
    pub fn reset_error(&mut self) {
        if self.caught.get_mut().take().is_some() {
            tracing::debug!("error boundary reset");
        }
        self.show_details = false;
    }

    #[must_use]
    pub fn details_visible(&self) -> bool {
        self.show_details
    }

    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::Reset => {
                self.reset_error();
                None
            }
            Message::ToggleDetails => {
                self.show_details = !self.show_details;
                None
            }
            Message::GoHome => {
                self.reset_error();
                Some(Event::HomeRequested)
            }
        }
    }

    /// Runs `children` unless an error is already held.
    ///
    /// Returns `None` when the boundary is (or has just become) errored.
    pub fn catch<T, E>(&self, children: impl FnOnce() -> Result<T, E>) -> Option<T>
    where
        E: Into<RenderError>,
    {
        if self.has_error() {
            return None;
        }

        let caught = match run_recording_panics(children) {
            Ok(Ok(value)) => return Some(value),
            Ok(Err(err)) => CaughtError::from_render_error(err.into()),
            Err((payload, site)) => CaughtError::from_panic(payload.as_ref(), site),
        };

        tracing::warn!(
            error = %caught,
            panicked = caught.panicked(),
            "render failed, showing fallback"
        );
        self.notify(&caught);
        *self.caught.borrow_mut() = Some(caught);
        None
    }

    fn notify(&self, caught: &CaughtError) {
        let Some(hook) = self.on_error.as_ref() else {
            return;
        };
        if panic::catch_unwind(AssertUnwindSafe(|| hook(caught))).is_err() {
            tracing::warn!("error boundary on_error hook panicked; ignoring");
        }
    }
}

impl<M> ErrorBoundary<M>
where
    M: From<Message> + 'static,
{
    /// Renders `children`, or the fallback if they fail or an error is held.
    pub fn view<'a, E>(
        &self,
        children: impl FnOnce() -> Result<Element<'a, M>, E>,
    ) -> Element<'a, M>
    where
        E: Into<RenderError>,
    {
        match self.catch(children) {
            Some(element) => element,
            None => self.fallback_view(),
        }
    }

    fn fallback_view(&self) -> Element<'static, M> {
        let caught = self.caught.borrow();
        let Some(caught) = caught.as_ref() else {
            return Container::new(iced::widget::text("")).into();
        };

        if let Some(render) = self.fallback.as_ref() {
            return render(caught, M::from(Message::Reset));
        }

        let mut display = ErrorDisplay::new()
            .title(self.error_message.as_deref().unwrap_or(DEFAULT_TITLE))
            .message(caught.message())
            .details_visible(self.show_details)
            .on_toggle_details(Message::ToggleDetails)
            .action("Try again", Message::Reset)
            .secondary_action("Go home", Message::GoHome);
        if let Some(details) = caught.details() {
            display = display.details(details);
        }

        Container::new(display.view().map(M::from))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum HostMessage {
        Boundary(Message),
    }

    impl From<Message> for HostMessage {
        fn from(message: Message) -> Self {
            HostMessage::Boundary(message)
        }
    }

    fn ok_child() -> Result<Element<'static, HostMessage>, RenderError> {
        Ok(text("fine").into())
    }

    fn failing_child() -> Result<Element<'static, HostMessage>, RenderError> {
        Err(RenderError::new("list exploded").caused_by("row 4 missing"))
    }

    #[test]
    fn renders_children_when_they_succeed() {
        let boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
        assert_eq!(boundary.catch(|| Ok::<_, RenderError>(7)), Some(7));
        let _element = boundary.view(ok_child);
        assert!(!boundary.has_error());
    }

    #[test]
    fn err_result_enters_errored_state() {
        let boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
        let _element = boundary.view(failing_child);

        let caught = boundary.error().expect("caught");
        assert_eq!(caught.message(), "list exploded");
        assert_eq!(caught.details(), Some("row 4 missing"));
        assert!(!caught.panicked());
    }

    #[test]
    fn panic_enters_errored_state() {
        let boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
        let line = line!();
        let result = boundary.catch(|| -> Result<(), RenderError> { panic!("index out of range") });

        assert_eq!(result, None);
        let caught = boundary.error().expect("caught");
        assert_eq!(caught.message(), "index out of range");
        assert!(caught.panicked());

        let details = caught.details().expect("panic location recorded");
        assert!(
            details.contains(&format!("{}:{}:", file!(), line + 1)),
            "details: {details}"
        );
    }

    #[test]
    fn errored_boundary_does_not_rerun_children() {
        let boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
        let calls = Cell::new(0);
        let attempt = || {
            calls.set(calls.get() + 1);
            Err::<(), _>("still broken")
        };

        boundary.catch(attempt);
        boundary.catch(attempt);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn reset_rerenders_and_recovers() {
        let mut boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
        boundary.catch(|| Err::<(), _>("first failure"));
        assert!(boundary.has_error());

        boundary.reset_error();
        assert!(!boundary.has_error());
        assert_eq!(boundary.catch(|| Ok::<_, RenderError>("recovered")), Some("recovered"));
        assert!(!boundary.has_error());
    }

    #[test]
    fn reset_then_failing_again_reenters_errored() {
        let mut boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
        boundary.catch(|| Err::<(), _>("first"));
        boundary.update(Message::Reset);

        boundary.catch(|| Err::<(), _>("second"));
        assert_eq!(boundary.error().map(|e| e.message().to_string()), Some("second".into()));
    }

    #[test]
    fn on_error_fires_once_per_catch() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut boundary: ErrorBoundary<HostMessage> =
            ErrorBoundary::new().on_error(move |_| seen.set(seen.get() + 1));

        boundary.catch(|| Err::<(), _>("boom"));
        boundary.catch(|| Err::<(), _>("ignored while errored"));
        assert_eq!(count.get(), 1);

        boundary.reset_error();
        boundary.catch(|| Err::<(), _>("boom again"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn panicking_hook_is_swallowed() {
        let boundary: ErrorBoundary<HostMessage> =
            ErrorBoundary::new().on_error(|_| panic!("hook failed"));

        boundary.catch(|| Err::<(), _>("boom"));
        assert!(boundary.has_error());
    }

    #[test]
    fn custom_fallback_receives_reset_message() {
        let received = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&received);
        let boundary: ErrorBoundary<HostMessage> =
            ErrorBoundary::new().fallback(move |err, reset| {
                *sink.borrow_mut() = Some((err.message().to_string(), reset));
                text("custom").into()
            });

        let _element = boundary.view(failing_child);
        assert_eq!(
            received.borrow().clone(),
            Some((
                "list exploded".to_string(),
                HostMessage::Boundary(Message::Reset)
            ))
        );
    }

    #[test]
    fn go_home_resets_and_emits_event() {
        let mut boundary: ErrorBoundary<HostMessage> = ErrorBoundary::new();
        boundary.catch(|| Err::<(), _>("boom"));
        boundary.update(Message::ToggleDetails);
        assert!(boundary.details_visible());

        assert_eq!(boundary.update(Message::GoHome), Some(Event::HomeRequested));
        assert!(!boundary.has_error());
        assert!(!boundary.details_visible());
    }

    #[test]
    fn default_fallback_builds_with_custom_title() {
        let boundary: ErrorBoundary<HostMessage> =
            ErrorBoundary::new().error_message("Report unavailable");
        let _element = boundary.view(failing_child);
        assert!(boundary.has_error());
    }
}
