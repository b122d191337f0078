// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! # Components
//!
//! - [`notification`] - `Toast`, `ToastInput` and `ToastKind`
//! - [`manager`] - `Manager` owning the bounded toast list and its deadlines
//! - [`global`] - process-wide slot for enqueuing toasts without a manager handle
//! - [`toast`] - widgets rendering toasts in the bottom-right corner
//!
//! # Usage
//!
//! ```ignore
//! use helix_ui::ui::notifications::{Manager, ToastInput};
//!
//! let mut manager: Manager = Manager::new(5);
//! let id = manager.loading("Uploading", None);
//! // later
//! manager.update(id, ToastInput::success("Uploaded"));
//!
//! // in view
//! let overlay = helix_ui::ui::notifications::toast::view_overlay(&manager)
//!     .map(Message::Toast);
//! ```

pub mod global;
mod manager;
mod notification;
pub mod toast;

pub use global::{toast as global_toast, GlobalToastGuard, ToastRequest};
pub use manager::{Manager, Message as ToastMessage};
pub use notification::{default_duration, Toast, ToastAction, ToastId, ToastInput, ToastKind};
