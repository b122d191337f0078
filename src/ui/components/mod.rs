// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`error_boundary`] - Contains render failures and swaps in a fallback
//! - [`error_display`] - Error panel with collapsible technical details

pub mod error_boundary;
pub mod error_display;

pub use error_boundary::{CaughtError, ErrorBoundary};
pub use error_display::ErrorDisplay;
