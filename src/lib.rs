// SPDX-License-Identifier: MPL-2.0
//! `helix_ui` provides transition, toast, error-boundary, stagger, collapse
//! and modal primitives for the Iced GUI framework.
//!
//! Every primitive keeps its own state and deadlines and observes time only
//! through `tick(now)`, so behavior is deterministic under test. The `app`
//! module is a showcase wiring them together.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
