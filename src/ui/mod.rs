// SPDX-License-Identifier: MPL-2.0
//! User interface primitives.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! primitive owns its state, exposes `tick(now)` for time-driven changes and
//! renders through a `view` returning an `Element`.
//!
//! # Primitives
//!
//! - [`motion`] - Transitions, stagger, collapse and modal
//! - [`notifications`] - Bounded toast queue and its global helpers
//! - [`components`] - Error boundary and error panel
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)
//! - [`theming`] - Light/Dark/System theme mode

pub mod components;
pub mod design_tokens;
pub mod motion;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
