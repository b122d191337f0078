// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Queue capacity and auto-dismiss timing
//! - **Motion**: Transition duration and stagger spacing

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default number of toasts kept in the queue before the oldest is evicted.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Minimum queue capacity.
pub const MIN_MAX_TOASTS: usize = 1;

/// Maximum queue capacity.
pub const MAX_MAX_TOASTS: usize = 20;

/// Default auto-dismiss delay for toasts (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Default enter/exit duration for transitions (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Minimum transition duration. Zero disables the animation entirely.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5000;

/// Default delay between consecutive children of a stagger (in milliseconds).
pub const DEFAULT_STAGGER_DELAY_MS: u64 = 100;

/// Interval of the animation tick subscription (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation
    assert!(MIN_MAX_TOASTS > 0);
    assert!(MAX_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS >= MIN_MAX_TOASTS);
    assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);
    assert!(DEFAULT_TOAST_DURATION_MS > 0);

    // Motion validation
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(TICK_INTERVAL_MS > 0);
};
