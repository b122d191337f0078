// SPDX-License-Identifier: MPL-2.0
//! Transition duration domain type.
//!
//! This module provides a type-safe wrapper for transition durations in
//! milliseconds.

use crate::config::{DEFAULT_TRANSITION_MS, MAX_TRANSITION_MS, MIN_TRANSITION_MS};
use std::time::Duration;

/// Transition duration in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–5000 ms).
///
/// # Example
///
/// ```
/// use helix_ui::ui::motion::TransitionDuration;
///
/// let duration = TransitionDuration::new(250);
/// assert_eq!(duration.millis(), 250);
///
/// // Values outside range are clamped
/// let too_long = TransitionDuration::new(60_000);
/// assert_eq!(too_long.millis(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    /// A duration that skips the animation entirely.
    #[must_use]
    pub fn instant() -> Self {
        Self(MIN_TRANSITION_MS)
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if transitions with this duration finish immediately.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

impl From<Duration> for TransitionDuration {
    fn from(duration: Duration) -> Self {
        Self::new(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

impl From<TransitionDuration> for Duration {
    fn from(duration: TransitionDuration) -> Self {
        duration.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(TransitionDuration::new(99_999).millis(), MAX_TRANSITION_MS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(TransitionDuration::new(0).millis(), 0);
        assert_eq!(TransitionDuration::new(150).millis(), 150);
        assert_eq!(TransitionDuration::new(5000).millis(), 5000);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(TransitionDuration::default().millis(), DEFAULT_TRANSITION_MS);
    }

    #[test]
    fn instant_is_zero() {
        assert!(TransitionDuration::instant().is_instant());
        assert!(!TransitionDuration::default().is_instant());
    }

    #[test]
    fn converts_from_std_duration() {
        let duration: TransitionDuration = Duration::from_secs(2).into();
        assert_eq!(duration.millis(), 2000);
        assert_eq!(duration.as_duration(), Duration::from_secs(2));
    }
}
