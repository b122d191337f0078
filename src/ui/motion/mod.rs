// SPDX-License-Identifier: MPL-2.0
//! Timed show/hide transitions and the composites built on them.
//!
//! # Components
//!
//! - [`presence`] - `Presence` state machine gating mount/unmount timing
//! - [`effect`] - `Effect` variants and the interpolated `VisualState`
//! - [`transition`] - `Transition` dispatcher selecting an effect by tag
//! - [`stagger`] - Sequenced transitions with increasing delays
//! - [`collapse`] - Height-animated disclosure that keeps content mounted
//! - [`modal`] - Fade backdrop plus scale panel, layered in a stack
//! - [`timing`] - `TransitionDuration` newtype
//!
//! Every component owns its deadlines and only observes time through
//! `tick(now)`. The host drives ticks from a `time::every` subscription
//! while [`is_animating`](Transition::is_animating) reports pending work.

pub mod collapse;
pub mod effect;
pub mod modal;
pub mod presence;
pub mod stagger;
pub mod timing;
pub mod transition;

pub use collapse::Collapse;
pub use effect::{ease_out_cubic, Direction, Effect, VisualState};
pub use modal::Modal;
pub use presence::{Phase, Presence};
pub use stagger::Stagger;
pub use timing::TransitionDuration;
pub use transition::Transition;
