// SPDX-License-Identifier: MPL-2.0
//! Transition effects and the visual state they interpolate.
//!
//! Every effect maps an eased progress value in `[0, 1]` to a
//! [`VisualState`]. Progress 1 is always the identity presentation; effects
//! only differ in which properties they move away from it while hidden.

use crate::ui::design_tokens::motion;
use iced::Vector;

/// Direction a sliding element travels while entering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Enters from below, moving up.
    #[default]
    Up,
    /// Enters from above, moving down.
    Down,
    /// Enters from the right, moving left.
    Left,
    /// Enters from the left, moving right.
    Right,
}

impl Direction {
    /// Unit offset of the hidden position relative to the resting one.
    #[must_use]
    pub fn hidden_offset(self) -> Vector {
        match self {
            Direction::Up => Vector::new(0.0, 1.0),
            Direction::Down => Vector::new(0.0, -1.0),
            Direction::Left => Vector::new(1.0, 0.0),
            Direction::Right => Vector::new(-1.0, 0.0),
        }
    }
}

/// Selects which properties a transition interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Effect {
    /// Opacity only.
    #[default]
    Fade,
    /// Translation along a direction, plus opacity.
    Slide(Direction),
    /// Scale up from slightly smaller, plus opacity.
    Scale,
    /// Blur out of focus, plus opacity.
    Blur,
    /// Rise, scale, blur and brightness together, plus opacity.
    Elevated,
}

/// Interpolated presentation of transitioning content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    /// Translation in logical pixels.
    pub offset: Vector,
    pub scale: f32,
    /// Blur radius in logical pixels.
    pub blur: f32,
    /// Brightness multiplier (1.0 = unchanged).
    pub brightness: f32,
}

impl VisualState {
    /// Fully shown presentation.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        offset: Vector::ZERO,
        scale: 1.0,
        blur: 0.0,
        brightness: 1.0,
    };
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    if t >= 1.0 {
        return to;
    }
    from + (to - from) * t
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

impl Effect {
    /// Computes the visual state for a linear `progress` in `[0, 1]`.
    #[must_use]
    pub fn visual(self, progress: f32) -> VisualState {
        let t = ease_out_cubic(progress);
        let remaining = 1.0 - t;
        let faded = VisualState {
            opacity: t,
            ..VisualState::IDENTITY
        };

        match self {
            Effect::Fade => faded,
            Effect::Slide(direction) => VisualState {
                offset: direction.hidden_offset() * (motion::SLIDE_DISTANCE * remaining),
                ..faded
            },
            Effect::Scale => VisualState {
                scale: lerp(motion::SCALE_FROM, 1.0, t),
                ..faded
            },
            Effect::Blur => VisualState {
                blur: motion::BLUR_FROM * remaining,
                ..faded
            },
            Effect::Elevated => VisualState {
                opacity: t,
                offset: Vector::new(0.0, motion::ELEVATED_RISE * remaining),
                scale: lerp(motion::SCALE_FROM, 1.0, t),
                blur: motion::ELEVATED_BLUR_FROM * remaining,
                brightness: lerp(motion::BRIGHTNESS_FROM, 1.0, t),
            },
        }
    }
}
