//! Deadzones applied to the magnitude of the whole stick vector

use bevy::math::Vec2;

use crate::vector_math::{magnitude, normalize};

/// Is `stick` inside the circular dead region of radius `deadzone`?
///
/// The boundary itself counts as dead.
#[must_use]
#[inline]
pub fn within_radial_deadzone(stick: Vec2, deadzone: f32) -> bool {
    magnitude(stick) <= deadzone
}

/// Returns zero inside the circular dead region and the raw input outside it.
///
/// The output is *not* rescaled: its magnitude jumps from `0` to `deadzone`
/// when crossing the boundary. Use [`scaled_radial`] to avoid the jump.
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::deadzone::radial;
///
/// assert_eq!(radial(Vec2::new(0.3, 0.0), 0.3), Vec2::ZERO);
/// assert_eq!(radial(Vec2::new(0.5, 0.0), 0.3), Vec2::new(0.5, 0.0));
/// ```
#[must_use]
#[inline]
pub fn radial(stick: Vec2, deadzone: f32) -> Vec2 {
    if within_radial_deadzone(stick, deadzone) {
        Vec2::ZERO
    } else {
        stick
    }
}

/// Returns zero inside the circular dead region, and otherwise keeps the direction
/// while remapping the magnitude linearly from `[deadzone, 1]` onto `[0, 1]`.
///
/// Inputs longer than `1` are extrapolated rather than clamped.
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::deadzone::scaled_radial;
///
/// let result = scaled_radial(Vec2::new(0.5, 0.0), 0.3);
/// assert!((result.length() - 0.2 / 0.7).abs() <= 0.00001);
/// assert_eq!(result.normalize(), Vec2::X);
/// ```
#[must_use]
pub fn scaled_radial(stick: Vec2, deadzone: f32) -> Vec2 {
    let input_length = magnitude(stick);
    if input_length <= deadzone {
        return Vec2::ZERO;
    }

    normalize(stick) * ((input_length - deadzone) / (1.0 - deadzone))
}
