//! Small 2D vector helpers shared by every deadzone algorithm
//!
//! All of these are pure functions over [`Vec2`] and `f32`.
//! The only partial one is [`map_range`], which requires a non-empty source range.

use bevy::math::Vec2;

use crate::errors::NearlySingularConversion;

/// The Euclidean length of `v`.
#[must_use]
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Scales `v` to unit length, returning [`Vec2::ZERO`] for the zero vector.
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::vector_math::normalize;
///
/// assert_eq!(normalize(Vec2::new(3.0, 4.0)), Vec2::new(0.6, 0.8));
/// assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);
/// ```
#[must_use]
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let length = magnitude(v);
    if length == 0.0 {
        Vec2::ZERO
    } else {
        v / length
    }
}

/// The sign of `x` as `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f32::signum`], zero (of either sign) maps to `0.0`.
#[must_use]
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Linearly remaps `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// Values outside the source range are extrapolated, not clamped.
/// The result is undefined when `old_min == old_max`.
///
/// ```rust
/// use thumbstick_deadzones::vector_math::map_range;
///
/// assert_eq!(map_range(0.5, 0.0, 1.0, 0.0, 255.0), 127.5);
/// assert_eq!(map_range(0.625, 0.25, 1.0, 0.0, 1.0), 0.5);
/// ```
#[must_use]
#[inline]
pub fn map_range(value: f32, old_min: f32, old_max: f32, new_min: f32, new_max: f32) -> f32 {
    debug_assert!(old_max != old_min, "cannot remap from an empty range");
    new_min + (new_max - new_min) * (value - old_min) / (old_max - old_min)
}

/// The facing angle of a processed stick vector, in radians.
///
/// Measured with `atan2(x, -y)`, so with screen coordinates (y pointing down)
/// pushing the stick up faces `0.0` and pushing it right faces `π/2`.
///
/// # Errors
///
/// Returns [`NearlySingularConversion`] for the zero vector, which has no direction.
/// Callers should keep the previous heading in that case.
pub fn stick_heading(v: Vec2) -> Result<f32, NearlySingularConversion> {
    if magnitude(v) > 0.0 {
        Ok(v.x.atan2(-v.y))
    } else {
        Err(NearlySingularConversion)
    }
}
