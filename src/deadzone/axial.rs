//! Deadzones applied to each axis independently

use bevy::math::Vec2;

use crate::vector_math::{map_range, sign};

/// Zeroes every component whose magnitude does not exceed `deadzone`,
/// leaving the other components untouched.
///
/// The dead region is a square, and each axis jumps from `0` to `±deadzone` at the boundary.
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::deadzone::axial;
///
/// assert_eq!(axial(Vec2::new(0.1, 0.5), 0.2), Vec2::new(0.0, 0.5));
/// assert_eq!(axial(Vec2::new(-0.2, -0.21), 0.2), Vec2::new(0.0, -0.21));
/// ```
#[must_use]
#[inline]
pub fn axial(stick: Vec2, deadzone: f32) -> Vec2 {
    Vec2::new(cutoff(stick.x, deadzone), cutoff(stick.y, deadzone))
}

/// Like [`axial`], but each surviving component is rescaled
/// so that it ramps from `0` at the threshold to `±1` at full deflection.
#[must_use]
#[inline]
pub fn scaled_axial(stick: Vec2, deadzone: f32) -> Vec2 {
    Vec2::new(scaled_cutoff(stick.x, deadzone), scaled_cutoff(stick.y, deadzone))
}

/// Like [`axial`], but the threshold of each axis is `deadzone` times
/// the magnitude of the *other* axis.
///
/// Pushing along one axis widens the dead band of the other,
/// so the dead region is shaped like a cross rather than a square
/// and diagonals are no longer snapped onto the axes.
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::deadzone::sloped_axial;
///
/// // Threshold for x is 0.5 * 0.9 = 0.45
/// assert_eq!(sloped_axial(Vec2::new(0.4, 0.9), 0.5), Vec2::new(0.0, 0.9));
///
/// // Threshold for x is 0.5 * 0.1 = 0.05, threshold for y is 0.5 * 0.4 = 0.2
/// assert_eq!(sloped_axial(Vec2::new(0.4, 0.1), 0.5), Vec2::new(0.4, 0.0));
/// ```
#[must_use]
#[inline]
pub fn sloped_axial(stick: Vec2, deadzone: f32) -> Vec2 {
    let (deadzone_x, deadzone_y) = sloped_thresholds(stick, deadzone);
    Vec2::new(cutoff(stick.x, deadzone_x), cutoff(stick.y, deadzone_y))
}

/// Sloped thresholds as in [`sloped_axial`], with each surviving axis
/// remapped from `[threshold, 1]` onto `[0, 1]` and re-signed.
///
/// Every axis is continuous at its own threshold.
#[must_use]
#[inline]
pub fn sloped_scaled_axial(stick: Vec2, deadzone: f32) -> Vec2 {
    let (deadzone_x, deadzone_y) = sloped_thresholds(stick, deadzone);
    Vec2::new(scaled_cutoff(stick.x, deadzone_x), scaled_cutoff(stick.y, deadzone_y))
}

/// Per-axis thresholds of the sloped variants, as `(deadzone_x, deadzone_y)`.
#[must_use]
#[inline]
pub fn sloped_thresholds(stick: Vec2, deadzone: f32) -> (f32, f32) {
    (deadzone * stick.y.abs(), deadzone * stick.x.abs())
}

#[inline]
fn cutoff(value: f32, threshold: f32) -> f32 {
    if value.abs() > threshold {
        value
    } else {
        0.0
    }
}

#[inline]
fn scaled_cutoff(value: f32, threshold: f32) -> f32 {
    if value.abs() > threshold {
        sign(value) * map_range(value.abs(), threshold, 1.0, 0.0, 1.0)
    } else {
        0.0
    }
}
