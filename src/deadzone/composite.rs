//! Deadzones built by chaining the axial and radial ones
//!
//! Each stage receives the output of the previous stage as its input.

use bevy::math::Vec2;

use super::axial::sloped_scaled_axial;
use super::radial::{scaled_radial, within_radial_deadzone};
use crate::vector_math::{magnitude, normalize};

/// The exponent applied to the output magnitude by [`cubic`].
pub const CUBIC_EXPONENT: f32 = 3.0;

/// The exponent applied to the output magnitude by [`cubic_root`].
///
/// An approximation of `1/3`.
pub const CUBIC_ROOT_EXPONENT: f32 = 0.33;

/// Rejects inputs inside the circular dead region,
/// then applies [`scaled_radial`] followed by [`sloped_scaled_axial`].
///
/// The gate looks at the magnitude of the raw `stick`, not of the intermediate result.
/// Both stages use the same `deadzone`.
#[must_use]
pub fn hybrid(stick: Vec2, deadzone: f32) -> Vec2 {
    if within_radial_deadzone(stick, deadzone) {
        return Vec2::ZERO;
    }

    let partial_output = scaled_radial(stick, deadzone);
    sloped_scaled_axial(partial_output, deadzone)
}

/// Applies [`scaled_radial`], then cubes the resulting magnitude.
///
/// Small deflections become much finer, full deflection stays at full length.
#[must_use]
#[inline]
pub fn cubic(stick: Vec2, deadzone: f32) -> Vec2 {
    pow_magnitude(scaled_radial(stick, deadzone), CUBIC_EXPONENT)
}

/// Applies [`scaled_radial`], then raises the resulting magnitude to [`CUBIC_ROOT_EXPONENT`].
///
/// Small deflections ramp up quickly, full deflection stays at full length.
#[must_use]
#[inline]
pub fn cubic_root(stick: Vec2, deadzone: f32) -> Vec2 {
    pow_magnitude(scaled_radial(stick, deadzone), CUBIC_ROOT_EXPONENT)
}

/// Keeps the direction of `value` while raising its magnitude to `exponent`.
///
/// The zero vector maps to itself for every exponent.
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::deadzone::pow_magnitude;
///
/// assert_eq!(pow_magnitude(Vec2::new(0.0, -0.5), 2.0), Vec2::new(0.0, -0.25));
/// assert_eq!(pow_magnitude(Vec2::ZERO, 0.0), Vec2::ZERO);
/// ```
#[must_use]
pub fn pow_magnitude(value: Vec2, exponent: f32) -> Vec2 {
    let length = magnitude(value);
    if length == 0.0 {
        return Vec2::ZERO;
    }

    normalize(value) * length.powf(exponent)
}
