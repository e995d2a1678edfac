//! Snapping stick input onto a preferred direction
//!
//! Inputs within an angular window around the target direction are snapped onto it,
//! and the angles outside the window are stretched linearly to cover the rest of the circle.
//! The magnitude of the input is always kept.

use std::f32::consts::{FRAC_PI_4, PI, TAU};

use bevy::math::{Dir2, Vec2};
use serde::{Deserialize, Serialize};

use crate::errors::NearlySingularConversion;
use crate::vector_math::magnitude;

/// Snaps inputs within `angle_range` radians of `target` onto `target`.
///
/// ```rust
/// use bevy::math::{Dir2, Vec2};
/// use thumbstick_deadzones::prelude::*;
///
/// let adjustment = DirectionalAdjustment::new(Dir2::X, 0.5);
///
/// // Slightly above the X axis: snapped
/// let snapped = adjustment.apply(Vec2::new(0.8, 0.1));
/// assert!((snapped - Vec2::new(Vec2::new(0.8, 0.1).length(), 0.0)).length() <= 0.00001);
///
/// // Straight up: outside the window, so only rotated
/// let rotated = adjustment.apply(Vec2::Y);
/// assert!((rotated.length() - 1.0).abs() <= 0.00001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct DirectionalAdjustment {
    /// The direction inputs are snapped onto.
    pub(crate) target: Dir2,

    /// Half the width of the snapping window, in radians.
    pub(crate) angle_range: f32,
}

impl DirectionalAdjustment {
    /// The half-width of the snapping window used by default.
    pub const DEFAULT_ANGLE_RANGE: f32 = FRAC_PI_4;

    /// Creates a [`DirectionalAdjustment`] snapping onto `target`.
    ///
    /// # Requirements
    ///
    /// - `0.0` <= `angle_range` < `π`.
    ///
    /// # Panics
    ///
    /// Panics if the requirements aren't met.
    #[inline]
    pub fn new(target: Dir2, angle_range: f32) -> Self {
        assert!(
            (0.0..PI).contains(&angle_range),
            "angle range must be within [0, π)"
        );
        Self {
            target,
            angle_range,
        }
    }

    /// Creates a [`DirectionalAdjustment`] snapping onto the direction of `target`.
    ///
    /// # Errors
    ///
    /// Returns [`NearlySingularConversion`] if `target` has no direction.
    ///
    /// # Panics
    ///
    /// Panics if `angle_range` is not within `[0, π)`.
    pub fn towards(target: Vec2, angle_range: f32) -> Result<Self, NearlySingularConversion> {
        let target = Dir2::new(target).map_err(|_| NearlySingularConversion)?;
        Ok(Self::new(target, angle_range))
    }

    /// Returns the direction inputs are snapped onto.
    #[inline]
    pub fn target(&self) -> Dir2 {
        self.target
    }

    /// Returns the half-width of the snapping window, in radians.
    #[must_use]
    #[inline]
    pub fn angle_range(&self) -> f32 {
        self.angle_range
    }

    /// Is the direction of `stick` within the snapping window?
    #[must_use]
    pub fn within_window(&self, stick: Vec2) -> bool {
        if magnitude(stick) == 0.0 {
            return false;
        }

        let angle_diff = wrap_angle(angle_of(stick) - angle_of(*self.target));
        angle_diff.abs() < self.angle_range
    }

    /// Snaps or rotates `stick`, keeping its magnitude.
    ///
    /// The zero vector is returned unchanged.
    #[must_use]
    pub fn apply(&self, stick: Vec2) -> Vec2 {
        let input_length = magnitude(stick);
        if input_length == 0.0 {
            return Vec2::ZERO;
        }

        if self.within_window(stick) {
            return *self.target * input_length;
        }

        let input_angle = angle_of(stick);
        let target_angle = angle_of(*self.target);
        let window_bottom = target_angle - self.angle_range;
        let window_top = target_angle + self.angle_range;

        // Stretch the outside of the window so its two edges both land on the target
        let new_angle = if input_angle > window_top {
            line_through(
                input_angle,
                (window_top, target_angle),
                (window_bottom + TAU, target_angle + TAU),
            )
        } else if input_angle < window_bottom {
            line_through(
                input_angle,
                (window_top - TAU, target_angle - TAU),
                (window_bottom, target_angle),
            )
        } else {
            target_angle
        };

        Vec2::from_angle(new_angle) * input_length
    }
}

impl Default for DirectionalAdjustment {
    /// Creates a [`DirectionalAdjustment`] snapping onto [`Dir2::X`]
    /// within [`DirectionalAdjustment::DEFAULT_ANGLE_RANGE`].
    #[inline]
    fn default() -> Self {
        Self::new(Dir2::X, Self::DEFAULT_ANGLE_RANGE)
    }
}

/// The angle of `v` in `[-π, π]`.
#[inline]
fn angle_of(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Brings the difference of two angles in `[-π, π]` back into `[-π, π]`.
#[inline]
fn wrap_angle(angle: f32) -> f32 {
    if angle > PI {
        angle - TAU
    } else if angle < -PI {
        angle + TAU
    } else {
        angle
    }
}

/// Evaluates the line through `p1` and `p2` at `x`.
#[inline]
fn line_through(x: f32, p1: (f32, f32), p2: (f32, f32)) -> f32 {
    (p2.1 - p1.1) / (p2.0 - p1.0) * (x - p1.0) + p1.1
}
