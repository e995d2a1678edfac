//! The active deadzone configuration and the controller that steps it
//!
//! [`DeadzoneSettings`] is a plain value owned by the host.
//! Each frame it feeds the settings back into [`transform`],
//! and on discrete user events it replaces them with the result of
//! [`DeadzoneSettings::adjust_deadzone`] or [`DeadzoneSettings::select_algorithm`].

use bevy::log::{debug, warn};
use bevy::math::Vec2;
use bevy::prelude::{Reflect, Resource};
use serde::{Deserialize, Serialize};

use crate::deadzone::DeadzoneAlgorithm;
use crate::errors::{InvalidDeadzoneBounds, UnknownDeadzoneAlgorithm};

/// Applies the selected algorithm of `settings` to the raw `stick` input.
///
/// This is the per-frame entry point, called once for every polled stick sample.
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::prelude::*;
///
/// let settings = DeadzoneSettings::new(DeadzoneAlgorithm::Radial, 0.3);
///
/// assert_eq!(transform(Vec2::new(0.2, 0.2), &settings), Vec2::ZERO);
/// assert_eq!(transform(Vec2::new(0.5, 0.0), &settings), Vec2::new(0.5, 0.0));
/// ```
#[must_use]
#[inline]
pub fn transform(stick: Vec2, settings: &DeadzoneSettings) -> Vec2 {
    settings.algorithm.apply(stick, settings.deadzone)
}

/// Returns `current + delta`, clamped to the [default bounds](DeadzoneBounds::default) `[0.0, 0.6]`.
///
/// ```rust
/// use thumbstick_deadzones::prelude::*;
///
/// assert_eq!(adjust_deadzone(0.59, 0.05), 0.6);
/// assert_eq!(adjust_deadzone(0.0, -0.05), 0.0);
/// ```
#[must_use]
#[inline]
pub fn adjust_deadzone(current: f32, delta: f32) -> f32 {
    DeadzoneBounds::default().adjust(current, delta)
}

/// Returns `index + delta`, clamped to `[0, N_VARIANTS - 1]`.
///
/// Selection saturates at either end instead of wrapping around.
///
/// ```rust
/// use thumbstick_deadzones::prelude::*;
///
/// let last = DeadzoneAlgorithm::N_VARIANTS - 1;
///
/// assert_eq!(select_algorithm(0, -1), 0);
/// assert_eq!(select_algorithm(last, 1), last);
/// assert_eq!(select_algorithm(3, 2), 5);
/// ```
#[must_use]
pub fn select_algorithm(index: usize, delta: isize) -> usize {
    let last = DeadzoneAlgorithm::N_VARIANTS - 1;
    let selected = index.saturating_add_signed(delta).min(last);
    if index.checked_add_signed(delta) != Some(selected) {
        debug!("Algorithm selection saturated at index {selected}");
    }

    selected
}

/// The range the parameter controller keeps the deadzone in,
/// together with the step used by a single user event.
///
/// The defaults are `[0.0, 0.6]` with a step of `0.01`.
///
/// Deserialized bounds are validated like [`DeadzoneBounds::try_new`],
/// so a loaded config can't leave the deadzone without a live zone.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(try_from = "RawDeadzoneBounds")]
#[must_use]
pub struct DeadzoneBounds {
    /// The smallest allowed deadzone.
    pub(crate) min: f32,

    /// The largest allowed deadzone.
    pub(crate) max: f32,

    /// How far a single increase or decrease moves the deadzone.
    pub(crate) step: f32,
}

impl DeadzoneBounds {
    /// The default lower bound.
    pub const DEFAULT_MIN: f32 = 0.0;

    /// The default upper bound.
    pub const DEFAULT_MAX: f32 = 0.6;

    /// The default step of a single user event.
    pub const DEFAULT_STEP: f32 = 0.01;

    /// Creates a [`DeadzoneBounds`] restricting the deadzone to `[min, max]`,
    /// with the default step.
    ///
    /// # Requirements
    ///
    /// - `0.0` <= `min` <= `max` < `1.0`.
    ///
    /// # Panics
    ///
    /// Panics if the requirements aren't met.
    #[inline]
    pub fn new(min: f32, max: f32) -> Self {
        Self::try_new(min, max, Self::DEFAULT_STEP).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Creates a [`DeadzoneBounds`] restricting the deadzone to `[min, max]`,
    /// moving by `step` on each user event.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDeadzoneBounds`] unless `0.0` <= `min` <= `max` < `1.0` and `step` > `0.0`.
    /// NaN fails every check.
    pub fn try_new(min: f32, max: f32, step: f32) -> Result<Self, InvalidDeadzoneBounds> {
        if min.is_nan() || min < 0.0 {
            return Err(InvalidDeadzoneBounds::Negative { min });
        }
        if max.is_nan() || max >= 1.0 {
            return Err(InvalidDeadzoneBounds::NoLiveZone { max });
        }
        if min > max {
            return Err(InvalidDeadzoneBounds::Inverted { min, max });
        }
        if step.is_nan() || step <= 0.0 {
            return Err(InvalidDeadzoneBounds::NonPositiveStep { step });
        }

        Ok(Self { min, max, step })
    }

    /// Replaces the step used by a single user event.
    ///
    /// # Requirements
    ///
    /// - `step` > `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if the requirements aren't met.
    #[inline]
    pub fn with_step(self, step: f32) -> Self {
        Self::try_new(self.min, self.max, step).unwrap_or_else(|error| panic!("{error}"))
    }

    /// Returns the minimum and maximum bounds.
    #[must_use]
    #[inline]
    pub fn min_max(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Returns the step of a single user event.
    #[must_use]
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Is `deadzone` within the bounds?
    #[must_use]
    #[inline]
    pub fn contains(&self, deadzone: f32) -> bool {
        self.min <= deadzone && deadzone <= self.max
    }

    /// Clamps `deadzone` into the bounds.
    ///
    /// NaN has no place in the range and becomes the lower bound.
    #[must_use]
    #[inline]
    pub fn clamp(&self, deadzone: f32) -> f32 {
        if deadzone.is_nan() {
            self.min
        } else {
            deadzone.clamp(self.min, self.max)
        }
    }

    /// Returns `current + delta` clamped into the bounds.
    ///
    /// A non-finite `delta` is ignored and returns `current` unchanged.
    #[must_use]
    pub fn adjust(&self, current: f32, delta: f32) -> f32 {
        if !delta.is_finite() {
            debug!("Ignored non-finite deadzone delta {delta}");
            return current;
        }

        let target = current + delta;
        let adjusted = self.clamp(target);
        if adjusted != target {
            debug!("Deadzone saturated at {adjusted}");
        }

        adjusted
    }
}

impl Default for DeadzoneBounds {
    /// Creates a [`DeadzoneBounds`] restricting the deadzone to `[0.0, 0.6]` with a step of `0.01`.
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// The serialized shape of [`DeadzoneBounds`], before validation.
#[derive(Deserialize)]
#[serde(rename = "DeadzoneBounds")]
struct RawDeadzoneBounds {
    min: f32,
    max: f32,
    step: f32,
}

impl TryFrom<RawDeadzoneBounds> for DeadzoneBounds {
    type Error = InvalidDeadzoneBounds;

    fn try_from(raw: RawDeadzoneBounds) -> Result<Self, Self::Error> {
        Self::try_new(raw.min, raw.max, raw.step).inspect_err(|error| {
            warn!("Rejected deadzone bounds: {error}");
        })
    }
}

/// The currently selected algorithm and deadzone value.
///
/// Created once at startup and replaced only through
/// [`DeadzoneSettings::adjust_deadzone`] and [`DeadzoneSettings::select_algorithm`]
/// (or [`DeadzoneSettings::handle`], which calls them).
///
/// ```rust
/// use thumbstick_deadzones::prelude::*;
///
/// let settings = DeadzoneSettings::default()
///     .select_algorithm(4)
///     .adjust_deadzone(0.05);
///
/// assert_eq!(settings.algorithm(), DeadzoneAlgorithm::ScaledRadial);
/// assert!((settings.deadzone() - 0.25).abs() <= f32::EPSILON);
/// ```
///
/// Deserialized settings go through [`DeadzoneSettings::with_bounds`],
/// so a loaded deadzone is clamped like any other.
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Resource, Serialize, Deserialize)]
#[serde(from = "RawDeadzoneSettings")]
#[must_use]
pub struct DeadzoneSettings {
    /// The active algorithm.
    pub(crate) algorithm: DeadzoneAlgorithm,

    /// The active deadzone value, always within `bounds`.
    pub(crate) deadzone: f32,

    /// The range `deadzone` is kept in.
    pub(crate) bounds: DeadzoneBounds,
}

impl DeadzoneSettings {
    /// The starting deadzone of the demo.
    pub const DEFAULT_DEADZONE: f32 = 0.2;

    /// The starting deadzone used by later revisions of the demo.
    pub const LATER_DEFAULT_DEADZONE: f32 = 0.17;

    /// Creates [`DeadzoneSettings`] with the default bounds.
    ///
    /// `deadzone` is clamped into the bounds.
    #[inline]
    pub fn new(algorithm: DeadzoneAlgorithm, deadzone: f32) -> Self {
        Self::with_bounds(algorithm, deadzone, DeadzoneBounds::default())
    }

    /// Creates [`DeadzoneSettings`] with custom bounds.
    ///
    /// `deadzone` is clamped into `bounds`.
    #[inline]
    pub fn with_bounds(
        algorithm: DeadzoneAlgorithm,
        deadzone: f32,
        bounds: DeadzoneBounds,
    ) -> Self {
        Self {
            algorithm,
            deadzone: bounds.clamp(deadzone),
            bounds,
        }
    }

    /// Creates [`DeadzoneSettings`] starting at the algorithm with the given `index`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeadzoneAlgorithm::Index`] if no algorithm has that index.
    pub fn from_index(index: usize, deadzone: f32) -> Result<Self, UnknownDeadzoneAlgorithm> {
        let algorithm = DeadzoneAlgorithm::from_index(index).inspect_err(|error| {
            warn!("Rejected deadzone settings: {error}");
        })?;
        Ok(Self::new(algorithm, deadzone))
    }

    /// Returns the active algorithm.
    #[inline]
    pub fn algorithm(&self) -> DeadzoneAlgorithm {
        self.algorithm
    }

    /// Returns the active deadzone value.
    #[must_use]
    #[inline]
    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    /// Returns the bounds the deadzone is kept in.
    #[inline]
    pub fn bounds(&self) -> DeadzoneBounds {
        self.bounds
    }

    /// Applies the active algorithm to `stick`. See [`transform`].
    #[must_use]
    #[inline]
    pub fn transform(&self, stick: Vec2) -> Vec2 {
        transform(stick, self)
    }

    /// Returns settings with the deadzone moved by `delta`, clamped into the bounds.
    #[inline]
    pub fn adjust_deadzone(self, delta: f32) -> Self {
        Self {
            deadzone: self.bounds.adjust(self.deadzone, delta),
            ..self
        }
    }

    /// Returns settings with the deadzone moved by `steps` times the bounds step.
    #[inline]
    pub fn step_deadzone(self, steps: i32) -> Self {
        self.adjust_deadzone(steps as f32 * self.bounds.step)
    }

    /// Returns settings with the algorithm moved `delta` places through [`DeadzoneAlgorithm::ALL`],
    /// saturating at either end.
    #[inline]
    pub fn select_algorithm(self, delta: isize) -> Self {
        let algorithm = DeadzoneAlgorithm::ALL[select_algorithm(self.algorithm.index(), delta)];
        if algorithm != self.algorithm {
            debug!("Selected deadzone algorithm {algorithm}");
        }

        Self { algorithm, ..self }
    }

    /// Returns settings with `algorithm` selected.
    #[inline]
    pub fn with_algorithm(self, algorithm: DeadzoneAlgorithm) -> Self {
        Self { algorithm, ..self }
    }

    /// Returns settings with `deadzone` selected, clamped into the bounds.
    #[inline]
    pub fn with_deadzone(self, deadzone: f32) -> Self {
        Self {
            deadzone: self.bounds.clamp(deadzone),
            ..self
        }
    }
}

impl Default for DeadzoneSettings {
    /// Creates [`DeadzoneSettings`] starting at [`DeadzoneAlgorithm::None`]
    /// with a deadzone of [`DeadzoneSettings::DEFAULT_DEADZONE`].
    #[inline]
    fn default() -> Self {
        Self::new(DeadzoneAlgorithm::default(), Self::DEFAULT_DEADZONE)
    }
}

/// The serialized shape of [`DeadzoneSettings`], before clamping.
#[derive(Deserialize)]
#[serde(rename = "DeadzoneSettings")]
struct RawDeadzoneSettings {
    algorithm: DeadzoneAlgorithm,
    deadzone: f32,
    #[serde(default)]
    bounds: DeadzoneBounds,
}

impl From<RawDeadzoneSettings> for DeadzoneSettings {
    fn from(raw: RawDeadzoneSettings) -> Self {
        let settings = Self::with_bounds(raw.algorithm, raw.deadzone, raw.bounds);
        if settings.deadzone.to_bits() != raw.deadzone.to_bits() {
            warn!(
                "Loaded deadzone {} is outside {:?}, clamped to {}",
                raw.deadzone,
                raw.bounds.min_max(),
                settings.deadzone
            );
        }

        settings
    }
}
