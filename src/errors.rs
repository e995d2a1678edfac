//! Errors that may occur when selecting or applying deadzones

use derive_more::{Display, Error};

/// The supplied stick vector was too close to zero to be converted into a heading
///
/// This error is produced by [`stick_heading`](crate::vector_math::stick_heading)
/// for the zero vector, which has no direction.
///
/// In almost all cases, the correct way to handle this error is to simply not change the heading.
#[derive(Debug, Clone, Copy, Error, Display, PartialEq, Eq)]
pub struct NearlySingularConversion;

/// A [`DeadzoneAlgorithm`](crate::deadzone::DeadzoneAlgorithm) was requested that is not part of the registry
///
/// Selection never falls back to [`DeadzoneAlgorithm::None`](crate::deadzone::DeadzoneAlgorithm::None):
/// showing a different algorithm than the one asked for would make the comparison misleading.
#[derive(Debug, Clone, PartialEq, Eq, Error, Display)]
pub enum UnknownDeadzoneAlgorithm {
    /// The index is past the end of [`DeadzoneAlgorithm::ALL`](crate::deadzone::DeadzoneAlgorithm::ALL).
    #[display(fmt = "no deadzone algorithm at index {index}")]
    Index {
        /// The requested index
        #[error(not(source))]
        index: usize,
    },

    /// No algorithm has this name.
    #[display(fmt = "no deadzone algorithm named {name:?}")]
    Name {
        /// The requested name
        #[error(not(source))]
        name: String,
    },
}

/// A [`DeadzoneBounds`](crate::settings::DeadzoneBounds) would leave the deadzone without a valid range
///
/// Produced when loading bounds through serde, and turned into a panic by
/// [`DeadzoneBounds::new`](crate::settings::DeadzoneBounds::new) and
/// [`DeadzoneBounds::with_step`](crate::settings::DeadzoneBounds::with_step).
#[derive(Debug, Clone, Copy, PartialEq, Error, Display)]
pub enum InvalidDeadzoneBounds {
    /// The lower bound is negative (or NaN).
    #[display(fmt = "deadzone bounds must not be negative, got a minimum of {min}")]
    Negative {
        /// The requested lower bound
        #[error(not(source))]
        min: f32,
    },

    /// The lower bound is above the upper bound.
    #[display(fmt = "deadzone bounds are inverted: {min} > {max}")]
    Inverted {
        /// The requested lower bound
        min: f32,
        /// The requested upper bound
        max: f32,
    },

    /// The upper bound leaves no live zone.
    #[display(fmt = "deadzone bounds must stay below 1.0, got a maximum of {max}")]
    NoLiveZone {
        /// The requested upper bound
        #[error(not(source))]
        max: f32,
    },

    /// The step is zero, negative or NaN.
    #[display(fmt = "deadzone step must be positive, got {step}")]
    NonPositiveStep {
        /// The requested step
        #[error(not(source))]
        step: f32,
    },
}
