//! The registry of deadzone shaping algorithms
//!
//! Every algorithm is a pure function `(stick: Vec2, deadzone: f32) -> Vec2`.
//! [`DeadzoneAlgorithm`] names each of them and dispatches to the matching function.
//!
//! # Requirements
//!
//! The algorithms are defined for `deadzone` in `[0.0, 1.0)`.
//! Keeping the value in range is the job of [`DeadzoneBounds`](crate::settings::DeadzoneBounds),
//! the algorithms themselves do not check it.
//!
//! # Variants
//!
//! - Axial algorithms work on each coordinate independently: [`axial`], [`scaled_axial`],
//!     [`sloped_axial`] and [`sloped_scaled_axial`].
//! - Radial algorithms work on the magnitude of the whole vector: [`radial`] and [`scaled_radial`].
//! - Composite algorithms chain the ones above: [`hybrid`], [`cubic`] and [`cubic_root`].

use bevy::math::Vec2;
use bevy::prelude::Reflect;
use serde::{Deserialize, Serialize};

use crate::errors::UnknownDeadzoneAlgorithm;

pub use self::axial::*;
pub use self::composite::*;
pub use self::radial::*;

mod axial;
mod composite;
mod radial;

/// A named deadzone shaping algorithm.
///
/// Variants are listed in the order the demo cycles through them,
/// which is also the order of [`DeadzoneAlgorithm::ALL`].
///
/// ```rust
/// use bevy::math::Vec2;
/// use thumbstick_deadzones::prelude::*;
///
/// let stick = Vec2::new(0.1, 0.5);
///
/// assert_eq!(DeadzoneAlgorithm::None.apply(stick, 0.2), stick);
/// assert_eq!(DeadzoneAlgorithm::Axial.apply(stick, 0.2), Vec2::new(0.0, 0.5));
/// ```
#[must_use]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize,
)]
pub enum DeadzoneAlgorithm {
    /// Leaves the input untouched. See [`none`].
    #[default]
    None,

    /// Hard per-axis cutoff with a square dead region. See [`axial`].
    Axial,

    /// Hard cutoff on the magnitude, without rescaling. See [`radial`].
    Radial,

    /// Per-axis cutoff with each surviving axis rescaled. See [`scaled_axial`].
    ScaledAxial,

    /// Radial cutoff with the live zone rescaled to `[0, 1]`. See [`scaled_radial`].
    ScaledRadial,

    /// Per-axis cutoff whose threshold grows with the other axis. See [`sloped_axial`].
    SlopedAxial,

    /// [`DeadzoneAlgorithm::SlopedAxial`] with each surviving axis rescaled. See [`sloped_scaled_axial`].
    SlopedScaledAxial,

    /// Radial gate, then scaled radial, then sloped scaled axial. See [`hybrid`].
    Hybrid,

    /// Scaled radial with the output magnitude cubed. See [`cubic`].
    Cubic,

    /// Scaled radial with the output magnitude raised to `0.33`. See [`cubic_root`].
    CubicRoot,
}

impl DeadzoneAlgorithm {
    /// Every algorithm, in selection order.
    pub const ALL: [Self; 10] = [
        Self::None,
        Self::Axial,
        Self::Radial,
        Self::ScaledAxial,
        Self::ScaledRadial,
        Self::SlopedAxial,
        Self::SlopedScaledAxial,
        Self::Hybrid,
        Self::Cubic,
        Self::CubicRoot,
    ];

    /// The number of registered algorithms.
    pub const N_VARIANTS: usize = Self::ALL.len();

    /// Iterates over the algorithms in selection order.
    #[inline]
    pub fn variants() -> impl ExactSizeIterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Returns the algorithm stored at the provided index if it exists.
    #[must_use]
    #[inline]
    pub fn get_at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the algorithm at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeadzoneAlgorithm::Index`] if `index >= N_VARIANTS`.
    pub fn from_index(index: usize) -> Result<Self, UnknownDeadzoneAlgorithm> {
        Self::get_at(index).ok_or(UnknownDeadzoneAlgorithm::Index { index })
    }

    /// Returns the position of this algorithm in [`DeadzoneAlgorithm::ALL`].
    #[must_use]
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Applies this algorithm to the `stick` input using the given `deadzone`.
    #[must_use]
    #[inline]
    pub fn apply(&self, stick: Vec2, deadzone: f32) -> Vec2 {
        match self {
            Self::None => none(stick, deadzone),
            Self::Axial => axial(stick, deadzone),
            Self::Radial => radial(stick, deadzone),
            Self::ScaledAxial => scaled_axial(stick, deadzone),
            Self::ScaledRadial => scaled_radial(stick, deadzone),
            Self::SlopedAxial => sloped_axial(stick, deadzone),
            Self::SlopedScaledAxial => sloped_scaled_axial(stick, deadzone),
            Self::Hybrid => hybrid(stick, deadzone),
            Self::Cubic => cubic(stick, deadzone),
            Self::CubicRoot => cubic_root(stick, deadzone),
        }
    }

    /// Is the output of this algorithm continuous at the deadzone boundary?
    ///
    /// The unscaled variants jump from zero straight to the raw input value.
    #[must_use]
    #[inline]
    pub fn is_scaled(&self) -> bool {
        !matches!(self, Self::None | Self::Axial | Self::Radial | Self::SlopedAxial)
    }
}

/// Returns `stick` unchanged, ignoring the deadzone.
#[must_use]
#[inline]
pub fn none(stick: Vec2, _deadzone: f32) -> Vec2 {
    stick
}
