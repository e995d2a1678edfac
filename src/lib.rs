#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod control;
pub mod deadzone;
pub mod directional;
mod display_impl;
pub mod errors;
pub mod preview;
pub mod settings;
pub mod vector_math;

/// Everything you need to get started
pub mod prelude {
    pub use crate::control::{ControlEvent, HoldRepeat};
    pub use crate::deadzone::DeadzoneAlgorithm;
    pub use crate::directional::DirectionalAdjustment;
    pub use crate::errors::{
        InvalidDeadzoneBounds, NearlySingularConversion, UnknownDeadzoneAlgorithm,
    };
    pub use crate::preview::{DeadzonePreview, PreviewImage, PreviewMode};
    pub use crate::settings::{
        adjust_deadzone, select_algorithm, transform, DeadzoneBounds, DeadzoneSettings,
    };
    pub use crate::vector_math::stick_heading;
}
