//! Pictures of what a deadzone does to the whole stick range
//!
//! A [`DeadzonePreview`] samples the unit disk on a square grid,
//! runs every sample through a deadzone, and turns the output into a pixel.
//! Writing the pixels anywhere is up to the caller.

use bevy::math::Vec2;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

use crate::deadzone::DeadzoneAlgorithm;
use crate::settings::DeadzoneSettings;
use crate::vector_math::{magnitude, map_range};

/// How an output vector is turned into a color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreviewMode {
    /// The output magnitude, as a gray level.
    Gray,

    /// The absolute X output in the red channel and the absolute Y output in the blue channel.
    #[default]
    Rgb,
}

impl PreviewMode {
    /// The color of a single output vector.
    #[must_use]
    pub fn color(&self, output: Vec2) -> [u8; 3] {
        match self {
            Self::Gray => {
                let level = to_channel(magnitude(output));
                [level, level, level]
            }
            Self::Rgb => [to_channel(output.x.abs()), 0, to_channel(output.y.abs())],
        }
    }
}

/// Samples a deadzone function over the unit disk.
///
/// ```rust
/// use thumbstick_deadzones::prelude::*;
///
/// let preview = DeadzonePreview::new(64, 64);
/// let image = preview.render_algorithm(DeadzoneAlgorithm::Radial, 0.3);
///
/// // The center is inside the deadzone
/// assert_eq!(image.pixel(32, 32), [0, 0, 0]);
///
/// // Samples on the X axis near the rim are bright red
/// assert!(image.pixel(60, 32)[0] > 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct DeadzonePreview {
    /// Number of pixel columns.
    pub(crate) width: usize,

    /// Number of pixel rows.
    pub(crate) height: usize,

    /// How outputs are colored.
    pub(crate) mode: PreviewMode,
}

impl DeadzonePreview {
    /// Creates an RGB [`DeadzonePreview`] of the given size.
    ///
    /// # Requirements
    ///
    /// - `width` > `0` and `height` > `0`.
    ///
    /// # Panics
    ///
    /// Panics if the requirements aren't met.
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "preview must not be empty");
        Self {
            width,
            height,
            mode: PreviewMode::default(),
        }
    }

    /// Returns a preview with the given coloring.
    #[inline]
    pub fn with_mode(self, mode: PreviewMode) -> Self {
        Self { mode, ..self }
    }

    /// The stick input sampled at pixel column `x` and row `y`.
    ///
    /// The center of the image is the resting position, and the scale is set by the height,
    /// so a square image exactly fits the unit disk. Row `0` is `-1.0` on the Y axis.
    #[must_use]
    pub fn sample_at(&self, x: usize, y: usize) -> Vec2 {
        let half_width = self.width as f32 / 2.0;
        let half_height = self.height as f32 / 2.0;
        Vec2::new(x as f32 - half_width, y as f32 - half_height) / half_height
    }

    /// Runs every sample inside the unit disk through `deadzone` and colors the result.
    ///
    /// Samples outside the disk are black.
    pub fn render(&self, deadzone: impl Fn(Vec2) -> Vec2) -> PreviewImage {
        let pixels = iproduct!(0..self.height, 0..self.width)
            .map(|(y, x)| {
                let sample = self.sample_at(x, y);
                if magnitude(sample) > 1.0 {
                    [0, 0, 0]
                } else {
                    self.mode.color(deadzone(sample))
                }
            })
            .collect();

        PreviewImage {
            width: self.width,
            height: self.height,
            pixels,
        }
    }

    /// Renders `algorithm` with the given `deadzone`.
    pub fn render_algorithm(&self, algorithm: DeadzoneAlgorithm, deadzone: f32) -> PreviewImage {
        self.render(|stick| algorithm.apply(stick, deadzone))
    }

    /// Renders the active algorithm of `settings`.
    pub fn render_settings(&self, settings: &DeadzoneSettings) -> PreviewImage {
        self.render(|stick| settings.transform(stick))
    }
}

impl Default for DeadzonePreview {
    /// Creates an RGB [`DeadzonePreview`] of 400 by 400 pixels.
    #[inline]
    fn default() -> Self {
        Self::new(400, 400)
    }
}

/// Row-major RGB pixels produced by [`DeadzonePreview`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl PreviewImage {
    /// Number of pixel columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of pixel rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[must_use]
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y * self.width + x]
    }

    /// All pixels, row by row.
    #[must_use]
    #[inline]
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// All pixels as a flat `RGBRGB...` buffer, ready for an image encoder.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

#[inline]
fn to_channel(value: f32) -> u8 {
    map_range(value, 0.0, 1.0, 0.0, 255.0).clamp(0.0, 255.0) as u8
}
