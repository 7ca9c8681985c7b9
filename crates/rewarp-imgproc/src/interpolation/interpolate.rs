use super::bicubic::bicubic_interpolation;
use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use crate::error::WarpError;
use rewarp_image::Image;

/// Interpolation mode for the resampling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Bicubic convolution with exact per-sample weights
    Bicubic,
    /// Bicubic convolution with the four memoized quadrant weight tables
    BicubicQuadrant,
}

impl InterpolationMode {
    /// Number of replicated pixels the source needs on every side for this mode.
    pub fn border(&self) -> usize {
        match self {
            InterpolationMode::Nearest | InterpolationMode::Bilinear => 0,
            InterpolationMode::Bicubic | InterpolationMode::BicubicQuadrant => 2,
        }
    }
}

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Returns
///
/// The interpolated pixel value. It is not clamped and can overshoot `[0, 255]`.
///
/// # Errors
///
/// * [`WarpError::EmptyImage`] if `image` has no pixels.
/// * [`WarpError::OutOfRangeWindow`] from the bicubic modes when the 4x4 window does not fit
///   inside `image`.
pub fn interpolate_pixel(
    image: &Image<u8>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
) -> Result<f32, WarpError> {
    if image.size().is_empty() {
        return Err(WarpError::EmptyImage);
    }

    match interpolation {
        InterpolationMode::Nearest => Ok(nearest_neighbor_interpolation(image, u, v)),
        InterpolationMode::Bilinear => Ok(bilinear_interpolation(image, u, v)),
        InterpolationMode::Bicubic => bicubic_interpolation(image, u, v, false),
        InterpolationMode::BicubicQuadrant => bicubic_interpolation(image, u, v, true),
    }
}
