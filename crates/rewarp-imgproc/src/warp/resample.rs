use rewarp_image::Image;

use super::matrix::AffineMatrix;
use crate::error::WarpError;
use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::padding::{pad_replicate, BorderedImage};
use crate::parallel::{self, ExecutionStrategy};

/// Fills `dst` by backward-mapping each of its pixels into `src`.
///
/// The source is padded by [`InterpolationMode::border`] replicated pixels before sampling,
/// so the bicubic window never leaves the buffer for in-bounds samples. Destination pixels
/// with no source data keep their current value.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image, pre-filled with the background value.
/// * `inverse` - The destination to source transform.
/// * `interpolation` - The interpolation mode to use.
/// * `strategy` - How destination rows are scheduled.
///
/// # Example
///
/// ```
/// use rewarp_image::Image;
/// use rewarp_imgproc::interpolation::InterpolationMode;
/// use rewarp_imgproc::parallel::ExecutionStrategy;
/// use rewarp_imgproc::warp::{resample, AffineMatrix};
///
/// let src = Image::<u8>::new([2, 1].into(), vec![10, 20]).unwrap();
/// let mut dst = Image::<u8>::from_size_val([3, 1].into(), 255).unwrap();
///
/// let inverse = AffineMatrix::from_translation(1.0, 0.0).inverse().unwrap();
/// resample(&src, &mut dst, &inverse, InterpolationMode::Nearest, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(dst.as_slice(), &[255, 10, 20]);
/// ```
pub fn resample(
    src: &Image<u8>,
    dst: &mut Image<u8>,
    inverse: &AffineMatrix,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<(), WarpError> {
    let src = pad_replicate(src, interpolation.border())?;
    resample_bordered(&src, dst, inverse, interpolation, strategy)
}

/// Fills `dst` by backward-mapping each of its pixels into an already bordered source.
///
/// The rounded source coordinate is checked against the logical (unpadded) size. Kernels
/// are evaluated at the padded coordinate. A kernel whose window does not fit the buffer
/// leaves the destination pixel untouched.
pub fn resample_bordered(
    src: &BorderedImage,
    dst: &mut Image<u8>,
    inverse: &AffineMatrix,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<(), WarpError> {
    let logical = src.logical_size();
    if logical.is_empty() {
        return Ok(());
    }

    let (max_x, max_y) = (logical.width as f32, logical.height as f32);
    let border = src.border() as f32;
    let image = src.image();

    parallel::par_iter_rows_indexed(dst, strategy, |x, y, dst_pixel| {
        let (u, v) = inverse.transform_point(x as f32, y as f32);

        let (ru, rv) = (u.round(), v.round());
        if !(ru >= 0.0 && ru < max_x && rv >= 0.0 && rv < max_y) {
            return;
        }

        if let Ok(val) = interpolate_pixel(image, u + border, v + border, interpolation) {
            *dst_pixel = val.clamp(0.0, 255.0).round() as u8;
        }
    })?;

    Ok(())
}
