use log::{debug, info};
use rewarp_image::Image;

use super::canvas::resolve_canvas;
use super::command::{compile_transform, TransformCommand};
use super::resample::resample;
use crate::error::WarpError;
use crate::interpolation::InterpolationMode;
use crate::parallel::ExecutionStrategy;

/// Options for [`transform_image`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpOptions {
    /// The interpolation mode to use.
    pub interpolation: InterpolationMode,
    /// Value of destination pixels with no source data.
    pub background: u8,
    /// How destination rows are scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for WarpOptions {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMode::default(),
            background: 255,
            strategy: ExecutionStrategy::default(),
        }
    }
}

impl WarpOptions {
    /// Default options with the given interpolation mode.
    pub fn with_interpolation(interpolation: InterpolationMode) -> Self {
        Self {
            interpolation,
            ..Default::default()
        }
    }
}

/// Applies a list of transform commands to an image.
///
/// The commands are composed, the result is fitted onto a canvas that clips no source
/// pixel, and the canvas is filled by backward mapping through the inverse transform.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `commands` - The transform commands, applied in order.
/// * `options` - Interpolation, background and scheduling options.
///
/// # Returns
///
/// The destination image. Pixels with no source data hold `options.background`.
///
/// # Errors
///
/// * [`WarpError::EmptyImage`] if the source has no pixels.
/// * [`WarpError::SingularMatrix`] if the composed transform cannot be inverted.
///
/// # Example
///
/// ```
/// use rewarp_image::Image;
/// use rewarp_imgproc::interpolation::InterpolationMode;
/// use rewarp_imgproc::warp::{transform_image, TransformCommand, WarpOptions};
///
/// let src = Image::<u8>::new([2, 2].into(), vec![1, 2, 3, 4]).unwrap();
/// let dst = transform_image(
///     &src,
///     &[TransformCommand::scale(2.0, 2.0)],
///     &WarpOptions::with_interpolation(InterpolationMode::Nearest),
/// )
/// .unwrap();
///
/// assert_eq!(dst.size(), [3, 3].into());
/// ```
pub fn transform_image(
    src: &Image<u8>,
    commands: &[TransformCommand],
    options: &WarpOptions,
) -> Result<Image<u8>, WarpError> {
    let composed = compile_transform(commands);
    debug!("composed {} commands into {}", commands.len(), composed);

    let resolved = resolve_canvas(&composed, src.size())?;
    let inverse = resolved.matrix.inverse()?;

    let mut dst = Image::from_size_val(resolved.size, options.background)?;
    resample(
        src,
        &mut dst,
        &inverse,
        options.interpolation,
        options.strategy,
    )?;

    info!(
        "warped {} -> {} with {:?}",
        src.size(),
        dst.size(),
        options.interpolation
    );

    Ok(dst)
}
