use log::debug;
use rewarp_image::ImageSize;

use super::matrix::AffineMatrix;
use crate::error::WarpError;

/// A composed transform fitted onto a destination canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTransform {
    /// The composed matrix with the translation correction applied.
    pub matrix: AffineMatrix,
    /// Translation added so that no mapped corner lands at a negative coordinate.
    pub offset: (f32, f32),
    /// Size of the destination canvas.
    pub size: ImageSize,
}

/// The four corner pixels of an image of the given size.
pub fn corners(size: ImageSize) -> [(f32, f32); 4] {
    let (x1, y1) = (
        size.width.saturating_sub(1) as f32,
        size.height.saturating_sub(1) as f32,
    );
    [(0.0, 0.0), (x1, 0.0), (0.0, y1), (x1, y1)]
}

// the largest corner index becomes a pixel count; f32 casts saturate, so bound it first
fn canvas_extent(max: f32, source: usize) -> Option<usize> {
    if !max.is_finite() || max >= usize::MAX as f32 {
        return None;
    }
    (max.max(0.0) as usize)
        .checked_add(1)
        .map(|extent| extent.max(source))
}

fn mapped_corners(matrix: &AffineMatrix, size: ImageSize) -> [(f32, f32); 4] {
    corners(size).map(|(x, y)| matrix.transform_point(x, y))
}

/// Fits the transformed image onto a canvas so that no source pixel is clipped.
///
/// The corners are mapped through `matrix`. If the rounded minimum x or y is negative, the
/// matrix is shifted by its magnitude. The canvas is then sized to contain both the source
/// footprint and the rounded maximum corner. Rounding is half away from zero throughout.
///
/// # Arguments
///
/// * `matrix` - The composed transform from source to destination coordinates.
/// * `source` - The size of the source image.
///
/// # Errors
///
/// * [`WarpError::EmptyImage`] if the source has no pixels.
/// * [`WarpError::CanvasTooLarge`] if a mapped corner is not finite or the canvas cannot be
///   allocated.
///
/// # Example
///
/// ```
/// use rewarp_imgproc::warp::{resolve_canvas, AffineMatrix};
///
/// let resolved = resolve_canvas(&AffineMatrix::from_translation(-2.0, 1.0), [4, 4].into()).unwrap();
///
/// assert_eq!(resolved.offset, (2.0, 0.0));
/// assert_eq!(resolved.size, [4, 5].into());
/// ```
pub fn resolve_canvas(
    matrix: &AffineMatrix,
    source: ImageSize,
) -> Result<ResolvedTransform, WarpError> {
    if source.is_empty() {
        return Err(WarpError::EmptyImage);
    }

    let mapped = mapped_corners(matrix, source);
    let min_x = mapped.iter().map(|p| p.0).fold(f32::INFINITY, f32::min).round();
    let min_y = mapped.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).round();
    if !(min_x.is_finite() && min_y.is_finite()) {
        return Err(WarpError::CanvasTooLarge(min_x, min_y));
    }

    let offset = (
        if min_x < 0.0 { -min_x } else { 0.0 },
        if min_y < 0.0 { -min_y } else { 0.0 },
    );

    let matrix = if offset != (0.0, 0.0) {
        matrix.then(&AffineMatrix::from_translation(offset.0, offset.1))
    } else {
        *matrix
    };

    let mapped = mapped_corners(&matrix, source);
    let max_x = mapped
        .iter()
        .map(|p| p.0)
        .fold(f32::NEG_INFINITY, f32::max)
        .round();
    let max_y = mapped
        .iter()
        .map(|p| p.1)
        .fold(f32::NEG_INFINITY, f32::max)
        .round();

    let too_large = || WarpError::CanvasTooLarge(max_x, max_y);
    let size = ImageSize {
        width: canvas_extent(max_x, source.width).ok_or_else(too_large)?,
        height: canvas_extent(max_y, source.height).ok_or_else(too_large)?,
    };
    if size.checked_area().is_none() {
        return Err(too_large());
    }

    debug!("canvas offset ({}, {}), size {}", offset.0, offset.1, size);

    Ok(ResolvedTransform {
        matrix,
        offset,
        size,
    })
}
