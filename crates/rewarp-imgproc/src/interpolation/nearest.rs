use rewarp_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The value of the closest pixel, with the rounded indices clamped into the image.
pub(crate) fn nearest_neighbor_interpolation(image: &Image<u8>, u: f32, v: f32) -> f32 {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.round().max(0.0) as usize).min(cols - 1);
    let iv = (v.round().max(0.0) as usize).min(rows - 1);

    *image.get_unchecked(iu, iv) as f32
}

#[cfg(test)]
mod tests {
    use super::nearest_neighbor_interpolation;
    use rewarp_image::{Image, ImageError};

    #[test]
    fn nearest_rounds_half_away_from_zero() -> Result<(), ImageError> {
        let image = Image::<u8>::new([3, 1].into(), vec![10, 20, 30])?;
        assert_eq!(nearest_neighbor_interpolation(&image, 0.49, 0.0), 10.0);
        assert_eq!(nearest_neighbor_interpolation(&image, 0.5, 0.0), 20.0);
        assert_eq!(nearest_neighbor_interpolation(&image, 1.6, 0.2), 30.0);
        Ok(())
    }

    #[test]
    fn nearest_clamps_at_edges() -> Result<(), ImageError> {
        let image = Image::<u8>::new([2, 2].into(), vec![1, 2, 3, 4])?;
        assert_eq!(nearest_neighbor_interpolation(&image, -3.0, -1.0), 1.0);
        assert_eq!(nearest_neighbor_interpolation(&image, 7.0, 9.0), 4.0);
        Ok(())
    }
}
