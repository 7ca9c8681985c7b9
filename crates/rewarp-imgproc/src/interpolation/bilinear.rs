use rewarp_image::Image;

/// Kernel for bilinear interpolation
///
/// The four neighbours are `(top, left)`, `(top, right)`, `(bottom, left)` and
/// `(bottom, right)`. Neighbour selection is clamped at the image edges, so the kernel never
/// reads index `-1` or `size`.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value.
pub(crate) fn bilinear_interpolation(image: &Image<u8>, u: f32, v: f32) -> f32 {
    let (rows, cols) = (image.rows(), image.cols());

    let u = u.clamp(0.0, (cols - 1) as f32);
    let v = v.clamp(0.0, (rows - 1) as f32);

    let left = (u.floor() as usize).min(cols - 1);
    let top = (v.floor() as usize).min(rows - 1);
    let right = if left + 1 < cols { left + 1 } else { left };
    let bottom = if top + 1 < rows { top + 1 } else { top };

    let w = u - left as f32;
    let h = v - top as f32;

    let px = |x: usize, y: usize| *image.get_unchecked(x, y) as f32;

    let intensity_top = (1.0 - w) * px(left, top) + w * px(right, top);
    let intensity_bottom = (1.0 - w) * px(left, bottom) + w * px(right, bottom);

    (1.0 - h) * intensity_top + h * intensity_bottom
}
