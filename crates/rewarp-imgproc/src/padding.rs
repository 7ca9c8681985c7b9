use rewarp_image::{Image, ImageError, ImageSize};

/// An image surrounded by a border of replicated edge pixels.
///
/// The logical image starts at `(border, border)` inside the padded buffer. Bounds checks
/// use [`BorderedImage::logical_size`] while kernels index the padded buffer.
#[derive(Debug, Clone)]
pub struct BorderedImage {
    image: Image<u8>,
    border: usize,
}

impl BorderedImage {
    /// Wraps an image that carries no border.
    pub fn unpadded(image: Image<u8>) -> Self {
        Self { image, border: 0 }
    }

    /// The padded pixel buffer.
    pub fn image(&self) -> &Image<u8> {
        &self.image
    }

    /// Width of the replicated border on every side.
    pub fn border(&self) -> usize {
        self.border
    }

    /// Size of the image without the border.
    pub fn logical_size(&self) -> ImageSize {
        ImageSize {
            width: self.image.width() - 2 * self.border,
            height: self.image.height() - 2 * self.border,
        }
    }
}

/// Clamps `i` into `[0, len)`, repeating the outermost pixel.
#[inline]
fn replicate_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Pads an image by replicating its edge rows and columns `border` times outward.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `border` - The number of pixels added on each side.
///
/// # Returns
///
/// The padded image of size `(width + 2 * border, height + 2 * border)`.
///
/// # Example
///
/// ```
/// use rewarp_image::Image;
/// use rewarp_imgproc::padding::pad_replicate;
///
/// let image = Image::<u8>::new([2, 1].into(), vec![1, 2]).unwrap();
/// let padded = pad_replicate(&image, 1).unwrap();
///
/// assert_eq!(padded.image().as_slice(), &[1, 1, 2, 2, 1, 1, 2, 2, 1, 1, 2, 2]);
/// assert_eq!(padded.logical_size(), image.size());
/// ```
pub fn pad_replicate(src: &Image<u8>, border: usize) -> Result<BorderedImage, ImageError> {
    if border == 0 || src.size().is_empty() {
        return Ok(BorderedImage::unpadded(src.clone()));
    }

    let (old_width, old_height) = (src.width(), src.height());
    let new_size = ImageSize {
        width: old_width + 2 * border,
        height: old_height + 2 * border,
    };

    let mut data = Vec::with_capacity(new_size.area());
    for y in 0..new_size.height {
        let src_y = replicate_index(y as isize - border as isize, old_height);
        data.extend((0..new_size.width).map(|x| {
            let src_x = replicate_index(x as isize - border as isize, old_width);
            *src.get_unchecked(src_x, src_y)
        }));
    }

    Ok(BorderedImage {
        image: Image::new(new_size, data)?,
        border,
    })
}
