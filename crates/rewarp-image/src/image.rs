use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use rewarp_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by the size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Number of pixels covered by the size, or `None` if it cannot be allocated.
    pub fn checked_area(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .filter(|&area| area <= isize::MAX as usize)
    }

    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Represents a single-channel image with pixel data.
///
/// The pixels are stored contiguously in row-major order, so the sample at column `x`
/// and row `y` lives at index `y * width + x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rewarp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let area = size
            .checked_area()
            .ok_or(ImageError::ImageSizeOverflow(size.width, size.height))?;
        if data.len() != area {
            return Err(ImageError::InvalidDataLength(data.len(), area));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and every pixel set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rewarp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::from_size_val([3, 2].into(), 255).unwrap();
    ///
    /// assert_eq!(image.as_slice(), &[255u8; 6]);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let area = size
            .checked_area()
            .ok_or(ImageError::ImageSizeOverflow(size.width, size.height))?;
        Image::new(size, vec![val; area])
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the pixel data as a slice in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable slice in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the pixel at column `x` and row `y`, if it exists.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.data.get(y * self.width() + x)
    }

    /// Get the pixel at column `x` and row `y` without bounds checks on the coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the linear index falls outside the pixel buffer.
    #[inline]
    pub fn get_unchecked(&self, x: usize, y: usize) -> &T {
        &self.data[y * self.size.width + x]
    }

    /// Get the pixel value at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are outside the image, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<T, ImageError>
    where
        T: Copy,
    {
        self.get(x, y).copied().ok_or(ImageError::PixelIndexOutOfBounds(
            x,
            y,
            self.width(),
            self.height(),
        ))
    }

    /// Set the pixel value at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are outside the image, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, val: T) -> Result<(), ImageError> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(ImageError::PixelIndexOutOfBounds(x, y, width, height));
        }
        self.data[y * width + x] = val;
        Ok(())
    }

    /// Iterate over the rows of the image.
    pub fn rows_iter(&self) -> std::slice::ChunksExact<'_, T> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.size.width.max(1))
    }
}
