use std::path::Path;

use log::debug;
use rewarp_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit grayscale.
///
/// The method reads any image format supported by the image crate and converts color
/// images to luma.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A single-channel image containing the luma data.
pub fn read_image_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()?;
    debug!("decoded {:?} as {:?}", file_path, img.color());

    let gray = img.into_luma8();
    let size = ImageSize {
        width: gray.width() as usize,
        height: gray.height() as usize,
    };

    Ok(Image::new(size, gray.into_raw())?)
}

/// Writes a grayscale image to the given file path.
///
/// The output format is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path of the output file.
/// * `image` - The image to write.
pub fn write_image_gray8(file_path: impl AsRef<Path>, image: &Image<u8>) -> Result<(), IoError> {
    let size = image.size();
    let buffer =
        image::GrayImage::from_raw(size.width as u32, size.height as u32, image.as_slice().to_vec())
            .ok_or(IoError::InvalidImageBuffer(size))?;

    buffer.save(file_path.as_ref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::create_dir_all;

    #[test]
    fn read_missing_file() {
        let res = read_image_gray8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_write_png_gray8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        create_dir_all(tmp_dir.path())?;

        let file_path = tmp_dir.path().join("ramp.png");
        let image = Image::<u8>::new([5, 3].into(), (0..15).map(|x| x * 17).collect())?;
        write_image_gray8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_gray8(&file_path)?;
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_rgb_as_luma() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gray-rgb.png");

        // equal channels keep their value under the luma conversion
        let rgb = image::RgbImage::from_pixel(4, 2, image::Rgb([90, 90, 90]));
        rgb.save(&file_path)?;

        let image = read_image_gray8(&file_path)?;
        assert_eq!(image.size(), [4, 2].into());
        assert!(image.as_slice().iter().all(|&v| v == 90));

        Ok(())
    }
}
