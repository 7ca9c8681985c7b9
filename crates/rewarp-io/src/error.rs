/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] rewarp_image::ImageError),

    /// Error to decode or encode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// The pixel buffer does not fit the encoder.
    #[error("Image of size {0} does not fit the encoder")]
    InvalidImageBuffer(rewarp_image::ImageSize),

    /// Error to parse the transform script.
    #[error("Failed to parse the transform script {0}. {1}")]
    TransformScriptError(std::path::PathBuf, rewarp_imgproc::WarpError),
}
