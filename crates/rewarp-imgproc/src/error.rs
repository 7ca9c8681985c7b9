use rewarp_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the warping pipeline.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WarpError {
    /// The transform command tag is not one of `S`, `R` or `T`.
    #[error("Invalid transform command kind: {0:?}, expected one of \"S\", \"R\", \"T\"")]
    InvalidCommandKind(String),

    /// A transform script line does not have the `<KIND> <a> <b>` shape.
    #[error("Invalid transform command at line {line}: {content:?}")]
    InvalidCommandLine {
        /// 1-based line number in the script.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// A transform parameter could not be parsed as a number.
    #[error("Invalid transform parameter at line {line}: {value:?}")]
    InvalidParameter {
        /// 1-based line number in the script.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// The composed transform has no inverse.
    #[error("The transform matrix is singular (determinant {0})")]
    SingularMatrix(f32),

    /// The source image has no pixels.
    #[error("Cannot warp an empty image")]
    EmptyImage,

    /// The transformed image extends past any canvas that can be allocated.
    #[error("The transformed extent ({0}, {1}) does not fit in a canvas")]
    CanvasTooLarge(f32, f32),

    /// The 4x4 sampling window does not fit inside the source buffer.
    #[error("Sampling window at ({0}, {1}) falls outside the image ({2}, {3})")]
    OutOfRangeWindow(isize, isize, usize, usize),

    /// Error from the image container.
    #[error(transparent)]
    ImageError(#[from] ImageError),

    /// Error from the parallel executor.
    #[error(transparent)]
    ParallelError(#[from] ParallelError),
}
