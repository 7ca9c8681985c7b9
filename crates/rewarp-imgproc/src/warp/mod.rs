//! Geometric image transformations by backward mapping.
//!
//! This module turns a list of elementary transforms into a destination image:
//!
//! - [`compile_transform`] composes scale, rotation and translation commands
//! - [`resolve_canvas`] sizes the destination so that no source pixel is clipped
//! - [`resample`] fills the destination through the inverse transform
//! - [`transform_image`] runs the three steps in one call
//!
//! # Examples
//!
//! Rotating an image by 30 degrees about the origin:
//!
//! ```
//! use rewarp_image::Image;
//! use rewarp_imgproc::warp::{transform_image, TransformCommand, WarpOptions};
//!
//! let src = Image::<u8>::from_size_val([8, 8].into(), 0).unwrap();
//! let dst = transform_image(&src, &[TransformCommand::rotate(30.0)], &WarpOptions::default()).unwrap();
//!
//! assert!(dst.width() > 8);
//! ```

mod canvas;
mod command;
mod matrix;
mod pipeline;
mod resample;

pub use canvas::{corners, resolve_canvas, ResolvedTransform};
pub use command::{compile_transform, parse_transform_script, TransformCommand, TransformKind};
pub use matrix::AffineMatrix;
pub use pipeline::{transform_image, WarpOptions};
pub use resample::{resample, resample_bordered};
