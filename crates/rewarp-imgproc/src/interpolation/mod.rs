//! Pixel interpolation methods for backward-mapped resampling.
//!
//! # Interpolation Modes
//!
//! - **Nearest**: Fastest, uses the nearest pixel value (no interpolation)
//! - **Bilinear**: Linear blend of the four adjacent pixels
//! - **Bicubic**: Keys cubic convolution (`a = -0.5`) over a 4x4 window
//! - **BicubicQuadrant**: Bicubic with the weights quantized to four precomputed tables
//!
//! The bicubic modes need two replicated border pixels on each side of the source, see
//! [`InterpolationMode::border`].

mod bicubic;
mod bilinear;
pub(crate) mod interpolate;
mod nearest;

pub use bicubic::{cubic_weight, quadrant_weights, weight_matrix, Quadrant, Weights4x4};
pub use interpolate::{interpolate_pixel, InterpolationMode};
