#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the warping pipeline.
pub mod error;

/// utilities for interpolation.
pub mod interpolation;

/// border padding of source images.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;

/// image geometric transformations module.
pub mod warp;

pub use crate::error::WarpError;
