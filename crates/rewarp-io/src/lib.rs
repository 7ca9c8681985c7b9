#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access, decoding failures and malformed
/// transform scripts.
pub mod error;

/// High-level grayscale image reading and writing functions.
///
/// See [`functional::read_image_gray8`] for automatic format detection.
pub mod functional;

/// Transform script loading.
pub mod script;

pub use crate::error::IoError;
