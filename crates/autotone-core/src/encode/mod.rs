//! Image encoding for autotone.
//!
//! This module provides functionality for:
//! - Encoding images to PNG (lossless, preferred for diagnostics)
//! - Encoding images to JPEG format with configurable quality
//! - Saving to a path, choosing the format from the file extension
//!
//! Both grayscale and RGB images are written in their native layout.

mod writer;

pub use writer::{encode_jpeg, encode_png, save_image, EncodeError, DEFAULT_JPEG_QUALITY};
