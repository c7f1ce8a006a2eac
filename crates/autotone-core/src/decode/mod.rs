//! Image decoding for autotone.
//!
//! This module turns encoded files (PNG, JPEG) into in-memory [`Image`]s:
//! - Luma sources decode to single-channel images
//! - Every other color type decodes to 8-bit RGB (alpha is dropped)
//! - Higher bit depths are reduced to 8 bits
//!
//! # Examples
//!
//! ```ignore
//! use autotone_core::decode::load_image;
//!
//! let image = load_image("photo.jpg".as_ref()).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```
//!
//! [`Image`]: crate::raster::Image

mod reader;

pub use reader::{decode_image, load_image, DecodeError};
