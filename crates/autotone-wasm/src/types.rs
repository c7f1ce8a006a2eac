//! WASM-compatible wrapper type for image data.

use autotone_core::{Image, ImageError};
use wasm_bindgen::prelude::*;

/// An 8-bit image wrapper for JavaScript.
///
/// Holds interleaved samples with 1 (gray) or 3 (RGB) channels. The layout is
/// validated when the image is handed to an operation, not at construction,
/// so invalid input surfaces as a rejected promise rather than a panic.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` copies it into a
/// JavaScript `Uint8Array`.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions, channel count and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `channels` - Samples per pixel (1 or 3)
    /// * `pixels` - Interleaved pixel data, row-major order
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of samples per pixel
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsImage {
    /// Validate and convert to a core Image. Clones the pixel data.
    pub(crate) fn to_image(&self) -> Result<Image, ImageError> {
        Image::from_raw(self.width, self.height, self.channels, self.pixels.clone())
    }

    pub(crate) fn from_image(img: Image) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            channels: img.channels().count() as u8,
            pixels: img.into_pixels(),
        }
    }
}
