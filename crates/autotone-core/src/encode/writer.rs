//! PNG and JPEG encoders.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::raster::{Channels, Image};

/// JPEG quality used when saving by extension.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// I/O error while writing the output file
    #[error("I/O error: {0}")]
    IoError(String),
}

fn color_type(channels: Channels) -> ExtendedColorType {
    match channels {
        Channels::Gray => ExtendedColorType::L8,
        Channels::Rgb => ExtendedColorType::Rgb8,
    }
}

fn check_dimensions(image: &Image) -> Result<(), EncodeError> {
    if image.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &Image) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(image)?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            color_type(image.channels()),
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode an image as JPEG bytes.
///
/// `quality` is clamped to 1-100.
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(image)?;

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            color_type(image.channels()),
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Save an image, choosing the format from the file extension.
///
/// `.jpg`/`.jpeg` are written as JPEG, everything else as PNG.
pub fn save_image(image: &Image, path: &Path) -> Result<(), EncodeError> {
    let bytes = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => encode_jpeg(image, DEFAULT_JPEG_QUALITY)?,
        _ => encode_png(image)?,
    };
    std::fs::write(path, bytes).map_err(|e| EncodeError::IoError(e.to_string()))
}
