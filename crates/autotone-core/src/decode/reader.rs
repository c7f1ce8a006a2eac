//! Format-sniffing decoder built on the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};
use thiserror::Error;

use crate::raster::Image;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Decode an image from encoded bytes, guessing the format from its content.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be determined,
/// and `DecodeError::CorruptedFile` if the data fails to decode.
pub fn decode_image(bytes: &[u8]) -> Result<Image, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(into_image(img))
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<Image, DecodeError> {
    let bytes = std::fs::read(path).map_err(|e| DecodeError::IoError(e.to_string()))?;
    decode_image(&bytes)
}

/// Narrow a decoded image to one of the two supported 8-bit layouts.
fn into_image(img: DynamicImage) -> Image {
    if img.color().has_color() {
        Image::from_rgb_image(img.into_rgb8())
    } else {
        Image::from_gray_image(img.into_luma8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_png;
    use crate::raster::Channels;

    #[test]
    fn test_decode_gray_png() {
        let src = Image::new(3, 2, Channels::Gray, vec![0, 50, 100, 150, 200, 250]).unwrap();
        let png = encode_png(&src).unwrap();
        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded, src);
    }

    #[test]
    fn test_decode_rgb_png() {
        let src = Image::new(2, 1, Channels::Rgb, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let png = encode_png(&src).unwrap();
        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded.channels(), Channels::Rgb);
        assert_eq!(decoded.pixels(), src.pixels());
    }

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let rgba = image::RgbaImage::from_raw(1, 1, vec![10, 20, 30, 40]).unwrap();
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.channels(), Channels::Rgb);
        assert_eq!(decoded.pixels(), &[10, 20, 30]);
    }

    #[test]
    fn test_decode_invalid_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_image(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_png() {
        let src = Image::filled(8, 8, Channels::Gray, 7);
        let png = encode_png(&src).unwrap();
        let result = decode_image(&png[..png.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("/nonexistent/autotone/input.png"));
        assert!(matches!(result, Err(DecodeError::IoError(_))));
    }
}
