//! In-memory 8-bit image model.
//!
//! Images are interleaved, row-major buffers of unsigned 8-bit samples with
//! either one (grayscale) or three (RGB) channels per pixel. Every tone
//! operator in this crate takes an [`Image`] and is therefore total over its
//! input: an illegal channel count is rejected once, at construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::luminance::gray_from_rgb_u8;

/// Error types for image construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// Only 1-channel and 3-channel 8-bit images are supported.
    #[error("Unsupported channel count: {0} (expected 1 or 3)")]
    UnsupportedChannels(u8),

    /// Pixel buffer length doesn't match width * height * channels.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Number of interleaved samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Channels {
    /// Single luminance channel.
    Gray,
    /// Red, green, blue.
    #[default]
    Rgb,
}

impl Channels {
    /// Map a raw channel count to a supported layout.
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Channels::Gray),
            3 => Some(Channels::Rgb),
            _ => None,
        }
    }

    /// Samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// An 8-bit image with 1 or 3 interleaved channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: Channels,
    pixels: Vec<u8>,
}

impl Image {
    /// Create an image, checking the buffer length against the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        channels: Channels,
        pixels: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * channels.count();
        if pixels.len() != expected {
            return Err(ImageError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    /// Create an image from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::UnsupportedChannels` for any count other than 1 or 3,
    /// and `ImageError::BufferSizeMismatch` if the buffer has the wrong length.
    pub fn from_raw(
        width: u32,
        height: u32,
        channel_count: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let channels =
            Channels::from_count(channel_count).ok_or(ImageError::UnsupportedChannels(channel_count))?;
        Self::new(width, height, channels, pixels)
    }

    /// Create an image with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: Channels, value: u8) -> Self {
        let len = width as usize * height as usize * channels.count();
        Self {
            width,
            height,
            channels,
            pixels: vec![value; len],
        }
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Interleaved sample data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable interleaved sample data. The length cannot change.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the image and return its sample buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert to a single-channel image using BT.601 weights.
    ///
    /// Grayscale images are returned unchanged.
    pub fn to_gray(&self) -> Image {
        match self.channels {
            Channels::Gray => self.clone(),
            Channels::Rgb => {
                let pixels = self
                    .pixels
                    .chunks_exact(3)
                    .map(|px| gray_from_rgb_u8(px[0], px[1], px[2]))
                    .collect();
                Image {
                    width: self.width,
                    height: self.height,
                    channels: Channels::Gray,
                    pixels,
                }
            }
        }
    }

    /// Create a grayscale image from an `image::GrayImage`.
    pub fn from_gray_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: Channels::Gray,
            pixels: img.into_raw(),
        }
    }

    /// Create an RGB image from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: Channels::Rgb,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::DynamicImage` for encoding.
    pub fn to_dynamic_image(&self) -> Option<image::DynamicImage> {
        match self.channels {
            Channels::Gray => {
                image::GrayImage::from_raw(self.width, self.height, self.pixels.clone())
                    .map(image::DynamicImage::ImageLuma8)
            }
            Channels::Rgb => image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
                .map(image::DynamicImage::ImageRgb8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_from_count() {
        assert_eq!(Channels::from_count(1), Some(Channels::Gray));
        assert_eq!(Channels::from_count(3), Some(Channels::Rgb));
        assert_eq!(Channels::from_count(0), None);
        assert_eq!(Channels::from_count(2), None);
        assert_eq!(Channels::from_count(4), None);
    }

    #[test]
    fn test_image_creation() {
        let img = Image::new(100, 50, Channels::Rgb, vec![0u8; 100 * 50 * 3]).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.pixels().len(), 15000);
        assert!(!img.is_empty());
    }

    #[test]
    fn test_image_size_mismatch() {
        let err = Image::new(10, 10, Channels::Gray, vec![0u8; 99]).unwrap_err();
        assert_eq!(
            err,
            ImageError::BufferSizeMismatch {
                expected: 100,
                actual: 99
            }
        );
    }

    #[test]
    fn test_from_raw_rejects_four_channels() {
        let err = Image::from_raw(2, 2, 4, vec![0u8; 16]).unwrap_err();
        assert_eq!(err, ImageError::UnsupportedChannels(4));
        assert_eq!(
            err.to_string(),
            "Unsupported channel count: 4 (expected 1 or 3)"
        );
    }

    #[test]
    fn test_from_raw_gray() {
        let img = Image::from_raw(3, 1, 1, vec![1, 2, 3]).unwrap();
        assert_eq!(img.channels(), Channels::Gray);
    }

    #[test]
    fn test_empty_image() {
        let img = Image::new(0, 0, Channels::Gray, vec![]).unwrap();
        assert!(img.is_empty());
    }

    #[test]
    fn test_to_gray() {
        let img = Image::new(2, 1, Channels::Rgb, vec![255, 255, 255, 0, 0, 0]).unwrap();
        let gray = img.to_gray();
        assert_eq!(gray.channels(), Channels::Gray);
        assert_eq!(gray.pixels(), &[255, 0]);
    }

    #[test]
    fn test_to_gray_uses_bt601_weights() {
        let img = Image::new(3, 1, Channels::Rgb, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
        assert_eq!(img.to_gray().pixels(), &[76, 150, 29]);
    }

    #[test]
    fn test_to_gray_keeps_gray_images() {
        let img = Image::new(2, 1, Channels::Gray, vec![3, 9]).unwrap();
        assert_eq!(img.to_gray(), img);
    }

    #[test]
    fn test_image_crate_round_trip() {
        let img = Image::new(2, 2, Channels::Rgb, (0..12).collect()).unwrap();
        let dynamic = img.to_dynamic_image().unwrap();
        let back = Image::from_rgb_image(dynamic.into_rgb8());
        assert_eq!(back, img);
    }
}
