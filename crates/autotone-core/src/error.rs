use thiserror::Error;

use crate::config::ConfigError;
use crate::raster::ImageError;

/// Errors raised by curve synthesis and LUT application.
#[derive(Debug, Error, PartialEq)]
pub enum ToneError {
    #[error("Invalid image: {0}")]
    Image(#[from] ImageError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("LUT has {lut} channel table(s) but the image has {image} channel(s)")]
    ChannelMismatch { lut: usize, image: usize },

    #[error("Corners are inverted: P1({x1}, {y1}) must not exceed P2({x2}, {y2})")]
    InvertedCorners { x1: f64, y1: f64, x2: f64, y2: f64 },
}

pub type Result<T> = std::result::Result<T, ToneError>;
