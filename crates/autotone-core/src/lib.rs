//! Autotone Core - adaptive tone curves for 8-bit images
//!
//! This crate derives tone curves from an image's own statistics and applies
//! them through 256-entry lookup tables:
//!
//! - **Gamma**: one exponent that moves the image mean to mid-gray
//! - **Linear stretch**: a three-segment curve anchored on mean ± spread
//!
//! Histograms, plot rendering and PNG/JPEG codecs support inspection.
//! Nothing here keeps state between calls.

pub mod config;
pub mod decode;
pub mod encode;
pub mod enhance;
pub mod error;
pub mod gamma;
pub mod histogram;
pub mod linear;
pub mod luminance;
pub mod lut;
pub mod raster;
pub mod render;
pub mod stats;

pub use config::{ChannelMode, ConfigError, CornerPolicy, ToneConfig};
pub use enhance::{auto_gamma_correction, auto_linear_transform, GammaOutcome, LinearOutcome};
pub use error::ToneError;
pub use gamma::{synthesize_gamma_lut, GammaCurve};
pub use histogram::{compute_histogram, Histogram};
pub use linear::{evaluate_linear_segment, synthesize_linear_lut, Corners, LinearCurve};
pub use lut::{apply_lut, apply_lut_in_place, ToneLut};
pub use raster::{Channels, Image, ImageError};
pub use stats::{compute_statistics, ChannelStats, ImageStats};
