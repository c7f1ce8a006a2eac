//! Automatic gamma correction.
//!
//! The exponent is solved in the log domain so that the image mean, normalized
//! to [0, 1], lands on the configured target midpoint:
//!
//! ```text
//! mean_n ^ gamma = target   =>   gamma = ln(target) / ln(mean_n)
//! ```
//!
//! A mean of exactly 0 or 255 makes the logarithm degenerate. The resulting
//! non-finite or zero exponent is not rejected; it flows into the LUT, where
//! the saturating cast keeps every entry inside [0, 255].

use crate::config::{ChannelMode, ToneConfig};
use crate::lut::ToneLut;
use crate::raster::Image;
use crate::stats::{compute_statistics, ImageStats};

/// Gamma exponents, one per image channel.
#[derive(Debug, Clone, PartialEq)]
pub struct GammaCurve {
    pub gammas: Vec<f64>,
}

impl GammaCurve {
    /// Exponent applied to `channel`.
    pub fn gamma(&self, channel: usize) -> f64 {
        self.gammas[channel]
    }

    /// Evaluate the curve for one channel at an input sample, in sample units.
    #[inline]
    pub fn evaluate(&self, channel: usize, input: u8) -> f64 {
        let normalized = input as f64 / 255.0;
        normalized.powf(self.gammas[channel]) * 255.0
    }
}

/// Exponent mapping `mean` (in sample units) onto `target_midpoint`.
#[inline]
pub fn gamma_for_mean(mean: f64, target_midpoint: f64) -> f64 {
    target_midpoint.ln() / (mean / 255.0).ln()
}

/// Derive gamma exponents from per-channel statistics.
///
/// In [`ChannelMode::LuminanceLocked`] each channel's exponent is solved
/// independently and then all are replaced by their arithmetic mean.
pub fn synthesize_gamma(stats: &ImageStats, config: &ToneConfig) -> GammaCurve {
    let mut gammas: Vec<f64> = stats
        .channels
        .iter()
        .map(|c| gamma_for_mean(c.mean, config.target_midpoint))
        .collect();

    if config.channel_mode == ChannelMode::LuminanceLocked && gammas.len() > 1 {
        let shared = gammas.iter().sum::<f64>() / gammas.len() as f64;
        gammas.iter_mut().for_each(|g| *g = shared);
    }

    GammaCurve { gammas }
}

/// Build the gamma LUT for an image.
///
/// Entry `i` of channel `c` is `saturate(255 * (i / 255) ^ gamma[c])`.
pub fn synthesize_gamma_lut(image: &Image, config: &ToneConfig) -> (ToneLut, GammaCurve) {
    let stats = compute_statistics(image);
    let curve = synthesize_gamma(&stats, config);
    let lut = gamma_lut(image, &curve);
    (lut, curve)
}

pub(crate) fn gamma_lut(image: &Image, curve: &GammaCurve) -> ToneLut {
    ToneLut::from_fn(image.channels(), |c, i| curve.evaluate(c, i))
}
