//! End-to-end automatic tone operators.
//!
//! Each operator runs statistics → synthesis → LUT build → LUT application
//! and hands every intermediate back to the caller, so presentation (logging,
//! plots, summaries) stays outside the numeric code.

use tracing::{debug, info};

use crate::config::ToneConfig;
use crate::error::Result;
use crate::gamma::{gamma_lut, synthesize_gamma, GammaCurve};
use crate::linear::{linear_lut, synthesize_linear, LinearCurve};
use crate::lut::{apply_lut, ToneLut};
use crate::raster::Image;
use crate::stats::{compute_statistics, ImageStats};

/// Result of [`auto_gamma_correction`].
#[derive(Debug, Clone)]
pub struct GammaOutcome {
    pub image: Image,
    pub lut: ToneLut,
    pub curve: GammaCurve,
    pub stats: ImageStats,
}

/// Result of [`auto_linear_transform`].
#[derive(Debug, Clone)]
pub struct LinearOutcome {
    pub image: Image,
    pub lut: ToneLut,
    pub curve: LinearCurve,
    pub stats: ImageStats,
}

/// Brighten or darken `image` so its mean lands on the target midpoint.
///
/// # Errors
/// Returns `ToneError::Config` if `config` fails validation.
pub fn auto_gamma_correction(image: &Image, config: &ToneConfig) -> Result<GammaOutcome> {
    config.validate()?;

    let stats = compute_statistics(image);
    debug!(channels = ?stats.channels, "Image statistics");

    let curve = synthesize_gamma(&stats, config);
    info!(gammas = ?curve.gammas, mode = ?config.channel_mode, "Gamma synthesized");

    let lut = gamma_lut(image, &curve);
    let image = apply_lut(image, &lut)?;

    Ok(GammaOutcome {
        image,
        lut,
        curve,
        stats,
    })
}

/// Stretch the spread around the image mean with a three-segment curve.
///
/// # Errors
/// Returns `ToneError::Config` if `config` fails validation.
pub fn auto_linear_transform(image: &Image, config: &ToneConfig) -> Result<LinearOutcome> {
    config.validate()?;

    let stats = compute_statistics(image);
    debug!(channels = ?stats.channels, "Image statistics");

    let curve = synthesize_linear(&stats, config);
    for (channel, c) in curve.corners.iter().enumerate() {
        info!(
            channel,
            policy = ?config.corner_policy,
            "Linear transform P1({:.0}, {:.0}) P2({:.0}, {:.0})",
            c.x1,
            c.y1,
            c.x2,
            c.y2
        );
    }

    let lut = linear_lut(image, &curve);
    let image = apply_lut(image, &lut)?;

    Ok(LinearOutcome {
        image,
        lut,
        curve,
        stats,
    })
}
