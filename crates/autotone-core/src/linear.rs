//! Automatic piecewise-linear contrast stretch.
//!
//! The curve has three segments joined at two interior corners and is anchored
//! at the origin and at (255, 255):
//!
//! ```text
//! 255 |                    ___/
//!     |              ___---
//!  y2 |            *
//!     |           /
//!  y1 |        *
//!     |    _--
//!   0 +---------------------------
//!     0       x1   x2           255
//! ```
//!
//! The corner inputs come from the image statistics, the corner outputs from a
//! fixed target, so the middle segment stretches (or compresses) the image's
//! actual spread onto the target spread.

use crate::config::{ChannelMode, CornerPolicy, ToneConfig};
use crate::error::{Result, ToneError};
use crate::lut::ToneLut;
use crate::raster::Image;
use crate::stats::{compute_statistics, ChannelStats, ImageStats};

// ============================================================================
// Corners
// ============================================================================

/// Interior anchor points `(x1, y1)` and `(x2, y2)` of the stretch.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Corners {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Corners {
    /// Create corners from explicit coordinates.
    ///
    /// # Errors
    /// Returns `ToneError::InvertedCorners` if `x1 > x2` or `y1 > y2`, since
    /// such a curve would not be monotonic.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self> {
        let corners = Self { x1, y1, x2, y2 };
        if !corners.is_ordered() {
            return Err(ToneError::InvertedCorners { x1, y1, x2, y2 });
        }
        Ok(corners)
    }

    /// Check `x1 <= x2` and `y1 <= y2`.
    pub fn is_ordered(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }
}

/// Place the corners for one set of statistics.
///
/// Both policies yield ordered corners for any non-negative standard
/// deviation and a spread ratio in [0, 1).
///
/// Ratio-policy inputs are not clamped: a mean above `255 / (1 + r)` puts
/// `x2` past 255, and the curve then ends on its middle segment below 255.
pub fn synthesize_corners(stats: &ChannelStats, config: &ToneConfig) -> Corners {
    match config.corner_policy {
        CornerPolicy::Ratio => {
            let r = config.spread_ratio;
            Corners {
                x1: stats.mean * (1.0 - r),
                x2: stats.mean * (1.0 + r),
                y1: 256.0 * (0.5 - r / 2.0) - 1.0,
                y2: 256.0 * (0.5 + r / 2.0) - 1.0,
            }
        }
        CornerPolicy::Statistical => {
            let target = config.target;
            Corners {
                x1: (stats.mean - stats.stddev).clamp(0.0, 255.0),
                x2: (stats.mean + stats.stddev).clamp(0.0, 255.0),
                y1: (target.mean - target.stddev).clamp(0.0, 255.0),
                y2: (target.mean + target.stddev).clamp(0.0, 255.0),
            }
        }
    }
}

// ============================================================================
// Segment Formula
// ============================================================================

/// Evaluate the three-segment stretch at an integer input.
///
/// - `input < x1`: line through the origin and `(x1, y1)`
/// - `x1 <= input < x2`: line through both corners
/// - `input >= x2`: line through `(x2, y2)` and `(255, 255)`
///
/// `epsilon` is added to every denominator so coincident corners, `x1 = 0`
/// and `x2 = 255` stay finite. The result is rounded but not clamped.
pub fn evaluate_linear_segment(input: i32, corners: &Corners, epsilon: f64) -> i32 {
    let Corners { x1, y1, x2, y2 } = *corners;
    let v = input as f64;

    let y = if v < x1 {
        y1 / (x1 + epsilon) * v
    } else if v < x2 {
        let m = (y2 - y1) / (x2 - x1 + epsilon);
        let b = y1 - m * x1;
        m * v + b
    } else {
        let m = (255.0 - y2) / (255.0 - x2 + epsilon);
        let b = y2 - m * x2;
        m * v + b
    };

    y.round() as i32
}

// ============================================================================
// Curve and LUT
// ============================================================================

/// Corner sets, one per image channel.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCurve {
    pub corners: Vec<Corners>,
    pub epsilon: f64,
}

impl LinearCurve {
    /// Corners used for `channel`.
    pub fn corners(&self, channel: usize) -> &Corners {
        &self.corners[channel]
    }

    /// Evaluate the curve for one channel at an input sample.
    pub fn evaluate(&self, channel: usize, input: u8) -> i32 {
        evaluate_linear_segment(input as i32, &self.corners[channel], self.epsilon)
    }
}

/// Derive the stretch corners from per-channel statistics.
///
/// In [`ChannelMode::LuminanceLocked`] the statistics are averaged first and
/// the single resulting corner set is shared by every channel.
pub fn synthesize_linear(stats: &ImageStats, config: &ToneConfig) -> LinearCurve {
    let corners = match config.channel_mode {
        ChannelMode::LuminanceLocked => {
            let shared = synthesize_corners(&stats.collapsed(), config);
            vec![shared; stats.channels.len()]
        }
        ChannelMode::PerChannel => stats
            .channels
            .iter()
            .map(|c| synthesize_corners(c, config))
            .collect(),
    };
    LinearCurve {
        corners,
        epsilon: config.epsilon,
    }
}

/// Build the piecewise-linear stretch LUT for an image.
pub fn synthesize_linear_lut(image: &Image, config: &ToneConfig) -> (ToneLut, LinearCurve) {
    let stats = compute_statistics(image);
    let curve = synthesize_linear(&stats, config);
    let lut = linear_lut(image, &curve);
    (lut, curve)
}

pub(crate) fn linear_lut(image: &Image, curve: &LinearCurve) -> ToneLut {
    ToneLut::from_fn(image.channels(), |c, i| curve.evaluate(c, i) as f64)
}
