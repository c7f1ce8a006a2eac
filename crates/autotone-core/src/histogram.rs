//! Per-channel value histograms.
//!
//! Histograms are diagnostic only; curve synthesis never reads them.

use crate::luminance::calculate_luminance_u8;
use crate::raster::{Channels, Image};

/// 256-bin occurrence counts for every channel of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Channel layout of the source image.
    pub channels: Channels,
    /// One 256-bin table per channel.
    pub bins: Vec<[u32; 256]>,
    /// BT.709 luminance bins, present for RGB images only.
    pub luminance: Option<[u32; 256]>,
}

impl Histogram {
    /// Create an empty histogram for the given layout.
    pub fn new(channels: Channels) -> Self {
        Self {
            channels,
            bins: vec![[0; 256]; channels.count()],
            luminance: match channels {
                Channels::Gray => None,
                Channels::Rgb => Some([0; 256]),
            },
        }
    }

    /// Largest bin count of each channel.
    pub fn max_counts(&self) -> Vec<u32> {
        self.bins
            .iter()
            .map(|b| b.iter().copied().max().unwrap_or(0))
            .collect()
    }

    /// Find the maximum value across all channels for normalization.
    pub fn max_value(&self) -> u32 {
        self.max_counts().into_iter().max().unwrap_or(0)
    }

    /// Bins of one channel scaled by that channel's own maximum.
    ///
    /// An all-zero channel normalizes to all zeros.
    pub fn normalized(&self, channel: usize) -> [f32; 256] {
        let bins = &self.bins[channel];
        let max = bins.iter().copied().max().unwrap_or(0);
        let mut out = [0.0f32; 256];
        if max == 0 {
            return out;
        }
        for (o, &count) in out.iter_mut().zip(bins.iter()) {
            *o = count as f32 / max as f32;
        }
        out
    }

    /// Check for highlight clipping (values at 255)
    pub fn has_highlight_clipping(&self) -> bool {
        self.bins.iter().any(|b| b[255] > 0)
    }

    /// Check for shadow clipping (values at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.bins.iter().any(|b| b[0] > 0)
    }
}

/// Count occurrences of every sample value, per channel.
///
/// Single read-only pass, O(n) in the number of samples. Bins are `u32`, so a
/// single value may occur at most `u32::MAX` times per channel (a 4-gigapixel
/// image of one flat color).
pub fn compute_histogram(image: &Image) -> Histogram {
    let mut hist = Histogram::new(image.channels());
    let n = image.channels().count();

    for px in image.pixels().chunks_exact(n) {
        for (c, &v) in px.iter().enumerate() {
            hist.bins[c][v as usize] += 1;
        }
        if let Some(lum) = hist.luminance.as_mut() {
            lum[calculate_luminance_u8(px[0], px[1], px[2]) as usize] += 1;
        }
    }

    hist
}
