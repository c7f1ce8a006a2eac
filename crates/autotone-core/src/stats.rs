//! Per-channel mean and standard deviation.

use serde::{Deserialize, Serialize};

use crate::raster::Image;

/// Mean and population standard deviation of one channel, in sample units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: f64,
    pub stddev: f64,
}

impl ChannelStats {
    pub fn new(mean: f64, stddev: f64) -> Self {
        Self { mean, stddev }
    }

    /// Statistics of a ramp holding every sample value 0..=255 exactly once.
    pub fn of_uniform_ramp() -> Self {
        let n = 256.0_f64;
        // Discrete uniform over 0..=255: variance = (n^2 - 1) / 12
        Self {
            mean: 127.5,
            stddev: ((n * n - 1.0) / 12.0).sqrt(),
        }
    }
}

/// Statistics for every channel of an image.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageStats {
    pub channels: Vec<ChannelStats>,
}

impl ImageStats {
    /// Average the per-channel values into a single scalar pair.
    ///
    /// This is the luminance-locked statistic used for shared curves.
    pub fn collapsed(&self) -> ChannelStats {
        if self.channels.is_empty() {
            return ChannelStats::default();
        }
        let n = self.channels.len() as f64;
        let mean = self.channels.iter().map(|c| c.mean).sum::<f64>() / n;
        let stddev = self.channels.iter().map(|c| c.stddev).sum::<f64>() / n;
        ChannelStats { mean, stddev }
    }
}

/// Compute mean and standard deviation per channel.
///
/// Single pass over the buffer accumulating `u64` sums and sums of squares.
/// The squares overflow past `u64::MAX / 255²` (about 2.8e14) pixels per
/// channel, far beyond any image that fits in memory. An empty image yields
/// zero statistics.
pub fn compute_statistics(image: &Image) -> ImageStats {
    let n_channels = image.channels().count();
    let mut sums = [0u64; 3];
    let mut squares = [0u64; 3];

    for px in image.pixels().chunks_exact(n_channels) {
        for (c, &v) in px.iter().enumerate() {
            let v = v as u64;
            sums[c] += v;
            squares[c] += v * v;
        }
    }

    let count = image.pixel_count() as f64;
    let channels = (0..n_channels)
        .map(|c| {
            if count == 0.0 {
                return ChannelStats::default();
            }
            let mean = sums[c] as f64 / count;
            let variance = (squares[c] as f64 / count - mean * mean).max(0.0);
            ChannelStats {
                mean,
                stddev: variance.sqrt(),
            }
        })
        .collect();

    ImageStats { channels }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::raster::Channels;
    use proptest::prelude::*;

    fn image_strategy() -> impl Strategy<Value = Image> {
        (1u32..=16, 1u32..=16, prop_oneof![Just(Channels::Gray), Just(Channels::Rgb)])
            .prop_flat_map(|(w, h, ch)| {
                let len = (w * h) as usize * ch.count();
                proptest::collection::vec(any::<u8>(), len)
                    .prop_map(move |pixels| Image::new(w, h, ch, pixels).unwrap())
            })
    }

    proptest! {
        /// Property: Statistics are a pure function of the image.
        #[test]
        fn prop_statistics_idempotent(img in image_strategy()) {
            let first = compute_statistics(&img);
            let second = compute_statistics(&img);
            prop_assert_eq!(first, second);
        }

        /// Property: Means lie in [0, 255] and deviations are non-negative.
        #[test]
        fn prop_statistics_in_range(img in image_strategy()) {
            for c in compute_statistics(&img).channels {
                prop_assert!((0.0..=255.0).contains(&c.mean));
                prop_assert!(c.stddev >= 0.0);
                prop_assert!(c.stddev <= 127.5 + 1e-9);
            }
        }
    }
}
