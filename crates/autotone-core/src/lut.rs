//! 256-entry lookup tables and their application to images.
//!
//! A [`ToneLut`] holds one table per image channel. Both synthesizers in this
//! crate build channel-uniform LUTs by default; [`ChannelMode::PerChannel`]
//! produces distinct tables.
//!
//! [`ChannelMode::PerChannel`]: crate::config::ChannelMode::PerChannel

use crate::error::{Result, ToneError};
use crate::raster::{Channels, Image};

// ============================================================================
// LUT Type
// ============================================================================

/// Pre-computed lookup tables, `tables[channel][input] = output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneLut {
    tables: Vec<[u8; 256]>,
}

impl ToneLut {
    /// Build a LUT by evaluating `f(channel, input)` for every entry.
    ///
    /// The float result is passed through [`saturate_u8`].
    pub fn from_fn<F>(channels: Channels, mut f: F) -> Self
    where
        F: FnMut(usize, u8) -> f64,
    {
        let tables = (0..channels.count())
            .map(|c| {
                let mut table = [0u8; 256];
                for (i, entry) in table.iter_mut().enumerate() {
                    *entry = saturate_u8(f(c, i as u8));
                }
                table
            })
            .collect();
        Self { tables }
    }

    /// Replicate one table across every channel.
    pub fn uniform(channels: Channels, table: [u8; 256]) -> Self {
        Self {
            tables: vec![table; channels.count()],
        }
    }

    /// Create identity LUT (no change).
    pub fn identity(channels: Channels) -> Self {
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }
        Self::uniform(channels, table)
    }

    /// Number of channel tables.
    pub fn channel_count(&self) -> usize {
        self.tables.len()
    }

    /// Table for one channel.
    ///
    /// # Panics
    /// Panics if `channel` is out of range.
    pub fn table(&self, channel: usize) -> &[u8; 256] {
        &self.tables[channel]
    }

    /// All channel tables.
    pub fn tables(&self) -> &[[u8; 256]] {
        &self.tables
    }

    /// Check if this LUT is identity on every channel.
    pub fn is_identity(&self) -> bool {
        self.tables
            .iter()
            .all(|t| t.iter().enumerate().all(|(i, &v)| v == i as u8))
    }

    /// Check if every channel uses the same table.
    pub fn is_channel_uniform(&self) -> bool {
        self.tables.windows(2).all(|w| w[0] == w[1])
    }
}

/// Saturating conversion of a curve value to an 8-bit sample.
///
/// Rounds to nearest and clamps to [0, 255]. NaN maps to 0.
#[inline]
pub fn saturate_u8(value: f64) -> u8 {
    // `as` saturates out-of-range floats and maps NaN to 0
    value.round() as u8
}

// ============================================================================
// LUT Application
// ============================================================================

/// Map every sample of `image` through `lut`, returning a new image.
///
/// # Errors
/// Returns `ToneError::ChannelMismatch` if the LUT's channel count differs
/// from the image's.
pub fn apply_lut(image: &Image, lut: &ToneLut) -> Result<Image> {
    let mut out = image.clone();
    apply_lut_in_place(&mut out, lut)?;
    Ok(out)
}

/// Map every sample of `image` through `lut` in place.
pub fn apply_lut_in_place(image: &mut Image, lut: &ToneLut) -> Result<()> {
    let n = image.channels().count();
    if lut.channel_count() != n {
        return Err(ToneError::ChannelMismatch {
            lut: lut.channel_count(),
            image: n,
        });
    }

    // Early exit for identity
    if lut.is_identity() {
        return Ok(());
    }

    for px in image.pixels_mut().chunks_exact_mut(n) {
        for (c, sample) in px.iter_mut().enumerate() {
            *sample = lut.tables[c][*sample as usize];
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn invert() -> ToneLut {
        ToneLut::from_fn(Channels::Gray, |_, i| 255.0 - i as f64)
    }

    #[test]
    fn test_identity_lut() {
        let lut = ToneLut::identity(Channels::Rgb);
        assert!(lut.is_identity());
        assert!(lut.is_channel_uniform());
        assert_eq!(lut.channel_count(), 3);
        for i in 0..256 {
            assert_eq!(lut.table(2)[i], i as u8);
        }
    }

    #[test]
    fn test_saturate_u8() {
        assert_eq!(saturate_u8(-3.0), 0);
        assert_eq!(saturate_u8(300.0), 255);
        assert_eq!(saturate_u8(127.4), 127);
        assert_eq!(saturate_u8(127.6), 128);
        assert_eq!(saturate_u8(f64::NAN), 0);
        assert_eq!(saturate_u8(f64::INFINITY), 255);
        assert_eq!(saturate_u8(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_from_fn_saturates() {
        let lut = ToneLut::from_fn(Channels::Gray, |_, i| i as f64 * 2.0);
        assert_eq!(lut.table(0)[100], 200);
        assert_eq!(lut.table(0)[200], 255);
    }

    #[test]
    fn test_per_channel_tables() {
        let lut = ToneLut::from_fn(Channels::Rgb, |c, i| i as f64 + c as f64 * 10.0);
        assert!(!lut.is_channel_uniform());
        assert_eq!(lut.table(0)[5], 5);
        assert_eq!(lut.table(1)[5], 15);
        assert_eq!(lut.table(2)[5], 25);
    }

    #[test]
    fn test_apply_identity() {
        let img = Image::new(2, 1, Channels::Rgb, vec![0, 64, 128, 192, 255, 100]).unwrap();
        let out = apply_lut(&img, &ToneLut::identity(Channels::Rgb)).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_apply_invert() {
        let img = Image::new(3, 1, Channels::Gray, vec![0, 100, 255]).unwrap();
        let out = apply_lut(&img, &invert()).unwrap();
        assert_eq!(out.pixels(), &[255, 155, 0]);
        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn test_apply_per_channel() {
        let lut = ToneLut::from_fn(Channels::Rgb, |c, i| if c == 1 { 0.0 } else { i as f64 });
        let img = Image::new(1, 1, Channels::Rgb, vec![10, 20, 30]).unwrap();
        let out = apply_lut(&img, &lut).unwrap();
        assert_eq!(out.pixels(), &[10, 0, 30]);
    }

    #[test]
    fn test_apply_channel_mismatch() {
        let img = Image::filled(2, 2, Channels::Rgb, 5);
        let err = apply_lut(&img, &invert()).unwrap_err();
        assert_eq!(err, ToneError::ChannelMismatch { lut: 1, image: 3 });
    }

    #[test]
    fn test_apply_in_place() {
        let mut img = Image::filled(2, 2, Channels::Gray, 5);
        apply_lut_in_place(&mut img, &invert()).unwrap();
        assert!(img.pixels().iter().all(|&v| v == 250));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn lut_strategy() -> impl Strategy<Value = ToneLut> {
        proptest::collection::vec(any::<u8>(), 256).prop_map(|values| {
            let mut table = [0u8; 256];
            table.copy_from_slice(&values);
            ToneLut::uniform(Channels::Rgb, table)
        })
    }

    proptest! {
        /// Property: Applying a LUT preserves dimensions and channel count.
        #[test]
        fn prop_apply_preserves_shape(
            (w, h) in (1u32..=20, 1u32..=20),
            lut in lut_strategy(),
            seed in any::<u8>(),
        ) {
            let pixels: Vec<u8> = (0..(w * h * 3) as usize)
                .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
                .collect();
            let img = Image::new(w, h, Channels::Rgb, pixels).unwrap();
            let out = apply_lut(&img, &lut).unwrap();

            prop_assert_eq!(out.width(), w);
            prop_assert_eq!(out.height(), h);
            prop_assert_eq!(out.channels(), Channels::Rgb);
            prop_assert_eq!(out.pixels().len(), img.pixels().len());
        }

        /// Property: Each output sample is exactly the table entry of its input.
        #[test]
        fn prop_apply_is_pointwise(lut in lut_strategy(), values in proptest::collection::vec(any::<u8>(), 3..=60)) {
            let len = values.len() / 3 * 3;
            let img = Image::new((len / 3) as u32, 1, Channels::Rgb, values[..len].to_vec()).unwrap();
            let out = apply_lut(&img, &lut).unwrap();
            for (src, dst) in img.pixels().iter().zip(out.pixels()) {
                prop_assert_eq!(*dst, lut.table(0)[*src as usize]);
            }
        }
    }
}
