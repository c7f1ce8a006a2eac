//! Weighted RGB to single-channel conversions.
//!
//! Two weightings are used for different jobs:
//! - [`gray_from_rgb_u8`] (BT.601) produces the grayscale companion image, in
//!   the same 14-bit fixed point as the common `BGR2GRAY` conversion, so gray
//!   statistics match the usual desktop tooling sample for sample.
//! - [`calculate_luminance_u8`] (BT.709) feeds the luminance histogram.

/// BT.601 weights in 1/16384 units; they sum to exactly 16384.
const GRAY_WEIGHTS: [u32; 3] = [4899, 9617, 1868];
const GRAY_SHIFT: u32 = 14;

/// BT.709 coefficients for the luminance histogram.
pub const LUMINANCE_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Grayscale value of an RGB sample with BT.601 weights, rounded half up.
#[inline]
pub fn gray_from_rgb_u8(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = GRAY_WEIGHTS;
    let acc = wr * r as u32 + wg * g as u32 + wb * b as u32 + (1 << (GRAY_SHIFT - 1));
    // weights sum to 1 << GRAY_SHIFT, so the result never exceeds 255
    (acc >> GRAY_SHIFT) as u8
}

/// BT.709 luminance of an RGB sample, rounded to nearest.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    let lum = wr * r as f32 + wg * g as f32 + wb * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_weights_are_normalized() {
        assert_eq!(GRAY_WEIGHTS.iter().sum::<u32>(), 1 << GRAY_SHIFT);
        let sum: f32 = LUMINANCE_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gray_primaries() {
        assert_eq!(gray_from_rgb_u8(255, 0, 0), 76);
        assert_eq!(gray_from_rgb_u8(0, 255, 0), 150);
        assert_eq!(gray_from_rgb_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_gray_neutral_values_unchanged() {
        for v in 0..=255u8 {
            assert_eq!(gray_from_rgb_u8(v, v, v), v);
            assert_eq!(calculate_luminance_u8(v, v, v), v);
        }
    }

    #[test]
    fn test_luminance_primaries() {
        assert_eq!(calculate_luminance_u8(255, 0, 0), 54);
        assert_eq!(calculate_luminance_u8(0, 255, 0), 182);
        assert_eq!(calculate_luminance_u8(0, 0, 255), 18);
    }
}
