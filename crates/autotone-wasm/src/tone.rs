//! Tone curve WASM bindings.
//!
//! This module provides JavaScript bindings for automatic gamma and linear
//! stretch synthesis, LUT application and the raw segment formula.

use autotone_core::gamma::synthesize_gamma_lut;
use autotone_core::linear::{self, synthesize_linear_lut, Corners};
use autotone_core::lut::{self, ToneLut};
use autotone_core::{Channels, ImageError, ToneError};
use wasm_bindgen::prelude::*;

use crate::config::JsToneConfig;
use crate::to_js_error;
use crate::types::JsImage;

/// JavaScript-accessible tone LUT plus the parameters it was built from.
///
/// # Example (TypeScript)
/// ```typescript
/// const lut = JsToneLut.linear(image, config);
/// const [x1, y1, x2, y2] = lut.corners();
/// const stretched = apply_lut(image, lut);
///
/// lut.free();
/// stretched.free();
/// ```
#[wasm_bindgen]
pub struct JsToneLut {
    inner: ToneLut,
    gammas: Vec<f64>,
    corners: Vec<f64>,
}

#[wasm_bindgen]
impl JsToneLut {
    /// Synthesize the automatic gamma LUT for an image.
    pub fn gamma(image: &JsImage, config: &JsToneConfig) -> Result<JsToneLut, JsValue> {
        let img = image.to_image().map_err(to_js_error)?;
        config.inner().validate().map_err(to_js_error)?;
        let (inner, curve) = synthesize_gamma_lut(&img, config.inner());
        Ok(Self {
            inner,
            gammas: curve.gammas,
            corners: Vec::new(),
        })
    }

    /// Synthesize the automatic piecewise-linear stretch LUT for an image.
    pub fn linear(image: &JsImage, config: &JsToneConfig) -> Result<JsToneLut, JsValue> {
        let img = image.to_image().map_err(to_js_error)?;
        config.inner().validate().map_err(to_js_error)?;
        let (inner, curve) = synthesize_linear_lut(&img, config.inner());
        Ok(Self {
            inner,
            gammas: Vec::new(),
            corners: flatten_corners(&curve.corners),
        })
    }

    /// Build a channel-uniform stretch LUT from explicit corners.
    ///
    /// # Errors
    /// Rejects inverted corners and channel counts other than 1 or 3.
    pub fn from_corners(
        channels: u8,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        epsilon: f64,
    ) -> Result<JsToneLut, JsValue> {
        Self::build_from_corners(channels, x1, y1, x2, y2, epsilon).map_err(to_js_error)
    }

    /// Create an identity (no-op) LUT.
    pub fn identity(channels: u8) -> Result<JsToneLut, JsValue> {
        let channels = parse_channels(channels).map_err(to_js_error)?;
        Ok(Self {
            inner: ToneLut::identity(channels),
            gammas: Vec::new(),
            corners: Vec::new(),
        })
    }

    /// Number of channel tables.
    #[wasm_bindgen(getter)]
    pub fn channel_count(&self) -> usize {
        self.inner.channel_count()
    }

    /// Check if this LUT produces no change.
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Raw table (256 bytes) of one channel, for plotting.
    ///
    /// Out-of-range channels return an empty array.
    pub fn get_lut(&self, channel: usize) -> Vec<u8> {
        self.inner
            .tables()
            .get(channel)
            .map(|t| t.to_vec())
            .unwrap_or_default()
    }

    /// Gamma exponent per channel (empty for stretch LUTs).
    pub fn gammas(&self) -> Vec<f64> {
        self.gammas.clone()
    }

    /// Corners per channel as `[x1, y1, x2, y2, ...]` (empty for gamma LUTs).
    pub fn corners(&self) -> Vec<f64> {
        self.corners.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

impl JsToneLut {
    fn build_from_corners(
        channels: u8,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        epsilon: f64,
    ) -> Result<Self, ToneError> {
        let channels = parse_channels(channels)?;
        let corners = Corners::new(x1, y1, x2, y2)?;
        let inner = ToneLut::from_fn(channels, |_, i| {
            linear::evaluate_linear_segment(i as i32, &corners, epsilon) as f64
        });
        Ok(Self {
            inner,
            gammas: Vec::new(),
            corners: flatten_corners(&vec![corners; channels.count()]),
        })
    }
}

fn parse_channels(count: u8) -> Result<Channels, ImageError> {
    Channels::from_count(count).ok_or(ImageError::UnsupportedChannels(count))
}

fn flatten_corners(corners: &[Corners]) -> Vec<f64> {
    corners
        .iter()
        .flat_map(|c| [c.x1, c.y1, c.x2, c.y2])
        .collect()
}

/// Apply a LUT to an image, returning a new image.
#[wasm_bindgen]
pub fn apply_lut(image: &JsImage, lut: &JsToneLut) -> Result<JsImage, JsValue> {
    let img = image.to_image().map_err(to_js_error)?;
    let out = lut::apply_lut(&img, &lut.inner).map_err(to_js_error)?;
    Ok(JsImage::from_image(out))
}

/// Evaluate the three-segment stretch formula at one input value.
#[wasm_bindgen]
pub fn evaluate_linear_segment(input: i32, x1: f64, x2: f64, y1: f64, y2: f64, epsilon: f64) -> i32 {
    let corners = Corners { x1, y1, x2, y2 };
    linear::evaluate_linear_segment(input, &corners, epsilon)
}


/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_invalid_image_is_rejected() {
        let image = JsImage::new(2, 2, 4, vec![0u8; 16]);
        assert!(JsToneLut::gamma(&image, &JsToneConfig::new()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_apply_lut_channel_mismatch() {
        let image = JsImage::new(1, 1, 3, vec![1, 2, 3]);
        let lut = JsToneLut::identity(1).unwrap();
        assert!(apply_lut(&image, &lut).is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_config_is_rejected() {
        let image = JsImage::new(1, 1, 1, vec![100]);
        let mut config = JsToneConfig::new();
        config.set_epsilon(0.0);
        assert!(JsToneLut::linear(&image, &config).is_err());
    }
}
