//! Histogram computation WASM bindings.
//!
//! This module provides JavaScript bindings for per-channel histograms of
//! grayscale and RGB images.

use autotone_core::histogram::compute_histogram as compute_histogram_core;
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsImage;

/// Histogram result accessible from JavaScript.
///
/// Holds one 256-bin table per image channel, plus a BT.709 luminance table
/// for RGB images.
#[wasm_bindgen]
pub struct JsHistogram {
    bins: Vec<Vec<u32>>,
    normalized: Vec<Vec<f32>>,
    luminance: Vec<u32>,
    max_counts: Vec<u32>,
    max_value: u32,
    has_highlight_clipping: bool,
    has_shadow_clipping: bool,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Number of channel tables (1 or 3).
    #[wasm_bindgen(getter)]
    pub fn channel_count(&self) -> usize {
        self.bins.len()
    }

    /// Get one channel's histogram (256 bins, empty if out of range).
    pub fn channel(&self, channel: usize) -> Vec<u32> {
        self.bins.get(channel).cloned().unwrap_or_default()
    }

    /// Get one channel's bins scaled to 0..1 by its own maximum.
    pub fn normalized(&self, channel: usize) -> Vec<f32> {
        self.normalized.get(channel).cloned().unwrap_or_default()
    }

    /// Get luminance histogram (256 bins, empty for grayscale images).
    pub fn luminance(&self) -> Vec<u32> {
        self.luminance.clone()
    }

    /// Get the largest bin count of each channel, for per-channel normalization.
    pub fn max_counts(&self) -> Vec<u32> {
        self.max_counts.clone()
    }

    /// Get maximum bin value across all channels.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Check if any channel has values at 255 (highlight clipping).
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.has_highlight_clipping
    }

    /// Check if any channel has values at 0 (shadow clipping).
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.has_shadow_clipping
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {}
}

/// Compute the per-channel histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
/// const bins = hist.channel(0);      // Uint32Array[256]
/// const max = hist.max_value;
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsImage) -> Result<JsHistogram, JsValue> {
    let img = image.to_image().map_err(to_js_error)?;
    let hist = compute_histogram_core(&img);

    Ok(JsHistogram {
        bins: hist.bins.iter().map(|b| b.to_vec()).collect(),
        normalized: (0..hist.bins.len())
            .map(|c| hist.normalized(c).to_vec())
            .collect(),
        luminance: hist.luminance.map(|l| l.to_vec()).unwrap_or_default(),
        max_counts: hist.max_counts(),
        max_value: hist.max_value(),
        has_highlight_clipping: hist.has_highlight_clipping(),
        has_shadow_clipping: hist.has_shadow_clipping(),
    })
}
