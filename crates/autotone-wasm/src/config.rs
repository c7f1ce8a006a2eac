//! Tone configuration WASM bindings.

use autotone_core::{ChannelMode, CornerPolicy, ToneConfig};
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// Tone synthesis parameters for JavaScript.
#[wasm_bindgen]
pub struct JsToneConfig {
    inner: ToneConfig,
}

#[wasm_bindgen]
impl JsToneConfig {
    /// Create a configuration with default values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ToneConfig::default(),
        }
    }

    /// Normalized output level the gamma curve maps the mean to
    #[wasm_bindgen(getter)]
    pub fn target_midpoint(&self) -> f64 {
        self.inner.target_midpoint
    }

    #[wasm_bindgen(setter)]
    pub fn set_target_midpoint(&mut self, value: f64) {
        self.inner.target_midpoint = value;
    }

    /// Spread ratio of the ratio corner policy
    #[wasm_bindgen(getter)]
    pub fn spread_ratio(&self) -> f64 {
        self.inner.spread_ratio
    }

    #[wasm_bindgen(setter)]
    pub fn set_spread_ratio(&mut self, value: f64) {
        self.inner.spread_ratio = value;
    }

    /// Guard added to linear segment denominators
    #[wasm_bindgen(getter)]
    pub fn epsilon(&self) -> f64 {
        self.inner.epsilon
    }

    #[wasm_bindgen(setter)]
    pub fn set_epsilon(&mut self, value: f64) {
        self.inner.epsilon = value;
    }

    /// Whether corners come from mean ± stddev instead of the spread ratio
    #[wasm_bindgen(getter)]
    pub fn statistical(&self) -> bool {
        self.inner.corner_policy == CornerPolicy::Statistical
    }

    #[wasm_bindgen(setter)]
    pub fn set_statistical(&mut self, value: bool) {
        self.inner.corner_policy = if value {
            CornerPolicy::Statistical
        } else {
            CornerPolicy::Ratio
        };
    }

    /// Whether each channel gets its own curve
    #[wasm_bindgen(getter)]
    pub fn per_channel(&self) -> bool {
        self.inner.channel_mode == ChannelMode::PerChannel
    }

    #[wasm_bindgen(setter)]
    pub fn set_per_channel(&mut self, value: bool) {
        self.inner.channel_mode = if value {
            ChannelMode::PerChannel
        } else {
            ChannelMode::LuminanceLocked
        };
    }

    /// Serialize to a plain JavaScript object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Deserialize from a plain JavaScript object; missing fields take defaults
    pub fn from_json(value: JsValue) -> Result<JsToneConfig, JsValue> {
        let inner: ToneConfig = serde_wasm_bindgen::from_value(value).map_err(to_js_error)?;
        Ok(Self { inner })
    }
}

impl Default for JsToneConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl JsToneConfig {
    pub(crate) fn inner(&self) -> &ToneConfig {
        &self.inner
    }
}
