//! Autotone WASM - WebAssembly bindings for autotone
//!
//! This crate provides WASM bindings to expose the autotone-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for 1- or 3-channel image data
//! - `config` - Tone synthesis parameters
//! - `tone` - Gamma and linear-stretch LUT synthesis and application
//! - `histogram` - Per-channel histogram bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsImage, JsToneConfig, JsToneLut, apply_lut } from '@autotone/wasm';
//!
//! await init();
//!
//! const image = new JsImage(width, height, 3, pixels);
//! const lut = JsToneLut.gamma(image, new JsToneConfig());
//! console.log(`gamma = ${lut.gammas()[0]}`);
//! const corrected = apply_lut(image, lut);
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod histogram;
mod tone;
mod types;

pub use config::JsToneConfig;
pub use histogram::{compute_histogram, JsHistogram};
pub use tone::{apply_lut, evaluate_linear_segment, JsToneLut};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert any displayable error into a JavaScript string value.
pub(crate) fn to_js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
