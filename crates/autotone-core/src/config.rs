//! Tunable parameters for curve synthesis.
//!
//! Every constant the synthesizers depend on lives here with its default,
//! so callers can load an alternate set from TOML or JavaScript.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::ChannelStats;

/// Default normalized output level the gamma curve maps the image mean to.
pub const DEFAULT_TARGET_MIDPOINT: f64 = 0.5;

/// Default half-width of the ratio corner policy, as a fraction of the mean.
pub const DEFAULT_SPREAD_RATIO: f64 = 0.2;

/// Default value added to every segment denominator.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Errors for out-of-range configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("target midpoint must lie strictly between 0 and 1, got {0}")]
    TargetMidpoint(f64),

    #[error("spread ratio must lie in [0, 1), got {0}")]
    SpreadRatio(f64),

    #[error("epsilon must be positive, got {0}")]
    Epsilon(f64),

    #[error("target distribution is invalid: mean {mean}, stddev {stddev}")]
    TargetDistribution { mean: f64, stddev: f64 },
}

/// How the two interior corners of the linear stretch are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerPolicy {
    /// Corners at `mean * (1 ± r)`, mapped to a fixed band around mid-gray.
    #[default]
    Ratio,
    /// Corners at `mean ± stddev`, mapped to the target distribution's `mean ± stddev`.
    Statistical,
}

/// How per-channel statistics become curves on color images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMode {
    /// One curve shared by all channels, derived from channel-averaged values.
    ///
    /// Equal R/G/B corrections keep hue roughly stable but cannot fix a color cast.
    #[default]
    LuminanceLocked,
    /// An independent curve per channel.
    PerChannel,
}

/// Parameters for gamma and linear-stretch synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    /// Normalized output (0..1) the gamma curve maps the mean to.
    pub target_midpoint: f64,
    /// Spread ratio `r` of [`CornerPolicy::Ratio`].
    pub spread_ratio: f64,
    /// Guard added to segment denominators of the linear formula.
    pub epsilon: f64,
    /// Corner placement for the linear stretch.
    pub corner_policy: CornerPolicy,
    /// Shared or independent per-channel curves.
    pub channel_mode: ChannelMode,
    /// Reference distribution for [`CornerPolicy::Statistical`].
    pub target: ChannelStats,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            target_midpoint: DEFAULT_TARGET_MIDPOINT,
            spread_ratio: DEFAULT_SPREAD_RATIO,
            epsilon: DEFAULT_EPSILON,
            corner_policy: CornerPolicy::default(),
            channel_mode: ChannelMode::default(),
            target: ChannelStats::of_uniform_ramp(),
        }
    }
}

impl ToneConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every parameter against its valid range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.target_midpoint > 0.0 && self.target_midpoint < 1.0) {
            return Err(ConfigError::TargetMidpoint(self.target_midpoint));
        }
        if !(0.0..1.0).contains(&self.spread_ratio) {
            return Err(ConfigError::SpreadRatio(self.spread_ratio));
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(ConfigError::Epsilon(self.epsilon));
        }
        let ChannelStats { mean, stddev } = self.target;
        if !(0.0..=255.0).contains(&mean) || !(stddev >= 0.0 && stddev.is_finite()) {
            return Err(ConfigError::TargetDistribution { mean, stddev });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ToneConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.target_midpoint, 0.5);
        assert_eq!(config.spread_ratio, 0.2);
        assert_eq!(config.epsilon, 0.001);
        assert_eq!(config.corner_policy, CornerPolicy::Ratio);
        assert_eq!(config.channel_mode, ChannelMode::LuminanceLocked);
    }

    #[test]
    fn test_default_target_is_uniform_ramp() {
        let config = ToneConfig::default();
        assert!((config.target.mean - 127.5).abs() < 1e-9);
        assert!((config.target.stddev - 73.9003).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_midpoint() {
        let mut config = ToneConfig::default();
        config.target_midpoint = 1.0;
        assert_eq!(config.validate(), Err(ConfigError::TargetMidpoint(1.0)));

        config.target_midpoint = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_spread_ratio() {
        let mut config = ToneConfig::default();
        config.spread_ratio = -0.1;
        assert_eq!(config.validate(), Err(ConfigError::SpreadRatio(-0.1)));
    }

    #[test]
    fn test_invalid_epsilon() {
        let mut config = ToneConfig::default();
        config.epsilon = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::Epsilon(0.0)));
    }

    #[test]
    fn test_invalid_target() {
        let mut config = ToneConfig::default();
        config.target.stddev = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TargetDistribution { .. })
        ));
    }
}
