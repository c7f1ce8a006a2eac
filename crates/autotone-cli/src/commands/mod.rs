pub mod config;
pub mod gamma;
pub mod histogram;
pub mod linear;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autotone_core::decode::load_image;
use autotone_core::encode::save_image;
use autotone_core::histogram::compute_histogram;
use autotone_core::linear::Corners;
use autotone_core::lut::ToneLut;
use autotone_core::render::{render_histogram, render_lut_plot};
use autotone_core::{ChannelMode, Image, ToneConfig};
use clap::Args;

/// Options shared by the `gamma` and `linear` operators.
#[derive(Args)]
pub struct ToneArgs {
    /// Input image file (PNG or JPEG)
    pub file: PathBuf,

    /// Output file path (defaults to `<input>_<operator>.png` next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to write LUT and histogram plots into
    #[arg(long)]
    pub plots: Option<PathBuf>,

    /// Also process the BT.709 grayscale conversion of the input
    #[arg(long)]
    pub gray: bool,

    /// Synthesize an independent curve per color channel
    #[arg(long)]
    pub per_channel: bool,

    /// TOML file with tone parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ToneArgs {
    /// Load the configuration file (or defaults) and apply flag overrides.
    pub fn tone_config(&self) -> Result<ToneConfig> {
        let mut config = match self.config {
            Some(ref path) => load_config(path)?,
            None => ToneConfig::default(),
        };
        if self.per_channel {
            config.channel_mode = ChannelMode::PerChannel;
        }
        Ok(config)
    }

    pub fn load_input(&self) -> Result<Image> {
        load_image(&self.file).with_context(|| format!("Failed to load {}", self.file.display()))
    }

    /// Output path for one run; `variant` distinguishes the grayscale companion.
    pub fn output_path(&self, operator: &str, variant: Option<&str>) -> PathBuf {
        match (&self.output, variant) {
            (Some(path), None) => path.clone(),
            (Some(path), Some(v)) => with_suffix(path, v),
            (None, v) => {
                let name = match v {
                    Some(v) => format!("{}_{}_{}.png", file_stem(&self.file), operator, v),
                    None => format!("{}_{}.png", file_stem(&self.file), operator),
                };
                self.file.with_file_name(name)
            }
        }
    }
}

pub fn load_config(path: &Path) -> Result<ToneConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn parse_config(text: &str) -> Result<ToneConfig> {
    let config: ToneConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

pub fn save_output(image: &Image, path: &Path) -> Result<()> {
    save_image(image, path).with_context(|| format!("Failed to save {}", path.display()))?;
    println!("Saved to {}", path.display());
    Ok(())
}

/// Write the LUT plot plus before/after histogram plots into `dir`.
pub fn write_plots(
    dir: &Path,
    prefix: &str,
    lut: &ToneLut,
    corners: Option<&Corners>,
    before: &Image,
    after: &Image,
) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create plot directory {}", dir.display()))?;

    let plots = [
        ("lut", render_lut_plot(lut, corners)),
        ("hist_before", render_histogram(&compute_histogram(before))),
        ("hist_after", render_histogram(&compute_histogram(after))),
    ];
    for (name, plot) in &plots {
        let path = dir.join(format!("{prefix}_{name}.png"));
        save_image(plot, &path).with_context(|| format!("Failed to save {}", path.display()))?;
    }
    println!("Plots written to {}", dir.display());
    Ok(())
}

pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    path.with_file_name(format!("{}_{}.{}", file_stem(path), suffix, ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use autotone_core::CornerPolicy;

    fn args(output: Option<&str>) -> ToneArgs {
        ToneArgs {
            file: PathBuf::from("shots/photo.jpg"),
            output: output.map(PathBuf::from),
            plots: None,
            gray: false,
            per_channel: false,
            config: None,
        }
    }

    #[test]
    fn test_default_output_path() {
        let a = args(None);
        assert_eq!(a.output_path("gamma", None), PathBuf::from("shots/photo_gamma.png"));
        assert_eq!(
            a.output_path("linear", Some("gray")),
            PathBuf::from("shots/photo_linear_gray.png")
        );
    }

    #[test]
    fn test_explicit_output_path() {
        let a = args(Some("out/result.jpg"));
        assert_eq!(a.output_path("gamma", None), PathBuf::from("out/result.jpg"));
        assert_eq!(
            a.output_path("gamma", Some("gray")),
            PathBuf::from("out/result_gray.jpg")
        );
    }

    #[test]
    fn test_per_channel_flag_overrides_config() {
        let mut a = args(None);
        a.per_channel = true;
        let config = a.tone_config().unwrap();
        assert_eq!(config.channel_mode, ChannelMode::PerChannel);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("spread_ratio = 0.3\ncorner_policy = \"statistical\"\n").unwrap();
        assert_eq!(config.spread_ratio, 0.3);
        assert_eq!(config.corner_policy, CornerPolicy::Statistical);
        assert_eq!(config.epsilon, ToneConfig::default().epsilon);
    }

    #[test]
    fn test_parse_config_rejects_out_of_range() {
        assert!(parse_config("target_midpoint = 1.5\n").is_err());
        assert!(parse_config("epsilon = \"small\"\n").is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&ToneConfig::default()).unwrap();
        assert_eq!(parse_config(&text).unwrap(), ToneConfig::default());
    }
}
