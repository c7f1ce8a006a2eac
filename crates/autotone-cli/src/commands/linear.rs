use anyhow::Result;
use autotone_core::enhance::auto_linear_transform;
use autotone_core::{Channels, CornerPolicy, Image, ToneConfig};
use clap::Args;
use tracing::warn;

use super::{file_stem, save_output, write_plots, ToneArgs};
use crate::summary::print_linear_summary;

#[derive(Args)]
pub struct LinearArgs {
    #[command(flatten)]
    pub tone: ToneArgs,

    /// Place corners at mean ± stddev instead of mean × (1 ± ratio)
    #[arg(long)]
    pub statistical: bool,

    /// Spread ratio for the default corner policy
    #[arg(long)]
    pub ratio: Option<f64>,
}

pub fn run(args: &LinearArgs) -> Result<()> {
    let tone = &args.tone;
    let mut config = tone.tone_config()?;
    if args.statistical {
        config.corner_policy = CornerPolicy::Statistical;
    }
    if let Some(ratio) = args.ratio {
        config.spread_ratio = ratio;
    }
    let image = tone.load_input()?;

    println!("Loaded {}x{} image", image.width(), image.height());

    stretch(tone, &config, &image, None)?;

    if tone.gray {
        if image.channels() == Channels::Gray {
            warn!("Input is already grayscale, skipping --gray");
        } else {
            stretch(tone, &config, &image.to_gray(), Some("gray"))?;
        }
    }

    Ok(())
}

fn stretch(tone: &ToneArgs, config: &ToneConfig, image: &Image, variant: Option<&str>) -> Result<()> {
    let outcome = auto_linear_transform(image, config)?;

    print_linear_summary(
        variant.unwrap_or("color"),
        config.corner_policy,
        &outcome.stats,
        &outcome.curve,
    );

    if let Some(ref dir) = tone.plots {
        let prefix = match variant {
            Some(v) => format!("{}_linear_{}", file_stem(&tone.file), v),
            None => format!("{}_linear", file_stem(&tone.file)),
        };
        write_plots(
            dir,
            &prefix,
            &outcome.lut,
            outcome.curve.corners.first(),
            image,
            &outcome.image,
        )?;
    }

    save_output(&outcome.image, &tone.output_path("linear", variant))
}
