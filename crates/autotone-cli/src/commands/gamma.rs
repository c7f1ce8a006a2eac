use anyhow::Result;
use autotone_core::enhance::auto_gamma_correction;
use autotone_core::{Channels, Image, ToneConfig};
use clap::Args;
use tracing::warn;

use super::{file_stem, save_output, write_plots, ToneArgs};
use crate::summary::print_gamma_summary;

#[derive(Args)]
pub struct GammaArgs {
    #[command(flatten)]
    pub tone: ToneArgs,
}

pub fn run(args: &GammaArgs) -> Result<()> {
    let tone = &args.tone;
    let config = tone.tone_config()?;
    let image = tone.load_input()?;

    println!("Loaded {}x{} image", image.width(), image.height());

    correct(tone, &config, &image, None)?;

    if tone.gray {
        if image.channels() == Channels::Gray {
            warn!("Input is already grayscale, skipping --gray");
        } else {
            correct(tone, &config, &image.to_gray(), Some("gray"))?;
        }
    }

    Ok(())
}

fn correct(tone: &ToneArgs, config: &ToneConfig, image: &Image, variant: Option<&str>) -> Result<()> {
    let outcome = auto_gamma_correction(image, config)?;

    print_gamma_summary(variant.unwrap_or("color"), &outcome.stats, &outcome.curve);

    if let Some(ref dir) = tone.plots {
        let prefix = match variant {
            Some(v) => format!("{}_gamma_{}", file_stem(&tone.file), v),
            None => format!("{}_gamma", file_stem(&tone.file)),
        };
        write_plots(dir, &prefix, &outcome.lut, None, image, &outcome.image)?;
    }

    save_output(&outcome.image, &tone.output_path("gamma", variant))
}
