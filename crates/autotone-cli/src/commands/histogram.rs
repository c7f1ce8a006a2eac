use std::path::PathBuf;

use anyhow::{Context, Result};
use autotone_core::decode::load_image;
use autotone_core::encode::save_image;
use autotone_core::histogram::compute_histogram;
use autotone_core::render::render_histogram;
use autotone_core::stats::compute_statistics;
use clap::Args;

use crate::summary::print_histogram_summary;

#[derive(Args)]
pub struct HistogramArgs {
    /// Input image file (PNG or JPEG)
    pub file: PathBuf,

    /// Save the histogram plot to this PNG file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Use the BT.709 grayscale conversion of the input
    #[arg(long)]
    pub gray: bool,
}

pub fn run(args: &HistogramArgs) -> Result<()> {
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let image = if args.gray { image.to_gray() } else { image };

    let hist = compute_histogram(&image);
    let stats = compute_statistics(&image);
    print_histogram_summary(&image, &stats, &hist);

    if let Some(ref path) = args.output {
        save_image(&render_histogram(&hist), path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        println!("Histogram plot saved to {}", path.display());
    }

    Ok(())
}
