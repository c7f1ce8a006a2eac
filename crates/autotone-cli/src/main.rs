mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "autotone", about = "Automatic gamma and contrast-stretch tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Move the image mean to mid-gray with an automatic gamma curve
    Gamma(commands::gamma::GammaArgs),
    /// Stretch contrast around the mean with a three-segment curve
    Linear(commands::linear::LinearArgs),
    /// Print channel statistics and optionally save a histogram plot
    Histogram(commands::histogram::HistogramArgs),
    /// Print or save the default tone configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Gamma(args) => commands::gamma::run(args),
        Commands::Linear(args) => commands::linear::run(args),
        Commands::Histogram(args) => commands::histogram::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_linear_flags() {
        let cli = Cli::try_parse_from([
            "autotone",
            "-v",
            "linear",
            "photo.jpg",
            "--statistical",
            "--per-channel",
            "--plots",
            "plots",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Linear(args) => {
                assert!(args.statistical);
                assert!(args.tone.per_channel);
                assert_eq!(args.tone.plots.unwrap().to_str(), Some("plots"));
            }
            _ => panic!("expected linear subcommand"),
        }
    }

    #[test]
    fn test_missing_input_is_a_usage_error() {
        assert!(Cli::try_parse_from(["autotone", "gamma"]).is_err());
    }
}
