//! arcgauge CLI: render gauge frames, simulate the host screen, check manifests.

mod commands;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arcgauge")]
#[command(about = "Arc progress gauge renderer and simulator")]
#[command(version)]
struct Cli {
    /// Log debug events (transition start, replace and finish)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Paint one frame and print its draw commands
    Render {
        /// Progress value
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        progress: i32,

        /// Upper bound of the range (default: manifest or 100)
        #[arg(short, long, allow_hyphen_values = true)]
        max: Option<i32>,

        /// Side of the square gauge in pixels (default: manifest or 300)
        #[arg(short, long)]
        size: Option<f32>,

        /// Style manifest
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Click the host screen's button and run frames until each animation settles
    Simulate {
        /// Number of clicks
        #[arg(short = 'n', long, default_value_t = 5)]
        clicks: u32,

        /// Random seed (default: from the OS)
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated frame rate
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
        fps: u32,

        /// Style manifest
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check a style manifest
    Check {
        /// Path to manifest file
        #[arg(default_value = "gauge.yaml")]
        manifest: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.verbose)?;

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Render {
            progress,
            max,
            size,
            config,
            format,
        } => commands::render(&mut stdout, progress, max, size, config.as_deref(), format),
        Commands::Simulate {
            clicks,
            seed,
            fps,
            config,
        } => commands::simulate(&mut stdout, clicks, seed, fps, config.as_deref()).map(|_| ()),
        Commands::Check { manifest } => commands::check(&mut stdout, &manifest).map(|_| ()),
    }
}
