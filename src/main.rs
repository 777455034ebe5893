// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "depthslice")]
#[command(about = "Depth slice visualizer for Kinect-class depth sensors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a raw depth frame dump to a PNG visualization
    Render {
        /// Raw frame dump: little-endian 16-bit packed samples, row-major
        input: PathBuf,

        /// Frame width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// Frame height in pixels
        #[arg(long, default_value = "480")]
        height: u32,

        /// Band lower bound in millimeters (exclusive)
        #[arg(long, default_value = "500")]
        min: u16,

        /// Band upper bound in millimeters (exclusive)
        #[arg(long, default_value = "4000")]
        max: u16,

        /// JSON config file (band + intensity ramp); overrides --min/--max
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path (default: <input>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a synthetic depth ramp with a fake player blob (no sensor needed)
    Demo {
        /// Frame width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// Frame height in pixels
        #[arg(long, default_value = "480")]
        height: u32,

        /// Band lower bound in millimeters (exclusive)
        #[arg(long, default_value = "500")]
        min: u16,

        /// Band upper bound in millimeters (exclusive)
        #[arg(long, default_value = "4000")]
        max: u16,

        /// Output file path (default: demo.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=depthslice=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            width,
            height,
            min,
            max,
            config,
            output,
        } => cli::render_frame(input, width, height, min, max, config, output),
        Commands::Demo {
            width,
            height,
            min,
            max,
            output,
        } => cli::render_demo(width, height, min, max, output),
    }
}
