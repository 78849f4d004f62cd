use clap::{Parser, Subcommand};
use std::path::PathBuf;

use claro_cli::ProcessingParams;

mod commands;
use commands::{cmd_batch, cmd_enhance, cmd_preset_create, cmd_preset_show};

#[derive(Parser)]
#[command(name = "claro")]
#[command(version, about = "Captured-photo enhancement: denoise, local contrast, sharpen", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enhance a single captured photo
    Enhance {
        /// Input image file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory (default: enhanced_color_image.png
        /// next to the input)
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Noise reduction strength (0-15, 0 disables denoising)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=15))]
        noise: Option<u8>,

        /// Local contrast clip limit (1.0-4.0)
        #[arg(long, value_name = "FLOAT")]
        contrast: Option<f32>,

        /// Sharpening weight (1.0-3.0)
        #[arg(long, value_name = "FLOAT")]
        sharpness: Option<f32>,

        /// Parameter preset file
        #[arg(short, long, value_name = "FILE")]
        preset: Option<PathBuf>,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose debug output
        #[arg(long)]
        verbose: bool,
    },

    /// Enhance a set of images in parallel
    Batch {
        /// Input files or directories
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Output directory (default: next to each input)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Noise reduction strength (0-15, 0 disables denoising)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=15))]
        noise: Option<u8>,

        /// Local contrast clip limit (1.0-4.0)
        #[arg(long, value_name = "FLOAT")]
        contrast: Option<f32>,

        /// Sharpening weight (1.0-3.0)
        #[arg(long, value_name = "FLOAT")]
        sharpness: Option<f32>,

        /// Parameter preset file
        #[arg(short, long, value_name = "FILE")]
        preset: Option<PathBuf>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Suppress progress output
        #[arg(long)]
        silent: bool,

        /// Enable verbose debug output
        #[arg(long)]
        verbose: bool,
    },

    /// Manage parameter presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// Create a preset file from parameter values
    Create {
        /// Preset name (file is written as {name}.yml)
        name: String,

        /// Directory to write the preset into
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Noise reduction strength (0-15)
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=15))]
        noise: Option<u8>,

        /// Local contrast clip limit (1.0-4.0)
        #[arg(long, value_name = "FLOAT")]
        contrast: Option<f32>,

        /// Sharpening weight (1.0-3.0)
        #[arg(long, value_name = "FLOAT")]
        sharpness: Option<f32>,
    },

    /// Show details of a preset
    Show {
        /// Preset file path
        preset: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Enhance {
            input,
            out,
            noise,
            contrast,
            sharpness,
            preset,
            silent,
            verbose,
        } => cmd_enhance(
            input,
            out,
            ProcessingParams {
                noise,
                contrast,
                sharpness,
                preset,
            },
            silent,
            verbose,
        ),
        Commands::Batch {
            inputs,
            recursive,
            out,
            noise,
            contrast,
            sharpness,
            preset,
            threads,
            silent,
            verbose,
        } => cmd_batch(
            inputs,
            recursive,
            out,
            ProcessingParams {
                noise,
                contrast,
                sharpness,
                preset,
            },
            threads,
            silent,
            verbose,
        ),
        Commands::Preset { action } => match action {
            PresetAction::Create {
                name,
                dir,
                noise,
                contrast,
                sharpness,
            } => cmd_preset_create(
                name,
                dir,
                ProcessingParams {
                    noise,
                    contrast,
                    sharpness,
                    preset: None,
                },
            ),
            PresetAction::Show { preset } => cmd_preset_show(preset),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
