//! Single-image enhance command.

use std::path::PathBuf;
use std::time::Instant;

use claro_cli::{determine_output_path, process_single_image, OutputNaming, ProcessingParams};

/// Execute the enhance command for a single image.
///
/// Decodes the input, runs the enhancement pipeline (denoise, local
/// contrast on the lightness channel, unsharp mask), and writes a
/// lossless PNG. The default output is `enhanced_color_image.png` next
/// to the input.
pub fn cmd_enhance(
    input: PathBuf,
    out: Option<PathBuf>,
    params: ProcessingParams,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let start_time = Instant::now();

    claro_core::config::set_verbose(verbose);
    if verbose {
        claro_core::config::log_config_usage();
    }

    let options = params.resolve()?;
    let output = determine_output_path(&input, &out, OutputNaming::Single)?;

    if !silent {
        println!(
            "Enhancing {} (noise {}, contrast {}, sharpness {})...",
            input.display(),
            options.noise_strength,
            options.contrast_strength,
            options.sharpness
        );
    }

    let written = process_single_image(&input, &output, &options, silent)?;

    if !silent {
        println!(
            "Wrote {} in {:.2}s",
            written.display(),
            start_time.elapsed().as_secs_f32()
        );
    }

    Ok(())
}
