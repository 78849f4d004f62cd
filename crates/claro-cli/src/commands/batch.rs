//! Batch enhance command.

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use claro_cli::{
    determine_output_path, expand_inputs, process_single_image, OutputNaming, ProcessingParams,
};

/// Execute the batch command over files and directories.
///
/// Inputs are expanded and sorted, then processed in parallel. Failures
/// are reported per file and counted; the command only fails outright
/// when nothing could be processed at all.
pub fn cmd_batch(
    inputs: Vec<PathBuf>,
    recursive: bool,
    out: Option<PathBuf>,
    params: ProcessingParams,
    threads: Option<usize>,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    claro_core::config::set_verbose(verbose);
    if verbose {
        claro_core::config::log_config_usage();
    }

    if inputs.is_empty() {
        return Err("No input files or directories specified".to_string());
    }

    let files = expand_inputs(&inputs, recursive)?;
    if files.is_empty() {
        return Err(format!(
            "No supported image files found (supported: {})",
            claro_cli::SUPPORTED_EXTENSIONS.join(", ")
        ));
    }

    let options = params.resolve()?;

    if let Some(out_dir) = &out {
        std::fs::create_dir_all(out_dir)
            .map_err(|e| format!("Failed to create output directory: {}", e))?;
    }

    if let Some(n) = threads {
        // Best-effort: the global pool may already be initialized
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    }

    if !silent {
        println!("Enhancing {} image(s)...", files.len());
    }

    let succeeded = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    files.par_iter().for_each(|input| {
        let result = determine_output_path(input, &out, OutputNaming::Batch)
            .and_then(|output| process_single_image(input, &output, &options, silent));

        match result {
            Ok(_) => {
                succeeded.fetch_add(1, Ordering::SeqCst);
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::SeqCst);
                eprintln!("Failed {}: {}", input.display(), e);
            }
        }
    });

    let succeeded = succeeded.load(Ordering::SeqCst);
    let failed = failed.load(Ordering::SeqCst);

    if !silent {
        println!(
            "Done: {} succeeded, {} failed in {:.2}s",
            succeeded,
            failed,
            batch_start.elapsed().as_secs_f32()
        );
    }

    if succeeded == 0 {
        return Err("All images failed to process".to_string());
    }

    Ok(())
}
