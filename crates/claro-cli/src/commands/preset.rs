//! Preset management commands.

use std::path::{Path, PathBuf};

use claro_cli::ProcessingParams;
use claro_core::presets::{load_preset, save_preset, validate_preset_name};

/// Create a preset file from the given parameter values.
///
/// The preset is written as `{name}.yml` inside `dir` (or the working
/// directory); the name is validated against path traversal.
pub fn cmd_preset_create(
    name: String,
    dir: Option<PathBuf>,
    params: ProcessingParams,
) -> Result<(), String> {
    validate_preset_name(&name)?;

    let options = params.resolve()?;
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(format!("{}.yml", name));

    save_preset(&options, &path)?;
    println!("Preset written to {}", path.display());
    Ok(())
}

/// Show the effective parameter values stored in a preset file.
pub fn cmd_preset_show(preset: PathBuf) -> Result<(), String> {
    let options = load_preset(Path::new(&preset))?;

    println!("Preset {}:", preset.display());
    println!("  noise_strength:    {}", options.noise_strength);
    println!("  contrast_strength: {}", options.contrast_strength);
    println!("  sharpness:         {}", options.sharpness);
    Ok(())
}
