//! Input expansion, output naming, and single-image processing.

use std::path::{Path, PathBuf};

use claro_core::{decoders, exporters, pipeline, EnhanceOptions, DEFAULT_OUTPUT_FILENAME};

/// Supported image extensions for input expansion
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

/// How output files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputNaming {
    /// Single-image mode: the canonical `enhanced_color_image.png`
    Single,
    /// Batch mode: `{stem}_enhanced.png`, so outputs cannot collide
    Batch,
}

/// Determine the output path for an input image.
///
/// If `out` is a directory the file is placed inside it; if it is a file
/// path it is used as-is; if absent the file lands next to the input.
pub fn determine_output_path(
    input: &Path,
    out: &Option<PathBuf>,
    naming: OutputNaming,
) -> Result<PathBuf, String> {
    let filename = match naming {
        OutputNaming::Single => DEFAULT_OUTPUT_FILENAME.to_string(),
        OutputNaming::Batch => {
            let stem = input
                .file_stem()
                .ok_or("Invalid input filename")?
                .to_string_lossy();
            format!("{}_enhanced.png", stem)
        }
    };

    if let Some(out_path) = out {
        if out_path.is_dir() {
            Ok(out_path.join(filename))
        } else {
            // Use the specified path as-is
            Ok(out_path.clone())
        }
    } else {
        let parent = input.parent().unwrap_or(Path::new("."));
        Ok(parent.join(filename))
    }
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files. If `recursive` is
/// true, subdirectories are also scanned.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() && recursive {
            collect_images_from_dir(&path, recursive, files)?;
        } else if path.is_file() {
            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
    }

    Ok(())
}

/// Decode, enhance, and export a single image.
///
/// Returns the written output path.
pub fn process_single_image(
    input: &Path,
    output: &Path,
    options: &EnhanceOptions,
    silent: bool,
) -> Result<PathBuf, String> {
    let decoded = decoders::decode_image(input)?;

    if !silent {
        println!(
            "  {} ({}x{}{})",
            input.display(),
            decoded.width,
            decoded.height,
            if decoded.source_had_alpha {
                ", alpha dropped"
            } else {
                ""
            }
        );
    }

    let processed = pipeline::process_image(decoded, options)?;
    exporters::export_png(&processed, output)?;

    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_single_default_name() {
        let path =
            determine_output_path(Path::new("/photos/shot.jpg"), &None, OutputNaming::Single)
                .unwrap();
        assert_eq!(path, PathBuf::from("/photos/enhanced_color_image.png"));
    }

    #[test]
    fn test_output_path_batch_uses_stem() {
        let path =
            determine_output_path(Path::new("/photos/shot.jpg"), &None, OutputNaming::Batch)
                .unwrap();
        assert_eq!(path, PathBuf::from("/photos/shot_enhanced.png"));
    }

    #[test]
    fn test_output_path_explicit_file() {
        let out = Some(PathBuf::from("/tmp/result.png"));
        let path =
            determine_output_path(Path::new("shot.png"), &out, OutputNaming::Single).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/result.png"));
    }

    #[test]
    fn test_output_path_directory_target() {
        let dir = tempdir().unwrap();
        let out = Some(dir.path().to_path_buf());

        let single =
            determine_output_path(Path::new("shot.jpg"), &out, OutputNaming::Single).unwrap();
        assert_eq!(single, dir.path().join("enhanced_color_image.png"));

        let batch =
            determine_output_path(Path::new("shot.jpg"), &out, OutputNaming::Batch).unwrap();
        assert_eq!(batch, dir.path().join("shot_enhanced.png"));
    }

    #[test]
    fn test_expand_inputs_filters_and_sorts() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.png"), b"").unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let files = expand_inputs(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.jpg"));
        assert!(files[1].ends_with("b.png"));
    }

    #[test]
    fn test_expand_inputs_recursive() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("deep.png"), b"").unwrap();

        let flat = expand_inputs(&[dir.path().to_path_buf()], false).unwrap();
        assert!(flat.is_empty());

        let recursive = expand_inputs(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(recursive.len(), 1);
    }

    #[test]
    fn test_expand_inputs_missing_path_is_error() {
        let missing = PathBuf::from("/nonexistent/input.png");
        assert!(expand_inputs(&[missing], false).is_err());
    }
}
