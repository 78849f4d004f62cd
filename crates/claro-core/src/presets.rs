//! Parameter preset management
//!
//! Load and save named enhancement parameter presets as YAML files.

use std::path::Path;

use crate::models::EnhanceOptions;

/// Validate a preset name to prevent path traversal attacks.
/// Rejects names containing path separators, "..", or other dangerous patterns.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }

    // Reject path separators
    if name.contains('/') || name.contains('\\') {
        return Err("Preset name cannot contain path separators".to_string());
    }

    // Reject parent directory references
    if name.contains("..") {
        return Err("Preset name cannot contain '..'".to_string());
    }

    // Reject names that start with a dot (hidden files)
    if name.starts_with('.') {
        return Err("Preset name cannot start with '.'".to_string());
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err("Preset name cannot contain null bytes".to_string());
    }

    Ok(())
}

/// Load an enhancement preset from a YAML file
pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<EnhanceOptions, String> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read preset file: {}", e))?;

    let options: EnhanceOptions = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse preset YAML: {}", e))?;

    options.validate()?;
    Ok(options)
}

/// Save an enhancement preset to a YAML file
pub fn save_preset<P: AsRef<Path>>(options: &EnhanceOptions, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let yaml =
        serde_yaml::to_string(options).map_err(|e| format!("Failed to serialize preset: {}", e))?;

    std::fs::write(path, yaml).map_err(|e| format!("Failed to write preset file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_preset_name_accepts_plain_names() {
        assert!(validate_preset_name("low-light").is_ok());
        assert!(validate_preset_name("portrait_soft").is_ok());
    }

    #[test]
    fn test_validate_preset_name_rejects_traversal() {
        assert!(validate_preset_name("").is_err());
        assert!(validate_preset_name("../evil").is_err());
        assert!(validate_preset_name("a/b").is_err());
        assert!(validate_preset_name("a\\b").is_err());
        assert!(validate_preset_name(".hidden").is_err());
        assert!(validate_preset_name("nul\0byte").is_err());
    }

    #[test]
    fn test_preset_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("night.yml");

        let options = EnhanceOptions {
            noise_strength: 12,
            contrast_strength: 3.0,
            sharpness: 1.2,
        };

        save_preset(&options, &path).unwrap();
        let loaded = load_preset(&path).unwrap();
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_preset_rejects_out_of_range_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "noise_strength: 99\n").unwrap();

        assert!(load_preset(&path).is_err());
    }

    #[test]
    fn test_load_preset_missing_file_is_error() {
        assert!(load_preset("/nonexistent/preset.yml").is_err());
    }
}
