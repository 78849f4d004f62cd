//! Runtime configuration.
//!
//! Provides the global verbose flag used for debug output and an
//! optional on-disk defaults file for the enhancement parameters.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::models::EnhanceOptions;

// Global verbose flag for controlling debug output
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set the global verbose flag. When true, debug messages will be printed.
pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::SeqCst);
}

/// Check if verbose mode is enabled.
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Print a message to stderr only if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if $crate::config::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Candidate config file names searched in the working directory.
const CONFIG_FILENAMES: &[&str] = &["claro.yml", "claro.yaml"];

/// Configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Default enhancement parameters applied when the caller does not
    /// override them
    pub defaults: EnhanceOptions,
}

/// Loaded configuration together with its source path and any warnings
/// raised while reading it.
pub struct AppConfigHandle {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// Get the process-wide configuration, loading it on first use.
///
/// A malformed config file is a warning, not a fatal error: defaults are
/// used and the problem is reported through the handle.
pub fn config_handle() -> &'static AppConfigHandle {
    static HANDLE: OnceLock<AppConfigHandle> = OnceLock::new();
    HANDLE.get_or_init(load_config)
}

/// Default enhancement options, honoring the config file when present.
pub fn default_options() -> EnhanceOptions {
    config_handle().config.defaults.clamped()
}

/// Log where the configuration came from (verbose mode only).
pub fn log_config_usage() {
    let handle = config_handle();
    match &handle.source {
        Some(path) => verbose_println!("[claro] config loaded from {}", path.display()),
        None => verbose_println!("[claro] no config file found, using built-in defaults"),
    }
    for warning in &handle.warnings {
        eprintln!("[WARN] {}", warning);
    }
}

fn load_config() -> AppConfigHandle {
    let mut warnings = Vec::new();

    for name in CONFIG_FILENAMES {
        let path = Path::new(name);
        if !path.exists() {
            continue;
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match parse_config(&contents) {
                Ok(config) => {
                    return AppConfigHandle {
                        config,
                        source: Some(path.to_path_buf()),
                        warnings,
                    };
                }
                Err(e) => warnings.push(format!("Ignoring {}: {}", name, e)),
            },
            Err(e) => warnings.push(format!("Failed to read {}: {}", name, e)),
        }
    }

    AppConfigHandle {
        config: AppConfig::default(),
        source: None,
        warnings,
    }
}

/// Parse config file contents.
fn parse_config(contents: &str) -> Result<AppConfig, String> {
    serde_yaml::from_str(contents).map_err(|e| format!("invalid config: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.defaults, EnhanceOptions::default());
    }

    #[test]
    fn test_parse_partial_defaults() {
        let config = parse_config("defaults:\n  noise_strength: 9\n").unwrap();
        assert_eq!(config.defaults.noise_strength, 9);
        assert!((config.defaults.sharpness - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_malformed_config_is_error() {
        assert!(parse_config("defaults: [not a map").is_err());
    }
}
