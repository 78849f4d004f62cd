//! Parameter types shared between the CLI commands.

use std::path::PathBuf;

use claro_core::{config, presets, EnhanceOptions};

/// Raw enhancement parameters as collected from the command line.
///
/// `None` means "not specified" and falls back to the preset file (when
/// given) and then the configured defaults.
#[derive(Debug, Clone, Default)]
pub struct ProcessingParams {
    /// Noise reduction strength override (0-15)
    pub noise: Option<u8>,

    /// Local contrast clip limit override (1.0-4.0)
    pub contrast: Option<f32>,

    /// Sharpening weight override (1.0-3.0)
    pub sharpness: Option<f32>,

    /// Optional preset file providing base values
    pub preset: Option<PathBuf>,
}

impl ProcessingParams {
    /// Resolve the effective enhancement options.
    ///
    /// Precedence: explicit flags > preset file > config-file defaults >
    /// built-in defaults. The result is validated so out-of-range flag
    /// values are reported instead of silently clamped.
    pub fn resolve(&self) -> Result<EnhanceOptions, String> {
        let mut options = match &self.preset {
            Some(path) => presets::load_preset(path)?,
            None => config::default_options(),
        };

        if let Some(noise) = self.noise {
            options.noise_strength = noise;
        }
        if let Some(contrast) = self.contrast {
            options.contrast_strength = contrast;
        }
        if let Some(sharpness) = self.sharpness {
            options.sharpness = sharpness;
        }

        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_without_overrides() {
        let params = ProcessingParams::default();
        let options = params.resolve().unwrap();
        assert_eq!(options, EnhanceOptions::default());
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let params = ProcessingParams {
            noise: Some(0),
            contrast: Some(3.5),
            sharpness: None,
            preset: None,
        };

        let options = params.resolve().unwrap();
        assert_eq!(options.noise_strength, 0);
        assert!((options.contrast_strength - 3.5).abs() < f32::EPSILON);
        assert!((options.sharpness - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resolve_rejects_out_of_range_override() {
        let params = ProcessingParams {
            contrast: Some(10.0),
            ..Default::default()
        };
        assert!(params.resolve().is_err());
    }

    #[test]
    fn test_resolve_missing_preset_is_error() {
        let params = ProcessingParams {
            preset: Some(PathBuf::from("/nonexistent/preset.yml")),
            ..Default::default()
        };
        assert!(params.resolve().is_err());
    }
}
