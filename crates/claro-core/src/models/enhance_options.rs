//! Enhancement options for the processing pipeline.

use serde::{Deserialize, Serialize};

use super::{default_contrast_strength, default_noise_strength, default_sharpness};

/// Valid range for `noise_strength` (inclusive). 0 disables denoising.
pub const NOISE_STRENGTH_RANGE: (u8, u8) = (0, 15);

/// Valid range for `contrast_strength` (inclusive).
pub const CONTRAST_STRENGTH_RANGE: (f32, f32) = (1.0, 4.0);

/// Valid range for `sharpness` (inclusive). 1.0 leaves the image unchanged.
pub const SHARPNESS_RANGE: (f32, f32) = (1.0, 3.0);

/// Enhancement options for the processing pipeline
///
/// Three independent scalar controls, each clamped to a fixed range.
/// The host UI is expected to deliver in-range values; `clamped` exists
/// as a defensive normalization and `validate` for callers that prefer
/// to reject out-of-range input outright.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhanceOptions {
    /// Non-local-means filter strength for all channels (0-15).
    /// 0 skips the denoise stage entirely.
    #[serde(default = "default_noise_strength")]
    pub noise_strength: u8,

    /// CLAHE clip limit for the lightness channel (1.0-4.0)
    #[serde(default = "default_contrast_strength")]
    pub contrast_strength: f32,

    /// Unsharp-mask blend weight (1.0-3.0)
    #[serde(default = "default_sharpness")]
    pub sharpness: f32,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            noise_strength: default_noise_strength(),
            contrast_strength: default_contrast_strength(),
            sharpness: default_sharpness(),
        }
    }
}

impl EnhanceOptions {
    /// Return a copy with every parameter clamped to its documented range.
    ///
    /// Out-of-range values are clamped, never wrapped. NaN is treated as
    /// the parameter's minimum.
    pub fn clamped(&self) -> Self {
        Self {
            noise_strength: self
                .noise_strength
                .clamp(NOISE_STRENGTH_RANGE.0, NOISE_STRENGTH_RANGE.1),
            contrast_strength: clamp_f32(
                self.contrast_strength,
                CONTRAST_STRENGTH_RANGE.0,
                CONTRAST_STRENGTH_RANGE.1,
            ),
            sharpness: clamp_f32(self.sharpness, SHARPNESS_RANGE.0, SHARPNESS_RANGE.1),
        }
    }

    /// Check that every parameter is inside its documented range.
    pub fn validate(&self) -> Result<(), String> {
        if self.noise_strength > NOISE_STRENGTH_RANGE.1 {
            return Err(format!(
                "noise_strength {} out of range {}-{}",
                self.noise_strength, NOISE_STRENGTH_RANGE.0, NOISE_STRENGTH_RANGE.1
            ));
        }

        if !self.contrast_strength.is_finite()
            || self.contrast_strength < CONTRAST_STRENGTH_RANGE.0
            || self.contrast_strength > CONTRAST_STRENGTH_RANGE.1
        {
            return Err(format!(
                "contrast_strength {} out of range {}-{}",
                self.contrast_strength, CONTRAST_STRENGTH_RANGE.0, CONTRAST_STRENGTH_RANGE.1
            ));
        }

        if !self.sharpness.is_finite()
            || self.sharpness < SHARPNESS_RANGE.0
            || self.sharpness > SHARPNESS_RANGE.1
        {
            return Err(format!(
                "sharpness {} out of range {}-{}",
                self.sharpness, SHARPNESS_RANGE.0, SHARPNESS_RANGE.1
            ));
        }

        Ok(())
    }
}

/// Clamp with NaN mapped to the minimum instead of propagating.
fn clamp_f32(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
