//! Default value functions for serde.

/// Default noise reduction strength (6)
pub fn default_noise_strength() -> u8 {
    6
}

/// Default CLAHE clip limit (2.0)
pub fn default_contrast_strength() -> f32 {
    2.0
}

/// Default unsharp-mask blend weight (1.5)
pub fn default_sharpness() -> f32 {
    1.5
}
