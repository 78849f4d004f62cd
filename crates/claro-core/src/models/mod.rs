//! Data models for the enhancement pipeline.

mod defaults;
mod enhance_options;

#[cfg(test)]
mod tests;

// Re-export default functions for use in serde attributes
pub(crate) use defaults::{
    default_contrast_strength, default_noise_strength, default_sharpness,
};

pub use enhance_options::{
    EnhanceOptions, CONTRAST_STRENGTH_RANGE, NOISE_STRENGTH_RANGE, SHARPNESS_RANGE,
};
