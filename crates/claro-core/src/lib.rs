//! Claro Core Library
//!
//! Core functionality for captured-photo enhancement: non-local-means
//! denoising, CLAHE local contrast on the lightness channel, and
//! unsharp-mask sharpening, with lossless PNG output.

pub mod color;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod models;
pub mod pipeline;
pub mod presets;

// Re-export commonly used types
pub use color::Lab8;
pub use decoders::DecodedImage;
pub use models::EnhanceOptions;
pub use pipeline::{process_image, ProcessedImage};

/// Default file name for the enhanced output image.
pub const DEFAULT_OUTPUT_FILENAME: &str = "enhanced_color_image.png";
