//! Color conversions for the enhancement pipeline.
//!
//! Provides RGB <-> CIE L*a*b* conversions quantized to 8 bits, so the
//! lightness channel can be histogram-equalized with 256 bins while the
//! two chrominance channels pass through untouched.

mod lab;


// Re-export primary types
pub use lab::Lab8;

// Re-export LAB functions
pub use lab::{lab8_to_rgb8, lab_planes_to_rgb, rgb8_to_lab8, rgb_to_lab_planes};
