//! Image enhancement pipeline
//!
//! Fixed-order enhancement for a single captured frame:
//! denoise (non-local means) -> local contrast (CLAHE on the lightness
//! channel) -> sharpen (unsharp mask). Pure and stateless; one
//! invocation consumes one decoded image and produces one enhanced
//! image of identical dimensions.
//!
//! This module is organized into submodules:
//! - `denoise`: Non-local-means color denoising
//! - `contrast`: Contrast-limited adaptive histogram equalization
//! - `sharpen`: Gaussian blur and unsharp masking

mod contrast;
mod denoise;
mod sharpen;


// Re-export public items from submodules
pub use contrast::{apply_clahe, CLAHE_TILES_X, CLAHE_TILES_Y};
pub use denoise::{denoise_nlm, NLM_SEARCH_WINDOW, NLM_TEMPLATE_WINDOW};
pub use sharpen::{gaussian_blur, unsharp_mask, UNSHARP_SIGMA};

use crate::color::{lab_planes_to_rgb, rgb_to_lab_planes};
use crate::decoders::DecodedImage;
use crate::models::EnhanceOptions;
use crate::verbose_println;

/// Result of the enhancement pipeline
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Image width
    pub width: u32,

    /// Image height
    pub height: u32,

    /// Enhanced interleaved 8-bit RGB data
    pub data: Vec<u8>,

    /// Number of channels (always 3)
    pub channels: u8,
}

/// Execute the full enhancement pipeline
///
/// Stages run in fixed order, each stage's output feeding the next:
/// 1. Non-local-means denoise (skipped when `noise_strength` is 0)
/// 2. RGB -> LAB conversion
/// 3. CLAHE on the lightness channel (8x8 tile grid, clip limit
///    `contrast_strength`)
/// 4. LAB -> RGB recombination with unmodified chrominance
/// 5. Unsharp mask with blend weight `sharpness`
///
/// Options are clamped to their documented ranges before use. The input
/// must be 3-channel 8-bit RGB (the decoders guarantee this); anything
/// else is reported as an input-format error.
pub fn process_image(
    image: DecodedImage,
    options: &EnhanceOptions,
) -> Result<ProcessedImage, String> {
    if image.channels != 3 {
        return Err(format!(
            "Pipeline requires 3-channel RGB input, got {} channels",
            image.channels
        ));
    }
    if image.data.len() != image.expected_len() {
        return Err(format!(
            "Image data length {} does not match {}x{}x3",
            image.data.len(),
            image.width,
            image.height
        ));
    }

    let options = options.clamped();
    let width = image.width as usize;
    let height = image.height as usize;

    // Stage 1: noise reduction
    let denoised = denoise_nlm(&image.data, width, height, options.noise_strength);
    verbose_println!(
        "[claro] denoise done (strength {})",
        options.noise_strength
    );

    // Stages 2-4: equalize lightness only, leaving chrominance untouched
    let (l_plane, a_plane, b_plane) = rgb_to_lab_planes(&denoised);
    let l_plane = apply_clahe(
        &l_plane,
        width,
        height,
        CLAHE_TILES_X,
        CLAHE_TILES_Y,
        options.contrast_strength,
    );
    let recombined = lab_planes_to_rgb(&l_plane, &a_plane, &b_plane);
    verbose_println!(
        "[claro] local contrast done (clip limit {})",
        options.contrast_strength
    );

    // Stage 5: sharpening
    let data = unsharp_mask(&recombined, width, height, options.sharpness);
    verbose_println!("[claro] sharpen done (weight {})", options.sharpness);

    Ok(ProcessedImage {
        width: image.width,
        height: image.height,
        data,
        channels: 3,
    })
}
