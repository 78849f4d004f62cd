//! Generic raster decoder for JPEG, BMP, TIFF, and WebP via the `image` crate

use std::path::Path;

use image::DynamicImage;

use super::DecodedImage;

/// Decode a raster image through the `image` crate
pub(crate) fn decode_generic<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let img =
        image::open(path).map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?;

    let source_had_alpha = img.color().has_alpha();

    // Grayscale sources have a channel count the pipeline does not define
    // behavior for; reject rather than guess
    let rgb = match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => {
            return Err(format!(
                "Grayscale image not supported: {} (expected 3 or 4 channels)",
                path.display()
            ));
        }
        // RGB passes through; RGBA drops alpha with color bytes preserved;
        // 16-bit variants reduce to 8 bits
        other => other.into_rgb8(),
    };

    let (width, height) = rgb.dimensions();

    Ok(DecodedImage {
        width,
        height,
        data: rgb.into_raw(),
        channels: 3,
        source_had_alpha,
    })
}
