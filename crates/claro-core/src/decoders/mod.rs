//! Image decoders for common capture formats
//!
//! Support for PNG via the `png` crate and JPEG/BMP/TIFF/WebP via the
//! `image` crate. All decoders normalize to interleaved 8-bit RGB:
//! an alpha channel is dropped (color bytes preserved, not blended)
//! and 16-bit sources are reduced to 8 bits. Channel counts other than
//! 3 or 4 are an input-format error.

mod generic;
mod png;

#[cfg(test)]
mod tests;

use std::path::Path;

/// Decoded image data, normalized to 3-channel 8-bit RGB
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved 8-bit RGB data
    pub data: Vec<u8>,

    /// Number of channels (always 3 after channel normalization)
    pub channels: u8,

    /// Whether the source image carried an alpha channel that was dropped
    pub source_had_alpha: bool,
}

impl DecodedImage {
    /// Expected data length for the stated dimensions.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.channels as usize
    }
}

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<DecodedImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        "jpg" | "jpeg" | "bmp" | "tif" | "tiff" | "webp" => generic::decode_generic(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}
