//! Image exporters
//!
//! Export enhanced images as lossless 8-bit RGB PNG, either to an
//! in-memory byte stream (the downloadable output handed back to the
//! host) or straight to disk.

use std::path::Path;

use crate::pipeline::ProcessedImage;

/// Encode an enhanced image as a PNG byte stream.
///
/// The encoding is lossless: decoding the returned bytes reproduces the
/// exact pixel buffer.
pub fn encode_png(image: &ProcessedImage) -> Result<Vec<u8>, String> {
    if image.channels != 3 {
        return Err(format!(
            "PNG export only supports 3-channel RGB, got {} channels",
            image.channels
        ));
    }

    let expected_len = image.width as usize * image.height as usize * 3;
    if image.data.len() != expected_len {
        return Err(format!(
            "PNG export data length mismatch: expected {}, got {}",
            expected_len,
            image.data.len()
        ));
    }

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, image.width, image.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| format!("Failed to write PNG header: {}", e))?;
        writer
            .write_image_data(&image.data)
            .map_err(|e| format!("Failed to write PNG data: {}", e))?;
        writer
            .finish()
            .map_err(|e| format!("Failed to finish PNG stream: {}", e))?;
    }

    Ok(bytes)
}

/// Export an enhanced image to a PNG file
pub fn export_png<P: AsRef<Path>>(image: &ProcessedImage, path: P) -> Result<(), String> {
    let bytes = encode_png(image)?;
    std::fs::write(path.as_ref(), bytes).map_err(|e| {
        format!(
            "Failed to write PNG file {}: {}",
            path.as_ref().display(),
            e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::decode_image;
    use tempfile::tempdir;

    fn create_test_image(width: u32, height: u32) -> ProcessedImage {
        let data: Vec<u8> = (0..width as usize * height as usize * 3)
            .map(|i| (i * 13 % 256) as u8)
            .collect();
        ProcessedImage {
            width,
            height,
            data,
            channels: 3,
        }
    }

    #[test]
    fn test_encode_png_produces_valid_stream() {
        let image = create_test_image(5, 4);
        let bytes = encode_png(&image).unwrap();

        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_round_trip_is_lossless() {
        let dir = tempdir().unwrap();
        let image = create_test_image(7, 9);
        let path = dir.path().join("out.png");

        export_png(&image, &path).unwrap();
        let decoded = decode_image(&path).unwrap();

        assert_eq!(decoded.width, image.width);
        assert_eq!(decoded.height, image.height);
        assert_eq!(decoded.data, image.data);
    }

    #[test]
    fn test_export_rejects_wrong_channel_count() {
        let mut image = create_test_image(4, 4);
        image.channels = 4;
        assert!(encode_png(&image).is_err());
    }

    #[test]
    fn test_export_rejects_length_mismatch() {
        let mut image = create_test_image(4, 4);
        image.data.pop();
        assert!(encode_png(&image).is_err());
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let image = create_test_image(4, 4);
        let path = dir.path().join("nope").join("out.png");
        assert!(export_png(&image, &path).is_err());
    }
}
