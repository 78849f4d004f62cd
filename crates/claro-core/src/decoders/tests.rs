//! Tests for image decoders

use super::decode_image;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Write a PNG with the given color type and 8-bit data to a temp path.
fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color: png::ColorType,
    data: &[u8],
) -> PathBuf {
    use std::fs::File;
    use std::io::BufWriter;

    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    writer.finish().unwrap();
    path
}

#[test]
fn test_decode_rgb8_png() {
    let dir = tempdir().unwrap();
    let data: Vec<u8> = (0..2 * 2 * 3).map(|i| (i * 10) as u8).collect();
    let path = write_png(dir.path(), "rgb.png", 2, 2, png::ColorType::Rgb, &data);

    let decoded = decode_image(&path).unwrap();
    assert_eq!(decoded.width, 2);
    assert_eq!(decoded.height, 2);
    assert_eq!(decoded.channels, 3);
    assert!(!decoded.source_had_alpha);
    assert_eq!(decoded.data, data);
    assert_eq!(decoded.data.len(), decoded.expected_len());
}

#[test]
fn test_rgba_normalizes_to_rgb_counterpart() {
    let dir = tempdir().unwrap();

    let rgb: Vec<u8> = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
    let mut rgba = Vec::new();
    for px in rgb.chunks_exact(3) {
        rgba.extend_from_slice(px);
        rgba.push(200); // alpha must be dropped, not blended
    }

    let rgb_path = write_png(dir.path(), "a.png", 2, 2, png::ColorType::Rgb, &rgb);
    let rgba_path = write_png(dir.path(), "b.png", 2, 2, png::ColorType::Rgba, &rgba);

    let from_rgb = decode_image(&rgb_path).unwrap();
    let from_rgba = decode_image(&rgba_path).unwrap();

    assert!(from_rgba.source_had_alpha);
    assert_eq!(from_rgb.data, from_rgba.data);
    assert_eq!(from_rgba.channels, 3);
}

#[test]
fn test_grayscale_png_rejected() {
    let dir = tempdir().unwrap();
    let data = vec![128u8; 4];
    let path = write_png(dir.path(), "gray.png", 2, 2, png::ColorType::Grayscale, &data);

    let err = decode_image(&path).unwrap_err();
    assert!(err.contains("Grayscale"), "unexpected error: {}", err);
}

#[test]
fn test_unsupported_extension_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photo.xyz");
    std::fs::write(&path, b"not an image").unwrap();

    let err = decode_image(&path).unwrap_err();
    assert!(err.contains("Unsupported file format"), "{}", err);
}

#[test]
fn test_missing_extension_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("photo");
    std::fs::write(&path, b"not an image").unwrap();

    assert!(decode_image(&path).is_err());
}

#[test]
fn test_corrupt_png_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    assert!(decode_image(&path).is_err());
}
