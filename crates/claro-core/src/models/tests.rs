//! Tests for enhancement options

use super::*;

#[test]
fn test_default_options() {
    let opts = EnhanceOptions::default();
    assert_eq!(opts.noise_strength, 6);
    assert!((opts.contrast_strength - 2.0).abs() < f32::EPSILON);
    assert!((opts.sharpness - 1.5).abs() < f32::EPSILON);
}

#[test]
fn test_defaults_are_valid() {
    assert!(EnhanceOptions::default().validate().is_ok());
}

#[test]
fn test_clamped_out_of_range() {
    let opts = EnhanceOptions {
        noise_strength: 200,
        contrast_strength: 9.5,
        sharpness: 0.1,
    };

    let clamped = opts.clamped();
    assert_eq!(clamped.noise_strength, 15);
    assert!((clamped.contrast_strength - 4.0).abs() < f32::EPSILON);
    assert!((clamped.sharpness - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_clamped_is_identity_in_range() {
    let opts = EnhanceOptions {
        noise_strength: 10,
        contrast_strength: 3.0,
        sharpness: 2.0,
    };
    assert_eq!(opts.clamped(), opts);
}

#[test]
fn test_clamped_nan_maps_to_minimum() {
    let opts = EnhanceOptions {
        noise_strength: 6,
        contrast_strength: f32::NAN,
        sharpness: f32::NAN,
    };

    let clamped = opts.clamped();
    assert!((clamped.contrast_strength - 1.0).abs() < f32::EPSILON);
    assert!((clamped.sharpness - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_validate_rejects_out_of_range() {
    let opts = EnhanceOptions {
        noise_strength: 16,
        ..Default::default()
    };
    assert!(opts.validate().is_err());

    let opts = EnhanceOptions {
        contrast_strength: 0.5,
        ..Default::default()
    };
    assert!(opts.validate().is_err());

    let opts = EnhanceOptions {
        sharpness: 3.5,
        ..Default::default()
    };
    assert!(opts.validate().is_err());
}

#[test]
fn test_serde_defaults_fill_missing_fields() {
    let opts: EnhanceOptions = serde_yaml::from_str("noise_strength: 3").unwrap();
    assert_eq!(opts.noise_strength, 3);
    assert!((opts.contrast_strength - 2.0).abs() < f32::EPSILON);
    assert!((opts.sharpness - 1.5).abs() < f32::EPSILON);
}
