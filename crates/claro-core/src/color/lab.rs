//! LAB (CIE L*a*b*) color space conversions, quantized to 8 bits

/// 8-bit quantized LAB color representation (CIE L*a*b*, D65)
/// - l: 0-255 (lightness 0-100 scaled by 255/100)
/// - a: 0-255 (green-red axis, offset by +128)
/// - b: 0-255 (blue-yellow axis, offset by +128)
///
/// This is the quantization used by mainstream CV libraries for 8-bit
/// images; it keeps the lightness channel addressable with a 256-bin
/// histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lab8 {
    pub l: u8,
    pub a: u8,
    pub b: u8,
}

/// D65 standard illuminant reference white point
const D65_X: f32 = 0.95047;
const D65_Y: f32 = 1.00000;
const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.119_192, 0.9503041],
];

/// XYZ to sRGB matrix (D65)
const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.969_266, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// LAB f(t) function
#[inline]
fn lab_f(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    const DELTA_CUBED: f32 = DELTA * DELTA * DELTA; // ~0.008856

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// LAB f^-1(t) inverse function
#[inline]
fn lab_f_inv(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;

    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// Convert RGB (0.0-1.0) to floating-point LAB (D65 illuminant)
///
/// Output: L is 0-100, a and b are approximately -128 to +128
#[inline]
fn rgb_to_lab_f32(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let r = r.max(0.0);
    let g = g.max(0.0);
    let b = b.max(0.0);

    // RGB to XYZ
    let m = &SRGB_TO_XYZ;
    let x = m[0][0] * r + m[0][1] * g + m[0][2] * b;
    let y = m[1][0] * r + m[1][1] * g + m[1][2] * b;
    let z = m[2][0] * r + m[2][1] * g + m[2][2] * b;

    // Normalize by reference white
    let xn = x / D65_X;
    let yn = y / D65_Y;
    let zn = z / D65_Z;

    // Apply LAB f function
    let fx = lab_f(xn);
    let fy = lab_f(yn);
    let fz = lab_f(zn);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    (l, a, b)
}

/// Convert floating-point LAB (D65 illuminant) back to RGB (0.0-1.0)
///
/// Output may fall outside 0.0-1.0 for out-of-gamut colors; callers are
/// expected to clamp when quantizing.
#[inline]
fn lab_f32_to_rgb(l: f32, a: f32, b: f32) -> (f32, f32, f32) {
    // LAB to XYZ
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = D65_X * lab_f_inv(fx);
    let y = D65_Y * lab_f_inv(fy);
    let z = D65_Z * lab_f_inv(fz);

    // XYZ to RGB
    let m = &XYZ_TO_SRGB;
    let r = m[0][0] * x + m[0][1] * y + m[0][2] * z;
    let g = m[1][0] * x + m[1][1] * y + m[1][2] * z;
    let b = m[2][0] * x + m[2][1] * y + m[2][2] * z;
    (r, g, b)
}

/// Convert an 8-bit RGB pixel to 8-bit quantized LAB
#[inline]
pub fn rgb8_to_lab8(r: u8, g: u8, b: u8) -> Lab8 {
    let (l, a, bb) = rgb_to_lab_f32(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);

    Lab8 {
        l: (l * 255.0 / 100.0).round().clamp(0.0, 255.0) as u8,
        a: (a + 128.0).round().clamp(0.0, 255.0) as u8,
        b: (bb + 128.0).round().clamp(0.0, 255.0) as u8,
    }
}

/// Convert an 8-bit quantized LAB pixel back to 8-bit RGB
#[inline]
pub fn lab8_to_rgb8(lab: Lab8) -> (u8, u8, u8) {
    let l = lab.l as f32 * 100.0 / 255.0;
    let a = lab.a as f32 - 128.0;
    let b = lab.b as f32 - 128.0;

    let (r, g, bb) = lab_f32_to_rgb(l, a, b);

    (
        (r * 255.0).round().clamp(0.0, 255.0) as u8,
        (g * 255.0).round().clamp(0.0, 255.0) as u8,
        (bb * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Split interleaved 8-bit RGB data into separate L, a, b planes
///
/// Data is interleaved RGB triplets; output planes each hold one value
/// per pixel.
pub fn rgb_to_lab_planes(data: &[u8]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let pixels = data.len() / 3;
    let mut l_plane = Vec::with_capacity(pixels);
    let mut a_plane = Vec::with_capacity(pixels);
    let mut b_plane = Vec::with_capacity(pixels);

    for rgb in data.chunks_exact(3) {
        let lab = rgb8_to_lab8(rgb[0], rgb[1], rgb[2]);
        l_plane.push(lab.l);
        a_plane.push(lab.a);
        b_plane.push(lab.b);
    }

    (l_plane, a_plane, b_plane)
}

/// Merge L, a, b planes back into interleaved 8-bit RGB data
///
/// The planes must have equal lengths.
pub fn lab_planes_to_rgb(l_plane: &[u8], a_plane: &[u8], b_plane: &[u8]) -> Vec<u8> {
    debug_assert_eq!(l_plane.len(), a_plane.len());
    debug_assert_eq!(l_plane.len(), b_plane.len());

    let mut result = Vec::with_capacity(l_plane.len() * 3);
    for i in 0..l_plane.len() {
        let (r, g, b) = lab8_to_rgb8(Lab8 {
            l: l_plane[i],
            a: a_plane[i],
            b: b_plane[i],
        });
        result.push(r);
        result.push(g);
        result.push(b);
    }

    result
}
