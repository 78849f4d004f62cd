//! Unsharp-mask sharpening
//!
//! Blurs the image with a Gaussian kernel, then extrapolates away from
//! the blurred copy: `out = image * sharpness + blurred * (1 - sharpness)`.
//! A sharpness of 1.0 degenerates to the identity; values above 1.0
//! amplify high-frequency detail.

/// Standard deviation of the unsharp-mask Gaussian in both axes
pub const UNSHARP_SIGMA: f32 = 1.0;

/// Apply an unsharp mask to interleaved 8-bit RGB data.
///
/// `sharpness` of exactly 1.0 short-circuits to a byte-for-byte copy;
/// the formula is the identity there and skipping the blur keeps it
/// exact instead of exact-up-to-rounding.
pub fn unsharp_mask(data: &[u8], width: usize, height: usize, sharpness: f32) -> Vec<u8> {
    if (sharpness - 1.0).abs() < f32::EPSILON || width == 0 || height == 0 {
        return data.to_vec();
    }
    debug_assert_eq!(data.len(), width * height * 3);

    let blurred = gaussian_blur(data, width, height, UNSHARP_SIGMA);

    data.iter()
        .zip(&blurred)
        .map(|(&orig, &blur)| {
            let v = orig as f32 * sharpness + blur * (1.0 - sharpness);
            v.round().clamp(0.0, 255.0) as u8
        })
        .collect()
}

/// Separable Gaussian blur over interleaved 8-bit RGB data, returning
/// f32 so the unsharp blend keeps sub-integer precision.
///
/// Kernel radius is derived from sigma (3 sigma, the conventional
/// cutoff); borders are reflected.
pub fn gaussian_blur(data: &[u8], width: usize, height: usize, sigma: f32) -> Vec<f32> {
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as i32;

    // Horizontal pass
    let mut horizontal = vec![0f32; data.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sums = [0f32; 3];
            for (k, &weight) in kernel.iter().enumerate() {
                let sx = reflect_coord(x as i32 + k as i32 - radius, width);
                let idx = (y * width + sx) * 3;
                sums[0] += weight * data[idx] as f32;
                sums[1] += weight * data[idx + 1] as f32;
                sums[2] += weight * data[idx + 2] as f32;
            }
            let out = (y * width + x) * 3;
            horizontal[out] = sums[0];
            horizontal[out + 1] = sums[1];
            horizontal[out + 2] = sums[2];
        }
    }

    // Vertical pass
    let mut blurred = vec![0f32; data.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sums = [0f32; 3];
            for (k, &weight) in kernel.iter().enumerate() {
                let sy = reflect_coord(y as i32 + k as i32 - radius, height);
                let idx = (sy * width + x) * 3;
                sums[0] += weight * horizontal[idx];
                sums[1] += weight * horizontal[idx + 1];
                sums[2] += weight * horizontal[idx + 2];
            }
            let out = (y * width + x) * 3;
            blurred[out] = sums[0];
            blurred[out + 1] = sums[1];
            blurred[out + 2] = sums[2];
        }
    }

    blurred
}

/// Build a normalized 1D Gaussian kernel with radius ceil(3 sigma).
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil().max(1.0) as i32;
    let two_sigma2 = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-(i * i) as f32 / two_sigma2).exp())
        .collect();

    let sum: f32 = kernel.iter().sum();
    for w in kernel.iter_mut() {
        *w /= sum;
    }

    kernel
}

/// Reflect an out-of-range coordinate back into [0, len) without
/// repeating the edge sample (reflect-101).
#[inline]
fn reflect_coord(v: i32, len: usize) -> usize {
    let len = len as i32;
    if len == 1 {
        return 0;
    }

    let mut v = v;
    // Kernel radius never exceeds the image period here, so a couple of
    // folds are enough
    while v < 0 || v >= len {
        if v < 0 {
            v = -v;
        }
        if v >= len {
            v = 2 * len - 2 - v;
        }
    }
    v as usize
}
