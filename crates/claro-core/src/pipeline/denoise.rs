//! Non-local-means color denoising
//!
//! Averages pixels whose surrounding patches look alike across a local
//! search window, which suppresses sensor noise while keeping edges far
//! better than a plain blur. The filter strength applies to all three
//! channels; patch similarity is measured over the full RGB patch.

use rayon::prelude::*;

/// Patch (template) window side length
pub const NLM_TEMPLATE_WINDOW: usize = 7;

/// Search neighborhood side length
pub const NLM_SEARCH_WINDOW: usize = 21;

/// Denoise interleaved 8-bit RGB data with non-local means.
///
/// `strength` is the filter parameter `h`; 0 skips the filter entirely
/// and returns the input bytes unchanged. Patches are 7x7, searched
/// within a 21x21 neighborhood, with replicated borders.
pub fn denoise_nlm(data: &[u8], width: usize, height: usize, strength: u8) -> Vec<u8> {
    if strength == 0 || width == 0 || height == 0 {
        return data.to_vec();
    }
    debug_assert_eq!(data.len(), width * height * 3);

    let h = strength as f32;
    let h2 = h * h;
    let patch_half = (NLM_TEMPLATE_WINDOW / 2) as i32;
    let search_half = (NLM_SEARCH_WINDOW / 2) as i32;
    let pixels = width * height;

    let offsets: Vec<(i32, i32)> = (-search_half..=search_half)
        .flat_map(|dy| (-search_half..=search_half).map(move |dx| (dx, dy)))
        .collect();

    // Each search offset contributes weight(p, p+o) * I(p+o) to every
    // pixel p. The patch distance for one offset is computed over the
    // whole image at once through a summed-area table of per-pixel
    // squared differences, instead of re-walking the 7x7 patch for every
    // pixel pair. Offsets are processed in parallel and their partial
    // sums merged.
    let (weight_sum, acc) = offsets
        .par_iter()
        .fold(
            || (vec![0f32; pixels], vec![0f32; pixels * 3]),
            |(mut wsum, mut acc), &(dx, dy)| {
                accumulate_offset(
                    data, width, height, dx, dy, h2, patch_half, &mut wsum, &mut acc,
                );
                (wsum, acc)
            },
        )
        .reduce(
            || (vec![0f32; pixels], vec![0f32; pixels * 3]),
            |(mut wsum_a, mut acc_a), (wsum_b, acc_b)| {
                for (dst, src) in wsum_a.iter_mut().zip(&wsum_b) {
                    *dst += src;
                }
                for (dst, src) in acc_a.iter_mut().zip(&acc_b) {
                    *dst += src;
                }
                (wsum_a, acc_a)
            },
        );

    let mut out = Vec::with_capacity(data.len());
    for p in 0..pixels {
        let wsum = weight_sum[p];
        for c in 0..3 {
            let v = if wsum > 0.0 {
                acc[p * 3 + c] / wsum
            } else {
                data[p * 3 + c] as f32
            };
            out.push(v.round().clamp(0.0, 255.0) as u8);
        }
    }

    out
}

/// Clamp a coordinate to [0, len), replicating the border.
#[inline]
fn clamp_coord(v: i32, len: usize) -> usize {
    v.clamp(0, len as i32 - 1) as usize
}

/// Accumulate one search offset's weighted contribution into the
/// per-pixel weight and value sums.
#[allow(clippy::too_many_arguments)]
fn accumulate_offset(
    data: &[u8],
    width: usize,
    height: usize,
    dx: i32,
    dy: i32,
    h2: f32,
    patch_half: i32,
    weight_sum: &mut [f32],
    acc: &mut [f32],
) {
    let pixels = width * height;

    // Per-pixel squared 3-channel difference against the offset neighbor
    let mut diff2 = vec![0f32; pixels];
    for y in 0..height {
        let ny = clamp_coord(y as i32 + dy, height);
        for x in 0..width {
            let nx = clamp_coord(x as i32 + dx, width);
            let idx = (y * width + x) * 3;
            let nidx = (ny * width + nx) * 3;

            let dr = data[idx] as f32 - data[nidx] as f32;
            let dg = data[idx + 1] as f32 - data[nidx + 1] as f32;
            let db = data[idx + 2] as f32 - data[nidx + 2] as f32;
            diff2[y * width + x] = dr * dr + dg * dg + db * db;
        }
    }

    // Summed-area table, f64 to keep precision over large images
    let iw = width + 1;
    let mut sat = vec![0f64; iw * (height + 1)];
    for y in 0..height {
        let mut row_sum = 0f64;
        for x in 0..width {
            row_sum += diff2[y * width + x] as f64;
            sat[(y + 1) * iw + (x + 1)] = sat[y * iw + (x + 1)] + row_sum;
        }
    }

    for y in 0..height {
        let y0 = (y as i32 - patch_half).max(0) as usize;
        let y1 = ((y as i32 + patch_half) as usize + 1).min(height);
        let ny = clamp_coord(y as i32 + dy, height);

        for x in 0..width {
            let x0 = (x as i32 - patch_half).max(0) as usize;
            let x1 = ((x as i32 + patch_half) as usize + 1).min(width);
            let nx = clamp_coord(x as i32 + dx, width);

            let box_sum = sat[y1 * iw + x1] - sat[y0 * iw + x1] - sat[y1 * iw + x0]
                + sat[y0 * iw + x0];
            let cells = ((x1 - x0) * (y1 - y0) * 3) as f32;
            let dist = box_sum as f32 / cells;

            let weight = (-dist / h2).exp();

            let p = y * width + x;
            let nidx = (ny * width + nx) * 3;
            weight_sum[p] += weight;
            acc[p * 3] += weight * data[nidx] as f32;
            acc[p * 3 + 1] += weight * data[nidx + 1] as f32;
            acc[p * 3 + 2] += weight * data[nidx + 2] as f32;
        }
    }
}
