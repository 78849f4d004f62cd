//! Contrast-limited adaptive histogram equalization (CLAHE)
//!
//! Applied to the lightness channel only. The channel is divided into a
//! tile grid; each tile gets its own clipped-histogram equalization
//! mapping, and pixels are remapped with bilinear interpolation between
//! the four surrounding tile mappings to avoid block boundary artifacts.

/// Horizontal tile count
pub const CLAHE_TILES_X: usize = 8;

/// Vertical tile count
pub const CLAHE_TILES_Y: usize = 8;

/// Equalize a single 8-bit channel with contrast-limited adaptive
/// histogram equalization.
///
/// `clip_limit` caps the equalization gain: each tile's histogram bins
/// are clipped at `clip_limit` times the uniform bin height and the
/// excess redistributed, which keeps flat regions from being amplified
/// into noise. Degenerate geometry (zero dimensions, or tiles smaller
/// than one pixel) returns the channel unchanged.
pub fn apply_clahe(
    plane: &[u8],
    width: usize,
    height: usize,
    tiles_x: usize,
    tiles_y: usize,
    clip_limit: f32,
) -> Vec<u8> {
    if width == 0 || height == 0 || tiles_x == 0 || tiles_y == 0 {
        return plane.to_vec();
    }
    let tile_w = width / tiles_x;
    let tile_h = height / tiles_y;
    if tile_w == 0 || tile_h == 0 {
        return plane.to_vec();
    }
    debug_assert_eq!(plane.len(), width * height);

    // Per-tile clipped histogram -> CDF -> remap LUT. The last tile in
    // each direction absorbs the remainder rows/columns.
    let mut luts = vec![[0u8; 256]; tiles_x * tiles_y];

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * tile_w;
            let y0 = ty * tile_h;
            let x1 = if tx == tiles_x - 1 { width } else { x0 + tile_w };
            let y1 = if ty == tiles_y - 1 { height } else { y0 + tile_h };
            let tile_pixels = (x1 - x0) * (y1 - y0);

            let mut hist = [0f32; 256];
            for row in y0..y1 {
                for col in x0..x1 {
                    hist[plane[row * width + col] as usize] += 1.0;
                }
            }

            clip_histogram(&mut hist, clip_limit, tile_pixels);
            build_equalization_lut(&hist, tile_pixels, &mut luts[ty * tiles_x + tx]);
        }
    }

    // Remap each pixel, bilinearly interpolating between the four
    // nearest tile mappings
    let mut result = vec![0u8; width * height];
    let tw_f = tile_w as f32;
    let th_f = tile_h as f32;

    for y in 0..height {
        let fy = (y as f32 + 0.5) / th_f - 0.5;
        let ty0 = (fy.floor() as i32).clamp(0, tiles_y as i32 - 1) as usize;
        let ty1 = (fy.floor() as i32 + 1).clamp(0, tiles_y as i32 - 1) as usize;
        let ay = fy - fy.floor();

        for x in 0..width {
            let value = plane[y * width + x] as usize;

            let fx = (x as f32 + 0.5) / tw_f - 0.5;
            let tx0 = (fx.floor() as i32).clamp(0, tiles_x as i32 - 1) as usize;
            let tx1 = (fx.floor() as i32 + 1).clamp(0, tiles_x as i32 - 1) as usize;
            let ax = fx - fx.floor();

            let v00 = luts[ty0 * tiles_x + tx0][value] as f32;
            let v10 = luts[ty0 * tiles_x + tx1][value] as f32;
            let v01 = luts[ty1 * tiles_x + tx0][value] as f32;
            let v11 = luts[ty1 * tiles_x + tx1][value] as f32;

            let top = v00 * (1.0 - ax) + v10 * ax;
            let bottom = v01 * (1.0 - ax) + v11 * ax;
            let interpolated = top * (1.0 - ay) + bottom * ay;

            result[y * width + x] = interpolated.round().clamp(0.0, 255.0) as u8;
        }
    }

    result
}

/// Clip histogram bins at `clip_limit` times the uniform bin height and
/// redistribute the excess evenly across all bins.
///
/// The histogram is kept in floating point so the redistribution is an
/// exact even split; an integer stride split favors the low bins and
/// skews the CDF badly when tiles are small.
fn clip_histogram(hist: &mut [f32; 256], clip_limit: f32, tile_pixels: usize) {
    let clip = (clip_limit * tile_pixels as f32 / 256.0).max(1.0);

    let mut excess = 0f32;
    for bin in hist.iter_mut() {
        if *bin > clip {
            excess += *bin - clip;
            *bin = clip;
        }
    }

    let per_bin = excess / 256.0;
    for bin in hist.iter_mut() {
        *bin += per_bin;
    }
}

/// Build the CDF-based remap LUT for one tile's clipped histogram.
///
/// The CDF is scaled by 255/tile_pixels rather than re-normalized to
/// the occupied range; after clip-and-redistribute this makes the
/// mapping a near-identity on flat tiles instead of stretching a single
/// occupied bin across the full range.
fn build_equalization_lut(hist: &[f32; 256], tile_pixels: usize, lut: &mut [u8; 256]) {
    let scale = 255.0 / tile_pixels as f32;

    let mut cdf = 0f32;
    for (i, &bin) in hist.iter().enumerate() {
        cdf += bin;
        lut[i] = (cdf * scale).round().min(255.0) as u8;
    }
}
