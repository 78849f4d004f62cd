//! Benchmarks for claro-core pipeline operations
//!
//! Run with: cargo bench -p claro-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use claro_core::color::{lab_planes_to_rgb, rgb_to_lab_planes};
use claro_core::pipeline::{
    apply_clahe, denoise_nlm, unsharp_mask, CLAHE_TILES_X, CLAHE_TILES_Y,
};

/// Generate synthetic test image data (diagonal gradient with texture)
fn generate_test_image(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        for x in 0..width {
            let fx = x as f32 / width as f32;
            let fy = y as f32 / height as f32;

            data.push((40.0 + 180.0 * fx) as u8);
            data.push((40.0 + 180.0 * fy) as u8);
            data.push((40.0 + 180.0 * (fx + fy) / 2.0 + ((x ^ y) & 7) as f32) as u8);
        }
    }

    data
}

/// Benchmark the non-local-means denoise stage
fn bench_denoise(c: &mut Criterion) {
    let mut group = c.benchmark_group("denoise");
    group.sample_size(10);

    for size in [64usize, 128, 256].iter() {
        let (width, height) = (*size, *size);
        let data = generate_test_image(width, height);

        group.throughput(Throughput::Elements((width * height) as u64));
        group.bench_with_input(
            BenchmarkId::new("denoise_nlm", format!("{}x{}", width, height)),
            &data,
            |b, data| {
                b.iter(|| denoise_nlm(black_box(data), width, height, black_box(6)));
            },
        );
    }

    group.finish();
}

/// Benchmark the LAB round trip and CLAHE stage
fn bench_contrast(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast");

    for size in [256usize, 512, 1024].iter() {
        let (width, height) = (*size, *size);
        let data = generate_test_image(width, height);
        let (l_plane, _, _) = rgb_to_lab_planes(&data);

        group.throughput(Throughput::Elements((width * height) as u64));

        group.bench_with_input(
            BenchmarkId::new("rgb_lab_round_trip", format!("{}x{}", width, height)),
            &data,
            |b, data| {
                b.iter(|| {
                    let (l, a, bb) = rgb_to_lab_planes(black_box(data));
                    lab_planes_to_rgb(black_box(&l), &a, &bb)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("apply_clahe", format!("{}x{}", width, height)),
            &l_plane,
            |b, l_plane| {
                b.iter(|| {
                    apply_clahe(
                        black_box(l_plane),
                        width,
                        height,
                        CLAHE_TILES_X,
                        CLAHE_TILES_Y,
                        black_box(2.0),
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the unsharp mask stage
fn bench_sharpen(c: &mut Criterion) {
    let mut group = c.benchmark_group("sharpen");

    for size in [256usize, 512, 1024].iter() {
        let (width, height) = (*size, *size);
        let data = generate_test_image(width, height);

        group.throughput(Throughput::Elements((width * height) as u64));
        group.bench_with_input(
            BenchmarkId::new("unsharp_mask", format!("{}x{}", width, height)),
            &data,
            |b, data| {
                b.iter(|| unsharp_mask(black_box(data), width, height, black_box(1.5)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_denoise, bench_contrast, bench_sharpen);
criterion_main!(benches);
