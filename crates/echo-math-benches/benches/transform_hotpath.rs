// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Benchmark: matrix composition, inversion and affine decomposition.
//!
//! Every iteration walks a fixed batch of translate * rotate * scale matrices
//! so results are comparable across runs. Sizes (16, 256, 4096) give an
//! order-of-magnitude progression.
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echo_math::{decompose, inverse, rotate, scale, translate, Mat4f, Vec3};
use std::{hint::black_box, time::Duration};

fn build_trs_batch(n: usize) -> Vec<Mat4f> {
    let mut out = Vec::with_capacity(n);
    let mut t = 0.0_f32;
    for _ in 0..n {
        let m = translate(Vec3::new(t, -t * 0.5, 2.0))
            * rotate(t * 7.0, Vec3::new(1.0, 2.0, 3.0))
            * scale(Vec3::new(1.0 + t * 0.01, 2.0, 0.5));
        out.push(m);
        t += 1.0;
    }
    out
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_hotpath");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5));
    for &n in &[16usize, 256, 4_096] {
        let batch = build_trs_batch(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("multiply", n), &batch, |b, batch| {
            b.iter(|| {
                let acc = batch.iter().fold(Mat4f::identity(), |acc, m| acc * m);
                black_box(acc);
            });
        });

        group.bench_with_input(BenchmarkId::new("inverse", n), &batch, |b, batch| {
            b.iter(|| {
                for m in batch {
                    black_box(inverse(black_box(m)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("decompose", n), &batch, |b, batch| {
            b.iter(|| {
                for m in batch {
                    let _ = black_box(decompose(black_box(m)));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
