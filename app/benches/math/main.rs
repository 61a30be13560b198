/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use cp2elfun::{
    ElementaryFunction, LaneExecutor, ReducedAngle, exp2, exp2_gold, log2c, log2c_gold, log2ce,
    recip, recip_gold, rrsin, sinc, sinc_gold, sqrt, sqrt_gold,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::exp2f", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::exp2f(i as f32 / 1000.0 - 1.));
            }
        })
    });

    c.bench_function("cp2elfun: exp2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(exp2(i as f32 / 1000.0 - 1.));
            }
        })
    });

    c.bench_function("cp2elfun: exp2 gold", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(exp2_gold(i as f32 / 1000.0 - 1.));
            }
        })
    });

    c.bench_function("libm::log2f", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::log2f(i as f32));
            }
        })
    });

    c.bench_function("cp2elfun: log2c", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log2c(i as f32));
            }
        })
    });

    c.bench_function("cp2elfun: log2ce", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log2ce(i as f32));
            }
        })
    });

    c.bench_function("cp2elfun: log2c gold", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log2c_gold(i as f32));
            }
        })
    });

    c.bench_function("system: recip", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(1. / (i as f32));
            }
        })
    });

    c.bench_function("cp2elfun: recip", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(recip(i as f32));
            }
        })
    });

    c.bench_function("cp2elfun: recip gold", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(recip_gold(i as f32));
            }
        })
    });

    c.bench_function("libm::sqrtf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sqrtf(i as f32));
            }
        })
    });

    c.bench_function("cp2elfun: sqrt", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sqrt(i as f32));
            }
        })
    });

    c.bench_function("cp2elfun: sqrt gold", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sqrt_gold(i as f32));
            }
        })
    });

    c.bench_function("libm::sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sinf(i as f32 * 0.37));
            }
        })
    });

    c.bench_function("cp2elfun: sinc", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinc(i as f32 * 0.37));
            }
        })
    });

    c.bench_function("cp2elfun: sinc gold", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinc_gold(i as f32 * 0.37));
            }
        })
    });

    c.bench_function("cp2elfun: rrsin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(rrsin(i as f32 * 0.37));
            }
        })
    });

    c.bench_function("cp2elfun: radian reduction", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(ReducedAngle::from_radians(i as f32 * 1e4));
            }
        })
    });

    let src: Vec<f32> = (0..4096).map(|i| i as f32 * 0.01 + 0.5).collect();
    let mut dst = vec![0f32; src.len()];

    c.bench_function("cp2elfun: atanc lanes", |b| {
        b.iter(|| {
            ElementaryFunction::Atanc.execute(&src, &mut dst).unwrap();
            black_box(&dst);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
