// Copyright 2026 the Spiro Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the golden-section minimizer and curve inversion.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use spiro::{nearest, Curve as _, Minimizer, SimpleSpirograph};

fn bench_minimize_quadratic(cc: &mut Criterion) {
    for tol in [1e-4, 1e-8, 1e-12] {
        let minimizer = Minimizer::new(tol);
        cc.bench_with_input(BenchmarkId::new("quadratic minimum", tol), &tol, |bb, _| {
            bb.iter(|| minimizer.minimize(|x| (x - 3.0) * (x - 3.0), black_box(0.0), 1.0));
        });
    }
}

fn bench_nearest_spirograph(cc: &mut Criterion) {
    let spiro = SimpleSpirograph::new(100.0, 70.0)
        .with_outer_center((100.0, 100.0))
        .with_pen_offset((60.0, 0.0));
    let target = spiro.value(1.0);

    for tol in [1e-4, 1e-8] {
        let minimizer = Minimizer::new(tol);
        cc.bench_with_input(
            BenchmarkId::new("spirograph nearest point", tol),
            &tol,
            |bb, _| {
                bb.iter(|| nearest(&spiro, black_box(target), 0.0..2.0, &minimizer));
            },
        );
    }
}

criterion_group!(benches, bench_minimize_quadratic, bench_nearest_spirograph);
criterion_main!(benches);
