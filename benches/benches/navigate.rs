// Copyright 2025 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use waypoint_geometry::{Candidate, Direction, NavQuery, navigate, partition};

fn gen_grid(n: usize, cell: f64, gap: f64) -> Vec<Candidate<u32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * (cell + gap);
            let y0 = y as f64 * (cell + gap);
            out.push(Candidate {
                id: (y * n + x) as u32,
                rect: Rect::new(x0, y0, x0 + cell, y0 + cell),
            });
        }
    }
    out
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    for n in [8_usize, 16, 32] {
        let candidates = gen_grid(n, 40.0, 8.0);
        // Target in the middle of the grid.
        let target = candidates[candidates.len() / 2].rect;
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &candidates, |b, cs| {
            b.iter(|| black_box(partition(cs, target, 0.5)));
        });
    }
    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigate");
    for n in [8_usize, 16, 32] {
        let candidates = gen_grid(n, 40.0, 8.0);
        let target = candidates[candidates.len() / 2].rect;
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &candidates, |b, cs| {
            b.iter(|| {
                for direction in Direction::ALL {
                    let query = NavQuery::new(direction);
                    black_box(navigate(target, &query, cs, None));
                }
            });
        });
    }
    group.finish();
}

fn bench_navigate_straight_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigate_straight_only");
    let candidates = gen_grid(16, 40.0, 8.0);
    let target = candidates[candidates.len() / 2].rect;
    group.bench_function("256", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                let query = NavQuery {
                    direction,
                    straight_only: true,
                    straight_overlap_threshold: 0.5,
                };
                black_box(navigate(target, &query, &candidates, None));
            }
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_partition,
    bench_navigate,
    bench_navigate_straight_only
);
criterion_main!(benches);
