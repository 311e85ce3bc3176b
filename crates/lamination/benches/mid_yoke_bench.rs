//! Criterion benchmarks for the mid-yoke radius.
//! Focus sizes: holes in {0, 4, 16, 64, 256}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p lamination

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lamination::prelude::*;

fn layout(holes: usize, seed: u64) -> LamHole {
    let cfg = RandomLayoutCfg {
        hole_count: HoleCount::Fixed(holes),
        ..RandomLayoutCfg::default()
    };
    draw_lamination(cfg, ReplayToken::new(seed, 0))
}

fn bench_mid_yoke(c: &mut Criterion) {
    let mut group = c.benchmark_group("mid_yoke");
    for &m in &[0usize, 4, 16, 64, 256] {
        let lam = layout(m, 43);
        group.bench_with_input(BenchmarkId::new("comp_radius_mid_yoke", m), &lam, |b, lam| {
            b.iter(|| black_box(lam).comp_radius_mid_yoke())
        });
        group.bench_with_input(BenchmarkId::new("check", m), &lam, |b, lam| {
            b.iter(|| black_box(lam).check().is_ok())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mid_yoke);
criterion_main!(benches);
