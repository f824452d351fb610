//! Benchmarks for panel layout computation.
//!
//! Measures the row scan on open and obstructed roofs at various scales.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panel_layout::{LayoutEngine, Obstruction, PanelSpec, RoofSurface};

fn bench_open_roof(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_open_roof");
    group.sample_size(10);

    for &size in &[100.0, 400.0, 1600.0] {
        let roof = RoofSurface::new(size, size);
        let panel = PanelSpec::new(10.0, 10.0);
        let engine = LayoutEngine::default_config();

        group.bench_with_input(
            BenchmarkId::new("square", size as u64),
            &(roof, panel),
            |b, (roof, panel)| {
                b.iter(|| {
                    let result = engine.solve(black_box(roof), black_box(panel), black_box(&[]));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_obstructed_roof(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_obstructed_roof");
    group.sample_size(10);

    for &n in &[5, 20, 80] {
        let roof = RoofSurface::new(800.0, 800.0);
        let panel = PanelSpec::new(10.0, 10.0);
        let obstructions: Vec<Obstruction> = (0..n)
            .map(|i| {
                let x = 20.0 + (i as f64 * 97.0) % 700.0;
                let y = 20.0 + (i as f64 * 53.0) % 700.0;
                Obstruction::hvac(x, y, 12.0, 12.0)
            })
            .collect();
        let engine = LayoutEngine::default_config();

        group.bench_with_input(
            BenchmarkId::new("obstructions", n),
            &(roof, panel, obstructions),
            |b, (roof, panel, obstructions)| {
                b.iter(|| {
                    let result = engine.solve(
                        black_box(roof),
                        black_box(panel),
                        black_box(obstructions),
                    );
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_open_roof, bench_obstructed_roof);
criterion_main!(benches);
