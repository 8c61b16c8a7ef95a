use trend_core::{GridPoints, Rect, Scene, TrendRenderer};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn values(cols: usize, rows: usize) -> Vec<i64> {
    (0..cols).map(|i| (i * 7 % rows) as i64 + 1).collect()
}

fn bench_plot(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_and_plot");
    for &(rows, cols) in &[(10usize, 15usize), (100, 1_000)] {
        group.bench_function(format!("{rows}x{cols}"), |b| {
            let v = values(cols, rows);
            b.iter(|| {
                let grid = GridPoints::compute(Rect::new(0.0, 0.0, 1000.0, 500.0), rows, cols).expect("grid");
                let mut scene = Scene::new();
                let lines = scene.create_layer("trends");
                let markers = scene.create_layer("markers");
                let (l, m) = scene.layer_pair_mut(lines, markers);
                let plot = TrendRenderer::render(&grid, &v, l, m).expect("render");
                black_box(plot);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_plot);
criterion_main!(benches);
