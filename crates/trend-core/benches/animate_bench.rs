use trend_core::animate::{step, AnimationState};
use trend_core::{GridPoints, Point, Rect, TrendPlot};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_steps");
    for &secs in &[1.0f64, 30.0] {
        group.bench_function(format!("15_columns_{secs}s"), |b| {
            let grid = GridPoints::compute(Rect::new(0.0, 0.0, 700.0, 360.0), 10, 15).expect("grid");
            let values: Vec<i64> = (0..15).map(|i| (i % 10) as i64 + 1).collect();
            let plot = TrendPlot::resolve(&grid, &values).expect("plot");
            let mut path = plot.points.clone();
            path.push(Point::ZERO);
            b.iter(|| {
                let mut state = AnimationState::new(&plot.points, secs).expect("state");
                while !state.is_finished() {
                    let (next, frame) = step(state, &path);
                    black_box(frame);
                    state = next;
                }
                black_box(state);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
