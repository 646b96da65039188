use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use voronoi_core::scale::identity;
use voronoi_core::{dedup, default_engine, ClipRect, Margins, PartitionBuilder, Point, Series};

fn gen_points(n: usize) -> Vec<Series<usize>> {
    let mut v = Vec::with_capacity(n);
    let mut x = 0.0f64;
    for i in 0..n {
        x += 800.0 / n as f64;
        // simple waveform with drift, rounded like pre-quantized source data
        let y = 250.0 + (i as f64 * 0.05).sin() * 200.0 + (i as f64 * 0.01);
        v.push(Point::new((x * 10.0).round() / 10.0, (y * 10.0).round() / 10.0, i));
    }
    vec![Series::with_data("bench", v)]
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let clip = ClipRect::from_plot(800.0, 500.0, &Margins::default());
    for &n in &[500usize, 2_000usize] {
        let data = Arc::new(gen_points(n));
        let builder = PartitionBuilder::new(identity(), identity(), clip, default_engine());
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            b.iter_batched(
                || dedup(&data),
                |pts| { let _ = black_box(builder.build(&pts)); },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_partition);
criterion_main!(benches);
