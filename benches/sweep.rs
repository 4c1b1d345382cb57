//! Benchmarks for sweep planning and connector routing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use coverage_sweep::{
    compute_sweep, Direction2, Exact, Point2, Polygon, Scalar, SweepConfig, VisibilityGraph,
};

/// A rectangle whose right side zig-zags through `teeth` notches.
///
/// Monotone in y for any tooth count, and non-convex, so connectors have to
/// bend around the notches.
fn serrated<T: Scalar>(teeth: usize) -> Polygon<T> {
    let height = 100.0;
    let step = height / (2 * teeth) as f64;
    let mut coords = vec![(0.0, 0.0)];
    for i in 0..=(2 * teeth) {
        let x = if i % 2 == 0 { 60.0 } else { 45.0 };
        coords.push((x, i as f64 * step));
    }
    coords.push((0.0, height));

    let vertices = coords
        .into_iter()
        .filter_map(|(x, y)| Point2::from_f64(x, y))
        .collect();
    Polygon::new(vertices)
}

fn bench_sweep_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_f64");

    for teeth in [4, 16, 64] {
        let poly = serrated::<f64>(teeth);
        group.throughput(Throughput::Elements(poly.len() as u64));

        let config = SweepConfig::new(1.0, Direction2::x_axis()).connect_passes(false);
        group.bench_with_input(BenchmarkId::new("unconnected", teeth), &poly, |b, poly| {
            b.iter(|| compute_sweep(black_box(poly), black_box(&config)))
        });

        let config = SweepConfig::new(1.0, Direction2::x_axis());
        group.bench_with_input(BenchmarkId::new("connected", teeth), &poly, |b, poly| {
            b.iter(|| compute_sweep(black_box(poly), black_box(&config)))
        });
    }

    group.finish();
}

fn bench_sweep_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep_exact");
    group.sample_size(20);

    for teeth in [4, 16] {
        let poly = serrated::<Exact>(teeth);
        let offset = Exact::from_integer(2.into());
        let config = SweepConfig::new(offset, Direction2::x_axis()).connect_passes(false);

        group.throughput(Throughput::Elements(poly.len() as u64));
        group.bench_with_input(BenchmarkId::new("unconnected", teeth), &poly, |b, poly| {
            b.iter(|| compute_sweep(black_box(poly), black_box(&config)))
        });
    }

    group.finish();
}

fn bench_visibility_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_graph");

    for teeth in [4, 16, 64] {
        let poly = serrated::<f64>(teeth);
        group.throughput(Throughput::Elements(poly.len() as u64));
        group.bench_with_input(BenchmarkId::new("build", teeth), &poly, |b, poly| {
            b.iter(|| VisibilityGraph::new(black_box(poly)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sweep_f64,
    bench_sweep_exact,
    bench_visibility_graph
);
criterion_main!(benches);
