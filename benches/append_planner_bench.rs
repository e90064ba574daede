use criterion::{Criterion, criterion_group, criterion_main};
use livechart_rs::core::{
    AppendContext, ArityPolicy, AxisMode, DataPoint, VisibleCap, plan_append, split_initial_data,
};
use std::hint::black_box;

fn batch(len: usize, series: usize) -> Vec<DataPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 1_000.0;
            let ys: Vec<f64> = (0..series).map(|s| (t * 0.001 + s as f64).sin()).collect();
            DataPoint::new(t, ys)
        })
        .collect()
}

fn bench_plan_append_time_axis(c: &mut Criterion) {
    let points = batch(1_000, 4);
    let context = AppendContext {
        current_point_count: 60,
        series_count: 4,
        cap: VisibleCap::new(80).expect("valid cap"),
        axis_mode: AxisMode::Time,
    };

    c.bench_function("plan_append_time_1k_x4", |b| {
        b.iter(|| {
            let _ = plan_append(black_box(&points), black_box(&context), ArityPolicy::Strict)
                .expect("plan should succeed");
        })
    });
}

fn bench_plan_append_category_axis(c: &mut Criterion) {
    let points = batch(1_000, 4);
    let context = AppendContext {
        current_point_count: 80,
        series_count: 4,
        cap: VisibleCap::new(80).expect("valid cap"),
        axis_mode: AxisMode::Category,
    };

    c.bench_function("plan_append_category_1k_x4", |b| {
        b.iter(|| {
            let _ = plan_append(black_box(&points), black_box(&context), ArityPolicy::Strict)
                .expect("plan should succeed");
        })
    });
}

fn bench_split_initial_data_10k(c: &mut Criterion) {
    let points = batch(10_000, 2);
    let cap = VisibleCap::new(80).expect("valid cap");

    c.bench_function("split_initial_data_10k", |b| {
        b.iter(|| {
            let _ = split_initial_data(black_box(points.clone()), black_box(cap));
        })
    });
}

criterion_group!(
    benches,
    bench_plan_append_time_axis,
    bench_plan_append_category_axis,
    bench_split_initial_data_10k
);
criterion_main!(benches);
