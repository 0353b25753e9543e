use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use waterfall_chart::api::{WaterfallChart, WaterfallChartConfig};
use waterfall_chart::core::{
    AxisGeometry, AxisPosition, CategoryBand, Series, TickConfig, Viewport, WaterfallScale,
    determine_range, project_waterfall_bars,
};
use waterfall_chart::render::NullRenderer;

fn generated_series(len: usize) -> Series {
    let deltas: Vec<f64> = (0..len)
        .map(|i| {
            let t = i as f64;
            if i % 3 == 0 { -(t * 0.25) } else { 5.0 + t * 0.5 }
        })
        .collect();
    Series::from_deltas("bench", &deltas)
}

fn bench_range_derivation_1k(c: &mut Criterion) {
    let series = generated_series(1_000);
    let config = TickConfig::default();

    c.bench_function("range_derivation_1k", |b| {
        b.iter(|| {
            let _ = determine_range(
                black_box(&series),
                black_box(&config),
                black_box(1_600.0),
                true,
            );
        })
    });
}

fn bench_pixel_round_trip(c: &mut Criterion) {
    let series = generated_series(64);
    let scale = WaterfallScale::fit(
        &series,
        &TickConfig::default(),
        AxisGeometry::new(72.0, 24.0, 1_824.0, 1_016.0),
        AxisPosition::Left,
    );

    c.bench_function("pixel_round_trip", |b| {
        b.iter(|| {
            let px = scale.map_value_to_pixel(black_box(4_321.123));
            let _ = scale.map_pixel_to_value(f64::from(px));
        })
    });
}

fn bench_bar_projection_200(c: &mut Criterion) {
    let series = generated_series(200);
    let geometry = AxisGeometry::new(72.0, 24.0, 1_824.0, 1_016.0);
    let scale = WaterfallScale::fit(
        &series,
        &TickConfig::default(),
        geometry,
        AxisPosition::Bottom,
    );
    let band = CategoryBand::single(geometry.top, geometry.height, series.len(), 0.8, 0.9);

    c.bench_function("bar_projection_200", |b| {
        b.iter(|| {
            let _ = project_waterfall_bars(black_box(&series), black_box(&scale), band);
        })
    });
}

fn bench_render_frame_500(c: &mut Criterion) {
    let config = WaterfallChartConfig::new(Viewport::new(1_920, 1_080));
    let mut chart = WaterfallChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_datasets(vec![generated_series(500)]);

    c.bench_function("render_frame_500", |b| {
        b.iter(|| {
            let _ = chart
                .build_render_frame()
                .expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_range_derivation_1k,
    bench_pixel_round_trip,
    bench_bar_projection_200,
    bench_render_frame_500
);
criterion_main!(benches);
