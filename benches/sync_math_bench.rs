use criterion::{Criterion, criterion_group, criterion_main};
use focuschart::api::{FocusChart, FocusChartConfig};
use focuschart::core::{Dataset, LinearScale, Record, TimeScale, Viewport};
use focuschart::interaction::{PixelInterval, UpdateSource, ZoomTransform};
use focuschart::render::NullRenderer;
use std::hint::black_box;

fn bench_brush_interval_round_trip(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let scale = TimeScale::new(0.0, 10_000.0).expect("valid time scale");

    c.bench_function("brush_interval_round_trip", |b| {
        b.iter(|| {
            let t0 = scale
                .pixel_to_time(black_box(321.5), viewport)
                .expect("invert start");
            let t1 = scale
                .pixel_to_time(black_box(987.25), viewport)
                .expect("invert end");
            let _ = scale.time_to_pixel(t0, viewport).expect("map start");
            let _ = scale.time_to_pixel(t1, viewport).expect("map end");
        })
    });
}

fn bench_zoom_transform_rescale(c: &mut Criterion) {
    let viewport = Viewport::new(1920, 1080);
    let reference = LinearScale::new(0.0, 10_000.0).expect("valid reference");
    let transform =
        ZoomTransform::from_selection(PixelInterval::new(400.0, 900.0), 1920.0)
            .expect("valid transform");

    c.bench_function("zoom_transform_rescale", |b| {
        b.iter(|| {
            let _ = black_box(transform)
                .rescale(black_box(reference), black_box(viewport))
                .expect("rescale should succeed");
        })
    });
}

fn bench_brush_sync_cycle_10k(c: &mut Criterion) {
    let records: Vec<Record> = (0..10_000)
        .map(|index| {
            let t = index as f64;
            Record::from_pairs([
                ("time", t),
                ("alpha", 100.0 + (t * 0.01).sin() * 50.0),
                ("beta", 80.0 + (t * 0.02).cos() * 30.0),
            ])
        })
        .collect();
    let dataset = Dataset::new(records).expect("valid dataset");
    let config = FocusChartConfig::new(Viewport::new(1655, 175), Viewport::new(1655, 535));
    let mut chart =
        FocusChart::new(NullRenderer::default(), config, dataset).expect("chart init");

    c.bench_function("brush_sync_cycle_10k", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let selection = if flip {
                PixelInterval::new(200.0, 600.0)
            } else {
                PixelInterval::new(400.0, 1_200.0)
            };
            chart
                .brush_moved(UpdateSource::Gesture, Some(black_box(selection)))
                .expect("brush sync cycle");
        })
    });
}

criterion_group!(
    benches,
    bench_brush_interval_round_trip,
    bench_zoom_transform_rescale,
    bench_brush_sync_cycle_10k
);
criterion_main!(benches);
