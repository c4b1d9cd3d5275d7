use focuschart::api::{FocusChart, FocusChartConfig};
use focuschart::core::{Dataset, Record, Viewport};
use focuschart::interaction::{PixelInterval, UpdateSource};
use focuschart::render::NullRenderer;

fn seed_dataset() -> Dataset {
    let records = (0..20)
        .map(|index| {
            Record::from_pairs([
                ("time", index as f64 * 10.0),
                ("alpha", 5.0 + index as f64),
                ("beta", 40.0 - index as f64),
            ])
        })
        .collect();
    Dataset::new(records).expect("valid dataset")
}

fn build_chart() -> FocusChart<NullRenderer> {
    let config = FocusChartConfig::new(Viewport::new(1055, 175), Viewport::new(1055, 435));
    FocusChart::new(NullRenderer::default(), config, seed_dataset()).expect("chart init")
}

#[test]
fn construction_renders_all_three_surfaces() {
    let chart = build_chart();
    assert_eq!(chart.renderer().render_calls, 3);
}

#[test]
fn nav_frame_draws_paths_axis_and_brush_overlay() {
    let chart = build_chart();
    let frame = chart.nav_frame().expect("nav frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.polylines.len(), 2);
    assert_eq!(frame.polygons.len(), 2);
    assert!(frame.clip.is_none());
    // The brush overlay is the only rect.
    assert_eq!(frame.rects.len(), 1);
    assert!((frame.rects[0].width - 1000.0).abs() <= 1e-9);
}

#[test]
fn nav_brush_overlay_tracks_the_selection() {
    let mut chart = build_chart();
    chart
        .brush_moved(UpdateSource::Gesture, Some(PixelInterval::new(250.0, 500.0)))
        .expect("brush move");

    let frame = chart.nav_frame().expect("nav frame");
    let overlay = frame.rects[0];
    // Offset by the 50 px left margin.
    assert!((overlay.x - 300.0).abs() <= 1e-9);
    assert!((overlay.width - 250.0).abs() <= 1e-9);
}

#[test]
fn detail_frame_is_clipped_to_the_plot_area() {
    let chart = build_chart();
    let frame = chart.detail_frame_partial().expect("detail frame");
    frame.validate().expect("valid frame");

    let clip = frame.clip.expect("clip present");
    assert_eq!(clip.x, 50.0);
    assert_eq!(clip.y, 5.0);
    assert_eq!(clip.width, 1000.0);
    assert_eq!(clip.height, 400.0);
}

#[test]
fn full_detail_frame_adds_only_the_value_axis() {
    let chart = build_chart();
    let partial = chart.detail_frame_partial().expect("partial frame");
    let full = chart.detail_frame_full().expect("full frame");

    assert_eq!(full.polylines.len(), partial.polylines.len());
    assert_eq!(full.texts.len(), partial.texts.len() + 5);
    // Axis line plus one tick line per value tick.
    assert_eq!(full.lines.len(), partial.lines.len() + 6);
}

#[test]
fn time_axis_tick_count_follows_plot_width_and_spacing() {
    let chart = build_chart();
    let frame = chart.detail_frame_partial().expect("detail frame");
    // 1000 px at 72 px target spacing clamps to the 12-tick maximum.
    assert_eq!(frame.texts.len(), 12);
}

#[test]
fn brush_move_triggers_one_partial_render() {
    let mut chart = build_chart();
    let calls_before = chart.renderer().render_calls;
    chart
        .brush_moved(UpdateSource::Gesture, Some(PixelInterval::new(100.0, 700.0)))
        .expect("brush move");
    assert_eq!(chart.renderer().render_calls, calls_before + 1);
}

#[test]
fn zoom_gesture_triggers_one_partial_render() {
    let mut chart = build_chart();
    let calls_before = chart.renderer().render_calls;
    chart.wheel_zoom_detail(-120.0, 400.0).expect("wheel zoom");
    assert_eq!(chart.renderer().render_calls, calls_before + 1);
}

#[test]
fn zoomed_detail_frame_culls_to_the_window_with_neighbors() {
    let mut chart = build_chart();
    // Pixels 250..500 invert exactly to time 47.5..95, so records 5..=9 are
    // inside the window and one neighbor survives on each side.
    chart
        .brush_moved(UpdateSource::Gesture, Some(PixelInterval::new(250.0, 500.0)))
        .expect("brush move");

    let frame = chart.detail_frame_partial().expect("detail frame");
    assert_eq!(frame.polylines[0].points.len(), 7);
}

#[test]
fn partial_frames_validate_under_the_null_renderer() {
    let mut chart = build_chart();
    chart
        .brush_moved(UpdateSource::Gesture, Some(PixelInterval::new(10.0, 20.0)))
        .expect("narrow brush move");
    chart.wheel_zoom_detail(-480.0, 990.0).expect("deep zoom");
    let frame = chart.detail_frame_partial().expect("detail frame");
    frame.validate().expect("valid frame");
}
