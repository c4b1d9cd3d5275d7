use focuschart::api::{FocusChart, FocusChartConfig};
use focuschart::core::{Dataset, Record, Viewport};
use focuschart::render::{CATEGORICAL_PALETTE, NullRenderer, palette_color};

fn dataset_with_series(count: usize) -> Dataset {
    let records = (0..4)
        .map(|index| {
            let mut pairs = vec![("time".to_owned(), index as f64)];
            for series in 0..count {
                pairs.push((format!("s{series}"), series as f64 + index as f64));
            }
            Record::from_pairs(pairs)
        })
        .collect();
    Dataset::new(records).expect("valid dataset")
}

fn build_chart(series_count: usize) -> FocusChart<NullRenderer> {
    let config = FocusChartConfig::new(Viewport::new(1055, 175), Viewport::new(1055, 435));
    FocusChart::new(NullRenderer::default(), config, dataset_with_series(series_count))
        .expect("chart init")
}

#[test]
fn palette_assignment_cycles_past_ten_series() {
    let chart = build_chart(12);
    let entries = chart.legend().entries();
    assert_eq!(entries.len(), 12);
    for (index, entry) in entries.iter().enumerate() {
        assert_eq!(entry.palette_index, index % 10);
    }
    assert_eq!(
        chart.legend().color_for("s10"),
        Some(CATEGORICAL_PALETTE[0])
    );
    assert_eq!(
        chart.legend().color_for("s11"),
        Some(CATEGORICAL_PALETTE[1])
    );
}

#[test]
fn legend_order_matches_series_order() {
    let chart = build_chart(5);
    let names: Vec<&str> = chart
        .legend()
        .entries()
        .iter()
        .map(|entry| entry.series.as_str())
        .collect();
    assert_eq!(names, ["s0", "s1", "s2", "s3", "s4"]);
}

#[test]
fn unknown_series_has_no_legend_color() {
    let chart = build_chart(3);
    assert_eq!(chart.legend().color_for("missing"), None);
}

#[test]
fn chart_paths_and_legend_swatches_share_colors() {
    let chart = build_chart(12);

    let nav = chart.nav_frame().expect("nav frame");
    assert_eq!(nav.polylines.len(), 12);
    for (index, polyline) in nav.polylines.iter().enumerate() {
        assert_eq!(polyline.color, palette_color(index));
    }

    let legend = chart.legend_frame().expect("legend frame");
    assert_eq!(legend.lines.len(), 12);
    for (index, swatch) in legend.lines.iter().enumerate() {
        assert_eq!(swatch.color, palette_color(index));
    }
}

#[test]
fn legend_frame_has_one_swatch_and_label_per_series() {
    let chart = build_chart(7);
    let frame = chart.legend_frame().expect("legend frame");
    assert_eq!(frame.lines.len(), 7);
    assert_eq!(frame.texts.len(), 7);
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, ["s0", "s1", "s2", "s3", "s4", "s5", "s6"]);
}
