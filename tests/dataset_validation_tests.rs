use chrono::{TimeZone, Utc};
use focuschart::ChartError;
use focuschart::core::{Dataset, Record};
use rust_decimal::Decimal;

fn seed_records() -> Vec<Record> {
    (0..5)
        .map(|index| {
            Record::from_pairs([
                ("time", index as f64 * 60.0),
                ("cpu", 10.0 + index as f64),
                ("mem", 30.0 - index as f64),
            ])
        })
        .collect()
}

#[test]
fn valid_records_build_a_dataset() {
    let dataset = Dataset::new(seed_records()).expect("valid dataset");
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.series_names(), ["cpu", "mem"]);
}

#[test]
fn series_order_follows_field_order_and_excludes_time() {
    let records = vec![Record::from_pairs([
        ("zeta", 1.0),
        ("time", 0.0),
        ("alpha", 2.0),
    ])];
    let dataset = Dataset::new(records).expect("valid dataset");
    assert_eq!(dataset.series_names(), ["zeta", "alpha"]);
}

#[test]
fn missing_time_field_is_a_hard_error() {
    let records = vec![Record::from_pairs([("cpu", 1.0), ("mem", 2.0)])];
    let err = Dataset::new(records).expect_err("missing time must fail");
    assert!(matches!(err, ChartError::MissingTimeField(_)));
}

#[test]
fn empty_input_is_rejected() {
    let err = Dataset::new(Vec::new()).expect_err("empty dataset must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn dataset_with_only_a_time_field_is_rejected() {
    let records = vec![Record::from_pairs([("time", 0.0)])];
    let err = Dataset::new(records).expect_err("no series must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn inconsistent_field_sets_are_rejected() {
    let mut records = seed_records();
    records.push(Record::from_pairs([("time", 300.0), ("cpu", 15.0)]));
    let err = Dataset::new(records).expect_err("inconsistent record must fail");
    assert!(matches!(
        err,
        ChartError::InconsistentRecord { index: 5, .. }
    ));
}

#[test]
fn renamed_fields_are_rejected_even_with_matching_counts() {
    let mut records = seed_records();
    records.push(Record::from_pairs([
        ("time", 300.0),
        ("cpu", 15.0),
        ("disk", 1.0),
    ]));
    let err = Dataset::new(records).expect_err("renamed field must fail");
    assert!(matches!(err, ChartError::InconsistentRecord { .. }));
}

#[test]
fn non_finite_values_are_rejected() {
    let mut records = seed_records();
    records.push(Record::from_pairs([
        ("time", 300.0),
        ("cpu", f64::NAN),
        ("mem", 1.0),
    ]));
    let err = Dataset::new(records).expect_err("nan value must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn time_extent_spans_first_to_last_record() {
    let dataset = Dataset::new(seed_records()).expect("valid dataset");
    assert_eq!(dataset.time_extent(), (0.0, 240.0));
}

#[test]
fn value_max_is_the_global_series_maximum() {
    let dataset = Dataset::new(seed_records()).expect("valid dataset");
    // cpu peaks at 14, mem at 30.
    assert_eq!(dataset.value_max(), 30.0);
}

#[test]
fn series_points_project_time_value_pairs() {
    let dataset = Dataset::new(seed_records()).expect("valid dataset");
    let points = dataset.series_points("cpu").expect("known series");
    assert_eq!(points.len(), 5);
    assert_eq!(points[0].x, 0.0);
    assert_eq!(points[0].y, 10.0);
    assert_eq!(points[4].x, 240.0);
    assert_eq!(points[4].y, 14.0);
}

#[test]
fn unknown_series_is_rejected() {
    let dataset = Dataset::new(seed_records()).expect("valid dataset");
    let err = dataset
        .series_points("disk")
        .expect_err("unknown series must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn datetime_and_decimal_samples_convert_at_the_boundary() {
    let stamp = Utc
        .with_ymd_and_hms(2021, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    let record = Record::from_datetime_samples(
        stamp,
        &[("cpu", Decimal::new(1250, 2)), ("mem", Decimal::new(30, 0))],
    )
    .expect("valid record");

    assert_eq!(record.time(), Some(stamp.timestamp() as f64));
    assert_eq!(record.get("cpu"), Some(12.50));
    assert_eq!(record.get("mem"), Some(30.0));
}
