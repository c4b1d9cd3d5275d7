use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use tracing::{debug, error};

use crate::core::types::{DataPoint, datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

/// Reserved field name carrying the record timestamp.
pub const TIME_FIELD: &str = "time";

/// One observation: a `time` field plus named numeric series samples.
///
/// Field order is preserved and is semantic: it decides series draw order and
/// palette assignment across the whole chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, f64>,
}

impl Record {
    #[must_use]
    pub fn new(fields: IndexMap<String, f64>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// Builds a record from a wall-clock timestamp and exact-valued samples.
    pub fn from_datetime_samples(
        time: DateTime<Utc>,
        samples: &[(&str, Decimal)],
    ) -> ChartResult<Self> {
        let mut fields = IndexMap::with_capacity(samples.len() + 1);
        fields.insert(TIME_FIELD.to_owned(), datetime_to_unix_seconds(time));
        for (name, value) in samples {
            fields.insert((*name).to_owned(), decimal_to_f64(*value, name)?);
        }
        Ok(Self { fields })
    }

    #[must_use]
    pub fn time(&self) -> Option<f64> {
        self.fields.get(TIME_FIELD).copied()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Immutable, validated chart input: an ordered sequence of records sharing
/// one field set.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    series: Vec<String>,
}

impl Dataset {
    /// Validates and adopts the records.
    ///
    /// Rejects empty input, a missing `time` field, field sets that differ
    /// between records, and non-finite values.
    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        let Some(first) = records.first() else {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one record".to_owned(),
            ));
        };

        if first.time().is_none() {
            error!("data is missing a `time` field; include a parsed time value in input records");
            return Err(ChartError::MissingTimeField(TIME_FIELD));
        }

        let series: Vec<String> = first
            .field_names()
            .filter(|name| *name != TIME_FIELD)
            .map(str::to_owned)
            .collect();
        if series.is_empty() {
            return Err(ChartError::InvalidData(
                "dataset must contain at least one series field besides `time`".to_owned(),
            ));
        }

        for (index, record) in records.iter().enumerate() {
            if record.field_count() != first.field_count() {
                return Err(ChartError::InconsistentRecord {
                    index,
                    detail: format!(
                        "expected {} fields, found {}",
                        first.field_count(),
                        record.field_count()
                    ),
                });
            }
            for name in first.field_names() {
                let Some(value) = record.get(name) else {
                    return Err(ChartError::InconsistentRecord {
                        index,
                        detail: format!("missing field `{name}`"),
                    });
                };
                if !value.is_finite() {
                    return Err(ChartError::InvalidData(format!(
                        "record {index} field `{name}` must be finite"
                    )));
                }
            }
        }

        debug!(
            record_count = records.len(),
            series_count = series.len(),
            "dataset validated"
        );
        Ok(Self { records, series })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Series names in dataset field order, `time` excluded.
    #[must_use]
    pub fn series_names(&self) -> &[String] {
        &self.series
    }

    /// Minimum and maximum record timestamps.
    #[must_use]
    pub fn time_extent(&self) -> (f64, f64) {
        let times = self.records.iter().filter_map(Record::time);
        let min = times
            .clone()
            .min_by_key(|time| OrderedFloat(*time))
            .unwrap_or(0.0);
        let max = times
            .max_by_key(|time| OrderedFloat(*time))
            .unwrap_or(min);
        (min, max)
    }

    /// Largest sample across every series, for the shared value axis.
    #[must_use]
    pub fn value_max(&self) -> f64 {
        self.records
            .iter()
            .flat_map(|record| {
                self.series
                    .iter()
                    .filter_map(move |name| record.get(name))
            })
            .max_by_key(|value| OrderedFloat(*value))
            .unwrap_or(0.0)
    }

    /// Projects one series into time-ordered XY points.
    pub fn series_points(&self, series: &str) -> ChartResult<Vec<DataPoint>> {
        if !self.series.iter().any(|name| name == series) {
            return Err(ChartError::InvalidData(format!(
                "unknown series `{series}`"
            )));
        }

        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let time = record.time().ok_or(ChartError::MissingTimeField(TIME_FIELD))?;
                let value = record.get(series).ok_or_else(|| ChartError::InconsistentRecord {
                    index,
                    detail: format!("missing field `{series}`"),
                })?;
                Ok(DataPoint::new(time, value))
            })
            .collect()
    }
}
