use chrono::DateTime;
use smallvec::SmallVec;

pub(super) const TIME_AXIS_MIN_TICKS: usize = 2;
pub(super) const TIME_AXIS_MAX_TICKS: usize = 12;

/// Tick values buffered inline; axes rarely exceed a dozen ticks.
pub(super) type TickBuffer = SmallVec<[f64; 16]>;

pub(super) fn tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

pub(super) fn evenly_spaced_ticks(range: (f64, f64), tick_count: usize) -> TickBuffer {
    let mut ticks = TickBuffer::new();
    if tick_count == 0 {
        return ticks;
    }
    if tick_count == 1 {
        ticks.push(range.0);
        return ticks;
    }

    let span = range.1 - range.0;
    let denominator = (tick_count - 1) as f64;
    for index in 0..tick_count {
        ticks.push(range.0 + span * (index as f64) / denominator);
    }
    ticks
}

/// Formats a tick timestamp with a pattern adapted to the visible span.
pub(super) fn format_time_label(span_seconds: f64, time: f64) -> String {
    const DAY: f64 = 86_400.0;

    let Some(datetime) = DateTime::from_timestamp(time.floor() as i64, 0) else {
        // Out-of-range logical timestamps fall back to the raw value.
        return format!("{time:.0}");
    };

    let pattern = if span_seconds > 180.0 * DAY {
        "%b %Y"
    } else if span_seconds > 3.0 * DAY {
        "%b %d"
    } else if span_seconds > 21_600.0 {
        "%H:%M"
    } else {
        "%H:%M:%S"
    };
    datetime.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::{evenly_spaced_ticks, format_time_label, tick_target_count};

    #[test]
    fn target_count_clamps_to_bounds() {
        assert_eq!(tick_target_count(1000.0, 72.0, 2, 12), 12);
        assert_eq!(tick_target_count(100.0, 72.0, 2, 12), 2);
        assert_eq!(tick_target_count(f64::NAN, 72.0, 2, 12), 2);
        assert_eq!(tick_target_count(500.0, 0.0, 2, 12), 2);
    }

    #[test]
    fn even_ticks_cover_the_range_endpoints() {
        let ticks = evenly_spaced_ticks((10.0, 50.0), 5);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0], 10.0);
        assert_eq!(ticks[4], 50.0);
        assert_eq!(ticks[2], 30.0);
    }

    #[test]
    fn label_pattern_follows_span() {
        // 2020-01-01T00:00:00Z
        let t = 1_577_836_800.0;
        assert_eq!(format_time_label(400.0 * 86_400.0, t), "Jan 2020");
        assert_eq!(format_time_label(10.0 * 86_400.0, t), "Jan 01");
        assert_eq!(format_time_label(86_400.0, t), "00:00");
        assert_eq!(format_time_label(600.0, t), "00:00:00");
    }

    #[test]
    fn out_of_range_timestamp_falls_back_to_raw_value() {
        assert_eq!(format_time_label(600.0, 1e18), "1000000000000000000");
    }
}
