use crate::core::types::DataPoint;

/// Returns the points participating in a visible time window, keeping one
/// out-of-window neighbor per side so clipped polylines stay continuous.
///
/// Input must be ordered by time, which `Dataset` guarantees for projected
/// series.
#[must_use]
pub fn points_in_window_with_neighbors(
    points: &[DataPoint],
    start: f64,
    end: f64,
) -> Vec<DataPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let first_inside = points.iter().position(|point| point.x >= min_t);
    let last_inside = points.iter().rposition(|point| point.x <= max_t);

    match (first_inside, last_inside) {
        (Some(first), Some(last)) if first <= last => {
            let from = first.saturating_sub(1);
            let to = (last + 1).min(points.len() - 1);
            points[from..=to].to_vec()
        }
        // Window falls between two samples or outside the data: keep the
        // bracketing pair (if any) so the crossing segment still draws.
        _ => {
            let before = points.iter().rposition(|point| point.x < min_t);
            let after = points.iter().position(|point| point.x > max_t);
            match (before, after) {
                (Some(b), Some(a)) => points[b..=a].to_vec(),
                _ => Vec::new(),
            }
        }
    }
}
