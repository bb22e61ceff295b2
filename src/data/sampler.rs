//! Stride decimation for display
//!
//! Keeps every `step`-th point, `step = len / max_points`. No averaging, so
//! the kept points are exact API samples. The result can exceed `max_points`
//! by up to `step - 1` points when `len` is not a multiple of `max_points`.

use super::series::PricePoint;

/// Reduce `series` to roughly `max_points` points.
///
/// Series at or under the cap are returned unchanged. A cap of zero is
/// treated as one.
pub fn sample(series: &[PricePoint], max_points: usize) -> Vec<PricePoint> {
    profiling::scope!("sample_series");

    let max_points = max_points.max(1);
    if series.len() <= max_points {
        return series.to_vec();
    }

    // len > max_points >= 1, so step >= 1
    let step = series.len() / max_points;
    series.iter().step_by(step).copied().collect()
}
