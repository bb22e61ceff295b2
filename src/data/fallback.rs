use chrono::{DateTime, Utc};

use super::series::{PricePoint, TimeSeries};
use crate::constants::fallback::{INTERVAL_MS, PRICES};

/// Built-in daily series ending at `now`.
///
/// Shown only when neither the cache nor the API produced data. Never cached.
pub fn series(now: DateTime<Utc>) -> TimeSeries {
    let end = now.timestamp_millis();
    let count = PRICES.len() as i64;
    PRICES
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(end - (count - 1 - i as i64) * INTERVAL_MS, price))
        .collect()
}
