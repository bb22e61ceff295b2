use serde::{Deserialize, Serialize};
use std::fmt;

/// A single price observation.
///
/// Serialized as a `[timestamp_ms, price]` pair, the same shape the
/// market-data API returns, so cached values and API payloads share a format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct PricePoint {
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: i64,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp_ms: i64, price: f64) -> Self {
        Self { timestamp_ms, price }
    }
}

impl From<(i64, f64)> for PricePoint {
    fn from((timestamp_ms, price): (i64, f64)) -> Self {
        Self { timestamp_ms, price }
    }
}

impl From<PricePoint> for (i64, f64) {
    fn from(p: PricePoint) -> Self {
        (p.timestamp_ms, p.price)
    }
}

/// Ordered price history, oldest first.
pub type TimeSeries = Vec<PricePoint>;

/// Number of trailing days of history requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Window(u32);

impl Window {
    pub fn days(days: u32) -> Self {
        Self(days)
    }

    pub fn as_days(self) -> u32 {
        self.0
    }

    /// Human-readable label for the time-range selector
    pub fn label(self) -> String {
        match self.0 {
            1 => "24 hours".to_string(),
            365 => "1 year".to_string(),
            d => format!("{} days", d),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.0)
    }
}

/// Cache key for a symbol/window pair, e.g. `xrp_data_30`.
pub fn cache_key(symbol: &str, window: Window) -> String {
    format!("{}_data_{}", symbol, window.as_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_serializes_as_pair() {
        let p = PricePoint::new(1_700_000_000_000, 0.6123);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[1700000000000,0.6123]");

        let back: PricePoint = serde_json::from_str("[1700000000000,0.6123]").unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_cache_key_format() {
        assert_eq!(cache_key("xrp", Window::days(30)), "xrp_data_30");
        assert_eq!(cache_key("btc", Window::days(1)), "btc_data_1");
    }

    #[test]
    fn test_window_labels() {
        assert_eq!(Window::days(1).label(), "24 hours");
        assert_eq!(Window::days(90).label(), "90 days");
        assert_eq!(Window::days(7).to_string(), "7d");
    }
}
