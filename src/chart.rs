//! Chart model handed to the plot panel
//!
//! A [`Chart`] is the renderer's whole input: ordered `(label, value)` pairs
//! with the invert transform already applied, plus the text that depends on
//! the invert flag. [`ChartView`] owns the single live chart.

use chrono::DateTime;

use crate::constants::plot::LABEL_FORMAT;
use crate::data::PricePoint;

/// Plotted value for `price`: the reciprocal when inverted
#[inline]
pub fn value_of(price: f64, invert: bool) -> f64 {
    if invert { 1.0 / price } else { price }
}

/// Calendar date of a millisecond timestamp, in UTC
pub fn point_label(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format(LABEL_FORMAT).to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    /// Series name, states which direction means a weaker quote currency
    pub legend: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub invert: bool,
}

impl Chart {
    /// Build the chart for `series`.
    ///
    /// `symbol` and `currency` are display forms, e.g. `XRP` and `USD`.
    pub fn build(series: &[PricePoint], invert: bool, symbol: &str, currency: &str) -> Self {
        profiling::scope!("build_chart");

        let legend = if invert {
            format!("{currency}/{symbol} (Falling = {currency} Decline)")
        } else {
            format!("{symbol}/{currency} (Rising = {currency} Decline)")
        };

        Self {
            title: format!("{symbol} Performance vs. {currency}"),
            legend,
            labels: series.iter().map(|p| point_label(p.timestamp_ms)).collect(),
            values: series.iter().map(|p| value_of(p.price, invert)).collect(),
            invert,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `[index, value]` pairs for the plot; x is the category index
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }

    /// Value of the first point, marked with the "Start" line
    pub fn start_value(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// Label for a plot x coordinate, if it lands on a category
    pub fn label_at(&self, x: f64) -> Option<&str> {
        let idx = x.round();
        if idx < 0.0 || (x - idx).abs() > 1e-6 {
            return None;
        }
        self.labels.get(idx as usize).map(String::as_str)
    }
}

/// Owner of the one live chart instance.
///
/// `replace` tears down the current chart before installing the next, and
/// flags the plot bounds for reset so the new data is framed.
#[derive(Debug, Default)]
pub struct ChartView {
    current: Option<Chart>,
    reset_bounds: bool,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, chart: Chart) {
        if let Some(old) = self.current.take() {
            tracing::trace!(points = old.len(), "tearing down previous chart");
            drop(old);
        }
        self.current = Some(chart);
        self.reset_bounds = true;
    }

    pub fn current(&self) -> Option<&Chart> {
        self.current.as_ref()
    }

    /// Consume the pending bounds reset, if any
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_bounds)
    }

    /// Request a bounds reset without replacing the chart
    pub fn reset_view(&mut self) {
        self.reset_bounds = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<PricePoint> {
        vec![
            PricePoint::new(1_717_200_000_000, 2.0),
            PricePoint::new(1_717_286_400_000, 4.0),
            PricePoint::new(1_717_372_800_000, 0.5),
        ]
    }

    #[test]
    fn test_invert_transform() {
        assert_eq!(value_of(2.0, true), 0.5);
        assert_eq!(value_of(2.0, false), 2.0);
    }

    #[test]
    fn test_build_plain() {
        let chart = Chart::build(&series(), false, "XRP", "USD");
        assert_eq!(chart.values, vec![2.0, 4.0, 0.5]);
        assert_eq!(chart.legend, "XRP/USD (Rising = USD Decline)");
        assert_eq!(chart.title, "XRP Performance vs. USD");
        assert_eq!(chart.labels, vec!["2024-06-01", "2024-06-02", "2024-06-03"]);
        assert_eq!(chart.start_value(), Some(2.0));
    }

    #[test]
    fn test_build_inverted() {
        let chart = Chart::build(&series(), true, "XRP", "USD");
        assert_eq!(chart.values, vec![0.5, 0.25, 2.0]);
        assert_eq!(chart.legend, "USD/XRP (Falling = USD Decline)");
        assert!(chart.invert);
        assert_eq!(chart.points()[1], [1.0, 0.25]);
    }

    #[test]
    fn test_label_lookup() {
        let chart = Chart::build(&series(), false, "XRP", "USD");
        assert_eq!(chart.label_at(0.0), Some("2024-06-01"));
        assert_eq!(chart.label_at(2.0), Some("2024-06-03"));
        assert_eq!(chart.label_at(1.5), None);
        assert_eq!(chart.label_at(-1.0), None);
        assert_eq!(chart.label_at(3.0), None);
    }

    #[test]
    fn test_view_replaces_single_instance() {
        let mut view = ChartView::new();
        assert!(view.current().is_none());
        assert!(!view.take_reset());

        view.replace(Chart::build(&series(), false, "XRP", "USD"));
        view.replace(Chart::build(&series(), true, "XRP", "USD"));

        assert!(view.current().unwrap().invert);
        assert!(view.take_reset());
        assert!(!view.take_reset());
    }
}
