//! Three-tier series resolution: cache, then network, then built-in sample.

mod coingecko;

pub use coingecko::{CoinGeckoClient, PriceSource};

use chrono::Utc;
use std::fmt;

use crate::cache::SeriesCache;
use crate::data::{self, TimeSeries, Window};
use crate::error::Result;

/// Where a fetched series came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Network,
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::Cache => "cache",
            Origin::Network => "network",
            Origin::Fallback => "fallback",
        })
    }
}

/// Result of one fetch cycle. The series is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub window: Window,
    pub series: TimeSeries,
    pub origin: Origin,
}

/// Resolves price history for a window
pub struct Fetcher {
    source: Box<dyn PriceSource>,
    cache: SeriesCache,
    symbol: String,
    max_points: usize,
}

impl Fetcher {
    pub fn new(
        source: impl PriceSource + 'static,
        cache: SeriesCache,
        symbol: impl Into<String>,
        max_points: usize,
    ) -> Self {
        Self {
            source: Box::new(source),
            cache,
            symbol: symbol.into(),
            max_points,
        }
    }

    pub fn cache(&self) -> &SeriesCache {
        &self.cache
    }

    /// Resolve the series for `window`. Always produces data.
    ///
    /// A cache hit is returned as-is with no freshness check. On a miss the
    /// API result is sampled and cached. Any API failure yields the built-in
    /// sample series, which is not cached.
    pub fn fetch(&self, window: Window) -> FetchOutcome {
        profiling::scope!("fetch");

        let key = data::cache_key(&self.symbol, window);

        if let Some(series) = self.cache.get(&key) {
            tracing::info!(%key, points = series.len(), "serving cached series");
            return FetchOutcome {
                window,
                series,
                origin: Origin::Cache,
            };
        }

        match self.fetch_remote(window) {
            Ok(series) => {
                if let Err(e) = self.cache.put(&key, &series) {
                    tracing::warn!(%key, error = %e, "failed to persist series");
                }
                tracing::info!(%key, points = series.len(), "fetched series from API");
                FetchOutcome {
                    window,
                    series,
                    origin: Origin::Network,
                }
            }
            Err(e) => {
                tracing::error!(%key, kind = e.kind(), error = %e, "API error, using fallback data");
                FetchOutcome {
                    window,
                    series: data::fallback::series(Utc::now()),
                    origin: Origin::Fallback,
                }
            }
        }
    }

    fn fetch_remote(&self, window: Window) -> Result<TimeSeries> {
        let raw = self.source.market_chart(window)?;
        Ok(data::sample(&raw, self.max_points))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::PricePoint;
    use crate::error::ChartError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and answers with a canned series, or a 503 when `None`
    pub(crate) struct FakeSource {
        pub calls: Arc<AtomicUsize>,
        pub response: Option<TimeSeries>,
    }

    impl FakeSource {
        pub(crate) fn ok(series: TimeSeries) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                calls: calls.clone(),
                response: Some(series),
            };
            (source, calls)
        }

        pub(crate) fn failing() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                calls: calls.clone(),
                response: None,
            };
            (source, calls)
        }
    }

    impl PriceSource for FakeSource {
        fn market_chart(&self, _window: Window) -> Result<TimeSeries> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response
                .clone()
                .ok_or(ChartError::Status { status: 503 })
        }
    }

    pub(crate) fn hourly(n: usize) -> TimeSeries {
        (0..n)
            .map(|i| PricePoint::new(1_717_200_000_000 + i as i64 * 3_600_000, 0.5 + i as f64 * 0.001))
            .collect()
    }

    #[test]
    fn test_cache_hit_skips_network() {
        let (source, calls) = FakeSource::ok(hourly(100));
        let cache = SeriesCache::in_memory();
        let cached = vec![PricePoint::new(1, 0.61), PricePoint::new(2, 0.62)];
        cache.put("xrp_data_30", &cached).unwrap();

        let fetcher = Fetcher::new(source, cache, "xrp", 30);
        let outcome = fetcher.fetch(Window::days(30));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(outcome.origin, Origin::Cache);
        assert_eq!(outcome.series, cached);
    }

    #[test]
    fn test_miss_fetches_samples_and_caches() {
        let (source, calls) = FakeSource::ok(hourly(100));
        let fetcher = Fetcher::new(source, SeriesCache::in_memory(), "xrp", 30);

        let outcome = fetcher.fetch(Window::days(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.origin, Origin::Network);
        assert_eq!(outcome.series.len(), 34);
        assert_eq!(fetcher.cache().get("xrp_data_7"), Some(outcome.series.clone()));

        // No TTL: the second call is served from cache
        let again = fetcher.fetch(Window::days(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(again.origin, Origin::Cache);
        assert_eq!(again.series, outcome.series);
    }

    #[test]
    fn test_failure_returns_fallback_without_caching() {
        let (source, calls) = FakeSource::failing();
        let fetcher = Fetcher::new(source, SeriesCache::in_memory(), "xrp", 30);

        let outcome = fetcher.fetch(Window::days(30));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.origin, Origin::Fallback);
        assert!(!outcome.series.is_empty());
        assert!(fetcher.cache().get("xrp_data_30").is_none());

        // Still uncached, so the next cycle retries the API
        fetcher.fetch(Window::days(30));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_windows_use_separate_keys() {
        let (source, calls) = FakeSource::ok(hourly(10));
        let fetcher = Fetcher::new(source, SeriesCache::in_memory(), "xrp", 30);

        fetcher.fetch(Window::days(1));
        fetcher.fetch(Window::days(30));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(fetcher.cache().get("xrp_data_1").is_some());
        assert!(fetcher.cache().get("xrp_data_30").is_some());
    }
}
