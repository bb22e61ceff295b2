//! CoinGecko market-chart client
//!
//! `GET <base>/coins/<id>/market_chart?vs_currency=usd&days=<n>` answers with
//! `{"prices": [[ts_ms, price], ...], "market_caps": ..., "total_volumes": ...}`.
//! Only `prices` is read.

use serde::Deserialize;
use std::time::Duration;

use crate::config::AppConfig;
use crate::data::{PricePoint, TimeSeries, Window};
use crate::error::{ChartError, Result};

/// Anything that can produce raw (unsampled) price history for a window
pub trait PriceSource: Send {
    fn market_chart(&self, window: Window) -> Result<TimeSeries>;
}

#[derive(Deserialize)]
struct MarketChart {
    prices: Vec<PricePoint>,
}

/// Parse and validate a market-chart response body.
///
/// A body without a non-empty `prices` array, or with a price that is not a
/// positive finite number, is rejected.
pub fn parse_market_chart(body: &str) -> Result<TimeSeries> {
    let chart: MarketChart = serde_json::from_str(body)?;

    if chart.prices.is_empty() {
        return Err(ChartError::MalformedResponse("empty `prices` array".to_string()));
    }
    if let Some(bad) = chart.prices.iter().find(|p| !(p.price.is_finite() && p.price > 0.0)) {
        return Err(ChartError::MalformedResponse(format!(
            "invalid price {} at {}",
            bad.price, bad.timestamp_ms
        )));
    }

    Ok(chart.prices)
}

/// Blocking HTTP client for the CoinGecko public API
pub struct CoinGeckoClient {
    http: reqwest::blocking::Client,
    base_url: String,
    coin_id: String,
    vs_currency: String,
}

impl CoinGeckoClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            coin_id: config.coin_id.clone(),
            vs_currency: config.vs_currency.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/coins/{}/market_chart", self.base_url, self.coin_id)
    }
}

impl PriceSource for CoinGeckoClient {
    fn market_chart(&self, window: Window) -> Result<TimeSeries> {
        profiling::scope!("coingecko_market_chart");

        let days = window.as_days().to_string();
        let response = self
            .http
            .get(self.endpoint())
            .query(&[("vs_currency", self.vs_currency.as_str()), ("days", days.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        let prices = parse_market_chart(&body)?;
        tracing::debug!(coin = %self.coin_id, %window, points = prices.len(), "market chart received");
        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_prices_and_ignores_other_fields() {
        let body = r#"
        {
            "prices": [
                [1717200000000, 0.5212],
                [1717203600000, 0.5198],
                [1717207200000, 0.5231]
            ],
            "market_caps": [[1717200000000, 28800000000.0]],
            "total_volumes": [[1717200000000, 610000000.0]]
        }
        "#;
        let prices = parse_market_chart(body).unwrap();
        assert_eq!(prices.len(), 3);
        assert_eq!(prices[1], PricePoint::new(1_717_203_600_000, 0.5198));
    }

    #[test]
    fn test_rejects_malformed_bodies() {
        // missing field
        assert!(matches!(
            parse_market_chart(r#"{"error": "rate limited"}"#),
            Err(ChartError::Json(_))
        ));
        // wrong shape
        assert!(parse_market_chart(r#"{"prices": [[1717200000000]]}"#).is_err());
        // empty
        assert!(matches!(
            parse_market_chart(r#"{"prices": []}"#),
            Err(ChartError::MalformedResponse(_))
        ));
        // non-positive price
        assert!(matches!(
            parse_market_chart(r#"{"prices": [[1, 0.5], [2, 0.0]]}"#),
            Err(ChartError::MalformedResponse(_))
        ));
        assert!(parse_market_chart("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = AppConfig {
            api_base_url: "http://localhost:9/api/v3/".to_string(),
            ..AppConfig::default()
        };
        let client = CoinGeckoClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/api/v3/coins/ripple/market_chart"
        );
    }
}
