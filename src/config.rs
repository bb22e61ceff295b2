//! Runtime configuration
//!
//! All settings have defaults and can be overridden through `PRICE_CHART_*`
//! environment variables.

use std::path::PathBuf;

use crate::constants::{cache, fetch, market};
use crate::data::Window;
use crate::error::{ChartError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub coin_id: String,
    pub symbol: String,
    pub vs_currency: String,
    pub api_base_url: String,
    pub cache_path: PathBuf,
    pub request_timeout_secs: u64,
    pub max_points: usize,
    pub default_window_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            coin_id: market::DEFAULT_COIN_ID.to_string(),
            symbol: market::DEFAULT_SYMBOL.to_string(),
            vs_currency: market::DEFAULT_VS_CURRENCY.to_string(),
            api_base_url: market::DEFAULT_API_BASE_URL.to_string(),
            cache_path: PathBuf::from(cache::LOCAL_FALLBACK_PATH),
            request_timeout_secs: market::DEFAULT_TIMEOUT_SECS,
            max_points: fetch::DEFAULT_MAX_POINTS,
            default_window_days: fetch::DEFAULT_WINDOW_DAYS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            coin_id: var("PRICE_CHART_COIN_ID").unwrap_or(defaults.coin_id),
            symbol: var("PRICE_CHART_SYMBOL")
                .map(|s| s.to_lowercase())
                .unwrap_or(defaults.symbol),
            vs_currency: var("PRICE_CHART_VS_CURRENCY")
                .map(|s| s.to_lowercase())
                .unwrap_or(defaults.vs_currency),
            api_base_url: var("PRICE_CHART_API_URL").unwrap_or(defaults.api_base_url),
            cache_path: var("PRICE_CHART_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| default_cache_path(&lookup)),
            request_timeout_secs: parse_var(&var, "PRICE_CHART_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
            max_points: parse_var(&var, "PRICE_CHART_MAX_POINTS")?.unwrap_or(defaults.max_points),
            default_window_days: parse_var(&var, "PRICE_CHART_WINDOW_DAYS")?
                .unwrap_or(defaults.default_window_days),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.coin_id.trim().is_empty() || self.symbol.trim().is_empty() {
            return Err(ChartError::Config("coin id and symbol must be set".to_string()));
        }
        if self.vs_currency.trim().is_empty() {
            return Err(ChartError::Config("quote currency must be set".to_string()));
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ChartError::Config(format!(
                "API URL must be http(s): {}",
                self.api_base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ChartError::Config("request timeout must be positive".to_string()));
        }
        if self.max_points == 0 {
            return Err(ChartError::Config("max points must be positive".to_string()));
        }
        if self.default_window_days == 0 {
            return Err(ChartError::Config("window must be at least one day".to_string()));
        }
        Ok(())
    }

    pub fn default_window(&self) -> Window {
        Window::days(self.default_window_days)
    }

    /// Upper-cased symbol for chart text, e.g. `XRP`
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Upper-cased quote currency, e.g. `USD`
    pub fn display_currency(&self) -> String {
        self.vs_currency.to_uppercase()
    }
}

fn parse_var<T, V>(var: &V, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    V: Fn(&str) -> Option<String>,
{
    var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ChartError::Config(format!("{} is not a valid number: {}", key, raw)))
        })
        .transpose()
}

/// `$XDG_CACHE_HOME/price-chart/cache.json`, then `$HOME/.cache/...`, then a
/// file in the working directory.
fn default_cache_path<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .or_else(|| lookup("HOME").map(|home| PathBuf::from(home).join(".cache")))
        .or_else(|| lookup("LOCALAPPDATA").map(PathBuf::from))
        .map(|dir| dir.join(cache::APP_DIR).join(cache::FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(cache::LOCAL_FALLBACK_PATH))
}
