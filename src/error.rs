//! Error types for price-chart
//!
//! Every fallible step of the fetch pipeline reports one of these. The fetcher
//! is the only place they are turned into fallback data; nothing here is ever
//! shown to the user.

use thiserror::Error;

/// Main error type for price-chart operations
#[derive(Error, Debug)]
pub enum ChartError {
    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Market-data API answered with a non-success status
    #[error("Market-data API returned status {status}")]
    Status { status: u16 },

    /// Response parsed as JSON but did not carry a usable price series
    #[error("Malformed market-data response: {0}")]
    MalformedResponse(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Cache file I/O error
    #[error("Cache I/O error: {0}")]
    CacheIo(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for price-chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

impl ChartError {
    /// Short category name used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            ChartError::Http(e) if e.is_timeout() => "timeout",
            ChartError::Http(_) => "transport",
            ChartError::Status { .. } => "status",
            ChartError::MalformedResponse(_) | ChartError::Json(_) => "malformed",
            ChartError::CacheIo(_) => "cache_io",
            ChartError::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ChartError::Status { status: 429 };
        assert_eq!(err.to_string(), "Market-data API returned status 429");
        assert_eq!(err.kind(), "status");

        let err = ChartError::MalformedResponse("missing `prices`".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed market-data response: missing `prices`"
        );
        assert_eq!(err.kind(), "malformed");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ChartError = io_err.into();
        assert!(matches!(err, ChartError::CacheIo(_)));

        let json_err = serde_json::from_str::<Vec<f64>>("not json").unwrap_err();
        let err: ChartError = json_err.into();
        assert_eq!(err.kind(), "malformed");
    }
}
