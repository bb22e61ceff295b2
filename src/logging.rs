use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub with_ansi: bool,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            with_ansi: std::env::var("NO_COLOR").is_err(),
        }
    }
}

/// Install the global console subscriber.
///
/// An unparsable filter falls back to `info`.
pub fn init_logging(config: LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(config.with_ansi))
        .init();

    tracing::debug!(level = %config.log_level, "logging initialized");
}
