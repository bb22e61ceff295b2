//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// Market-data source defaults
pub mod market {
    /// CoinGecko coin identifier
    pub const DEFAULT_COIN_ID: &str = "ripple";

    /// Ticker symbol, used in cache keys and chart labels
    pub const DEFAULT_SYMBOL: &str = "xrp";

    /// Quote currency for price history
    pub const DEFAULT_VS_CURRENCY: &str = "usd";

    /// CoinGecko public API base URL
    pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

    /// HTTP request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
}

/// Fetch and sampling defaults
pub mod fetch {
    /// Maximum number of points kept after sampling
    pub const DEFAULT_MAX_POINTS: usize = 30;

    /// Window selected on start-up (days)
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;

    /// Windows offered in the time-range selector (days)
    pub const WINDOW_CHOICES: [u32; 6] = [1, 7, 30, 90, 180, 365];
}

/// Built-in sample series used when both cache and network fail
pub mod fallback {
    /// Daily prices, oldest first
    pub const PRICES: [f64; 30] = [
        0.500, 0.520, 0.515, 0.530, 0.545, 0.538, 0.550, 0.562, 0.558, 0.571,
        0.566, 0.580, 0.592, 0.585, 0.577, 0.590, 0.603, 0.611, 0.598, 0.607,
        0.620, 0.615, 0.628, 0.634, 0.622, 0.640, 0.652, 0.645, 0.660, 0.655,
    ];

    /// Spacing between sample points
    pub const INTERVAL_MS: i64 = 24 * 60 * 60 * 1000;
}

/// Plotting and visualization defaults
pub mod plot {
    use eframe::egui::Color32;

    /// Line colour (#00ff99)
    pub const LINE_COLOR: Color32 = Color32::from_rgb(0, 255, 153);

    /// Start reference line colour
    pub const START_LINE_COLOR: Color32 = Color32::RED;

    /// Start reference line width
    pub const START_LINE_WIDTH: f32 = 2.0;

    /// Date format for point labels
    pub const LABEL_FORMAT: &str = "%Y-%m-%d";

    /// Minimum plot height in pixels
    pub const MIN_PLOT_HEIGHT: f32 = 200.0;
}

/// UI layout defaults
pub mod layout {
    /// Right panel (data table) default width
    pub const DATA_PANEL_WIDTH: f32 = 260.0;

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 22.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 18.0;
}

/// Persistent cache location
pub mod cache {
    /// Directory name under the platform cache directory
    pub const APP_DIR: &str = "price-chart";

    /// Cache file name
    pub const FILE_NAME: &str = "cache.json";

    /// Used when no cache directory can be derived from the environment
    pub const LOCAL_FALLBACK_PATH: &str = ".price-chart-cache.json";
}
