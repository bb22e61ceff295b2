pub mod fallback;
pub mod sampler;
pub mod series;

// Re-export key types for convenience
pub use sampler::sample;
pub use series::{PricePoint, TimeSeries, Window, cache_key};
