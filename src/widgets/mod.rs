//! Reusable UI widgets for price-chart

mod window_selector;

pub use window_selector::WindowSelector;
