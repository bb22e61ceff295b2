//! Application state management
//!
//! The price-chart state is split into logical components: what the user
//! selected, how the chart is displayed, and where the current fetch cycle is.

mod controls;
mod load;
mod view;

pub use controls::{ControlsState, Trigger};
pub use load::LoadState;
pub use view::ViewState;

use crate::chart::ChartView;
use crate::config::AppConfig;

/// Main application state container
pub struct AppState {
    /// Time range and invert flag
    pub controls: ControlsState,

    /// Display options
    pub view: ViewState,

    /// Fetch-cycle bookkeeping
    pub load: LoadState,

    /// The live chart
    pub chart: ChartView,

    /// Display symbol, e.g. `XRP`
    pub symbol: String,

    /// Display quote currency, e.g. `USD`
    pub currency: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controls: ControlsState::new(config.default_window()),
            view: ViewState::default(),
            load: LoadState::default(),
            chart: ChartView::new(),
            symbol: config.display_symbol(),
            currency: config.display_currency(),
        }
    }

    /// Label for the invert checkbox, e.g. `Invert (USD/XRP)`
    pub fn invert_label(&self) -> String {
        format!("Invert ({}/{})", self.currency, self.symbol)
    }
}
