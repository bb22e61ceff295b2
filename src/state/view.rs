//! View and visualization state

/// View state manages display options that do not affect the data
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Show help panel
    pub show_help: bool,

    /// Grid visibility
    pub show_grid: bool,

    /// Legend visibility
    pub show_legend: bool,

    /// Data table panel visibility
    pub show_data_table: bool,

    /// Draw point markers on top of the line
    pub show_markers: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_help: false,
            show_grid: true,
            show_legend: true,
            show_data_table: false,
            show_markers: true,
        }
    }
}

impl ViewState {
    /// Toggle dark mode
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
