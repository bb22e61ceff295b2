mod data_table;
mod help_dialog;
mod plot;
mod status_bar;
mod toolbar;

pub use data_table::render_data_table;
pub use help_dialog::render_help_dialog;
pub use plot::render_plot;
pub use status_bar::render_status_bar;
pub use toolbar::render_toolbar;
