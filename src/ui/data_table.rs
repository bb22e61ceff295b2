use crate::app::PriceChart;
use crate::constants::layout::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use egui_extras::{Column, TableBuilder};

/// Render the sampled points as a table, in plotted (possibly inverted) units
pub fn render_data_table(app: &PriceChart, ui: &mut eframe::egui::Ui) {
    profiling::scope!("render_data_table");

    let Some(chart) = app.state.chart.current() else {
        ui.label("No data loaded");
        return;
    };

    let value_header = if chart.invert {
        format!("{}/{}", app.state.currency, app.state.symbol)
    } else {
        format!("{}/{}", app.state.symbol, app.state.currency)
    };

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(eframe::egui::Layout::left_to_right(eframe::egui::Align::Center))
        .column(Column::initial(35.0).resizable(false))
        .column(Column::initial(90.0).resizable(true))
        .column(Column::remainder())
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.strong("Date");
            });
            header.col(|ui| {
                ui.strong(value_header.as_str());
            });
        })
        .body(|body| {
            body.rows(TABLE_ROW_HEIGHT, chart.len(), |mut row| {
                let idx = row.index();
                row.col(|ui| {
                    ui.label((idx + 1).to_string());
                });
                row.col(|ui| {
                    ui.label(chart.labels[idx].as_str());
                });
                row.col(|ui| {
                    ui.monospace(format!("{:.6}", chart.values[idx]));
                });
            });
        });
}
