use crate::app::PriceChart;

pub fn render_status_bar(app: &PriceChart, ui: &mut eframe::egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(format!("{} / {}", app.state.symbol, app.state.currency));
        ui.separator();
        ui.label(format!("Range: {}", app.state.controls.window.label()));

        if let Some(chart) = app.state.chart.current() {
            ui.separator();
            ui.label(format!("Points: {}", chart.len()));
        }
        if let Some(at) = app.state.load.last_loaded {
            ui.separator();
            ui.label(format!("Updated {}", at.format("%H:%M:%S")));
        }
    });
}
