use crate::app::PriceChart;

pub fn render_help_dialog(app: &mut PriceChart, ctx: &eframe::egui::Context) {
    if app.state.view.show_help {
        eframe::egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Data");
                ui.label("F5 / R - Refresh prices");
                ui.label("I - Toggle inverted price");

                ui.separator();
                ui.heading("View");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle legend");
                ui.label("D - Toggle data table");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Mouse Controls");
                ui.label("Scroll - Zoom in/out");
                ui.label("Drag - Pan view");
                ui.label("Double-click - Reset view");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
