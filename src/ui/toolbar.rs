use crate::app::PriceChart;
use crate::state::Trigger;
use crate::widgets::WindowSelector;

/// Render the toolbar. Returns the trigger for a new fetch cycle, if any.
pub fn render_toolbar(app: &mut PriceChart, ui: &mut eframe::egui::Ui) -> Option<Trigger> {
    let mut trigger = None;

    ui.horizontal(|ui| {
        if ui.button("🔄 Refresh").on_hover_text("Reload prices (F5)").clicked() {
            trigger = Some(Trigger::Refresh);
        }

        ui.separator();

        let mut window = app.state.controls.window;
        if WindowSelector::new(&mut window).show(ui) {
            if let Some(t) = app.state.controls.set_window(window) {
                trigger = Some(t);
            }
        }

        ui.separator();

        let mut invert = app.state.controls.invert;
        if ui
            .checkbox(&mut invert, app.state.invert_label())
            .on_hover_text("Plot the reciprocal price (I)")
            .changed()
        {
            trigger = Some(app.state.controls.toggle_invert());
        }

        ui.separator();

        // Display toggles
        ui.toggle_value(&mut app.state.view.show_grid, "⊞").on_hover_text("Grid (G)");
        ui.toggle_value(&mut app.state.view.show_legend, "🏷").on_hover_text("Legend (L)");
        ui.toggle_value(&mut app.state.view.show_markers, "•").on_hover_text("Point markers");
        ui.toggle_value(&mut app.state.view.show_data_table, "📋").on_hover_text("Data table (D)");
        if ui.button("⟲").on_hover_text("Reset zoom").clicked() {
            app.state.chart.reset_view();
        }

        ui.separator();

        let theme_icon = if app.state.view.dark_mode { "🌙" } else { "☀" };
        if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
            app.state.view.toggle_dark_mode();
        }
        if ui.button("❓").on_hover_text("Help (F1)").clicked() {
            app.state.view.show_help = !app.state.view.show_help;
        }

        if app.state.load.is_loading() {
            ui.separator();
            ui.spinner();
            ui.label("Loading…");
        }
    });

    trigger
}
