use crate::app::PriceChart;
use crate::constants::plot::{LINE_COLOR, MIN_PLOT_HEIGHT, START_LINE_COLOR, START_LINE_WIDTH};
use egui_plot::{Corner, HLine, Legend, Line, Plot, Points};

/// Render the current chart, or a spinner before the first one arrives
pub fn render_plot(app: &mut PriceChart, ui: &mut eframe::egui::Ui) {
    profiling::scope!("render_plot");

    let reset = app.state.chart.take_reset();
    let view = &app.state.view;

    let Some(chart) = app.state.chart.current() else {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
        return;
    };

    ui.vertical_centered(|ui| {
        ui.heading(chart.title.as_str());
    });

    let plot_height = ui.available_height().max(MIN_PLOT_HEIGHT);

    let mut plot = Plot::new("price_chart")
        .show_grid(view.show_grid)
        .height(plot_height);

    if reset {
        plot = plot.reset();
    }

    if view.show_legend {
        plot = plot.legend(Legend::default().position(Corner::LeftTop));
    }

    // x is the category index; show the date label at whole indices only
    let axis_chart = chart.clone();
    let hover_chart = chart.clone();
    plot = plot
        .x_axis_formatter(move |mark, _range| {
            axis_chart
                .label_at(mark.value)
                .map(str::to_string)
                .unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format!("{:.4}", mark.value))
        .label_formatter(move |name, value| {
            let date = hover_chart.label_at(value.x.round()).unwrap_or("");
            if name.is_empty() {
                format!("{}\n{:.6}", date, value.y)
            } else {
                format!("{}\n{}\n{:.6}", name, date, value.y)
            }
        });

    let points = chart.points();
    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(chart.legend.as_str(), points.clone())
                .color(LINE_COLOR)
                .width(2.0),
        );

        if view.show_markers {
            plot_ui.points(Points::new("", points).radius(3.0).color(LINE_COLOR));
        }

        if let Some(start) = chart.start_value() {
            plot_ui.hline(
                HLine::new("Start", start)
                    .color(START_LINE_COLOR)
                    .width(START_LINE_WIDTH),
            );
        }
    });
}
