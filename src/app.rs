use eframe::egui;

use crate::chart::Chart;
use crate::config::AppConfig;
use crate::state::{AppState, Trigger};
use crate::ui;
use crate::worker::{FetchWorker, WorkerRequest, WorkerResult};

pub struct PriceChart {
    pub state: AppState,
    worker: FetchWorker,
}

impl PriceChart {
    /// Create the app and start the initial load
    pub fn new(config: &AppConfig, worker: FetchWorker) -> Self {
        let mut app = Self {
            state: AppState::new(config),
            worker,
        };
        app.start_cycle(Trigger::InitialLoad);
        app
    }

    /// Kick off a fetch-render cycle with the current control values.
    ///
    /// Any cycle still in flight is superseded.
    pub fn start_cycle(&mut self, trigger: Trigger) {
        let generation = self.state.load.begin();
        let window = self.state.controls.window;
        tracing::info!(
            ?trigger,
            generation,
            %window,
            invert = self.state.controls.invert,
            "starting fetch cycle"
        );
        self.worker.request(WorkerRequest::Fetch { generation, window });
    }

    /// Apply finished worker results; stale generations are dropped
    fn poll_worker(&mut self) {
        while let Some(result) = self.worker.poll() {
            match result {
                WorkerResult::Loaded { generation, outcome } => {
                    if !self.state.load.complete(generation) {
                        tracing::debug!(generation, "discarding stale fetch result");
                        continue;
                    }
                    let chart = Chart::build(
                        &outcome.series,
                        self.state.controls.invert,
                        &self.state.symbol,
                        &self.state.currency,
                    );
                    tracing::debug!(
                        generation,
                        window = %outcome.window,
                        origin = %outcome.origin,
                        points = chart.len(),
                        "rendering chart"
                    );
                    self.state.chart.replace(chart);
                }
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> Option<Trigger> {
        let mut trigger = None;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::F5) || i.key_pressed(egui::Key::R) {
                trigger = Some(Trigger::Refresh);
            }
            if i.key_pressed(egui::Key::I) {
                trigger = Some(self.state.controls.toggle_invert());
            }
            if i.key_pressed(egui::Key::G) {
                self.state.view.show_grid = !self.state.view.show_grid;
            }
            if i.key_pressed(egui::Key::L) {
                self.state.view.show_legend = !self.state.view.show_legend;
            }
            if i.key_pressed(egui::Key::D) {
                self.state.view.show_data_table = !self.state.view.show_data_table;
            }
            if i.key_pressed(egui::Key::T) {
                self.state.view.toggle_dark_mode();
            }
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                self.state.view.show_help = !self.state.view.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.view.show_help = false;
            }
        });
        trigger
    }
}

impl eframe::App for PriceChart {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        self.poll_worker();

        // Set theme
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Shortcuts only when no text field has focus
        let mut trigger = if ctx.wants_keyboard_input() {
            None
        } else {
            self.handle_shortcuts(ctx)
        };

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            if let Some(t) = ui::render_toolbar(self, ui) {
                trigger = Some(t);
            }
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui::render_status_bar(self, ui);
        });

        if self.state.view.show_data_table {
            egui::SidePanel::right("data_table")
                .default_width(crate::constants::layout::DATA_PANEL_WIDTH)
                .show(ctx, |ui| {
                    ui::render_data_table(self, ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render_plot(self, ui);
        });

        ui::render_help_dialog(self, ctx);

        if let Some(trigger) = trigger {
            self.start_cycle(trigger);
        }
    }
}
