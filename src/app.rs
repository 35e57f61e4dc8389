use eframe::egui;

use pizza_fit::config::AppConfig;

use crate::state::AppState;
use crate::ui::{panels, plot, trace};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PizzaFitApp {
    pub state: AppState,
}

impl PizzaFitApp {
    /// Start the viewer, loading `config.data` when it is set.
    pub fn new(config: AppConfig) -> Self {
        let data = config.data.clone();
        let mut state = AppState::new(config);
        if let Some(path) = data {
            panels::load_into(&mut state, &path);
        }
        Self { state }
    }
}

impl eframe::App for PizzaFitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: training ----
        egui::SidePanel::left("training_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: loss trace ----
        egui::TopBottomPanel::bottom("trace_panel")
            .default_height(160.0)
            .resizable(true)
            .show(ctx, |ui| {
                trace::trace_table(ui, &self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::fit_plot(ui, &self.state);
        });
    }
}
