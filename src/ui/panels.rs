use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Ui};

use pizza_fit::config::Strategy;

use crate::color::generate_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – training controls and results
// ---------------------------------------------------------------------------

/// Render the left training panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Training");
    ui.separator();

    // ---- Trainer selector ----
    ui.strong("Strategy");
    let current = state.config.train.strategy;
    egui::ComboBox::from_id_salt("strategy")
        .selected_text(current.as_str())
        .show_ui(ui, |ui: &mut Ui| {
            for strategy in Strategy::ALL {
                if ui
                    .selectable_label(current == strategy, strategy.as_str())
                    .clicked()
                {
                    state.set_strategy(strategy);
                }
            }
        });

    egui::Grid::new("train_settings")
        .num_columns(2)
        .show(ui, |ui: &mut Ui| {
            ui.label("Iterations");
            ui.add(
                DragValue::new(&mut state.config.train.iterations)
                    .range(0..=10_000_000)
                    .speed(100.0),
            );
            ui.end_row();

            let lr_label = match state.config.train.strategy {
                Strategy::HillClimb => "Probe step",
                Strategy::GradientDescent => "Learning rate",
            };
            ui.label(lr_label);
            ui.add(
                DragValue::new(&mut state.config.train.learning_rate)
                    .range(0.0..=10.0)
                    .speed(0.0001)
                    .max_decimals(6),
            );
            ui.end_row();
        });

    ui.horizontal(|ui: &mut Ui| {
        let can_train = state.dataset.is_some();
        if ui.add_enabled(can_train, egui::Button::new("Train")).clicked() {
            state.train();
        }
        if ui
            .add_enabled(!state.runs.is_empty(), egui::Button::new("Clear runs"))
            .clicked()
        {
            state.clear_runs();
        }
    });
    ui.separator();

    // ---- Prediction ----
    ui.strong("Prediction");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Reservations");
        ui.add(DragValue::new(&mut state.config.predict_at).speed(1.0));
    });
    match state.latest_fit() {
        Some(fit) => {
            ui.label(format!("≈ {:.2} pizzas", fit.predict(state.config.predict_at)));
        }
        None => {
            ui.label("Train a model first.");
        }
    }
    ui.separator();

    // ---- Results, newest first ----
    ui.strong("Runs");
    let palette = generate_palette(state.runs.len());
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, (run, color)) in state.runs.iter().zip(palette).enumerate().rev() {
                ui.label(RichText::new(run.label(idx)).strong().color(color));
                match &run.outcome {
                    Ok(fit) => {
                        ui.label(format!("w = {:.4}, b = {:.4}", fit.weight, fit.bias));
                        if let Some(last) = run.trace.last() {
                            ui.label(format!("loss @ {} = {:.6}", last.iteration, last.loss));
                        }
                    }
                    Err(e) => {
                        ui.label(RichText::new(e.to_string()).color(Color32::RED));
                    }
                }
                ui.add_space(4.0);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(path)) = (&state.dataset, &state.data_path) {
            ui.label(format!("{}: {} observations", path.display(), ds.len()));
        }

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open reservations / pizzas data")
        .add_filter("Supported files", &["txt", "dat", "csv", "json", "parquet", "pq"])
        .add_filter("Text", &["txt", "dat"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` and make it the current dataset, or report the failure.
pub fn load_into(state: &mut AppState, path: &std::path::Path) {
    match pizza_fit::data::loader::load_file(path) {
        Ok(dataset) => {
            log::info!("Loaded {} observations from {}", dataset.len(), path.display());
            state.set_dataset(dataset, path);
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
