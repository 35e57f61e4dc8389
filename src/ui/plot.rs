use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::{DATA_COLOR, generate_palette};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter + fitted lines (central panel)
// ---------------------------------------------------------------------------

/// Render the data and every successful fit in the central panel.
pub fn fit_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to start  (File → Open…)");
            });
            return;
        }
    };

    let x_end = state.x_extent();
    let palette = generate_palette(state.runs.len());

    Plot::new("fit_plot")
        .legend(Legend::default())
        .x_axis_label("Reservations")
        .y_axis_label("Pizzas")
        .include_x(0.0)
        .include_x(state.config.plot.x_max)
        .include_y(0.0)
        .include_y(state.config.plot.y_max)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = dataset.points().map(|(x, y)| [x, y]).collect();
            plot_ui.points(
                Points::new(points)
                    .name("Observations")
                    .color(DATA_COLOR)
                    .radius(4.0),
            );

            for (idx, (run, color)) in state.runs.iter().zip(palette).enumerate() {
                // Failed or diverged runs have nothing to draw.
                let Ok(fit) = &run.outcome else {
                    continue;
                };
                if !(fit.weight.is_finite() && fit.bias.is_finite()) {
                    continue;
                }
                let line: PlotPoints =
                    vec![[0.0, fit.predict(0.0)], [x_end, fit.predict(x_end)]].into();
                plot_ui.line(
                    Line::new(line)
                        .name(run.label(idx))
                        .color(color)
                        .width(2.0),
                );
            }
        });
}
