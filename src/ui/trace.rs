use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Progress reports of the latest run, one row per reporting period.
pub fn trace_table(ui: &mut Ui, state: &AppState) {
    let Some((idx, run)) = state.runs.iter().enumerate().last() else {
        ui.label("No runs yet.");
        return;
    };

    ui.strong(format!(
        "{} – loss every {} iterations",
        run.label(idx),
        run.config.strategy.report_period()
    ));

    let points = run.trace.points();
    let precision = run.config.strategy.loss_precision();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("Iteration");
            });
            header.col(|ui| {
                ui.strong("Loss");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, points.len(), |mut row| {
                let p = points[row.index()];
                row.col(|ui| {
                    ui.label(p.iteration.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.prec$}", p.loss, prec = precision));
                });
            });
        });
}
