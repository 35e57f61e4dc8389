mod app;
mod color;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use app::PizzaFitApp;
use eframe::egui;

use pizza_fit::cli::{self, Command};
use pizza_fit::config::AppConfig;
use pizza_fit::data::loader::load_file;
use pizza_fit::regression::{LogProgress, fit_with};
use pizza_fit::report;

const DEFAULT_DATA: &str = "pizza.txt";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        Command::Headless { config, export } => run_headless(&config, export.as_deref()),
        Command::Viewer(config) => run_viewer(config),
    }
}

/// Train once in the terminal, print the result and optionally save the plot.
fn run_headless(config: &AppConfig, export: Option<&Path>) -> Result<()> {
    let path = config
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA));
    let data = load_file(&path)?;
    log::info!("Loaded {} observations from {}", data.len(), path.display());

    let strategy = config.train.strategy;
    let fit = fit_with(
        &config.train,
        &data,
        &mut LogProgress::new(strategy.loss_precision()),
    )?;

    println!();
    for line in report::summary(&fit, config.predict_at) {
        println!("{line}");
    }

    if let Some(png) = export {
        report::export_png(&data, &fit, &config.plot, png)?;
    }
    Ok(())
}

fn run_viewer(config: AppConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pizza Fit – Reservations vs Pizzas",
        options,
        Box::new(|_cc| Ok(Box::new(PizzaFitApp::new(config)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
