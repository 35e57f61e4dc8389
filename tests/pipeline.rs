use std::path::PathBuf;

use pizza_fit::cli::{parse_args, Command};
use pizza_fit::config::Strategy;
use pizza_fit::data::loader::load_file;
use pizza_fit::regression::{fit_with, NoProgress};
use pizza_fit::report;

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pizza-fit-{}-{name}", std::process::id()))
}

fn sample_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("pizza.txt")
}

#[test]
fn headless_run_from_arguments() {
    let data = sample_data();
    let png = scratch("plot.png");
    let cmd = parse_args(
        [
            data.to_str().unwrap(),
            "--strategy",
            "hill-climb",
            "--export",
            png.to_str().unwrap(),
        ]
        .map(String::from),
    )
    .unwrap();
    let Command::Headless { config, export } = cmd else {
        panic!("expected headless mode");
    };
    assert_eq!(config.train.strategy, Strategy::HillClimb);

    let dataset = load_file(config.data.as_deref().unwrap()).unwrap();
    assert_eq!(dataset.len(), 30);

    let fit = fit_with(&config.train, &dataset, &mut NoProgress).unwrap();
    let lines = report::summary(&fit, config.predict_at);
    assert!(lines[0].starts_with("w="));
    assert!(lines[1].starts_with("Prediction: x=20 => y="));
    // pizzas grow with reservations in the sample data
    assert!(fit.weight > 0.5 && fit.weight < 2.0, "w = {}", fit.weight);

    let export = export.unwrap();
    report::export_png(&dataset, &fit, &config.plot, &export).unwrap();
    assert!(export.exists());
    std::fs::remove_file(&export).unwrap();
}

#[test]
fn config_file_drives_training() {
    let cfg = scratch("config.json");
    let train =
        r#"{ "strategy": "gradient-descent", "iterations": 20000, "learning_rate": 0.0001 }"#;
    let data = sample_data();
    let json = format!(r#"{{ "data": {:?}, "train": {train} }}"#, data.to_str().unwrap());
    std::fs::write(&cfg, json).unwrap();

    let args = ["--config", cfg.to_str().unwrap(), "--headless", "--iterations", "10"];
    let cmd = parse_args(args.map(String::from)).unwrap();
    std::fs::remove_file(&cfg).unwrap();

    let Command::Headless { config, .. } = cmd else {
        panic!("expected headless mode");
    };
    assert_eq!(config.train.strategy, Strategy::GradientDescent);
    assert_eq!(config.train.iterations, 10);
    assert_eq!(config.train.learning_rate, 0.0001);
    assert_eq!(config.data, Some(sample_data()));
}

#[test]
fn missing_data_file_is_an_error() {
    let err = load_file(&scratch("does-not-exist.txt")).unwrap_err();
    assert!(format!("{err:#}").contains("reading text file"));
}
