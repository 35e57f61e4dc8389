use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::config::{self, AppConfig, Strategy, TrainConfig};

pub const USAGE: &str = "\
Usage: pizza-fit [DATA] [options]

Options:
  --config FILE          JSON config file
  --strategy NAME        hill-climb | gradient-descent
  --iterations N         iteration budget
  --lr F                 learning rate / probe step
  --predict X            reservations for the example prediction
  --export PNG           write the scatter plot and fitted line to PNG
  --headless             train in the terminal instead of opening the viewer
  -h, --help             show this message";

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Headless {
        config: AppConfig,
        export: Option<PathBuf>,
    },
    Viewer(AppConfig),
}

/// Parse arguments (without the program name).
///
/// Settings are layered: defaults, then `--config`, then the other flags.
/// Without a config file, `--strategy` selects that strategy's default
/// iterations and learning rate; `--iterations` and `--lr` override them
/// wherever they appear.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let config_path = flag_value(&args, "--config")?;
    let mut config = match config_path {
        Some(path) => config::load_config(&PathBuf::from(path))?,
        None => AppConfig::default(),
    };

    if let Some(name) = flag_value(&args, "--strategy")? {
        let strategy =
            Strategy::parse(name).with_context(|| format!("unknown strategy '{name}'"))?;
        config.train = match config_path {
            Some(_) => TrainConfig {
                strategy,
                ..config.train
            },
            None => TrainConfig::for_strategy(strategy),
        };
    }

    let mut headless = false;
    let mut export = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("{name} expects a value"))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--headless" => headless = true,
            // already applied above
            "--config" | "--strategy" => {
                value(arg.as_str())?;
            }
            "--iterations" => {
                let v = value("--iterations")?;
                config.train.iterations = v
                    .parse()
                    .with_context(|| format!("--iterations: '{v}' is not a whole number"))?;
            }
            "--lr" => {
                let v = value("--lr")?;
                config.train.learning_rate = v
                    .parse()
                    .with_context(|| format!("--lr: '{v}' is not a number"))?;
            }
            "--predict" => {
                let v = value("--predict")?;
                config.predict_at = v
                    .parse()
                    .with_context(|| format!("--predict: '{v}' is not a number"))?;
            }
            "--export" => export = Some(PathBuf::from(value("--export")?)),
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'"),
            path => config.data = Some(PathBuf::from(path)),
        }
    }

    if headless || export.is_some() {
        Ok(Command::Headless { config, export })
    } else {
        Ok(Command::Viewer(config))
    }
}

/// Value of the last occurrence of `flag`.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args.iter().rposition(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .with_context(|| format!("{flag} expects a value")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_opens_viewer_with_defaults() {
        assert_eq!(parse(&[]).unwrap(), Command::Viewer(AppConfig::default()));
    }

    #[test]
    fn headless_hill_climb() {
        let cmd = parse(&["pizza.txt", "--headless", "--strategy", "hill-climb", "--lr", "0.05"])
            .unwrap();
        let Command::Headless { config, export } = cmd else {
            panic!("expected headless mode");
        };
        assert_eq!(config.data, Some(PathBuf::from("pizza.txt")));
        assert_eq!(config.train.strategy, Strategy::HillClimb);
        assert_eq!(config.train.iterations, 10_000);
        assert_eq!(config.train.learning_rate, 0.05);
        assert_eq!(export, None);
    }

    #[test]
    fn export_implies_headless() {
        let cmd = parse(&["pizza.txt", "--export", "out.png"]).unwrap();
        assert!(matches!(cmd, Command::Headless { export: Some(_), .. }));
    }

    #[test]
    fn numeric_flags_survive_a_later_strategy() {
        let cmd = parse(&[
            "--lr",
            "0.05",
            "--iterations",
            "7",
            "--strategy",
            "hill-climb",
            "--headless",
        ])
        .unwrap();
        let Command::Headless { config, .. } = cmd else {
            panic!("expected headless mode");
        };
        assert_eq!(config.train.strategy, Strategy::HillClimb);
        assert_eq!(config.train.iterations, 7);
        assert_eq!(config.train.learning_rate, 0.05);
    }

    #[test]
    fn strategy_alone_takes_its_defaults() {
        let Command::Viewer(config) = parse(&["--strategy", "hill-climb"]).unwrap() else {
            panic!("expected viewer mode");
        };
        assert_eq!(config.train, TrainConfig::for_strategy(Strategy::HillClimb));
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--iterations", "5", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(parse(&["--iterations", "many"]).is_err());
        assert!(parse(&["--lr"]).is_err());
        assert!(parse(&["--strategy", "newton"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
    }
}
