use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Strategy – which trainer to run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    HillClimb,
    GradientDescent,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::HillClimb, Strategy::GradientDescent];

    /// Name used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::HillClimb => "hill-climb",
            Strategy::GradientDescent => "gradient-descent",
        }
    }

    /// Parse a command-line name; `gradient` is accepted as a short form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hill-climb" => Some(Strategy::HillClimb),
            "gradient-descent" | "gradient" => Some(Strategy::GradientDescent),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrainConfig – hyperparameters of a single run
// ---------------------------------------------------------------------------

/// Everything a trainer needs besides the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub strategy: Strategy,
    /// Iteration budget. Hill climbing fails when it runs out; gradient
    /// descent always uses all of it.
    pub iterations: usize,
    /// Probe step for hill climbing, step scale for gradient descent.
    pub learning_rate: f64,
}

impl TrainConfig {
    /// Settings known to work on the pizza data for `strategy`.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::HillClimb => Self {
                strategy,
                iterations: 10_000,
                learning_rate: 0.01,
            },
            Strategy::GradientDescent => Self {
                strategy,
                iterations: 20_000,
                learning_rate: 0.0001,
            },
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self::for_strategy(Strategy::GradientDescent)
    }
}

// ---------------------------------------------------------------------------
// PlotConfig / AppConfig
// ---------------------------------------------------------------------------

/// Axis ranges and image size for rendered plots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub x_max: f64,
    pub y_max: f64,
    /// PNG width in pixels.
    pub width: u32,
    /// PNG height in pixels.
    pub height: u32,
}

impl PlotConfig {
    /// Both axes need a positive, finite range and the canvas at least
    /// one pixel.
    pub fn validate(&self) -> Result<()> {
        for (name, max) in [("x_max", self.x_max), ("y_max", self.y_max)] {
            if !(max.is_finite() && max > 0.0) {
                bail!("plot.{name} must be a positive number, got {max}");
            }
        }
        if self.width == 0 || self.height == 0 {
            bail!("plot size must be non-zero, got {}x{}", self.width, self.height);
        }
        Ok(())
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_max: 50.0,
            y_max: 50.0,
            width: 800,
            height: 600,
        }
    }
}

/// Top-level configuration, as read from a JSON file.
///
/// ```json
/// {
///   "data": "pizza.txt",
///   "train": { "strategy": "hill-climb", "iterations": 10000, "learning_rate": 0.01 },
///   "plot": { "x_max": 50, "y_max": 50 },
///   "predict_at": 20
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: Option<PathBuf>,
    pub train: TrainConfig,
    pub plot: PlotConfig,
    /// Reservation count for the reported example prediction.
    pub predict_at: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: None,
            train: TrainConfig::default(),
            plot: PlotConfig::default(),
            predict_at: 20.0,
        }
    }
}

/// Read an [`AppConfig`] from a JSON file; absent fields keep their defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Parse an [`AppConfig`] from JSON text.
pub fn parse_config(text: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_json::from_str(text).context("invalid config JSON")?;
    config.plot.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_strategy() {
        let hc = TrainConfig::for_strategy(Strategy::HillClimb);
        assert_eq!((hc.iterations, hc.learning_rate), (10_000, 0.01));
        let gd = TrainConfig::default();
        assert_eq!(gd.strategy, Strategy::GradientDescent);
        assert_eq!((gd.iterations, gd.learning_rate), (20_000, 0.0001));
    }

    #[test]
    fn empty_json_is_all_defaults() {
        assert_eq!(parse_config("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn json_overrides() {
        let config = parse_config(
            r#"{
                "data": "pizza.txt",
                "train": { "strategy": "hill-climb", "iterations": 500, "learning_rate": 0.1 },
                "plot": { "x_max": 30 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.data, Some(PathBuf::from("pizza.txt")));
        assert_eq!(config.train.strategy, Strategy::HillClimb);
        assert_eq!(config.train.iterations, 500);
        assert_eq!(config.plot.x_max, 30.0);
        assert_eq!(config.plot.y_max, 50.0);
        assert_eq!(config.predict_at, 20.0);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = parse_config(
            r#"{ "train": { "strategy": "newton", "iterations": 1, "learning_rate": 0.1 } }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn non_positive_axis_is_rejected() {
        let err = parse_config(r#"{ "plot": { "x_max": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("plot.x_max"), "{err:#}");
        assert!(parse_config(r#"{ "plot": { "y_max": -5 } }"#).is_err());
        assert!(parse_config(r#"{ "plot": { "width": 0 } }"#).is_err());
    }

    #[test]
    fn strategy_names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::parse(s.as_str()), Some(s));
        }
        assert_eq!(Strategy::parse("gradient"), Some(Strategy::GradientDescent));
        assert_eq!(Strategy::parse("sgd"), None);
    }
}
