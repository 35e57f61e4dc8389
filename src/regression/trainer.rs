use super::error::Result;
use super::gradient_descent::{self, GradientDescent};
use super::hill_climb::{self, HillClimb};
use super::model::{loss, predict_one};
use super::observer::{LogProgress, ProgressObserver};
use crate::config::{Strategy, TrainConfig};
use crate::data::Dataset;

// ---------------------------------------------------------------------------
// Fit – the trained line
// ---------------------------------------------------------------------------

/// Slope and intercept of a trained `pizzas = weight * reservations + bias`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub weight: f64,
    pub bias: f64,
}

impl Fit {
    pub fn new(weight: f64, bias: f64) -> Self {
        Self { weight, bias }
    }

    /// Predicted pizzas for `reservations`.
    pub fn predict(&self, reservations: f64) -> f64 {
        predict_one(reservations, self.weight, self.bias)
    }

    /// Mean squared error of this line over `data`.
    pub fn loss(&self, data: &Dataset) -> f64 {
        loss(data.x(), data.y(), self.weight, self.bias)
    }
}

// ---------------------------------------------------------------------------
// Trainer – one interface, two strategies
// ---------------------------------------------------------------------------

/// A way of finding `(weight, bias)` for a dataset.
pub trait Trainer {
    /// Human readable name, used in logs and the viewer.
    fn name(&self) -> &'static str;

    /// Train from `(0, 0)` using `config.iterations` and
    /// `config.learning_rate`, reporting progress to `observer`.
    fn fit(
        &self,
        data: &Dataset,
        config: &TrainConfig,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Fit>;
}

impl Strategy {
    /// The trainer implementing this strategy.
    pub fn trainer(self) -> Box<dyn Trainer> {
        match self {
            Strategy::HillClimb => Box::new(HillClimb::new()),
            Strategy::GradientDescent => Box::new(GradientDescent::new()),
        }
    }

    /// Iterations between two progress reports.
    pub fn report_period(self) -> usize {
        match self {
            Strategy::HillClimb => hill_climb::REPORT_PERIOD,
            Strategy::GradientDescent => gradient_descent::REPORT_PERIOD,
        }
    }

    /// Decimal places used when logging the loss.
    pub fn loss_precision(self) -> usize {
        match self {
            Strategy::HillClimb => 6,
            Strategy::GradientDescent => 10,
        }
    }
}

/// Train `data` with the strategy selected in `config`.
pub fn fit_with(
    config: &TrainConfig,
    data: &Dataset,
    observer: &mut dyn ProgressObserver,
) -> Result<Fit> {
    let trainer = config.strategy.trainer();
    log::info!(
        "training with {} ({} iterations, lr={})",
        trainer.name(),
        config.iterations,
        config.learning_rate
    );
    let fit = trainer.fit(data, config, observer)?;
    log::debug!("{} finished: w={}, b={}", trainer.name(), fit.weight, fit.bias);
    Ok(fit)
}

fn train_logged(
    strategy: Strategy,
    x: &[f64],
    y: &[f64],
    iterations: usize,
    lr: f64,
) -> Result<Fit> {
    let data = Dataset::from_slices(x, y)?;
    let config = TrainConfig {
        strategy,
        iterations,
        learning_rate: lr,
    };
    fit_with(&config, &data, &mut LogProgress::new(strategy.loss_precision()))
}

/// Hill-climb `(w, b)` from `(0, 0)` with probe step `lr`.
///
/// # Errors
/// `TrainError::Shape` if `x` and `y` differ in length or are empty,
/// `TrainError::ConvergenceFailure` if no local optimum is reached within
/// `iterations`.
pub fn train_hill_climb(x: &[f64], y: &[f64], iterations: usize, lr: f64) -> Result<Fit> {
    train_logged(Strategy::HillClimb, x, y, iterations, lr)
}

/// Run `iterations` steps of gradient descent from `(0, 0)`.
///
/// # Errors
/// Only `TrainError::Shape`, for mismatched or empty inputs.
pub fn train_gradient(x: &[f64], y: &[f64], iterations: usize, lr: f64) -> Result<Fit> {
    train_logged(Strategy::GradientDescent, x, y, iterations, lr)
}
