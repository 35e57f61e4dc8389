use super::error::Result;
use super::model::{gradient, loss};
use super::observer::ProgressObserver;
use super::trainer::{Fit, Trainer};
use crate::config::TrainConfig;
use crate::data::Dataset;

/// Iterations between two progress reports.
pub const REPORT_PERIOD: usize = 5000;

/// Full-batch gradient descent on the mean squared error.
///
/// Always runs for exactly `config.iterations` steps. A learning rate that is
/// too large for the data makes `w` and `b` diverge to inf/NaN; that result is
/// returned as is, so picking a stable rate is up to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct GradientDescent;

impl GradientDescent {
    pub fn new() -> Self {
        Self
    }
}

impl Trainer for GradientDescent {
    fn name(&self) -> &'static str {
        "gradient descent"
    }

    fn fit(
        &self,
        data: &Dataset,
        config: &TrainConfig,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Fit> {
        let (x, y) = (data.x(), data.y());
        let lr = config.learning_rate;
        let mut w = 0.0;
        let mut b = 0.0;

        for i in 0..config.iterations {
            if i % REPORT_PERIOD == 0 {
                observer.on_progress(i, loss(x, y, w, b));
            }
            let (w_gradient, b_gradient) = gradient(x, y, w, b);
            w -= w_gradient * lr;
            b -= b_gradient * lr;
        }

        if !(w.is_finite() && b.is_finite()) {
            log::warn!("gradient descent diverged (w={w}, b={b}); try a smaller learning rate");
        }
        Ok(Fit::new(w, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Strategy;
    use crate::regression::observer::{NoProgress, Trace};

    fn config(iterations: usize, learning_rate: f64) -> TrainConfig {
        TrainConfig {
            strategy: Strategy::GradientDescent,
            iterations,
            learning_rate,
        }
    }

    fn line() -> Dataset {
        Dataset::from_slices(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap()
    }

    #[test]
    fn converges_on_a_perfect_line() {
        let fit = GradientDescent
            .fit(&line(), &config(20_000, 0.01), &mut NoProgress)
            .unwrap();
        assert!((fit.weight - 2.0).abs() < 1e-2, "w = {}", fit.weight);
        assert!(fit.bias.abs() < 1e-2, "b = {}", fit.bias);
    }

    #[test]
    fn zero_iterations_returns_origin() {
        let fit = GradientDescent
            .fit(&line(), &config(0, 0.01), &mut NoProgress)
            .unwrap();
        assert_eq!((fit.weight, fit.bias), (0.0, 0.0));
    }

    #[test]
    fn first_step_follows_the_gradient() {
        // at (0, 0): w_grad = 2*mean(-x*y) = -56/3, b_grad = 2*mean(-y) = -8
        let fit = GradientDescent
            .fit(&line(), &config(1, 0.01), &mut NoProgress)
            .unwrap();
        assert!((fit.weight - 0.56 / 3.0).abs() < 1e-12);
        assert!((fit.bias - 0.08).abs() < 1e-12);
    }

    #[test]
    fn deterministic() {
        let a = GradientDescent
            .fit(&line(), &config(3_000, 0.001), &mut NoProgress)
            .unwrap();
        let b = GradientDescent
            .fit(&line(), &config(3_000, 0.001), &mut NoProgress)
            .unwrap();
        assert_eq!(a.weight.to_bits(), b.weight.to_bits());
        assert_eq!(a.bias.to_bits(), b.bias.to_bits());
    }

    #[test]
    fn reports_every_5000_iterations() {
        let mut trace = Trace::new();
        GradientDescent
            .fit(&line(), &config(12_000, 0.001), &mut trace)
            .unwrap();
        assert_eq!(trace.iterations(), vec![0, 5000, 10_000]);
        let losses: Vec<f64> = trace.points().iter().map(|p| p.loss).collect();
        assert!(losses.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn divergence_is_not_an_error() {
        let fit = GradientDescent
            .fit(&line(), &config(2_000, 1.0), &mut NoProgress)
            .unwrap();
        assert!(!fit.weight.is_finite() || !fit.bias.is_finite());
    }
}
