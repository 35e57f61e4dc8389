use super::error::{Result, TrainError};
use super::model::loss;
use super::observer::ProgressObserver;
use super::trainer::{Fit, Trainer};
use crate::config::TrainConfig;
use crate::data::Dataset;

/// Iterations between two progress reports.
pub const REPORT_PERIOD: usize = 300;

/// Coordinate-wise search: nudges `w` or `b` by a fixed step, keeping the
/// first move that lowers the loss, until no move does.
#[derive(Debug, Default, Clone, Copy)]
pub struct HillClimb;

impl HillClimb {
    pub fn new() -> Self {
        Self
    }
}

impl Trainer for HillClimb {
    fn name(&self) -> &'static str {
        "hill climbing"
    }

    fn fit(
        &self,
        data: &Dataset,
        config: &TrainConfig,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Fit> {
        let (x, y) = (data.x(), data.y());
        let step = config.learning_rate;
        let mut w = 0.0;
        let mut b = 0.0;

        for i in 0..config.iterations {
            let current_loss = loss(x, y, w, b);
            if i % REPORT_PERIOD == 0 {
                observer.on_progress(i, current_loss);
            }

            // Probe order is part of the behaviour: on plateaus it decides
            // which local optimum is reached.
            let candidates = [(w + step, b), (w - step, b), (w, b + step), (w, b - step)];
            match candidates
                .into_iter()
                .find(|&(cw, cb)| loss(x, y, cw, cb) < current_loss)
            {
                Some((cw, cb)) => {
                    w = cw;
                    b = cb;
                }
                None => {
                    log::debug!("hill climbing reached a local optimum at iteration {i}");
                    return Ok(Fit::new(w, b));
                }
            }
        }

        Err(TrainError::ConvergenceFailure {
            iterations: config.iterations,
        })
    }
}
