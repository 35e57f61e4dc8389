use thiserror::Error;

use crate::data::ShapeError;

/// The result type returned by every trainer.
pub type Result<T> = std::result::Result<T, TrainError>;

/// Ways a training run can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainError {
    /// Hill climbing used its whole iteration budget without reaching a
    /// point where no probe move improves the loss.
    #[error("couldn't converge within {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
