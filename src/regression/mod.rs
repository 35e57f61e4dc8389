/// Univariate linear regression: `pizzas = w * reservations + b`.
///
/// ```text
///   model            predict / loss / gradient (pure, vectorized)
///     ▲
///     │
///   hill_climb       probe w±lr, b±lr, keep first improving move
///   gradient_descent w -= lr*dL/dw, b -= lr*dL/db
///     ▲
///     │
///   trainer          Trainer trait, Strategy → trainer, entry points
/// ```

pub mod error;
pub mod gradient_descent;
pub mod hill_climb;
pub mod model;
pub mod observer;
pub mod trainer;

pub use error::TrainError;
pub use gradient_descent::GradientDescent;
pub use hill_climb::HillClimb;
pub use observer::{LogProgress, NoProgress, ProgressObserver, Trace, TracePoint};
pub use trainer::{fit_with, train_gradient, train_hill_climb, Fit, Trainer};
