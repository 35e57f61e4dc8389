//! Fit `pizzas = w * reservations + b` by hill climbing or gradient descent.
//!
//! ```no_run
//! use pizza_fit::regression::{train_gradient, train_hill_climb};
//!
//! let x = [13.0, 2.0, 14.0, 23.0];
//! let y = [33.0, 16.0, 32.0, 51.0];
//! let searched = train_hill_climb(&x, &y, 10_000, 0.01)?;
//! let descended = train_gradient(&x, &y, 20_000, 0.0001)?;
//! println!("{searched:?} {descended:?}");
//! # Ok::<(), pizza_fit::regression::TrainError>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod regression;
pub mod report;
