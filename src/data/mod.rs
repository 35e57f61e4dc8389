/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .txt / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  reservations (x), pizzas (y), equal length, non-empty
///   └──────────┘
/// ```

pub mod loader;
pub mod model;

pub use model::{Dataset, ShapeError};
