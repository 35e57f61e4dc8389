use ndarray::{Array1, ArrayView1};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ShapeError – dataset invariant violations
// ---------------------------------------------------------------------------

/// Raised when the two columns of a dataset cannot be paired by index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("reservations has {x} values but pizzas has {y}")]
    LengthMismatch { x: usize, y: usize },
    #[error("dataset is empty")]
    Empty,
}

// ---------------------------------------------------------------------------
// Dataset – reservations (x) paired with pizzas (y)
// ---------------------------------------------------------------------------

/// Reservations (`x`) and pizzas (`y`), paired by index.
///
/// Both columns always have the same, non-zero length; the only way to build
/// a `Dataset` is through [`Dataset::new`], which checks this.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Pair the two columns, failing fast on a length mismatch or no rows.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ShapeError> {
        if x.len() != y.len() {
            return Err(ShapeError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if x.is_empty() {
            return Err(ShapeError::Empty);
        }
        Ok(Self {
            x: Array1::from(x),
            y: Array1::from(y),
        })
    }

    /// Build from borrowed slices.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Self, ShapeError> {
        Self::new(x.to_vec(), y.to_vec())
    }

    /// Reservations column.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    /// Pizzas column.
    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x, y)` pairs in row order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Largest `x` and `y` values, used to size plot axes.
    pub fn max_xy(&self) -> (f64, f64) {
        let max = |a: &Array1<f64>| a.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (max(&self.x), max(&self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let err = Dataset::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err, ShapeError::LengthMismatch { x: 2, y: 1 });
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Dataset::new(vec![], vec![]).unwrap_err(), ShapeError::Empty);
    }

    #[test]
    fn points_follow_row_order() {
        let ds = Dataset::from_slices(&[13.0, 2.0], &[33.0, 16.0]).unwrap();
        let pts: Vec<_> = ds.points().collect();
        assert_eq!(pts, vec![(13.0, 33.0), (2.0, 16.0)]);
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.max_xy(), (13.0, 33.0));
    }
}
