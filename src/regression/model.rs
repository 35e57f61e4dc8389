use ndarray::{Array1, ArrayView1};

/// `w * x + b` for every element of `x`.
pub fn predict(x: ArrayView1<f64>, w: f64, b: f64) -> Array1<f64> {
    x.mapv(|xi| xi * w + b)
}

/// `w * x + b` for a single reservation count.
pub fn predict_one(x: f64, w: f64, b: f64) -> f64 {
    x * w + b
}

/// Mean squared error of the line `(w, b)` over the whole dataset.
///
/// `x` and `y` must have the same length; [`Dataset`](crate::data::Dataset)
/// guarantees this for its views.
pub fn loss(x: ArrayView1<f64>, y: ArrayView1<f64>, w: f64, b: f64) -> f64 {
    (predict(x, w, b) - y)
        .mapv(|e| e.powi(2))
        .mean()
        .unwrap_or_default()
}

/// Partial derivatives of [`loss`] with respect to `w` and `b`.
pub fn gradient(x: ArrayView1<f64>, y: ArrayView1<f64>, w: f64, b: f64) -> (f64, f64) {
    let residuals = predict(x, w, b) - y;
    let w_gradient = 2.0 * (&x * &residuals).mean().unwrap_or_default();
    let b_gradient = 2.0 * residuals.mean().unwrap_or_default();
    (w_gradient, b_gradient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn zero_line_predicts_zeros() {
        let x = array![13.0, 2.0, 14.0, 23.0];
        assert!(predict(x.view(), 0.0, 0.0).iter().all(|&p| p == 0.0));
    }

    #[test]
    fn predict_keeps_shape() {
        let x = array![1.0, 2.0, 3.0];
        assert_eq!(predict(x.view(), 2.0, 1.0), array![3.0, 5.0, 7.0]);
        assert_eq!(predict_one(20.0, 1.5, 3.0), 33.0);
    }

    #[test]
    fn loss_is_zero_on_perfect_fit() {
        let x = array![1.0, 2.0, 3.0];
        let y = predict(x.view(), 2.0, 0.5);
        assert_eq!(loss(x.view(), y.view(), 2.0, 0.5), 0.0);
    }

    #[test]
    fn loss_is_mean_of_squared_residuals() {
        let x = array![1.0, 2.0];
        let y = array![1.0, 1.0];
        // residuals at (w=1, b=0): 0 and 1
        assert!((loss(x.view(), y.view(), 1.0, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn loss_never_negative() {
        let x = array![-4.0, 0.0, 7.5, 12.0];
        let y = array![3.0, -1.0, 2.0, 40.0];
        for &(w, b) in &[(0.0, 0.0), (-3.0, 2.5), (10.0, -7.0), (1e-9, 1e9)] {
            assert!(loss(x.view(), y.view(), w, b) >= 0.0);
        }
    }

    #[test]
    fn gradient_matches_finite_differences() {
        let x = array![1.0, 2.0, 3.0, 5.0];
        let y = array![2.0, 3.5, 7.0, 9.0];
        let (w, b, h) = (0.7, -0.3, 1e-6);
        let (gw, gb) = gradient(x.view(), y.view(), w, b);
        let at = |w, b| loss(x.view(), y.view(), w, b);
        let nw = (at(w + h, b) - at(w - h, b)) / (2.0 * h);
        let nb = (at(w, b + h) - at(w, b - h)) / (2.0 * h);
        assert!((gw - nw).abs() < 1e-4, "w gradient {gw} vs {nw}");
        assert!((gb - nb).abs() < 1e-4, "b gradient {gb} vs {nb}");
    }

    #[test]
    fn gradient_vanishes_at_optimum() {
        let x = array![1.0, 2.0, 3.0];
        let y = array![2.0, 4.0, 6.0];
        assert_eq!(gradient(x.view(), y.view(), 2.0, 0.0), (0.0, 0.0));
    }
}
