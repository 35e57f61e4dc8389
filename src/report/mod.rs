/// Presentation of a finished run: console lines and rendered plots.
pub mod export;

pub use export::{export_png, render};

use crate::regression::Fit;

/// Lines printed after a successful run.
pub fn summary(fit: &Fit, predict_at: f64) -> Vec<String> {
    vec![
        format!("w={:.3}, b={:.3}", fit.weight, fit.bias),
        format!(
            "Prediction: x={} => y={:.2}",
            predict_at,
            fit.predict(predict_at)
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lines() {
        let lines = summary(&Fit::new(1.1, 13.2), 20.0);
        assert_eq!(lines, vec!["w=1.100, b=13.200", "Prediction: x=20 => y=35.20"]);
    }
}
