/// Receives `(iteration, loss)` once per reporting period of a trainer.
pub trait ProgressObserver {
    fn on_progress(&mut self, iteration: usize, loss: f64);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, f64),
{
    fn on_progress(&mut self, iteration: usize, loss: f64) {
        self(iteration, loss)
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _iteration: usize, _loss: f64) {}
}

/// Writes each report through `log::info!`.
#[derive(Debug, Clone, Copy)]
pub struct LogProgress {
    /// Decimal places printed for the loss.
    pub precision: usize,
}

impl LogProgress {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, iteration: usize, loss: f64) {
        log::info!(
            "Iteration {iteration:>4} => Loss: {loss:.prec$}",
            prec = self.precision
        );
    }
}

/// One recorded progress report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub iteration: usize,
    pub loss: f64,
}

/// Keeps every report in order, for plotting or inspection after the run.
#[derive(Debug, Default, Clone)]
pub struct Trace {
    points: Vec<TracePoint>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[TracePoint] {
        &self.points
    }

    pub fn iterations(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.iteration).collect()
    }

    pub fn last(&self) -> Option<TracePoint> {
        self.points.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ProgressObserver for Trace {
    fn on_progress(&mut self, iteration: usize, loss: f64) {
        self.points.push(TracePoint { iteration, loss });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_observe() {
        let mut seen = Vec::new();
        let mut obs = |i: usize, l: f64| seen.push((i, l));
        obs.on_progress(0, 1.5);
        obs.on_progress(300, 0.5);
        assert_eq!(seen, vec![(0, 1.5), (300, 0.5)]);
    }

    #[test]
    fn trace_records_in_order() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());
        trace.on_progress(0, 10.0);
        trace.on_progress(5000, 2.0);
        assert_eq!(trace.iterations(), vec![0, 5000]);
        assert_eq!(
            trace.last(),
            Some(TracePoint {
                iteration: 5000,
                loss: 2.0
            })
        );
    }
}
