use std::path::{Path, PathBuf};

use pizza_fit::config::{AppConfig, Strategy, TrainConfig};
use pizza_fit::data::Dataset;
use pizza_fit::regression::{fit_with, Fit, Trace, TrainError};

// ---------------------------------------------------------------------------
// Run – one finished training call
// ---------------------------------------------------------------------------

/// Outcome of one click on "Train".
pub struct Run {
    pub config: TrainConfig,
    pub outcome: Result<Fit, TrainError>,
    pub trace: Trace,
}

impl Run {
    /// Legend / list label, e.g. `hill-climb #2`.
    pub fn label(&self, index: usize) -> String {
        format!("{} #{}", self.config.strategy, index + 1)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    /// Where the dataset came from.
    pub data_path: Option<PathBuf>,

    /// Trainer settings and plot ranges, editable from the side panel.
    pub config: AppConfig,

    /// Every run on the current dataset, oldest first.
    pub runs: Vec<Run>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            dataset: None,
            data_path: None,
            config,
            runs: Vec::new(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset; runs on the previous one are dropped.
    pub fn set_dataset(&mut self, dataset: Dataset, path: &Path) {
        self.dataset = Some(dataset);
        self.data_path = Some(path.to_path_buf());
        self.runs.clear();
        self.status_message = None;
    }

    /// Switch trainer, restoring that trainer's default settings.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        if self.config.train.strategy != strategy {
            self.config.train = TrainConfig::for_strategy(strategy);
        }
    }

    /// Train on the loaded dataset with the current settings.
    pub fn train(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.status_message = Some("Load a dataset before training".to_string());
            return;
        };

        let config = self.config.train;
        let mut trace = Trace::new();
        let outcome = fit_with(&config, dataset, &mut trace);

        self.status_message = match &outcome {
            Ok(_) => None,
            Err(e) => {
                log::warn!("{} failed: {e}", config.strategy);
                Some(format!("Error: {e}"))
            }
        };
        self.runs.push(Run {
            config,
            outcome,
            trace,
        });
    }

    pub fn clear_runs(&mut self) {
        self.runs.clear();
        self.status_message = None;
    }

    /// Most recent successful fit, used for the prediction widget.
    pub fn latest_fit(&self) -> Option<Fit> {
        self.runs
            .iter()
            .rev()
            .find_map(|run| run.outcome.as_ref().ok().copied())
    }

    /// Largest x drawn on the plot: the configured range or the data, if wider.
    pub fn x_extent(&self) -> f64 {
        let data_max = self
            .dataset
            .as_ref()
            .map(|ds| ds.max_xy().0)
            .unwrap_or(0.0);
        self.config.plot.x_max.max(data_max)
    }
}
