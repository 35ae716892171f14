use serde::{Deserialize, Serialize};

/// Hyperparameters for one training run.
///
/// - `epochs`: full passes over the stored training pairs
/// - `learning_rate`: step size applied by every layer update
/// - `log_interval`: emit an `EpochStats` debug event every this many
///   epochs; `0` keeps only the start/finish events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_interval: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_interval: 0,
        }
    }

    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 110_000,
            learning_rate: 0.01,
            log_interval: 10_000,
        }
    }
}
