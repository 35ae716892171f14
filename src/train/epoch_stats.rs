use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a training run taken at the end of an epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    pub total_epochs: usize,
    /// Mean squared error over the pairs of this epoch, measured before each update.
    pub train_loss: f64,
    /// Wall-clock time since the run started, in milliseconds.
    pub elapsed_ms: u64,
}

impl fmt::Display for EpochStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "epoch {}/{}: loss = {:.6} ({} ms)",
            self.epoch, self.total_epochs, self.train_loss, self.elapsed_ms
        )
    }
}
