use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::loss::mse::MseLoss;
use crate::network::stack::LayerStack;
use crate::network::training_set::TrainingSet;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `layers` on `set` for `config.epochs` epochs of online SGD and
/// returns the stats of the last epoch.
///
/// Pairs are visited in insertion order every epoch; there is no shuffling,
/// batching or early stopping.
///
/// Returns `Ok(None)` without touching any layer when there is nothing to
/// do: zero epochs, an empty set, or a learning rate that is not a positive
/// finite number. A pair whose widths disagree with the layers is an error,
/// reported before the first update.
pub fn train_loop(
    layers: &mut LayerStack,
    set: &TrainingSet,
    config: &TrainConfig,
) -> Result<Option<EpochStats>> {
    if config.epochs == 0 || set.is_empty() {
        warn!(epochs = config.epochs, pairs = set.len(), "nothing to train");
        return Ok(None);
    }
    let sgd = match Sgd::new(config.learning_rate) {
        Ok(sgd) => sgd,
        Err(e) => {
            warn!("training skipped: {e}");
            return Ok(None);
        }
    };
    set.validate(layers.input_count(), layers.output_count())?;

    info!(
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        pairs = set.len(),
        "training started"
    );
    let t_start = Instant::now();
    let mut last = None;

    for epoch in 1..=config.epochs {
        let train_loss = run_one_epoch(layers, set, &sgd)?;
        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_loss,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if config.log_interval > 0 && epoch % config.log_interval == 0 {
            debug!("{stats}");
        }
        last = Some(stats);
    }

    if let Some(ref stats) = last {
        info!(loss = stats.train_loss, elapsed_ms = stats.elapsed_ms, "training finished");
    }
    Ok(last)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass of feedforward → backpropagate → optimize per pair.
/// Returns the mean loss over all pairs.
fn run_one_epoch(layers: &mut LayerStack, set: &TrainingSet, sgd: &Sgd) -> Result<f64> {
    let mut total_loss = 0.0;

    for (input, reference) in set.pairs() {
        let output = layers.feedforward(input)?;
        total_loss += MseLoss::loss(output, reference);

        layers.backpropagate(reference)?;
        layers.optimize(input, sgd)?;
    }

    Ok(total_loss / set.len() as f64)
}
