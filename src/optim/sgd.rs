use crate::error::{NnError, Result};
use crate::layers::dense::DenseLayer;

/// Plain per-sample gradient step with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(NnError::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {learning_rate}"
            )));
        }
        Ok(Sgd { learning_rate })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Applies one update to `layer` using the input it was last fed with.
    pub fn step(&self, layer: &mut DenseLayer, input: &[f64]) -> Result<()> {
        layer.optimize(input, self.learning_rate)
    }
}
