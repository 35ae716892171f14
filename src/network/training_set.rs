use tracing::warn;

use crate::error::{NnError, Result};

/// Paired training inputs and reference outputs, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    inputs: Vec<Vec<f64>>,
    outputs: Vec<Vec<f64>>,
}

impl TrainingSet {
    /// Pairs `inputs[i]` with `outputs[i]`.
    ///
    /// When the two sequences differ in length both are cut to the shorter
    /// one and the trailing unmatched elements are dropped.
    pub fn truncate_to_pairs(mut inputs: Vec<Vec<f64>>, mut outputs: Vec<Vec<f64>>) -> TrainingSet {
        let pairs = inputs.len().min(outputs.len());
        if inputs.len() != outputs.len() {
            warn!(
                inputs = inputs.len(),
                outputs = outputs.len(),
                kept = pairs,
                "training data length mismatch, discarding unmatched elements"
            );
            inputs.truncate(pairs);
            outputs.truncate(pairs);
        }
        TrainingSet { inputs, outputs }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[Vec<f64>] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Vec<f64>] {
        &self.outputs
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&[f64], &[f64])> {
        self.inputs.iter().zip(&self.outputs).map(|(i, o)| (i.as_slice(), o.as_slice()))
    }

    /// Checks every pair against the network's input and output widths.
    pub fn validate(&self, input_count: usize, output_count: usize) -> Result<()> {
        for (input, output) in self.pairs() {
            if input.len() != input_count {
                return Err(NnError::shape("training input", input_count, input.len()));
            }
            if output.len() != output_count {
                return Err(NnError::shape("training output", output_count, output.len()));
            }
        }
        Ok(())
    }
}
