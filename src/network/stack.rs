use crate::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::layers::dense::DenseLayer;
use crate::math::random::RandomSource;
use crate::optim::sgd::Sgd;

/// Hidden layers followed by one output layer, chained input to output.
#[derive(Debug, Clone)]
pub struct LayerStack {
    hidden: Vec<DenseLayer>,
    output: DenseLayer,
}

impl LayerStack {
    /// The first hidden layer reads `input_count` values, every later one
    /// reads the previous layer's `hidden_node_count` outputs.
    pub fn new(
        input_count: usize,
        hidden_layer_count: usize,
        hidden_node_count: usize,
        output_count: usize,
        hidden_activation: ActivationFunction,
        output_activation: ActivationFunction,
        rng: &mut dyn RandomSource,
    ) -> Result<LayerStack> {
        if hidden_layer_count == 0 {
            return Err(NnError::InvalidConfig("network needs at least one hidden layer".into()));
        }

        let mut hidden = Vec::with_capacity(hidden_layer_count);
        for i in 0..hidden_layer_count {
            let weight_count = if i == 0 { input_count } else { hidden_node_count };
            hidden.push(DenseLayer::new(hidden_node_count, weight_count, hidden_activation, rng)?);
        }
        let output = DenseLayer::new(output_count, hidden_node_count, output_activation, rng)?;

        Ok(LayerStack { hidden, output })
    }

    pub fn hidden(&self) -> &[DenseLayer] {
        &self.hidden
    }

    pub fn output_layer(&self) -> &DenseLayer {
        &self.output
    }

    pub fn input_count(&self) -> usize {
        self.hidden[0].weight_count()
    }

    pub fn output_count(&self) -> usize {
        self.output.node_count()
    }

    /// Runs `input` through every layer; each layer's output feeds the next.
    pub fn feedforward(&mut self, input: &[f64]) -> Result<&[f64]> {
        self.hidden[0].feedforward(input)?;
        for i in 1..self.hidden.len() {
            let (previous, current) = self.hidden.split_at_mut(i);
            current[0].feedforward(previous[i - 1].output())?;
        }

        let last = self.hidden.len() - 1;
        self.output.feedforward(self.hidden[last].output())
    }

    /// Output layer from `reference`, then every hidden layer from its successor, last to first.
    pub fn backpropagate(&mut self, reference: &[f64]) -> Result<()> {
        self.output.backpropagate_from_reference(reference)?;

        let last = self.hidden.len() - 1;
        self.hidden[last].backpropagate_from_next_layer(&self.output)?;

        for i in (0..last).rev() {
            let (current, next) = self.hidden.split_at_mut(i + 1);
            current[i].backpropagate_from_next_layer(&next[0])?;
        }
        Ok(())
    }

    /// Updates every layer with the input it received during the last feedforward.
    pub fn optimize(&mut self, input: &[f64], sgd: &Sgd) -> Result<()> {
        sgd.step(&mut self.hidden[0], input)?;
        for i in 1..self.hidden.len() {
            let (previous, current) = self.hidden.split_at_mut(i);
            sgd.step(&mut current[0], previous[i - 1].output())?;
        }

        let last = self.hidden.len() - 1;
        sgd.step(&mut self.output, self.hidden[last].output())
    }
}
