use std::io::Write;

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::layers::dense::DenseLayer;
use crate::loss::mse::MseLoss;
use crate::math::format::format_vector;
use crate::math::random::RandomSource;
use crate::network::stack::LayerStack;
use crate::network::training_set::TrainingSet;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Decimals used for predictions in `print_results`.
const PREDICTION_DECIMALS: usize = 4;

/// A multi-layer perceptron together with the pairs it is trained on.
///
/// Every operation that runs data through the network rewrites the layers'
/// cached outputs and errors, hence `&mut self` even for `predict`.
#[derive(Debug, Clone)]
pub struct Network {
    layers: LayerStack,
    training_set: TrainingSet,
}

impl Network {
    /// Builds a network whose parameters come from the thread-local generator.
    pub fn new(
        input_count: usize,
        hidden_layer_count: usize,
        hidden_node_count: usize,
        output_count: usize,
        hidden_activation: ActivationFunction,
        output_activation: ActivationFunction,
    ) -> Result<Network> {
        Network::with_random_source(
            input_count,
            hidden_layer_count,
            hidden_node_count,
            output_count,
            hidden_activation,
            output_activation,
            &mut rand::thread_rng(),
        )
    }

    /// Builds a network drawing every bias and weight from `rng`, layer by layer.
    pub fn with_random_source(
        input_count: usize,
        hidden_layer_count: usize,
        hidden_node_count: usize,
        output_count: usize,
        hidden_activation: ActivationFunction,
        output_activation: ActivationFunction,
        rng: &mut dyn RandomSource,
    ) -> Result<Network> {
        let layers = LayerStack::new(
            input_count,
            hidden_layer_count,
            hidden_node_count,
            output_count,
            hidden_activation,
            output_activation,
            rng,
        )?;
        Ok(Network {
            layers,
            training_set: TrainingSet::default(),
        })
    }

    /// Width of the input vector, i.e. the weight count of the first hidden layer.
    pub fn input_count(&self) -> usize {
        self.layers.input_count()
    }

    pub fn output_count(&self) -> usize {
        self.layers.output_count()
    }

    pub fn training_set_count(&self) -> usize {
        self.training_set.len()
    }

    pub fn training_set(&self) -> &TrainingSet {
        &self.training_set
    }

    pub fn hidden_layers(&self) -> &[DenseLayer] {
        self.layers.hidden()
    }

    pub fn output_layer(&self) -> &DenseLayer {
        self.layers.output_layer()
    }

    /// Replaces the stored training data with copies of `inputs` and `outputs`.
    ///
    /// Mismatched lengths are truncated to the shorter sequence (see
    /// [`TrainingSet::truncate_to_pairs`]). Returns `true` if at least one
    /// pair is stored afterwards.
    pub fn add_training_data(&mut self, inputs: &[Vec<f64>], outputs: &[Vec<f64>]) -> bool {
        self.training_set = TrainingSet::truncate_to_pairs(inputs.to_vec(), outputs.to_vec());
        !self.training_set.is_empty()
    }

    /// Trains on the stored pairs for `epoch_count` epochs.
    ///
    /// Returns `Ok(false)` and leaves the network untouched if `epoch_count`
    /// is zero, `learning_rate` is not positive, or no pairs are stored.
    pub fn train(&mut self, epoch_count: usize, learning_rate: f64) -> Result<bool> {
        let stats = self.train_with(&TrainConfig::new(epoch_count, learning_rate))?;
        Ok(stats.is_some())
    }

    /// Like [`Network::train`], returning the stats of the final epoch.
    pub fn train_with(&mut self, config: &TrainConfig) -> Result<Option<EpochStats>> {
        train_loop(&mut self.layers, &self.training_set, config)
    }

    /// Runs `input` through the network and returns the output layer's output.
    pub fn predict(&mut self, input: &[f64]) -> Result<&[f64]> {
        self.layers.feedforward(input)
    }

    /// Mean squared error of the current predictions over the stored pairs.
    pub fn mean_squared_error(&mut self) -> Result<Option<f64>> {
        if self.training_set.is_empty() {
            return Ok(None);
        }
        let mut total = 0.0;
        for (input, reference) in self.training_set.pairs() {
            total += MseLoss::loss(self.layers.feedforward(input)?, reference);
        }
        Ok(Some(total / self.training_set.len() as f64))
    }

    /// Writes one `Input: [..], prediction: [..]` line per stored training input.
    pub fn print_results<W: Write>(&mut self, out: &mut W) -> Result<()> {
        for input in self.training_set.inputs() {
            let prediction = self.layers.feedforward(input)?;
            writeln!(
                out,
                "Input: {}, prediction: {}",
                format_vector(input, None),
                format_vector(prediction, Some(PREDICTION_DECIMALS)),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;
    use crate::math::random::SeededRandom;

    fn network(hidden_layers: usize) -> Network {
        let mut rng = SeededRandom::from_seed(99);
        Network::with_random_source(
            3,
            hidden_layers,
            4,
            2,
            ActivationFunction::Relu,
            ActivationFunction::Tanh,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn counts_reflect_construction() {
        for hidden_layers in 1..=4 {
            let n = network(hidden_layers);
            assert_eq!(n.input_count(), 3);
            assert_eq!(n.output_count(), 2);
            assert_eq!(n.hidden_layers().len(), hidden_layers);
            assert_eq!(n.training_set_count(), 0);
        }
    }

    #[test]
    fn thread_rng_constructor_builds_valid_network() {
        let n = Network::new(2, 2, 3, 1, ActivationFunction::Tanh, ActivationFunction::Relu).unwrap();
        assert_eq!(n.input_count(), 2);
        assert_eq!(n.output_layer().weight_count(), 3);
        assert!(matches!(
            Network::new(2, 1, 0, 1, ActivationFunction::Relu, ActivationFunction::Relu),
            Err(NnError::InvalidConfig(_))
        ));
    }

    #[test]
    fn same_seed_gives_same_network() {
        let mut a = network(2);
        let mut b = network(2);
        let input = [0.2, 0.4, 0.6];
        assert_eq!(a.predict(&input).unwrap(), b.predict(&input).unwrap());
    }

    #[test]
    fn predict_is_idempotent() {
        let mut n = network(2);
        let input = [1.0, 0.0, 0.5];
        let first = n.predict(&input).unwrap().to_vec();
        let second = n.predict(&input).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn predict_rejects_wrong_width() {
        let mut n = network(1);
        assert!(matches!(
            n.predict(&[1.0, 2.0]),
            Err(NnError::ShapeMismatch { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn add_training_data_replaces_previous_set() {
        let mut n = network(1);
        assert!(n.add_training_data(&[vec![0.0; 3], vec![1.0; 3]], &[vec![0.0; 2], vec![1.0; 2]]));
        assert_eq!(n.training_set_count(), 2);
        assert!(!n.add_training_data(&[], &[vec![0.0; 2]]));
        assert_eq!(n.training_set_count(), 0);
    }

    #[test]
    fn mean_squared_error_needs_data() {
        let mut n = network(1);
        assert!(n.mean_squared_error().unwrap().is_none());
        n.add_training_data(&[vec![0.0; 3]], &[vec![0.0; 2]]);
        assert!(n.mean_squared_error().unwrap().unwrap() >= 0.0);
    }

    #[test]
    fn print_results_writes_one_line_per_input() {
        let mut n = network(2);
        n.add_training_data(
            &[vec![0.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]],
            &[vec![0.0, 1.0], vec![1.0, 0.0]],
        );
        let mut buf = Vec::new();
        n.print_results(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Input: [0, 0, 1], prediction: ["));
        assert!(lines[1].starts_with("Input: [1, 1, 0], prediction: ["));
    }
}
