use std::fmt;

use crate::activation::activation::ActivationFunction;
use crate::error::{NnError, Result};
use crate::math::format::{format_matrix, format_vector};
use crate::math::matrix::Matrix;
use crate::math::random::{random_vector, RandomSource};

/// Parameters are initialised uniformly in `[INIT_MIN, INIT_MAX)`.
const INIT_MIN: f64 = 0.0;
const INIT_MAX: f64 = 1.0;

/// A fully-connected layer of `N` nodes reading `M` inputs.
///
/// `output` holds the activations of the last feedforward call and `error`
/// the signal of the last backpropagation call. Both are overwritten in place.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    output: Vec<f64>,
    error: Vec<f64>,
    bias: Vec<f64>,
    weights: Matrix,
    activation: ActivationFunction,
}

impl DenseLayer {
    /// Creates a layer with random bias and weights drawn from `rng`.
    ///
    /// Biases are drawn first, then the weights row by row.
    pub fn new(
        node_count: usize,
        weight_count: usize,
        activation: ActivationFunction,
        rng: &mut dyn RandomSource,
    ) -> Result<DenseLayer> {
        if node_count == 0 {
            return Err(NnError::InvalidConfig("cannot create dense layer without nodes".into()));
        }
        if weight_count == 0 {
            return Err(NnError::InvalidConfig("cannot create dense layer without weights".into()));
        }

        let bias = random_vector(rng, node_count, INIT_MIN, INIT_MAX);
        let weights = Matrix::random(node_count, weight_count, INIT_MIN, INIT_MAX, rng);

        Ok(DenseLayer {
            output: vec![0.0; node_count],
            error: vec![0.0; node_count],
            bias,
            weights,
            activation,
        })
    }

    pub fn node_count(&self) -> usize {
        self.output.len()
    }

    pub fn weight_count(&self) -> usize {
        self.weights.data.first().map_or(0, Vec::len)
    }

    pub fn output(&self) -> &[f64] {
        &self.output
    }

    pub fn error(&self) -> &[f64] {
        &self.error
    }

    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    /// Computes `output[i] = f(bias[i] + Σ input[j]·weights[i][j])` for every node.
    pub fn feedforward(&mut self, input: &[f64]) -> Result<&[f64]> {
        if input.len() != self.weight_count() {
            return Err(NnError::shape("feedforward input", self.weight_count(), input.len()));
        }

        for (i, out) in self.output.iter_mut().enumerate() {
            let sum = self.weights
                .row(i)
                .iter()
                .zip(input)
                .fold(self.bias[i], |acc, (w, x)| acc + x * w);
            *out = self.activation.function(sum);
        }
        Ok(&self.output)
    }

    /// Output-layer error: `(reference[i] - output[i]) · f'(output[i])`.
    pub fn backpropagate_from_reference(&mut self, reference: &[f64]) -> Result<()> {
        if reference.len() != self.node_count() {
            return Err(NnError::shape("backpropagation reference", self.node_count(), reference.len()));
        }

        for ((err, &out), &target) in self.error.iter_mut().zip(&self.output).zip(reference) {
            *err = (target - out) * self.activation.gradient(out);
        }
        Ok(())
    }

    /// Hidden-layer error: the next layer's error pulled back through its weights.
    pub fn backpropagate_from_next_layer(&mut self, next: &DenseLayer) -> Result<()> {
        if next.weight_count() != self.node_count() {
            return Err(NnError::shape("next layer width", self.node_count(), next.weight_count()));
        }

        for (i, (err, &out)) in self.error.iter_mut().zip(&self.output).enumerate() {
            let raw = next.weights.weighted_column_sum(i, &next.error);
            *err = raw * self.activation.gradient(out);
        }
        Ok(())
    }

    /// Moves bias and weights along the stored error signal.
    ///
    /// `input` must be the vector this layer was last fed with.
    pub fn optimize(&mut self, input: &[f64], learning_rate: f64) -> Result<()> {
        if input.len() != self.weight_count() {
            return Err(NnError::shape("optimization input", self.weight_count(), input.len()));
        }
        if learning_rate.is_nan() || learning_rate <= 0.0 {
            return Err(NnError::InvalidConfig(format!(
                "learning rate must exceed 0, got {learning_rate}"
            )));
        }

        for (i, &err) in self.error.iter().enumerate() {
            let step = err * learning_rate;
            self.bias[i] += step;
            for (w, x) in self.weights.row_mut(i).iter_mut().zip(input) {
                *w += step * x;
            }
        }
        Ok(())
    }

    /// Renders the layer state with a fixed number of decimals.
    pub fn describe(&self, decimals: usize) -> String {
        let rule = "-".repeat(80);
        let d = Some(decimals);
        format!(
            "{rule}\nOutput:\t\t\t{}\nError:\t\t\t{}\nBias:\t\t\t{}\nWeights:\t\t{}\nActivation function:\t{}\n{rule}\n",
            format_vector(&self.output, d),
            format_vector(&self.error, d),
            format_vector(&self.bias, d),
            format_matrix(&self.weights.data, d),
            self.activation,
        )
    }
}

impl fmt::Display for DenseLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(f.precision().unwrap_or(2)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::random::SeededRandom;
    use approx::assert_abs_diff_eq;

    fn layer(nodes: usize, weights: usize, activation: ActivationFunction) -> DenseLayer {
        let mut rng = SeededRandom::from_seed(11);
        DenseLayer::new(nodes, weights, activation, &mut rng).unwrap()
    }

    /// Replaces the random parameters with known values.
    fn with_params(mut l: DenseLayer, bias: Vec<f64>, weights: Vec<Vec<f64>>) -> DenseLayer {
        l.bias = bias;
        l.weights = Matrix::from_data(weights);
        l
    }

    #[test]
    fn rejects_empty_shapes() {
        let mut rng = SeededRandom::from_seed(0);
        assert!(matches!(
            DenseLayer::new(0, 3, ActivationFunction::Relu, &mut rng),
            Err(NnError::InvalidConfig(_))
        ));
        assert!(matches!(
            DenseLayer::new(3, 0, ActivationFunction::Relu, &mut rng),
            Err(NnError::InvalidConfig(_))
        ));
    }

    #[test]
    fn new_layer_has_consistent_shapes() {
        let l = layer(4, 3, ActivationFunction::Tanh);
        assert_eq!(l.node_count(), 4);
        assert_eq!(l.weight_count(), 3);
        assert_eq!(l.bias().len(), 4);
        assert_eq!(l.error(), &[0.0; 4]);
        assert_eq!(l.output(), &[0.0; 4]);
        assert!(l.bias().iter().chain(l.weights().data.iter().flatten()).all(|x| (0.0..1.0).contains(x)));
        assert_eq!(l.activation(), ActivationFunction::Tanh);
    }

    #[test]
    fn feedforward_output_length_matches_node_count() {
        let mut l = layer(5, 3, ActivationFunction::Relu);
        assert_eq!(l.feedforward(&[0.1, 0.2, 0.3]).unwrap().len(), 5);

        let before = l.output().to_vec();
        for bad in [vec![], vec![1.0; 2], vec![1.0; 4]] {
            assert!(matches!(l.feedforward(&bad), Err(NnError::ShapeMismatch { .. })));
        }
        assert_eq!(l.output(), before.as_slice());
    }

    #[test]
    fn feedforward_computes_weighted_sum() {
        let l = layer(2, 2, ActivationFunction::Relu);
        let mut l = with_params(l, vec![0.5, -3.0], vec![vec![1.0, 2.0], vec![1.0, 1.0]]);
        let out = l.feedforward(&[1.0, 0.25]).unwrap().to_vec();
        assert_abs_diff_eq!(out[0], 2.0);
        assert_eq!(out[1], 0.0);
    }

    #[test]
    fn backpropagate_from_reference_scales_by_gradient() {
        let l = layer(2, 1, ActivationFunction::Relu);
        let mut l = with_params(l, vec![0.5, -1.0], vec![vec![1.0], vec![1.0]]);
        l.feedforward(&[0.5]).unwrap();
        l.backpropagate_from_reference(&[2.0, 2.0]).unwrap();
        assert_abs_diff_eq!(l.error()[0], 1.0);
        // Dead ReLU node passes no error.
        assert_eq!(l.error()[1], 0.0);

        assert!(matches!(
            l.backpropagate_from_reference(&[1.0]),
            Err(NnError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn backpropagate_from_next_layer_uses_transposed_weights() {
        let hidden = layer(2, 1, ActivationFunction::Relu);
        let mut hidden = with_params(hidden, vec![1.0, 1.0], vec![vec![0.0], vec![0.0]]);
        hidden.feedforward(&[0.0]).unwrap();

        let next = layer(3, 2, ActivationFunction::Relu);
        let mut next = with_params(
            next,
            vec![0.0; 3],
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
        );
        next.error = vec![1.0, -1.0, 0.5];

        hidden.backpropagate_from_next_layer(&next).unwrap();
        assert_abs_diff_eq!(hidden.error()[0], 1.0 - 3.0 + 2.5);
        assert_abs_diff_eq!(hidden.error()[1], 2.0 - 4.0 + 3.0);

        let wrong = layer(1, 3, ActivationFunction::Relu);
        assert!(matches!(
            hidden.backpropagate_from_next_layer(&wrong),
            Err(NnError::ShapeMismatch { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn optimize_validates_before_mutating() {
        let mut l = layer(2, 2, ActivationFunction::Relu);
        l.error = vec![1.0, 1.0];
        let bias = l.bias().to_vec();
        let weights = l.weights().clone();

        assert!(matches!(l.optimize(&[1.0], 0.1), Err(NnError::ShapeMismatch { .. })));
        assert!(matches!(l.optimize(&[1.0, 1.0], 0.0), Err(NnError::InvalidConfig(_))));
        assert!(matches!(l.optimize(&[1.0, 1.0], -0.5), Err(NnError::InvalidConfig(_))));
        assert!(matches!(l.optimize(&[1.0, 1.0], f64::NAN), Err(NnError::InvalidConfig(_))));
        assert_eq!(l.bias(), bias.as_slice());
        assert_eq!(l.weights(), &weights);
    }

    #[test]
    fn optimize_applies_scaled_error() {
        let l = layer(1, 2, ActivationFunction::Relu);
        let mut l = with_params(l, vec![0.0], vec![vec![0.0, 0.0]]);
        l.error = vec![2.0];
        l.optimize(&[1.0, 0.5], 0.1).unwrap();
        assert_abs_diff_eq!(l.bias()[0], 0.2);
        assert_abs_diff_eq!(l.weights().data[0][0], 0.2);
        assert_abs_diff_eq!(l.weights().data[0][1], 0.1);
    }

    #[test]
    fn one_step_moves_output_toward_reference() {
        for activation in [ActivationFunction::Relu, ActivationFunction::Tanh] {
            let mut l = layer(1, 2, activation);
            let input = [0.5, 0.25];
            let reference = [0.1];

            let before = (reference[0] - l.feedforward(&input).unwrap()[0]).abs();
            l.backpropagate_from_reference(&reference).unwrap();
            l.optimize(&input, 0.1).unwrap();
            let after = (reference[0] - l.feedforward(&input).unwrap()[0]).abs();

            assert!(after < before, "{activation}: {after} !< {before}");
        }
    }

    #[test]
    fn display_lists_state() {
        let l = layer(1, 1, ActivationFunction::Tanh);
        let text = format!("{l:.3}");
        assert!(text.contains("Output:"));
        assert!(text.contains("Weights:"));
        assert!(text.contains("Hyperbolic tangent"));
    }
}
