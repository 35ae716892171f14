use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::math::random::SeededRandom;
use crate::network::network::Network;
use crate::train::train_config::TrainConfig;

/// A serializable description of a network architecture plus the
/// hyperparameters used to train it.
///
/// Only the shape and training settings are stored; trained weights never
/// leave the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    /// Human-readable name, used in log output.
    pub name: String,
    pub input_count: usize,
    pub hidden_layer_count: usize,
    pub hidden_node_count: usize,
    pub output_count: usize,
    pub hidden_activation: ActivationFunction,
    pub output_activation: ActivationFunction,
    pub training: TrainConfig,
    /// Seed for parameter initialisation. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for NetworkSpec {
    /// Five-input parity network: 5 hidden layers of 5 tanh nodes, one ReLU output.
    fn default() -> Self {
        NetworkSpec {
            name: "parity-5".to_string(),
            input_count: 5,
            hidden_layer_count: 5,
            hidden_node_count: 5,
            output_count: 1,
            hidden_activation: ActivationFunction::Tanh,
            output_activation: ActivationFunction::Relu,
            training: TrainConfig::default(),
            seed: None,
        }
    }
}

impl NetworkSpec {
    /// Creates an untrained network with this shape.
    pub fn build(&self) -> Result<Network> {
        let mut rng = match self.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        Network::with_random_source(
            self.input_count,
            self.hidden_layer_count,
            self.hidden_node_count,
            self.output_count,
            self.hidden_activation,
            self.output_activation,
            &mut rng,
        )
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
