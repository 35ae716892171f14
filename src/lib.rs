pub mod activation;
pub mod device;
pub mod error;
pub mod layers;
pub mod logging;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use error::{NnError, Result};
pub use layers::dense::DenseLayer;
pub use math::matrix::Matrix;
pub use math::random::{RandomSource, SeededRandom};
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use network::training_set::TrainingSet;
pub use optim::sgd::Sgd;
pub use train::{EpochStats, TrainConfig};
