pub mod network;
pub mod spec;
pub mod stack;
pub mod training_set;

pub use network::Network;
pub use spec::NetworkSpec;
pub use stack::LayerStack;
pub use training_set::TrainingSet;
