pub mod digital;
pub mod signal;
pub mod virtual_io;

pub use digital::{DigitalInput, DigitalOutput, Edge};
pub use signal::{decision, run_cycle, sample_inputs, DECISION_THRESHOLD};
pub use virtual_io::{VirtualButton, VirtualLed, VirtualLine};
