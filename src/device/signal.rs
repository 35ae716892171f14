use crate::device::digital::{DigitalInput, DigitalOutput};
use crate::error::Result;
use crate::network::network::Network;

/// Network outputs at or above this value switch the output line on.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Samples every input once, in slice order: pressed maps to `1.0`, released to `0.0`.
pub fn sample_inputs<I: DigitalInput>(inputs: &mut [I]) -> Vec<f64> {
    inputs
        .iter_mut()
        .map(|input| if input.is_pressed() { 1.0 } else { 0.0 })
        .collect()
}

/// Thresholds the first network output. An empty output never enables.
pub fn decision(output: &[f64]) -> bool {
    output.first().map_or(false, |&v| v >= DECISION_THRESHOLD)
}

/// One inference cycle: sample `inputs`, predict, and write the decision to `output`.
pub fn run_cycle<I, O>(network: &mut Network, inputs: &mut [I], output: &mut O) -> Result<bool>
where
    I: DigitalInput,
    O: DigitalOutput,
{
    let sample = sample_inputs(inputs);
    let enable = decision(network.predict(&sample)?);
    output.write(enable);
    Ok(enable)
}
