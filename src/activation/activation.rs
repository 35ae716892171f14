use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NnError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    #[serde(alias = "ReLU")]
    Relu,
    #[serde(alias = "Tanh")]
    Tanh,
}

impl ActivationFunction {
    /// Element-wise activation of a weighted sum.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Relu => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Tanh => x.tanh(),
        }
    }

    /// Local derivative, expressed in terms of the *activated* output `y`.
    ///
    /// ReLU: `1` if `y > 0`, else `0`. The sign of the output reproduces the
    /// sign of the pre-activation, so no pre-activation cache is needed.
    ///
    /// Tanh: `1 - y²`, the analytic derivative evaluated on the activated
    /// output. tanh is not applied to `y` a second time.
    pub fn gradient(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Relu => if y > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Tanh => 1.0 - y * y,
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationFunction::Relu => f.write_str("ReLU"),
            ActivationFunction::Tanh => f.write_str("Hyperbolic tangent"),
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = NnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relu" => Ok(ActivationFunction::Relu),
            "tanh" => Ok(ActivationFunction::Tanh),
            other => Err(NnError::InvalidConfig(format!(
                "unknown activation function '{other}' (expected relu or tanh)"
            ))),
        }
    }
}
