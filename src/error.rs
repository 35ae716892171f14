use thiserror::Error;

/// Errors raised by layer, network and configuration operations.
///
/// Every variant is reported before any state has been mutated; none of them
/// are retried internally.
#[derive(Debug, Error)]
pub enum NnError {
    /// A construction parameter or hyperparameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A vector or matrix argument does not match the width a layer expects.
    #[error("shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NnError {
    pub(crate) fn shape(context: &'static str, expected: usize, actual: usize) -> NnError {
        NnError::ShapeMismatch { context, expected, actual }
    }
}

pub type Result<T> = std::result::Result<T, NnError>;
