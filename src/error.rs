use thiserror::Error;

/// Boundary errors for callers of the risk engine.
///
/// The engine itself clamps rather than rejects: out-of-range coordinates are
/// valid input and simply produce clamped output. Only genuine caller-contract
/// violations surface here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("nutritional index {0} outside [0, 1]")]
    NutritionalIndexOutOfRange(f64),

    #[error("non-finite value supplied for {field}")]
    NonFiniteInput { field: &'static str },

    #[error("unknown climate scenario '{0}'")]
    UnknownScenario(String),
}
