use thiserror::Error;

/// Errors raised by the filter engine. Both variants indicate a mismatch
/// between host wiring and the engine's fixed dimension/label sets, so they
/// are surfaced rather than silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown label: {0}")]
    UnknownLabel(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),
}
