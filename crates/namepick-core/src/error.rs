use thiserror::Error;

/// Top-level error type for namepick.
///
/// Name resolution itself never fails; these cover the surfaces around it.
#[derive(Debug, Error)]
pub enum NamepickError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed feature input.
    #[error("input error: {0}")]
    Input(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
