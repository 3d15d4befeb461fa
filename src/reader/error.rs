use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("reader model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load reader model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("no reader model configured (set HELPBUBBLE_MODEL_PATH)")]
    NotConfigured,

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("reader inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid reader configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("no answer span found in context")]
    NoAnswer,
}

impl From<candle_core::Error> for ReaderError {
    fn from(err: candle_core::Error) -> Self {
        ReaderError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ReaderError {
    fn from(err: std::io::Error) -> Self {
        ReaderError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
