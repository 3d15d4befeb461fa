use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
