use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("knowledge base has no entries")]
    Empty,

    #[error("category identifier must not be blank")]
    BlankCategory,

    #[error("duplicate category '{category}'")]
    DuplicateCategory { category: String },

    #[error("default category '{category}' does not name an entry")]
    UnknownDefault { category: String },

    #[error("failed to read knowledge base {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse knowledge base {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;
