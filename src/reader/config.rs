use std::path::PathBuf;

use crate::constants::{
    DEFAULT_DOC_STRIDE, DEFAULT_MAX_ANSWER_LEN, DEFAULT_MAX_SEQ_LEN, DEFAULT_MODEL_NAME,
};

/// Smallest sequence budget that still leaves room for special tokens and some context.
pub const MIN_SEQ_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Directory with `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_path: Option<PathBuf>,

    /// Label reported by `/health` and evaluation reports.
    pub model_name: String,

    /// Longest answer, in tokens.
    pub max_answer_len: usize,

    /// Question + context token budget of one window. Contexts that do not fit are read
    /// as several overlapping windows.
    pub max_seq_len: usize,

    /// Context tokens repeated at the start of each following window.
    pub doc_stride: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            model_name: DEFAULT_MODEL_NAME.to_string(),
            max_answer_len: DEFAULT_MAX_ANSWER_LEN,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            doc_stride: DEFAULT_DOC_STRIDE,
        }
    }
}

impl ReaderConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Self::default()
        }
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_max_answer_len(mut self, max_answer_len: usize) -> Self {
        self.max_answer_len = max_answer_len;
        self
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn with_doc_stride(mut self, doc_stride: usize) -> Self {
        self.doc_stride = doc_stride;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_answer_len == 0 {
            return Err("max_answer_len must be at least 1".to_string());
        }

        if self.max_seq_len < MIN_SEQ_LEN {
            return Err(format!(
                "max_seq_len must be at least {}, got {}",
                MIN_SEQ_LEN, self.max_seq_len
            ));
        }

        if self.doc_stride * 2 > self.max_seq_len {
            return Err(format!(
                "doc_stride must be at most half of max_seq_len ({}), got {}",
                self.max_seq_len, self.doc_stride
            ));
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        if self.model_name.trim().is_empty() {
            return Err("model_name cannot be blank".to_string());
        }

        Ok(())
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let model_path = std::env::var("HELPBUBBLE_MODEL_PATH")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let model_name = std::env::var("HELPBUBBLE_MODEL_NAME")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.model_name);

        let max_answer_len = std::env::var("HELPBUBBLE_MAX_ANSWER_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_answer_len);

        let max_seq_len = std::env::var("HELPBUBBLE_MAX_SEQ_LEN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_seq_len);

        let doc_stride = std::env::var("HELPBUBBLE_DOC_STRIDE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.doc_stride);

        Self {
            model_path,
            model_name,
            max_answer_len,
            max_seq_len,
            doc_stride,
        }
    }
}
