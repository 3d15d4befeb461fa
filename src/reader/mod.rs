//! Extractive question answering.
//!
//! [`AnswerModel`] is the seam the rest of the crate depends on: given a question and a
//! context it returns an answer span or a [`ReaderError`]. Callers treat every error as a
//! recoverable, per-call failure.
//!
//! [`ExtractiveReader`] implements it with a local BERT or DistilBERT SQuAD checkpoint
//! (candle + tokenizers). [`MockAnswerModel`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod bert;
pub mod config;
pub mod device;
pub mod error;
pub mod extractive;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod span;

#[cfg(test)]
mod tests;

pub use bert::{QaArchitecture, detect_architecture};
pub use config::ReaderConfig;
pub use error::ReaderError;
pub use extractive::ExtractiveReader;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockAnswerModel;
pub use span::{SpanChoice, best_span, best_window_span, context_token_range};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An extracted answer. Offsets are character positions into the context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAnswer {
    pub text: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
    pub start: usize,
    pub end: usize,
}

pub trait AnswerModel: Send + Sync {
    fn answer(&self, question: &str, context: &str) -> Result<ModelAnswer, ReaderError>;

    fn model_name(&self) -> &str;
}

impl<M: AnswerModel + ?Sized> AnswerModel for Arc<M> {
    fn answer(&self, question: &str, context: &str) -> Result<ModelAnswer, ReaderError> {
        (**self).answer(question, context)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

impl<M: AnswerModel + ?Sized> AnswerModel for &M {
    fn answer(&self, question: &str, context: &str) -> Result<ModelAnswer, ReaderError> {
        (**self).answer(question, context)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
