//! HelpBubble library crate (used by the server, the evaluation CLI and integration tests).
//!
//! # Public API Surface
//!
//! ## Answering
//! - [`KnowledgeBase`], [`KnowledgeEntry`] - Support passages and their keyword triggers
//! - [`ContextRouter`] - Keyword routing from a question to one passage
//! - [`AnswerModel`], [`ExtractiveReader`], [`ReaderConfig`] - Extractive reading
//! - [`FallbackResponder`] - Canned answers when no reader is available
//!
//! ## Offline Tooling
//! - [`QaRecord`], [`build_dataset`], [`split_train_eval`] - Dataset construction
//! - [`normalize`], [`exact_match`], [`f1_score`], [`aggregate`] - SQuAD-style scoring
//! - [`Evaluator`], [`EvaluationReport`] - Model evaluation and reporting
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - Server configuration from the environment
//!
//! ## Test/Mock Support
//! [`MockAnswerModel`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod evaluation;
pub mod fallback;
pub mod knowledge;
pub mod reader;
pub mod routing;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{
    CONTEXT_PREVIEW_CHARS, DEFAULT_DOC_STRIDE, DEFAULT_MAX_ANSWER_LEN, DEFAULT_MAX_SEQ_LEN,
    DEFAULT_MODEL_NAME, DEFAULT_TRAIN_RATIO, context_preview, truncate_chars,
};
pub use dataset::{
    AnswerField, DatasetError, QaRecord, build_dataset, label_answer, load_or_sample,
    load_records, load_squad_file, sample_records, save_records, split_train_eval,
};
pub use evaluation::{
    EvaluationError, EvaluationMetrics, EvaluationReport, Evaluator, SampleOutcome,
    compare_models, render_comparison, render_summary, save_report,
};
pub use fallback::{FallbackAnswer, FallbackResponder};
pub use knowledge::{KnowledgeBase, KnowledgeEntry, KnowledgeError};
#[cfg(any(test, feature = "mock"))]
pub use reader::MockAnswerModel;
pub use reader::{AnswerModel, ExtractiveReader, ModelAnswer, ReaderConfig, ReaderError};
pub use routing::{ContextRouter, RouteDecision, select_category};
pub use scoring::{
    AggregateMetrics, ScoredSample, aggregate, exact_match, f1_score, normalize,
};
