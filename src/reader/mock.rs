use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::ReaderError;
use super::{AnswerModel, ModelAnswer};

/// Scripted [`AnswerModel`] for tests.
///
/// Answers configured with [`with_answer`](Self::with_answer) are located in the context to
/// fill in offsets; unscripted questions get the context's first sentence.
#[derive(Debug, Default)]
pub struct MockAnswerModel {
    name: String,
    answers: HashMap<String, String>,
    failing: HashSet<String>,
    fail_all: bool,
    calls: AtomicUsize,
}

impl MockAnswerModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// A model whose every call fails.
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            fail_all: true,
            ..Self::new(name)
        }
    }

    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.answers.insert(question.into(), answer.into());
        self
    }

    pub fn failing_on(mut self, question: impl Into<String>) -> Self {
        self.failing.insert(question.into());
        self
    }

    /// Number of `answer` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl AnswerModel for MockAnswerModel {
    fn answer(&self, question: &str, context: &str) -> Result<ModelAnswer, ReaderError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        if self.fail_all || self.failing.contains(question) {
            return Err(ReaderError::InferenceFailed {
                reason: format!("mock failure for '{}'", question),
            });
        }

        if let Some(answer) = self.answers.get(question) {
            let (start, score) = match context.find(answer.as_str()) {
                Some(byte_idx) => (context[..byte_idx].chars().count(), 0.9),
                None => (0, 0.1),
            };
            return Ok(ModelAnswer {
                text: answer.clone(),
                score,
                start,
                end: start + answer.chars().count(),
            });
        }

        let first_sentence = context.split('.').next().unwrap_or_default().trim();
        if first_sentence.is_empty() {
            return Err(ReaderError::NoAnswer);
        }
        let start = context.find(first_sentence).map_or(0, |i| context[..i].chars().count());
        Ok(ModelAnswer {
            text: first_sentence.to_string(),
            score: 0.5,
            start,
            end: start + first_sentence.chars().count(),
        })
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
