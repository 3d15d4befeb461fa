use serde::{Deserialize, Serialize};

/// Gold answer of a record: either bare text or a located span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerField {
    Span {
        text: String,
        /// Character offset into the context.
        answer_start: usize,
    },
    Text(String),
}

impl AnswerField {
    pub fn span(text: impl Into<String>, answer_start: usize) -> Self {
        Self::Span {
            text: text.into(),
            answer_start,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Span { text, .. } | Self::Text(text) => text,
        }
    }

    pub fn answer_start(&self) -> Option<usize> {
        match self {
            Self::Span { answer_start, .. } => Some(*answer_start),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for AnswerField {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AnswerField {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// One question/context/answer triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub context: String,
    pub answer: AnswerField,
}

impl QaRecord {
    pub fn new(
        question: impl Into<String>,
        context: impl Into<String>,
        answer: impl Into<AnswerField>,
    ) -> Self {
        Self {
            id: None,
            question: question.into(),
            context: context.into(),
            answer: answer.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Gold answer text regardless of the answer's shape.
    pub fn answer_text(&self) -> &str {
        self.answer.text()
    }
}
