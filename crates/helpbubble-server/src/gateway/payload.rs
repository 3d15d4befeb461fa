use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    /// Answer against this text instead of the routed passage.
    #[serde(default)]
    pub context: Option<String>,
    /// Only recorded in traces.
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub confidence: f64,
    pub context_used: String,
    /// Routed category; absent when the caller supplied the context and the reader answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub fallback: bool,
    /// Seconds.
    pub response_time: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestContextQuery {
    pub context: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestContextResponse {
    pub question: String,
    pub context: String,
    pub answer: String,
    pub confidence: f64,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub model_name: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextsResponse {
    pub contexts: Vec<String>,
    pub total_contexts: usize,
}
