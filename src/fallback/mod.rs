//! Canned answers served when no reader is available or the reader fails.

use serde::Serialize;
use tracing::debug;

use crate::routing::ContextRouter;

#[cfg(test)]
mod tests;

/// Reply used when the knowledge base has nothing at all to offer.
pub const GENERIC_FALLBACK: &str =
    "I'm sorry, I couldn't find an answer to that. Please contact our support team for help.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackAnswer {
    pub category: String,
    pub answer: String,
}

/// Routes a question exactly like the main path and answers with the category's canned text.
#[derive(Debug, Clone)]
pub struct FallbackResponder {
    router: ContextRouter,
}

impl FallbackResponder {
    pub fn new(router: ContextRouter) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &ContextRouter {
        &self.router
    }

    pub fn respond(&self, question: &str) -> FallbackAnswer {
        let decision = self.router.route(question);
        let entry = self.router.knowledge_base().get(decision.category);

        // Entries loaded from disk may omit the canned text; the passage lead stands in.
        let answer = match entry {
            Some(entry) if !entry.fallback.trim().is_empty() => entry.fallback.clone(),
            Some(entry) => first_sentence(&entry.passage)
                .unwrap_or(GENERIC_FALLBACK)
                .to_string(),
            None => GENERIC_FALLBACK.to_string(),
        };

        debug!(category = decision.category, "Serving fallback answer");

        FallbackAnswer {
            category: decision.category.to_string(),
            answer,
        }
    }
}

/// First sentence of `text`, including its terminating period when present.
fn first_sentence(text: &str) -> Option<&str> {
    let text = text.trim();
    let end = text.find('.').map_or(text.len(), |i| i + 1);
    let sentence = text[..end].trim();
    (!sentence.is_empty() && sentence != ".").then_some(sentence)
}
