use std::sync::Arc;

use helpbubble::fallback::FallbackResponder;
use helpbubble::knowledge::KnowledgeBase;
use helpbubble::reader::AnswerModel;
use helpbubble::routing::ContextRouter;

/// Shared, read-only state behind every handler.
pub struct HandlerState<M: AnswerModel + 'static> {
    pub responder: Arc<FallbackResponder>,

    /// `None` when no model could be loaded; `/ask` then serves canned answers.
    pub reader: Option<Arc<M>>,

    pub model_name: String,
}

impl<M: AnswerModel + 'static> Clone for HandlerState<M> {
    fn clone(&self) -> Self {
        Self {
            responder: Arc::clone(&self.responder),
            reader: self.reader.clone(),
            model_name: self.model_name.clone(),
        }
    }
}

impl<M: AnswerModel + 'static> HandlerState<M> {
    pub fn new(knowledge: KnowledgeBase, reader: Option<M>, model_name: impl Into<String>) -> Self {
        Self {
            responder: Arc::new(FallbackResponder::new(ContextRouter::new(knowledge))),
            reader: reader.map(Arc::new),
            model_name: model_name.into(),
        }
    }

    pub fn without_reader(knowledge: KnowledgeBase, model_name: impl Into<String>) -> Self {
        Self::new(knowledge, None, model_name)
    }

    pub fn router(&self) -> &ContextRouter {
        self.responder.router()
    }

    pub fn model_loaded(&self) -> bool {
        self.reader.is_some()
    }
}
