//! Cross-cutting, shared constants.

/// Label reported for the reader when no explicit model name is configured.
pub const DEFAULT_MODEL_NAME: &str = "distilbert-base-cased-distilled-squad";

/// Upper bound on answer length, in tokens.
pub const DEFAULT_MAX_ANSWER_LEN: usize = 15;

/// Question + context token budget per window.
pub const DEFAULT_MAX_SEQ_LEN: usize = 384;

/// Context tokens shared by consecutive windows over a long context.
pub const DEFAULT_DOC_STRIDE: usize = 128;

/// Characters of the context echoed back in service responses.
pub const CONTEXT_PREVIEW_CHARS: usize = 200;

/// Share of records placed in the training split.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.8;

/// Evaluation progress is logged every this many samples.
pub const PROGRESS_LOG_INTERVAL: usize = 10;

/// Returns `text` cut to `max_chars` characters, with `...` appended when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// [`truncate_chars`] at [`CONTEXT_PREVIEW_CHARS`].
pub fn context_preview(text: &str) -> String {
    truncate_chars(text, CONTEXT_PREVIEW_CHARS)
}
