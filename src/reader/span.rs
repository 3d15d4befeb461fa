use std::ops::Range;

/// Best answer span, as token indices into the encoded input (inclusive end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanChoice {
    pub start: usize,
    pub end: usize,
    /// `p_start * p_end` with probabilities taken over the context window only.
    pub score: f32,
}

/// Token range occupied by the second sequence (the context) of a question/context pair.
pub fn context_token_range(sequence_ids: &[Option<usize>]) -> Option<Range<usize>> {
    let first = sequence_ids.iter().position(|id| *id == Some(1))?;
    let last = sequence_ids.iter().rposition(|id| *id == Some(1))?;
    Some(first..last + 1)
}

/// Picks the highest-probability span inside `window`.
///
/// Spans satisfy `start <= end < start + max_answer_len`. Ties keep the earliest span.
pub fn best_span(
    start_logits: &[f32],
    end_logits: &[f32],
    window: Range<usize>,
    max_answer_len: usize,
) -> Option<SpanChoice> {
    let limit = start_logits.len().min(end_logits.len());
    let window = window.start.min(limit)..window.end.min(limit);
    if window.is_empty() || max_answer_len == 0 {
        return None;
    }

    let start_probs = softmax(&start_logits[window.clone()]);
    let end_probs = softmax(&end_logits[window.clone()]);
    let width = window.len();

    let mut best: Option<SpanChoice> = None;
    for s in 0..width {
        for e in s..width.min(s + max_answer_len) {
            let score = start_probs[s] * end_probs[e];
            if best.is_none_or(|b| score > b.score) {
                best = Some(SpanChoice {
                    start: window.start + s,
                    end: window.start + e,
                    score,
                });
            }
        }
    }
    best
}

/// Highest-scoring span over the windows of one long context, with the index of its
/// window. Windows without a span are skipped; ties keep the earliest window.
pub fn best_window_span<I>(spans: I) -> Option<(usize, SpanChoice)>
where
    I: IntoIterator<Item = Option<SpanChoice>>,
{
    spans
        .into_iter()
        .enumerate()
        .filter_map(|(idx, span)| span.map(|span| (idx, span)))
        .fold(None, |best, (idx, span)| match best {
            Some((_, current)) if span.score <= current.score => best,
            _ => Some((idx, span)),
        })
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
