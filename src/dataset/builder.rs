use tracing::info;

use super::catalog::{SEED_CATALOG, SeedPassage};
use super::record::{AnswerField, QaRecord};

/// Question shapes with a fixed expected answer. Order matters: the first matching rule wins.
enum Rule {
    Answer(&'static str),
    /// Matched a shape whose answer is unknown; use the first sentence.
    Default,
}

fn match_rule(question_lower: &str) -> Option<Rule> {
    let has = |needle: &str| question_lower.contains(needle);

    if has("how long") && has("return") {
        return Some(Rule::Answer("30 days"));
    }
    if has("how long") && (has("shipping") || has("delivery")) {
        return Some(if has("standard") {
            Rule::Answer("3-5 business days")
        } else if has("express") {
            Rule::Answer("1-2 business days")
        } else {
            Rule::Default
        });
    }
    if has("how much") && has("express") {
        return Some(Rule::Answer("$15.99"));
    }
    if has("free") && has("shipping") {
        return Some(Rule::Answer("orders over $50"));
    }
    if has("warranty") && has("electronics") {
        return Some(Rule::Answer("1-year warranty"));
    }
    if has("student") && has("discount") {
        return Some(Rule::Answer("15% off"));
    }
    if has("new customer") {
        return Some(Rule::Answer("10% off"));
    }
    None
}

/// Heuristic gold answer for a seed question.
///
/// A rule's answer is used only when it occurs in `context`; otherwise the answer is the
/// context's first sentence (period included) starting at offset 0.
pub fn label_answer(context: &str, question: &str) -> AnswerField {
    if let Some(Rule::Answer(text)) = match_rule(&question.to_lowercase())
        && let Some(byte_idx) = context.find(text)
    {
        return AnswerField::span(text, context[..byte_idx].chars().count());
    }

    AnswerField::span(first_sentence(context), 0)
}

fn first_sentence(context: &str) -> String {
    let head = context.split('.').next().unwrap_or_default();
    format!("{}.", head)
}

/// Labels every seed question against its passage.
pub fn build_records(catalog: &[SeedPassage]) -> Vec<QaRecord> {
    let records: Vec<QaRecord> = catalog
        .iter()
        .flat_map(|seed| seed.questions.iter().map(move |q| (seed.context, *q)))
        .enumerate()
        .map(|(n, (context, question))| {
            QaRecord::new(question, context, label_answer(context, question))
                .with_id(format!("ecomm_{}", n))
        })
        .collect();

    info!(
        passages = catalog.len(),
        records = records.len(),
        "Built QA dataset"
    );

    records
}

/// The full e-commerce dataset from the built-in seed catalog.
pub fn build_dataset() -> Vec<QaRecord> {
    build_records(&SEED_CATALOG)
}
