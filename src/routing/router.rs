use tracing::debug;

use crate::knowledge::{KnowledgeBase, KnowledgeEntry};

/// Keyword hits for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore<'a> {
    pub category: &'a str,
    pub score: usize,
}

/// Outcome of routing a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDecision<'a> {
    /// Selected category (the default when nothing matched).
    pub category: &'a str,
    /// Passage of the selected category, `None` only for an empty knowledge base.
    pub passage: Option<&'a str>,
    /// Keyword hits of the selected category.
    pub score: usize,
}

impl RouteDecision<'_> {
    /// Returns `true` if at least one keyword matched.
    pub fn is_keyword_match(&self) -> bool {
        self.score > 0
    }
}

/// Deterministic keyword router over an immutable [`KnowledgeBase`].
///
/// A category's score is the number of its keywords that occur as a substring of the
/// lower-cased question. The highest score wins; ties go to the earliest declared entry
/// and a zero maximum yields the knowledge base's default category.
#[derive(Debug, Clone)]
pub struct ContextRouter {
    knowledge: KnowledgeBase,
    keywords: Vec<Vec<String>>,
}

impl ContextRouter {
    pub fn new(knowledge: KnowledgeBase) -> Self {
        let keywords = knowledge.entries().iter().map(entry_keywords).collect();

        Self {
            knowledge,
            keywords,
        }
    }

    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin())
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Per-category keyword hits in declaration order.
    pub fn scores(&self, question: &str) -> Vec<CategoryScore<'_>> {
        let question_lower = question.to_lowercase();
        self.knowledge
            .entries()
            .iter()
            .zip(&self.keywords)
            .map(|(entry, keywords)| score_entry(entry, keywords, &question_lower))
            .collect()
    }

    pub fn select_category(&self, question: &str) -> &str {
        self.route(question).category
    }

    pub fn route(&self, question: &str) -> RouteDecision<'_> {
        let scores = self.scores(question);
        let best = pick_best(&scores);

        let decision = match best {
            Some(best) => RouteDecision {
                category: best.category,
                passage: self.knowledge.passage(best.category),
                score: best.score,
            },
            None => {
                let category = self.knowledge.default_category();
                RouteDecision {
                    category,
                    passage: self.knowledge.passage(category),
                    score: 0,
                }
            }
        };

        debug!(
            category = decision.category,
            score = decision.score,
            keyword_match = decision.is_keyword_match(),
            "Routed question"
        );

        decision
    }
}

/// Selects a category without building a [`ContextRouter`].
pub fn select_category<'a>(question: &str, knowledge: &'a KnowledgeBase) -> &'a str {
    let question_lower = question.to_lowercase();
    let scores: Vec<CategoryScore<'a>> = knowledge
        .entries()
        .iter()
        .map(|entry| score_entry(entry, &entry_keywords(entry), &question_lower))
        .collect();

    pick_best(&scores)
        .map(|best| best.category)
        .unwrap_or_else(|| knowledge.default_category())
}

/// Lower-cased, non-empty keywords of one entry.
fn entry_keywords(entry: &KnowledgeEntry) -> Vec<String> {
    entry
        .keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

fn score_entry<'a>(
    entry: &'a KnowledgeEntry,
    keywords: &[String],
    question_lower: &str,
) -> CategoryScore<'a> {
    CategoryScore {
        category: entry.category.as_str(),
        score: keywords
            .iter()
            .filter(|keyword| question_lower.contains(keyword.as_str()))
            .count(),
    }
}

/// First entry holding the strictly highest nonzero score.
fn pick_best<'a>(scores: &[CategoryScore<'a>]) -> Option<CategoryScore<'a>> {
    let mut best: Option<CategoryScore<'a>> = None;
    for candidate in scores {
        if candidate.score == 0 {
            continue;
        }
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(*candidate),
        }
    }
    best
}
