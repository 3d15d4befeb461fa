use regex::Regex;
use std::sync::LazyLock;

static ARTICLES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(a|an|the)\b").expect("article pattern"));

/// Canonical form used before any answer comparison.
///
/// Applied in order: lower-case, delete ASCII punctuation, replace the whole-word
/// articles `a` / `an` / `the` with a space, collapse whitespace and trim. Punctuation goes
/// first, so `"a-la-carte"` becomes `"alacarte"` and keeps its leading `a`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_punctuation = remove_punctuation(&lowered);
    let without_articles = ARTICLES.replace_all(&without_punctuation, " ");
    collapse_whitespace(&without_articles)
}

/// Whitespace tokens of [`normalize`]d text.
pub fn normalized_tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
