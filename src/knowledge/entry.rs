use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::error::{KnowledgeError, KnowledgeResult};

/// One routable passage and the keyword triggers that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Unique category identifier.
    pub category: String,
    /// Passage handed to the reader as context.
    pub passage: String,
    /// Ordered substring triggers.
    pub keywords: Vec<String>,
    /// Canned answer used when the reader is unavailable.
    #[serde(default)]
    pub fallback: String,
}

impl KnowledgeEntry {
    pub fn new<C, P, K, S>(category: C, passage: P, keywords: K) -> Self
    where
        C: Into<String>,
        P: Into<String>,
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            passage: passage.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            fallback: String::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

/// On-disk layout of a knowledge-base file.
#[derive(Debug, Deserialize, Serialize)]
struct KnowledgeFile {
    #[serde(default)]
    default_category: Option<String>,
    entries: Vec<KnowledgeEntry>,
}

/// Ordered, immutable set of [`KnowledgeEntry`] plus the category used when nothing matches.
///
/// Declaration order is significant: the router breaks score ties in favour of the entry
/// declared first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    default_category: String,
}

impl KnowledgeBase {
    /// Builds a knowledge base, rejecting blank or duplicate categories and a default that
    /// names no entry.
    pub fn new(
        entries: Vec<KnowledgeEntry>,
        default_category: impl Into<String>,
    ) -> KnowledgeResult<Self> {
        let default_category = default_category.into();

        if entries.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.category.trim().is_empty() {
                return Err(KnowledgeError::BlankCategory);
            }
            if !seen.insert(entry.category.as_str()) {
                return Err(KnowledgeError::DuplicateCategory {
                    category: entry.category.clone(),
                });
            }
        }

        if !seen.contains(default_category.as_str()) {
            return Err(KnowledgeError::UnknownDefault {
                category: default_category,
            });
        }

        Ok(Self {
            entries,
            default_category,
        })
    }

    /// Builds a knowledge base whose default is the first declared entry.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> KnowledgeResult<Self> {
        let default_category = entries
            .first()
            .map(|e| e.category.clone())
            .ok_or(KnowledgeError::Empty)?;
        Self::new(entries, default_category)
    }

    /// Skips validation; only for catalogs known to be well formed at compile time.
    pub(super) fn from_static(entries: Vec<KnowledgeEntry>, default_category: &str) -> Self {
        Self {
            entries,
            default_category: default_category.to_string(),
        }
    }

    /// A knowledge base with no passages; routing always yields `default_category`.
    pub fn empty(default_category: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            default_category: default_category.into(),
        }
    }

    /// Loads `{ "default_category": ..., "entries": [...] }` from a JSON file.
    ///
    /// When `default_category` is omitted the first entry is the default.
    pub fn from_json_file(path: &Path) -> KnowledgeResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: KnowledgeFile =
            serde_json::from_str(&raw).map_err(|source| KnowledgeError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let kb = match file.default_category {
            Some(default_category) => Self::new(file.entries, default_category)?,
            None => Self::from_entries(file.entries)?,
        };

        info!(
            path = %path.display(),
            entries = kb.len(),
            default_category = %kb.default_category,
            "Loaded knowledge base"
        );

        Ok(kb)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    pub fn get(&self, category: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn passage(&self, category: &str) -> Option<&str> {
        self.get(category).map(|e| e.passage.as_str())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
