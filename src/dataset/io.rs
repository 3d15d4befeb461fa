use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use super::error::{DatasetError, DatasetResult};
use super::record::{AnswerField, QaRecord};

/// Writes `records` as pretty-printed JSON, creating parent directories.
pub fn save_records(records: &[QaRecord], path: &Path) -> DatasetResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| DatasetError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "Saved dataset");
    Ok(())
}

pub fn load_records(path: &Path) -> DatasetResult<Vec<QaRecord>> {
    let raw = read(path)?;
    let records: Vec<QaRecord> =
        serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), records = records.len(), "Loaded dataset");
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SquadFile {
    data: Vec<SquadArticle>,
}

#[derive(Debug, Deserialize)]
struct SquadArticle {
    paragraphs: Vec<SquadParagraph>,
}

#[derive(Debug, Deserialize)]
struct SquadParagraph {
    context: String,
    qas: Vec<SquadQuestion>,
}

#[derive(Debug, Deserialize)]
struct SquadQuestion {
    #[serde(default)]
    id: Option<String>,
    question: String,
    #[serde(default)]
    answers: Vec<SquadAnswer>,
}

#[derive(Debug, Deserialize)]
struct SquadAnswer {
    text: String,
}

/// Flattens a SQuAD v1.1 JSON file into records, keeping the first gold answer text.
///
/// Questions without answers get an empty gold answer. `limit` caps the record count.
pub fn load_squad_file(path: &Path, limit: Option<usize>) -> DatasetResult<Vec<QaRecord>> {
    let raw = read(path)?;
    let squad: SquadFile = serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<QaRecord> = squad
        .data
        .into_iter()
        .flat_map(|article| article.paragraphs)
        .flat_map(|paragraph| {
            let context = paragraph.context;
            paragraph.qas.into_iter().map(move |qa| {
                let answer = qa
                    .answers
                    .into_iter()
                    .next()
                    .map(|a| a.text)
                    .unwrap_or_default();
                QaRecord {
                    id: qa.id,
                    question: qa.question,
                    context: context.clone(),
                    answer: AnswerField::Text(answer),
                }
            })
        })
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    info!(path = %path.display(), records = records.len(), "Loaded SQuAD records");
    Ok(records)
}

/// Three hand-written records used when no evaluation file is available.
pub fn sample_records() -> Vec<QaRecord> {
    vec![
        QaRecord::new(
            "How long do I have to return an item?",
            "Our return policy allows customers to return items within 30 days of purchase. \
             Items must be in original condition with tags attached.",
            "30 days",
        ),
        QaRecord::new(
            "How much does express shipping cost?",
            "We offer free standard shipping on orders over $50. Express shipping costs $15.99 \
             and takes 1-2 business days.",
            "$15.99",
        ),
        QaRecord::new(
            "What warranty comes with electronics?",
            "All our products come with a manufacturer warranty. Electronics typically have a \
             1-year warranty.",
            "1-year warranty",
        ),
    ]
}

/// Loads `path` when it exists, otherwise falls back to [`sample_records`].
pub fn load_or_sample(path: &Path) -> DatasetResult<Vec<QaRecord>> {
    if path.exists() {
        load_records(path)
    } else {
        info!(path = %path.display(), "Dataset not found, using built-in sample records");
        Ok(sample_records())
    }
}

fn read(path: &Path) -> DatasetResult<String> {
    fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}
