use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::EvaluationError;
use crate::scoring::ScoredSample;

const RULE_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 75;

/// Result of asking the model one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleOutcome {
    #[serde(flatten)]
    pub scored: ScoredSample,
    pub confidence: f64,
    /// Seconds spent in the model call.
    pub inference_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SampleOutcome {
    pub fn success(&self) -> bool {
        self.scored.success
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub exact_match: f64,
    pub f1_score: f64,
    /// Mean seconds per sample, failures included.
    pub average_inference_time: f64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub model_name: String,
    pub dataset_size: usize,
    pub metrics: EvaluationMetrics,
    pub detailed_results: Vec<SampleOutcome>,
}

/// Human-readable summary of one model's run.
pub fn render_summary(report: &EvaluationReport) -> String {
    let m = &report.metrics;
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "EVALUATION RESULTS SUMMARY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Model: {}", report.model_name);
    let _ = writeln!(out, "Dataset Size: {}", report.dataset_size);
    let _ = writeln!(
        out,
        "Exact Match Score: {:.3} ({:.1}%)",
        m.exact_match,
        m.exact_match * 100.0
    );
    let _ = writeln!(out, "F1 Score: {:.3} ({:.1}%)", m.f1_score, m.f1_score * 100.0);
    let _ = writeln!(out, "Average Inference Time: {:.3}s", m.average_inference_time);
    let _ = writeln!(
        out,
        "Success Rate: {:.3} ({:.1}%)",
        m.success_rate,
        m.success_rate * 100.0
    );
    out
}

/// Side-by-side table of several models evaluated on the same records.
pub fn render_comparison(reports: &[EvaluationReport]) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "MODEL COMPARISON");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{:<25} {:<10} {:<10} {:<12} {:<12}",
        "Model", "EM Score", "F1 Score", "Avg Time", "Success Rate"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for report in reports {
        let m = &report.metrics;
        let _ = writeln!(
            out,
            "{:<25} {:<10.3} {:<10.3} {:<12} {:<12.3}",
            report.model_name,
            m.exact_match,
            m.f1_score,
            format!("{:.3}s", m.average_inference_time),
            m.success_rate
        );
    }
    out
}

/// Writes `value` as pretty JSON to `dir/file_name`, creating `dir`.
pub fn save_report<T: Serialize + ?Sized>(
    value: &T,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf, EvaluationError> {
    fs::create_dir_all(dir).map_err(|source| EvaluationError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json).map_err(|source| EvaluationError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Saved evaluation report");
    Ok(path)
}
