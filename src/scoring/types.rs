use serde::{Deserialize, Serialize};

use super::metrics::{exact_match, f1_score};

/// One prediction scored against its ground truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSample {
    pub prediction: String,
    pub ground_truth: String,
    pub exact_match: u8,
    #[serde(rename = "f1_score")]
    pub f1: f64,
    /// `false` when the model call behind `prediction` failed.
    pub success: bool,
}

impl ScoredSample {
    /// Scores a successful prediction.
    pub fn score(prediction: impl Into<String>, ground_truth: impl Into<String>) -> Self {
        let prediction = prediction.into();
        let ground_truth = ground_truth.into();
        let exact_match = exact_match(&prediction, &ground_truth);
        let f1 = f1_score(&prediction, &ground_truth);
        Self {
            prediction,
            ground_truth,
            exact_match,
            f1,
            success: true,
        }
    }

    /// Records a sample whose model call failed: empty prediction, zero scores.
    pub fn failed(ground_truth: impl Into<String>) -> Self {
        Self {
            prediction: String::new(),
            ground_truth: ground_truth.into(),
            exact_match: 0,
            f1: 0.0,
            success: false,
        }
    }
}

/// Dataset-level summary of [`ScoredSample`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub exact_match_mean: f64,
    pub f1_mean: f64,
    pub sample_count: usize,
    pub success_rate: f64,
}

impl std::fmt::Display for AggregateMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EM {:.3} | F1 {:.3} | success {:.3} | n={}",
            self.exact_match_mean, self.f1_mean, self.success_rate, self.sample_count
        )
    }
}
