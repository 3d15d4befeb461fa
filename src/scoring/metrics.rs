use std::collections::HashMap;

use super::normalize::{normalize, normalized_tokens};
use super::types::{AggregateMetrics, ScoredSample};

/// `1` iff both answers normalize to the same string.
pub fn exact_match(prediction: &str, ground_truth: &str) -> u8 {
    u8::from(normalize(prediction) == normalize(ground_truth))
}

/// Token-overlap F1 over normalized whitespace tokens.
///
/// Overlap is a multiset intersection: a shared token counts up to the smaller of its two
/// multiplicities. If either side has no tokens the score is `1.0` when both are empty and
/// `0.0` otherwise.
pub fn f1_score(prediction: &str, ground_truth: &str) -> f64 {
    let prediction_tokens = normalized_tokens(prediction);
    let truth_tokens = normalized_tokens(ground_truth);

    if prediction_tokens.is_empty() || truth_tokens.is_empty() {
        return if prediction_tokens == truth_tokens { 1.0 } else { 0.0 };
    }

    let common = overlap(&prediction_tokens, &truth_tokens);
    if common == 0 {
        return 0.0;
    }

    let precision = common as f64 / prediction_tokens.len() as f64;
    let recall = common as f64 / truth_tokens.len() as f64;
    2.0 * precision * recall / (precision + recall)
}

fn overlap(prediction: &[String], truth: &[String]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in truth {
        *counts.entry(token.as_str()).or_default() += 1;
    }

    let mut common = 0;
    for token in prediction {
        if let Some(remaining) = counts.get_mut(token.as_str())
            && *remaining > 0
        {
            *remaining -= 1;
            common += 1;
        }
    }
    common
}

/// Means over every sample; failed samples count in the denominator with zero scores.
///
/// An empty slice yields all-zero metrics.
pub fn aggregate(samples: &[ScoredSample]) -> AggregateMetrics {
    if samples.is_empty() {
        return AggregateMetrics::default();
    }

    let (mut em_sum, mut f1_sum, mut successes) = (0.0_f64, 0.0_f64, 0_usize);
    for sample in samples.iter().filter(|s| s.success) {
        em_sum += f64::from(sample.exact_match);
        f1_sum += sample.f1;
        successes += 1;
    }

    let count = samples.len() as f64;
    AggregateMetrics {
        exact_match_mean: em_sum / count,
        f1_mean: f1_sum / count,
        sample_count: samples.len(),
        success_rate: successes as f64 / count,
    }
}
