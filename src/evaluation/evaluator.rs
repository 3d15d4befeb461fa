use std::time::Instant;
use tracing::{info, warn};

use super::report::{EvaluationMetrics, EvaluationReport, SampleOutcome};
use crate::constants::PROGRESS_LOG_INTERVAL;
use crate::dataset::QaRecord;
use crate::reader::AnswerModel;
use crate::scoring::{ScoredSample, aggregate};

/// Runs an [`AnswerModel`] over labelled records and scores its answers.
#[derive(Debug)]
pub struct Evaluator<M> {
    model: M,
}

impl<M: AnswerModel> Evaluator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Asks one question. A model error yields an unsuccessful outcome, never a panic.
    pub fn evaluate_sample(&self, question: &str, context: &str, ground_truth: &str) -> SampleOutcome {
        let started = Instant::now();
        let result = self.model.answer(question, context);
        let inference_time = started.elapsed().as_secs_f64();

        match result {
            Ok(answer) => SampleOutcome {
                scored: ScoredSample::score(answer.text, ground_truth),
                confidence: f64::from(answer.score),
                inference_time,
                error: None,
            },
            Err(e) => {
                warn!(error = %e, "Sample evaluation failed");
                SampleOutcome {
                    scored: ScoredSample::failed(ground_truth),
                    confidence: 0.0,
                    inference_time,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Evaluates every record in order. Means are taken over all records.
    pub fn evaluate_dataset(&self, records: &[QaRecord]) -> EvaluationReport {
        let total = records.len();
        info!(model = self.model_name(), samples = total, "Evaluating dataset");

        let outcomes: Vec<SampleOutcome> = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                if i % PROGRESS_LOG_INTERVAL == 0 {
                    info!("Processing sample {}/{}", i + 1, total);
                }
                self.evaluate_sample(&record.question, &record.context, record.answer_text())
            })
            .collect();

        let scored: Vec<ScoredSample> = outcomes.iter().map(|o| o.scored.clone()).collect();
        let summary = aggregate(&scored);
        let average_inference_time = if total == 0 {
            0.0
        } else {
            outcomes.iter().map(|o| o.inference_time).sum::<f64>() / total as f64
        };

        let report = EvaluationReport {
            model_name: self.model_name().to_string(),
            dataset_size: total,
            metrics: EvaluationMetrics {
                exact_match: summary.exact_match_mean,
                f1_score: summary.f1_mean,
                average_inference_time,
                success_rate: summary.success_rate,
            },
            detailed_results: outcomes,
        };

        info!(model = %report.model_name, %summary, "Evaluation finished");
        report
    }
}

/// Evaluates each model on the same records, preserving the order of `models`.
pub fn compare_models<M: AnswerModel>(models: &[M], records: &[QaRecord]) -> Vec<EvaluationReport> {
    models
        .iter()
        .map(|model| Evaluator::new(model).evaluate_dataset(records))
        .collect()
}
