//! Model evaluation over labelled QA records.

pub mod error;
pub mod evaluator;
pub mod report;


pub use error::EvaluationError;
pub use evaluator::{Evaluator, compare_models};
pub use report::{
    EvaluationMetrics, EvaluationReport, SampleOutcome, render_comparison, render_summary,
    save_report,
};
