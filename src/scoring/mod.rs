//! SQuAD-style answer scoring.
//!
//! [`normalize`] canonicalizes answer text; [`exact_match`] and [`f1_score`] compare a
//! prediction with its ground truth; [`aggregate`] summarizes a batch of
//! [`ScoredSample`]s into [`AggregateMetrics`].

pub mod metrics;
pub mod normalize;
pub mod types;


pub use metrics::{aggregate, exact_match, f1_score};
pub use normalize::{normalize, normalized_tokens};
pub use types::{AggregateMetrics, ScoredSample};
