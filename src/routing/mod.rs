//! Keyword routing from a free-text question to one knowledge-base passage.

pub mod router;


pub use router::{CategoryScore, ContextRouter, RouteDecision, select_category};
