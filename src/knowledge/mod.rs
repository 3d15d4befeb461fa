//! Knowledge base: the fixed set of passages the router chooses between.
//!
//! A [`KnowledgeBase`] is constructed once (from the built-in catalog or a JSON file) and
//! never mutated afterwards. It is passed by value into the router, so there is no
//! module-level state.

pub mod builtin;
pub mod entry;
pub mod error;


pub use builtin::{ACCOUNT, DEFAULT_CATEGORY, PAYMENT, PRODUCTS, PROMOTIONS, RETURNS, SHIPPING};
pub use entry::{KnowledgeBase, KnowledgeEntry};
pub use error::{KnowledgeError, KnowledgeResult};
