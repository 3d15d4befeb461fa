//! QA dataset tooling: seed catalog, heuristic labelling, splitting and JSON persistence.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod io;
pub mod record;
pub mod split;


pub use builder::{build_dataset, build_records, label_answer};
pub use catalog::{SEED_CATALOG, SeedPassage};
pub use error::{DatasetError, DatasetResult};
pub use io::{load_or_sample, load_records, load_squad_file, sample_records, save_records};
pub use record::{AnswerField, QaRecord};
pub use split::split_train_eval;
