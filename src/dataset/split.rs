use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::error::{DatasetError, DatasetResult};

/// Shuffles `records` and splits them at `floor(len * train_ratio)` into (train, eval).
pub fn split_train_eval<T, R: Rng + ?Sized>(
    mut records: Vec<T>,
    train_ratio: f64,
    rng: &mut R,
) -> DatasetResult<(Vec<T>, Vec<T>)> {
    if !(0.0..=1.0).contains(&train_ratio) {
        return Err(DatasetError::InvalidRatio { ratio: train_ratio });
    }

    records.shuffle(rng);

    let total = records.len();
    let split_at = ((total as f64) * train_ratio).floor() as usize;
    let eval = records.split_off(split_at.min(total));

    debug!(train = records.len(), eval = eval.len(), "Split dataset");

    Ok((records, eval))
}
