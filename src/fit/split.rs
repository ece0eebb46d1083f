//! Random train/test partitioning.
//!
//! The permutation comes from a caller-supplied RNG, so a seeded `StdRng`
//! reproduces the same split and an entropy-seeded one does not.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::ModelTrainingError;

/// Minimum sample count that leaves one training and one held-out sample.
pub const MIN_SAMPLES: usize = 2;

/// Sample indices assigned to each side of the split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Number of held-out samples for `n` samples.
///
/// `ceil(n * test_fraction)`, capped so at least one sample is left to train on.
pub fn holdout_size(n: usize, test_fraction: f64) -> usize {
    let raw = (n as f64 * test_fraction).ceil() as usize;
    raw.clamp(1, n.saturating_sub(1).max(1))
}

/// Shuffle `0..n` and cut it into held-out and training indices.
pub fn train_test_split<R: Rng + ?Sized>(
    n: usize,
    test_fraction: f64,
    rng: &mut R,
) -> Result<Split, ModelTrainingError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(ModelTrainingError::InvalidTestFraction(test_fraction));
    }
    if n < MIN_SAMPLES {
        return Err(ModelTrainingError::InsufficientSamples {
            required: MIN_SAMPLES,
            actual: n,
        });
    }

    let n_test = holdout_size(n, test_fraction);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    let train = indices.split_off(n_test);

    Ok(Split { train, test: indices })
}
