// ============================================================
// Train/Validation Splitter
// ============================================================
// One Fisher-Yates shuffle, then a fractional split. The RNG is
// passed in by the caller rather than pulled from process-global
// state, so a seeded run is reproducible end to end.

use rand::{rngs::StdRng, seq::SliceRandom};

/// Shuffle `samples` with `rng` and split into (train, validation).
/// `train_fraction` is the proportion kept for training, e.g. 0.75.
pub fn split_train_val<T>(
    mut samples: Vec<T>,
    train_fraction: f64,
    rng: &mut StdRng,
) -> (Vec<T>, Vec<T>) {
    samples.shuffle(rng);

    let total = samples.len();
    let split_at = ((total as f64) * train_fraction).round() as usize;
    // Clamp so tiny datasets never panic
    let split_at = split_at.min(total);

    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        samples.len(),
        val.len(),
    );

    (samples, val)
}
