// ============================================================
// Inferencer
// ============================================================
// Inference-mode paths: accuracy over a validation split and a
// single-sentence prediction. Both run on the plain (non-autodiff)
// backend, so no gradients are tracked and dropout is inactive.

use burn::{backend::NdArray, prelude::*};

use crate::data::batcher::SarcasmBatch;
use crate::data::vocab::Vocab;
use crate::ml::model::SarcasmModel;

type InferBackend = NdArray;

/// Fraction of exact matches between predictions and targets.
/// Empty input counts as 0.0.
pub fn accuracy(predictions: &[i64], targets: &[i64]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let correct = predictions
        .iter()
        .zip(targets)
        .filter(|(p, t)| p == t)
        .count();
    correct as f64 / predictions.len() as f64
}

/// Run the model over every batch, collect the argmax class per example,
/// and return the overall accuracy against the true labels.
pub fn evaluate(
    model: &SarcasmModel<InferBackend>,
    batches: impl Iterator<Item = SarcasmBatch<InferBackend>>,
) -> f64 {
    let mut predictions: Vec<i64> = Vec::new();
    let mut targets: Vec<i64> = Vec::new();

    for batch in batches {
        let logits = model.forward(batch.tokens); // [batch, 2]

        // argmax(1) returns [batch, 1] — flatten to [batch] before reading out
        let predicted = logits.argmax(1).flatten::<1>(0, 1);
        predictions.extend(predicted.into_data().to_vec::<i64>().unwrap_or_default());
        targets.extend(batch.labels.into_data().to_vec::<i64>().unwrap_or_default());
    }

    accuracy(&predictions, &targets)
}

/// Encode one sentence and return the predicted class index (0 or 1).
pub fn predict(
    model: &SarcasmModel<InferBackend>,
    vocab: &Vocab,
    text: &str,
    max_len: usize,
    device: &<InferBackend as Backend>::Device,
) -> usize {
    let ids = vocab.encode(text, max_len);
    let flat: Vec<i32> = ids.iter().map(|&id| id as i32).collect();

    let tokens = Tensor::<InferBackend, 1, Int>::from_ints(flat.as_slice(), device)
        .unsqueeze::<2>(); // [1, max_len]

    let logits = model.forward(tokens); // [1, 2]
    let predicted: i64 = logits
        .argmax(1)
        .flatten::<1>(0, 1)
        .into_scalar()
        .elem::<i64>();

    predicted as usize
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::SarcasmModelConfig;

    #[test]
    fn test_accuracy_all_correct() {
        assert_eq!(accuracy(&[1, 0], &[1, 0]), 1.0);
    }

    #[test]
    fn test_accuracy_all_wrong() {
        assert_eq!(accuracy(&[0, 1], &[1, 0]), 0.0);
    }

    #[test]
    fn test_accuracy_partial() {
        assert_eq!(accuracy(&[1, 1, 0, 0], &[1, 0, 0, 1]), 0.5);
    }

    #[test]
    fn test_accuracy_empty() {
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn test_predict_returns_class_index() {
        let device = Default::default();
        let model = SarcasmModelConfig::new(10, 4, 3, 0.3).init::<InferBackend>(&device);
        let vocab = Vocab::build(&["oh great another monday"], 1);

        let pred = predict(&model, &vocab, "oh great, just great", 6, &device);
        assert!(pred == 0 || pred == 1);
    }
}
