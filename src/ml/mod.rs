// ============================================================
// ML Layer (Burn)
// ============================================================
// All Burn-specific model code lives here:
//
//   model.rs      — embedding → bidirectional LSTM →
//                   last-timestep pooling → feed-forward head
//   trainer.rs    — epoch loop: forward, cross-entropy,
//                   backward, Adam step, per-epoch reporting
//   inferencer.rs — inference-mode evaluation (accuracy) and
//                   single-sentence prediction

/// BiLSTM classifier architecture
pub mod model;

/// Training loop with per-epoch validation
pub mod trainer;

/// Evaluation and single-sentence inference
pub mod inferencer;
