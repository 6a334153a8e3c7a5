// ============================================================
// Data Pipeline
// ============================================================
// Everything between raw text and tensor batches:
//
//   corpus      → fixed in-memory demo sentences + labels
//   tokenizer   → lowercase alphanumeric word tokens
//   vocab       → token → id mapping with reserved PAD/UNK ids,
//                 plus fixed-length integer encoding
//   dataset     → Burn Dataset over encoded samples
//   batcher     → Burn Batcher stacking samples into tensors
//   splitter    → seeded shuffle + train/validation split
//
// Each module is one pipeline step and independently testable.

/// Fixed demo corpus and the held-out test sentence
pub mod corpus;

/// Lowercase alphanumeric word tokenizer
pub mod tokenizer;

/// Frequency-ordered vocabulary and fixed-length sequence encoding
pub mod vocab;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Shuffles and splits samples into train/validation sets
pub mod splitter;
