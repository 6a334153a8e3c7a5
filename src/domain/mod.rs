// ============================================================
// Domain Layer
// ============================================================
// Pure Rust types describing the classification task.
// No Burn types, no I/O — the rest of the crate builds on these.

pub mod utterance;
