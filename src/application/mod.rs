// ============================================================
// Application Layer
// ============================================================
// Orchestrates the data and ML layers into the one workflow this
// binary offers: the full train + evaluate + predict demo.

pub mod demo_use_case;
