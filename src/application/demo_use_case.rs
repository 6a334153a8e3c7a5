// ============================================================
// DemoUseCase
// ============================================================
// Runs the full demo pipeline in order:
//
//   Step 1: Assemble the fixed toy corpus       (data)
//   Step 2: Build the vocabulary                (data)
//   Step 3: Encode every sentence to max_len    (data)
//   Step 4: Shuffle + split train/validation    (data)
//   Step 5: Train, printing per-epoch progress  (ml)
//   Step 6: Classify the held-out test sentence (ml)
//
// Every source of randomness is derived from the one configured
// seed: a StdRng for the split, the backend seed for parameter
// init and dropout, and the data loader's shuffle seed.

use anyhow::{ensure, Result};
use burn::{backend::ndarray::NdArrayDevice, module::AutodiffModule};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{
    corpus::{toy_corpus, TEST_SENTENCE},
    dataset::{SarcasmDataset, SarcasmSample},
    splitter::split_train_val,
    vocab::Vocab,
};
use crate::ml::{inferencer::predict, trainer::run_training};

// ─── Demo Configuration ───────────────────────────────────────────────────────
// All hyperparameters for one demo run, populated from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub lr: f64,
    pub max_len: usize,
    pub embed_dim: usize,
    pub hidden: usize,
    pub dropout: f64,
    pub seed: u64,
    pub train_fraction: f64,
    pub min_freq: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            epochs: 10,
            batch_size: 4,
            lr: 1e-2,
            max_len: 12,
            embed_dim: 64,
            hidden: 64,
            dropout: 0.3,
            seed: 42,
            train_fraction: 0.75,
            min_freq: 1,
        }
    }
}

// ─── DemoUseCase ──────────────────────────────────────────────────────────────
pub struct DemoUseCase {
    config: DemoConfig,
}

impl DemoUseCase {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Execute the full demo pipeline end to end.
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;
        // The model pools the hidden state at index max_len - 1, so a
        // zero-length encoding has nothing to classify
        ensure!(cfg.max_len > 0, "max_len must be at least 1");

        let mut rng = StdRng::seed_from_u64(cfg.seed);

        // ── Step 1: Assemble the toy corpus ───────────────────────────────────
        let corpus = toy_corpus();
        tracing::info!("Corpus: {} labelled sentences", corpus.len());

        // ── Step 2: Build the vocabulary ──────────────────────────────────────
        let texts: Vec<&str> = corpus.iter().map(|u| u.text.as_str()).collect();
        let vocab = Vocab::build(&texts, cfg.min_freq);
        tracing::info!("Vocabulary size: {}", vocab.len());

        // ── Step 3: Encode every sentence to a fixed length ───────────────────
        let samples: Vec<SarcasmSample> = corpus
            .iter()
            .map(|u| SarcasmSample {
                token_ids: vocab.encode(&u.text, cfg.max_len),
                label: u.label,
            })
            .collect();

        // ── Step 4: Shuffle and split train/validation ────────────────────────
        let (train_samples, val_samples) =
            split_train_val(samples, cfg.train_fraction, &mut rng);
        tracing::info!(
            "Split: {} train, {} validation",
            train_samples.len(),
            val_samples.len(),
        );
        let train_dataset = SarcasmDataset::new(train_samples);
        let val_dataset = SarcasmDataset::new(val_samples);

        // ── Step 5: Train ─────────────────────────────────────────────────────
        let model = run_training(cfg, vocab.len(), train_dataset, val_dataset)?;

        // ── Step 6: Classify the held-out sentence ────────────────────────────
        let device = NdArrayDevice::Cpu;
        let model = model.valid();
        let predicted = predict(&model, &vocab, TEST_SENTENCE, cfg.max_len, &device);

        println!();
        println!("Test sentence: {}", TEST_SENTENCE);
        println!("Predicted label (1=sarcastic,0=not): {}", predicted);

        Ok(())
    }
}
