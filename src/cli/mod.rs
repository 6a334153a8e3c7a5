// ============================================================
// CLI Layer
// ============================================================
// Parses command-line flags into the application-layer config.
//
// Running the binary with no arguments executes the full demo
// (train + evaluate + one-sentence inference) with the default
// hyperparameters. Every hyperparameter can be overridden with
// a --flag.

use anyhow::Result;
use clap::Parser;

use crate::application::demo_use_case::{DemoConfig, DemoUseCase};

/// Train a toy BiLSTM sarcasm classifier and run it on one new sentence.
#[derive(Parser, Debug)]
#[command(name = "sarcasm-demo", version, about)]
pub struct Cli {
    /// Number of full passes over the training split
    #[arg(long, default_value_t = 10)]
    pub epochs: usize,

    /// Number of samples processed together in one forward pass
    #[arg(long, default_value_t = 4)]
    pub batch_size: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-2)]
    pub lr: f64,

    /// Fixed encoded sequence length; longer inputs are truncated,
    /// shorter ones right-padded
    #[arg(long, default_value_t = 12)]
    pub max_len: usize,

    /// Dimension of the learned token embedding vectors
    #[arg(long, default_value_t = 64)]
    pub embed_dim: usize,

    /// Hidden size of each LSTM direction
    #[arg(long, default_value_t = 64)]
    pub hidden: usize,

    /// Dropout probability in the classifier head (training only)
    #[arg(long, default_value_t = 0.3)]
    pub dropout: f64,

    /// Seed for every source of randomness (split, shuffle, init, dropout)
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Fraction of the corpus used for training; the rest is validation
    #[arg(long, default_value_t = 0.75)]
    pub train_fraction: f64,

    /// Minimum token frequency for inclusion in the vocabulary
    #[arg(long, default_value_t = 1)]
    pub min_freq: usize,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        DemoUseCase::new(self.into()).execute()
    }
}

/// Boundary between the CLI and application layers —
/// the application layer never sees clap types.
impl From<Cli> for DemoConfig {
    fn from(a: Cli) -> Self {
        DemoConfig {
            epochs:         a.epochs,
            batch_size:     a.batch_size,
            lr:             a.lr,
            max_len:        a.max_len,
            embed_dim:      a.embed_dim,
            hidden:         a.hidden,
            dropout:        a.dropout,
            seed:           a.seed,
            train_fraction: a.train_fraction,
            min_freq:       a.min_freq,
        }
    }
}
