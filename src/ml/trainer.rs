// ============================================================
// Training Loop
// ============================================================
// Per mini-batch: forward, cross-entropy loss, backward, Adam
// step. Per epoch: example-weighted mean training loss, then a
// validation pass on the inner backend (autodiff off, dropout
// off) and the contractual progress line on stdout.
//
// Numerical failures are not caught; a non-finite loss flows
// through to the caller untouched.

use anyhow::Result;
use burn::{
    backend::{ndarray::NdArrayDevice, Autodiff, NdArray},
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::demo_use_case::DemoConfig;
use crate::data::{batcher::SarcasmBatcher, dataset::SarcasmDataset};
use crate::ml::inferencer::evaluate;
use crate::ml::model::{SarcasmModel, SarcasmModelConfig};

// CPU NdArray backend: honours Backend::seed, so a fixed seed gives a
// reproducible run. Swap for Wgpu to train on GPU.
pub type TrainingBackend = Autodiff<NdArray>;
pub type ValidBackend = NdArray;

/// Train a fresh model on `train_dataset`, printing one progress line
/// per epoch with the validation accuracy, and return the trained model.
pub fn run_training(
    cfg: &DemoConfig,
    vocab_size: usize,
    train_dataset: SarcasmDataset,
    val_dataset: SarcasmDataset,
) -> Result<SarcasmModel<TrainingBackend>> {
    let device = NdArrayDevice::Cpu;

    // Seeds parameter initialization and dropout sampling
    TrainingBackend::seed(cfg.seed);

    let model_cfg = SarcasmModelConfig::new(vocab_size, cfg.embed_dim, cfg.hidden, cfg.dropout);
    let mut model: SarcasmModel<TrainingBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: vocab_size={}, embed_dim={}, hidden={}",
        vocab_size, cfg.embed_dim, cfg.hidden,
    );

    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // Training loader reshuffles every epoch from the configured seed
    let train_batcher = SarcasmBatcher::<TrainingBackend>::new(device.clone());
    let train_loader = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(train_dataset);

    // Validation loader on the inner backend — no autodiff overhead
    let val_batcher = SarcasmBatcher::<ValidBackend>::new(device.clone());
    let val_loader = DataLoaderBuilder::new(val_batcher)
        .batch_size(cfg.batch_size)
        .num_workers(1)
        .build(val_dataset);

    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut example_count = 0usize;

        for batch in train_loader.iter() {
            let batch_len = batch.labels.dims()[0];
            let (loss, _logits) = model.forward_classification(batch.tokens, batch.labels);

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            loss_sum += loss_val * batch_len as f64;
            example_count += batch_len;

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        // Example-weighted mean over the whole training split
        let avg_loss = if example_count > 0 {
            loss_sum / example_count as f64
        } else {
            f64::NAN
        };

        // model.valid() moves to the inner backend; dropout is inactive there
        let model_valid = model.valid();
        let val_acc = evaluate(&model_valid, val_loader.iter());

        println!("Epoch {:02} — loss: {:.4} — val_acc: {:.3}", epoch, avg_loss, val_acc);
    }

    tracing::info!("Training complete");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::SarcasmSample;
    use crate::domain::utterance::Label;

    fn tiny_dataset() -> SarcasmDataset {
        let samples = vec![
            SarcasmSample { token_ids: vec![2, 3, 4, 0], label: Label::Sarcastic },
            SarcasmSample { token_ids: vec![5, 6, 0, 0], label: Label::NotSarcastic },
            SarcasmSample { token_ids: vec![2, 6, 4, 0], label: Label::Sarcastic },
            SarcasmSample { token_ids: vec![5, 3, 0, 0], label: Label::NotSarcastic },
        ];
        SarcasmDataset::new(samples)
    }

    #[test]
    fn test_short_training_run_completes() {
        let cfg = DemoConfig {
            epochs: 2,
            batch_size: 2,
            lr: 1e-2,
            max_len: 4,
            embed_dim: 8,
            hidden: 4,
            dropout: 0.3,
            seed: 42,
            train_fraction: 0.75,
            min_freq: 1,
        };
        let model = run_training(&cfg, 10, tiny_dataset(), tiny_dataset()).unwrap();

        // Trained model still produces well-formed logits
        let device = NdArrayDevice::Cpu;
        let tokens = Tensor::<TrainingBackend, 1, Int>::from_ints(
            [2, 3, 4, 0].as_slice(),
            &device,
        )
        .reshape([1, 4]);
        assert_eq!(model.forward(tokens).dims(), [1, 2]);
    }

    #[test]
    fn test_same_seed_reproduces_training() {
        // Two runs from the same seed must land on identical parameters:
        // the seed drives init, dropout and shuffling, so any divergence
        // here is a reproducibility regression.
        let cfg = DemoConfig {
            epochs: 3,
            batch_size: 2,
            lr: 1e-2,
            max_len: 4,
            embed_dim: 8,
            hidden: 4,
            dropout: 0.3,
            seed: 42,
            train_fraction: 0.75,
            min_freq: 1,
        };

        let device = NdArrayDevice::Cpu;
        let tokens = || {
            Tensor::<ValidBackend, 1, Int>::from_ints(
                [2, 3, 4, 0, 5, 6, 0, 0].as_slice(),
                &device,
            )
            .reshape([2, 4])
        };

        // Compare on the inner backend so dropout plays no part in the
        // forward passes and the logits reflect the parameters alone.
        let model_a = run_training(&cfg, 10, tiny_dataset(), tiny_dataset()).unwrap();
        let logits_a: Vec<f32> = model_a.valid().forward(tokens()).into_data().to_vec().unwrap();

        let model_b = run_training(&cfg, 10, tiny_dataset(), tiny_dataset()).unwrap();
        let logits_b: Vec<f32> = model_b.valid().forward(tokens()).into_data().to_vec().unwrap();

        assert_eq!(logits_a, logits_b);
    }
}
