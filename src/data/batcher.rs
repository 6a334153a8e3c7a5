// ============================================================
// Batcher
// ============================================================
// Implements Burn's Batcher trait: stacks a Vec of pre-padded
// samples into one [batch, max_len] Int tensor plus a [batch]
// label tensor. All samples are already the same length, so no
// dynamic padding happens here.

use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::dataset::SarcasmSample;

/// A batch of encoded sequences ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct SarcasmBatch<B: Backend> {
    /// Token id sequences — shape: [batch_size, max_len]
    pub tokens: Tensor<B, 2, Int>,
    /// Class labels — shape: [batch_size]
    pub labels: Tensor<B, 1, Int>,
}

/// Holds the target device so tensors land on the right backend.
#[derive(Clone, Debug)]
pub struct SarcasmBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> SarcasmBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<SarcasmSample, SarcasmBatch<B>> for SarcasmBatcher<B> {
    fn batch(&self, items: Vec<SarcasmSample>) -> SarcasmBatch<B> {
        let batch_size = items.len();
        // All sequences are pre-padded to the same length; an empty batch
        // stacks into [0, 0] tensors instead of panicking
        let seq_len = items.first().map_or(0, |s| s.token_ids.len());

        let token_flat: Vec<i32> = items
            .iter()
            .flat_map(|s| s.token_ids.iter().map(|&id| id as i32))
            .collect();

        let label_flat: Vec<i32> = items
            .iter()
            .map(|s| s.label.as_index() as i32)
            .collect();

        let tokens = Tensor::<B, 1, Int>::from_ints(token_flat.as_slice(), &self.device)
            .reshape([batch_size, seq_len]);
        let labels = Tensor::<B, 1, Int>::from_ints(label_flat.as_slice(), &self.device);

        SarcasmBatch { tokens, labels }
    }
}
