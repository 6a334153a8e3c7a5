use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::utterance::Label;

/// One encoded training sample: a fixed-length id sequence and its label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarcasmSample {
    pub token_ids: Vec<u32>,
    pub label: Label,
}

/// Indexable collection of encoded samples, consumed by Burn's DataLoader.
pub struct SarcasmDataset {
    samples: Vec<SarcasmSample>,
}

impl SarcasmDataset {
    pub fn new(samples: Vec<SarcasmSample>) -> Self {
        Self { samples }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

impl Dataset<SarcasmSample> for SarcasmDataset {
    fn get(&self, index: usize) -> Option<SarcasmSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: Label) -> SarcasmSample {
        SarcasmSample { token_ids: vec![2, 3, 0, 0], label }
    }

    #[test]
    fn test_len_and_get() {
        let ds = SarcasmDataset::new(vec![sample(Label::Sarcastic), sample(Label::NotSarcastic)]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.sample_count(), 2);
        assert_eq!(ds.get(1).unwrap().label, Label::NotSarcastic);
        assert!(ds.get(2).is_none());
    }
}
