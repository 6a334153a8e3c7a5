// model.rs — BiLSTM sarcasm classifier.
//
// Architecture overview:
//
//   token_ids → Embedding → BiLstm (forward + backward) → last timestep
//             → Linear(2*hidden → hidden) → ReLU → Dropout → Linear(hidden → 2)
//
// The head outputs raw two-class logits, not probabilities.
//
// Pooling keeps only the hidden state at the final timestep. With
// right-padded sequences that state has passed over padding ids, which
// hurts short inputs. Kept as-is for compatibility with the reference
// behaviour; masking or mean pooling would change the numbers.
//
// Generic over the Burn Backend trait so the same definition trains on
// Autodiff<NdArray> and evaluates on NdArray.

use burn::{
    nn::{
        loss::CrossEntropyLossConfig,
        BiLstm, BiLstmConfig,
        Dropout, DropoutConfig,
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::activation::relu,
};

#[derive(Config, Debug)]
pub struct SarcasmModelConfig {
    pub vocab_size: usize,
    pub embed_dim: usize,
    pub hidden: usize,
    pub dropout: f64,
}

impl SarcasmModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SarcasmModel<B> {
        // Row 0 of the embedding table is the padding vector. Burn has no
        // padding_idx, so the row is trained like any other.
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embed_dim).init(device);
        let encoder = BiLstmConfig::new(self.embed_dim, self.hidden, true).init(device);
        let fc1 = LinearConfig::new(self.hidden * 2, self.hidden).init(device);
        let dropout = DropoutConfig::new(self.dropout).init();
        let fc2 = LinearConfig::new(self.hidden, 2).init(device);

        SarcasmModel { embedding, encoder, fc1, dropout, fc2 }
    }
}

#[derive(Module, Debug)]
pub struct SarcasmModel<B: Backend> {
    pub embedding: Embedding<B>,
    pub encoder: BiLstm<B>,
    pub fc1: Linear<B>,
    pub dropout: Dropout,
    pub fc2: Linear<B>,
}

impl<B: Backend> SarcasmModel<B> {
    /// tokens: [batch, seq_len] → logits: [batch, 2]
    pub fn forward(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let [batch_size, seq_len] = tokens.dims();

        let embedded = self.embedding.forward(tokens); // [batch, seq_len, embed_dim]

        // Concatenated forward+backward states per timestep: [batch, seq_len, 2*hidden]
        let (encoded, _state) = self.encoder.forward(embedded, None);

        // Keep only the final timestep's representation
        let last: Tensor<B, 2> = encoded
            .slice([0..batch_size, seq_len - 1..seq_len])
            .squeeze(1);

        let x = relu(self.fc1.forward(last));
        let x = self.dropout.forward(x);
        self.fc2.forward(x) // [batch, 2]
    }

    /// Forward pass plus cross-entropy loss against integer labels.
    pub fn forward_classification(
        &self,
        tokens: Tensor<B, 2, Int>,
        labels: Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let logits = self.forward(tokens);
        let loss = CrossEntropyLossConfig::new()
            .init(&logits.device())
            .forward(logits.clone(), labels);
        (loss, logits)
    }
}
