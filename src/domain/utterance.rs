use serde::{Deserialize, Serialize};

/// Binary class label. The integer values are the class indices the
/// model's two logits correspond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    NotSarcastic = 0,
    Sarcastic = 1,
}

impl Label {
    /// Class index used for loss targets and argmax comparison.
    pub fn as_index(self) -> usize {
        self as usize
    }
}

/// One raw text snippet with its ground-truth label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub label: Label,
}

impl Utterance {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self { text: text.into(), label }
    }
}
