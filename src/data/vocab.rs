// ============================================================
// Vocabulary and Sequence Encoder
// ============================================================
// Maps tokens to integer ids and texts to fixed-length id
// sequences.
//
// Id assignment:
//   0              → padding (reserved, fixed)
//   1              → unknown token (reserved, fixed)
//   2, 3, 4, ...   → corpus tokens with count >= min_freq,
//                    ordered by descending count, then ascending
//                    token string so equal counts always break the
//                    same way
//
// The vocabulary is immutable once built; encoding never fails.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::tokenizer::tokenize;

/// Reserved id for padding positions.
pub const PAD_ID: u32 = 0;
/// Reserved id for tokens absent from the vocabulary.
pub const UNK_ID: u32 = 1;
// First id handed out to corpus tokens.
const RESERVED: u32 = 2;

/// Deterministic token → id mapping built from a corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocab {
    word2id: HashMap<String, u32>,
}

impl Vocab {
    /// Build a vocabulary from `texts`, keeping tokens whose corpus-wide
    /// count is at least `min_freq`.
    pub fn build<S: AsRef<str>>(texts: &[S], min_freq: usize) -> Self {
        let mut freq: HashMap<String, usize> = HashMap::new();
        for text in texts {
            for token in tokenize(text.as_ref()) {
                *freq.entry(token).or_insert(0) += 1;
            }
        }

        // Descending count, then ascending token — ties always break lexically.
        let mut pairs: Vec<(String, usize)> = freq.into_iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut word2id = HashMap::new();
        let mut next_id = RESERVED;
        for (token, count) in pairs {
            if count >= min_freq {
                word2id.insert(token, next_id);
                next_id += 1;
            }
        }

        Self { word2id }
    }

    /// Id for a single token; unknown tokens map to `UNK_ID`.
    pub fn id_of(&self, token: &str) -> u32 {
        self.word2id.get(token).copied().unwrap_or(UNK_ID)
    }

    /// Total number of ids, counting the two reserved entries.
    /// This is the embedding table size the model needs.
    pub fn len(&self) -> usize {
        self.word2id.len() + RESERVED as usize
    }

    pub fn is_empty(&self) -> bool {
        self.word2id.is_empty()
    }

    /// Encode one text to exactly `max_len` ids: tokenize, map each
    /// token to its id (unknown → `UNK_ID`), keep the first `max_len`
    /// ids if over-long, right-pad with `PAD_ID` if short.
    pub fn encode(&self, text: &str, max_len: usize) -> Vec<u32> {
        let mut ids: Vec<u32> = tokenize(text)
            .iter()
            .map(|tok| self.id_of(tok))
            .collect();
        ids.truncate(max_len);
        ids.resize(max_len, PAD_ID);
        ids
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<&'static str> {
        vec!["the cat sat", "the dog sat", "the cat ran"]
    }

    #[test]
    fn test_reserved_ids_fixed() {
        let vocab = Vocab::build(&corpus(), 1);
        assert_eq!(PAD_ID, 0);
        assert_eq!(UNK_ID, 1);
        // No corpus token may claim a reserved id
        assert!(vocab.id_of("the") >= 2);
    }

    #[test]
    fn test_frequency_then_lexical_order() {
        // counts: the=3, cat=2, sat=2, dog=1, ran=1
        let vocab = Vocab::build(&corpus(), 1);
        assert_eq!(vocab.id_of("the"), 2);
        // cat and sat tie at 2 — "cat" < "sat" so cat gets the smaller id
        assert_eq!(vocab.id_of("cat"), 3);
        assert_eq!(vocab.id_of("sat"), 4);
        // dog and ran tie at 1
        assert_eq!(vocab.id_of("dog"), 5);
        assert_eq!(vocab.id_of("ran"), 6);
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = Vocab::build(&corpus(), 1);
        let b = Vocab::build(&corpus(), 1);
        for tok in ["the", "cat", "sat", "dog", "ran"] {
            assert_eq!(a.id_of(tok), b.id_of(tok));
        }
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn test_min_freq_filters() {
        let vocab = Vocab::build(&corpus(), 2);
        // the=3, cat=2, sat=2 survive; dog=1, ran=1 drop to UNK
        assert_eq!(vocab.id_of("dog"), UNK_ID);
        assert_eq!(vocab.id_of("ran"), UNK_ID);
        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_unknown_maps_to_unk() {
        let vocab = Vocab::build(&corpus(), 1);
        assert_eq!(vocab.id_of("zebra"), UNK_ID);
    }

    #[test]
    fn test_encode_length_invariant() {
        let vocab = Vocab::build(&corpus(), 1);
        for max_len in [1, 3, 12, 50] {
            assert_eq!(vocab.encode("the cat sat", max_len).len(), max_len);
        }
    }

    #[test]
    fn test_encode_truncates_right() {
        let vocab = Vocab::build(&corpus(), 1);
        // Keeps the first max_len ids only
        assert_eq!(
            vocab.encode("the cat sat", 2),
            vec![vocab.id_of("the"), vocab.id_of("cat")]
        );
    }

    #[test]
    fn test_encode_right_pads() {
        let vocab = Vocab::build(&corpus(), 1);
        let ids = vocab.encode("the cat", 5);
        assert_eq!(ids[0], vocab.id_of("the"));
        assert_eq!(ids[1], vocab.id_of("cat"));
        assert_eq!(&ids[2..], &[PAD_ID, PAD_ID, PAD_ID]);
    }

    #[test]
    fn test_encode_unknown_tokens() {
        let vocab = Vocab::build(&corpus(), 1);
        let ids = vocab.encode("zebra cat", 3);
        assert_eq!(ids, vec![UNK_ID, vocab.id_of("cat"), PAD_ID]);
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = Vocab::build(&Vec::<&str>::new(), 1);
        assert!(vocab.is_empty());
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.encode("anything", 4), vec![UNK_ID, PAD_ID, PAD_ID, PAD_ID]);
    }
}
