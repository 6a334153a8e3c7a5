// ============================================================
// Demo Corpus
// ============================================================
// The fixed eight-sentence dataset the demo trains on, plus one
// held-out sentence the trained model is exercised on at the end.
// In a real project this would come from a labelled CSV.

use crate::domain::utterance::{Label, Utterance};

/// Sentence the trained model classifies after the final epoch.
pub const TEST_SENTENCE: &str = "Oh perfect, my phone died right before the call.";

/// The fixed toy corpus with its ground-truth labels.
pub fn toy_corpus() -> Vec<Utterance> {
    use Label::{NotSarcastic, Sarcastic};

    vec![
        Utterance::new("Oh great, another Monday morning. Just what I needed.", Sarcastic),
        Utterance::new("I absolutely love when my code works on the first try.", NotSarcastic),
        Utterance::new("What a beautiful day to be stuck in traffic!", Sarcastic),
        Utterance::new("Thanks for letting me know at the last minute!", Sarcastic),
        Utterance::new("I had a great time at the party last night.", NotSarcastic),
        Utterance::new("This is exactly what I wanted, not.", Sarcastic),
        Utterance::new("Wow, that meeting was so productive... not.", Sarcastic),
        Utterance::new("I'll be there at 6 pm, see you then.", NotSarcastic),
    ]
}
