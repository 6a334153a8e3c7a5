// ============================================================
// Tokenizer
// ============================================================
// Lowercases the input, removes every character that is not an
// ASCII letter, digit or whitespace, then splits on whitespace.
// A token is therefore a maximal run matching [a-z0-9]+.
// Removal, not replacement: "I'll" becomes "ill", one token.
//
// Pure function — any input (including the empty string) yields
// a possibly empty token list; there are no error conditions.

/// Tokenize raw text into lowercase alphanumeric word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
