// File: src/core/tokenizer.rs

fn is_trimmed(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_ascii_digit()
}

/// Strips leading/trailing ASCII punctuation and digits, then lowercases.
/// Interior characters are kept, and the result may be empty.
pub fn normalize(token: &str) -> String {
    token.trim_matches(is_trimmed).to_lowercase()
}

/// Splits a line on whitespace runs and normalizes every token.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split_whitespace().map(normalize)
}
