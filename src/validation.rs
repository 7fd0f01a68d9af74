//! Answer checking for typed responses.
//!
//! Matching is forgiving of letter case and spacing only. Punctuation, accents
//! and synonyms must match exactly: "Hola, mundo" is not "hola mundo".

use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Normalization
// ============================================================================

/// Canonical form of an answer for comparison
/// - Composes Unicode (NFC) so precomposed and combining accents compare equal
/// - Converts to lowercase
/// - Collapses whitespace runs to a single space
/// - Trims leading/trailing whitespace
pub fn canonicalize(input: &str) -> String {
  input
    .nfc()
    .collect::<String>()
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

/// True when the learner's answer equals the expected text after canonicalization
pub fn answers_match(user_answer: &str, expected: &str) -> bool {
  canonicalize(user_answer) == canonicalize(expected)
}

// ============================================================================
// Tests
// ============================================================================
