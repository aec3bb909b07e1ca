//! Palindrome testing and the caller-facing verdict.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// The result of classifying one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The cleaned text reads the same forwards and backwards.
    Palindrome,
    /// The cleaned text differs from its reverse.
    NotPalindrome,
    /// Nothing was left after normalization, so there is nothing to check.
    NoValidCharacters,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Palindrome => write!(f, "Palindrome"),
            Self::NotPalindrome => write!(f, "Not Palindrome"),
            Self::NoValidCharacters => write!(f, "Not Palindrome (no valid characters)"),
        }
    }
}

/// Check whether already-normalized text is a palindrome.
///
/// Compares characters from both ends inward and stops at the first
/// mismatch. Empty input is vacuously a palindrome here; [`classify`]
/// applies the no-valid-characters policy before this test runs.
pub fn is_palindrome(cleaned: &str) -> bool {
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.is_empty() {
        return true;
    }
    let mut left = 0;
    let mut right = chars.len() - 1;
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// Normalize a raw input line and classify it.
pub fn classify(input: &str) -> Verdict {
    let cleaned = normalize(input);
    if cleaned.is_empty() {
        Verdict::NoValidCharacters
    } else if is_palindrome(&cleaned) {
        Verdict::Palindrome
    } else {
        Verdict::NotPalindrome
    }
}
