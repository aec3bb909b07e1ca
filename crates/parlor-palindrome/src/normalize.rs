//! Input normalization for palindrome checking.

/// Normalize a line of input for palindrome checking.
///
/// Keeps only alphanumeric characters and lowercases them, so spacing,
/// punctuation, and case never affect the comparison. Lowercasing runs
/// before the filter because it can expand one character into several
/// (dotted capital I becomes `i` plus a combining mark); filtering the
/// expansion keeps the function idempotent.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}
