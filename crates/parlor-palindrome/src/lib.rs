//! Palindrome checking for Parlor.
//!
//! Provides input normalization (keep letters and digits, lowercase them),
//! a two-pointer palindrome test over the cleaned text, and a tagged
//! [`Verdict`] so callers can tell "not a palindrome" apart from "nothing
//! left to check". Prompting and terminal output live in the CLI crate.

pub mod classify;
pub mod normalize;

pub use classify::{Verdict, classify, is_palindrome};
pub use normalize::normalize;
