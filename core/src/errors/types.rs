//! Domain-specific error types for code verification
//!
//! The wire messages that accompany these errors are chosen in the
//! presentation layer; the `Display` text here is for logs.

use thiserror::Error;

/// Reasons a code is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// Missing, empty, or not exactly six characters
    #[error("Invalid length (expected: 6, actual: {actual})")]
    InvalidLength { actual: usize },

    /// Sixth character is the forbidden digit
    #[error("Code ends in forbidden digit {digit}")]
    EndsInForbiddenDigit { digit: char },

    /// A character that is not a decimal digit (client-side shape check only)
    #[error("Non-digit character at position {position}")]
    NonDigit { position: usize },
}
