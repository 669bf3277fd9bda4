//! Configuration for the verification service

use crate::domain::entities::verification_code::{CODE_LENGTH, FORBIDDEN_LAST_DIGIT};

/// Configuration for the verification service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationServiceConfig {
    /// Exact number of characters a code must have
    pub code_length: usize,
    /// Codes whose last character equals this are rejected
    pub forbidden_last_digit: char,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            forbidden_last_digit: FORBIDDEN_LAST_DIGIT,
        }
    }
}
