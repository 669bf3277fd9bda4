//! Domain entities representing core business objects.

pub mod verification_code;

// Re-export commonly used types
pub use verification_code::{is_code_digit, VerificationCode, CODE_LENGTH, FORBIDDEN_LAST_DIGIT};
