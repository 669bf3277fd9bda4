//! Business services containing domain logic.

pub mod verification;

// Re-export commonly used types
pub use verification::{CodeVerifierTrait, VerificationService, VerificationServiceConfig};
