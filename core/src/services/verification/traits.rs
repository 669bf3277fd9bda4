//! Trait the HTTP layer depends on to judge codes

use crate::errors::DomainResult;

/// Judges a submitted code.
///
/// Implementations hold no per-request state and may be called from any
/// number of workers at once.
pub trait CodeVerifierTrait: Send + Sync {
    /// `Ok(())` accepts the code. `None` means the request carried no code.
    ///
    /// Rule violations are `DomainError::Verification`; anything else is a
    /// fault of the verifier itself.
    fn verify(&self, code: Option<&str>) -> DomainResult<()>;
}
