//! Main verification service implementation

use tracing;

use crate::errors::{DomainResult, VerificationError};

use super::config::VerificationServiceConfig;
use super::traits::CodeVerifierTrait;

/// Stateless verification service
#[derive(Debug, Clone, Default)]
pub struct VerificationService {
    /// Service configuration
    config: VerificationServiceConfig,
}

impl VerificationService {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `config` - Service configuration
    pub fn new(config: VerificationServiceConfig) -> Self {
        Self { config }
    }

    /// Verify a submitted code
    ///
    /// This method:
    /// 1. Rejects a missing code or one whose length is not `code_length`
    /// 2. Rejects a code whose last character is `forbidden_last_digit`
    /// 3. Accepts everything else, digits or not
    ///
    /// Length is counted in UTF-16 code units, the way browsers count
    /// `string.length`, so a character outside the BMP counts twice.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The code is accepted
    /// * `Err(DomainError::Verification)` - The code broke one of the rules
    pub fn verify_code(&self, code: Option<&str>) -> DomainResult<()> {
        let units: Vec<u16> = code.unwrap_or_default().encode_utf16().collect();
        let actual = units.len();

        if actual == 0 || actual != self.config.code_length {
            tracing::info!(
                length = actual,
                event = "code_rejected",
                reason = "invalid_length",
                "Verification code has the wrong length"
            );
            return Err(VerificationError::InvalidLength { actual }.into());
        }

        let mut buf = [0u16; 2];
        let forbidden = self.config.forbidden_last_digit.encode_utf16(&mut buf);
        if units.ends_with(forbidden) {
            tracing::info!(
                event = "code_rejected",
                reason = "forbidden_last_digit",
                "Verification code ends in the forbidden digit"
            );
            return Err(VerificationError::EndsInForbiddenDigit {
                digit: self.config.forbidden_last_digit,
            }
            .into());
        }

        tracing::info!(event = "code_verified", "Verification code accepted");
        Ok(())
    }
}

impl CodeVerifierTrait for VerificationService {
    fn verify(&self, code: Option<&str>) -> DomainResult<()> {
        self.verify_code(code)
    }
}
