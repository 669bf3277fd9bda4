//! Unit tests for domain error types

use crate::errors::{DomainError, VerificationError};

#[test]
fn test_verification_error_messages() {
    let error = VerificationError::InvalidLength { actual: 5 };
    assert_eq!(error.to_string(), "Invalid length (expected: 6, actual: 5)");

    let error = VerificationError::EndsInForbiddenDigit { digit: '7' };
    assert!(error.to_string().contains("forbidden digit 7"));
}

#[test]
fn test_domain_error_from_verification_error() {
    let error: DomainError = VerificationError::InvalidLength { actual: 0 }.into();
    assert_eq!(
        error,
        DomainError::Verification(VerificationError::InvalidLength { actual: 0 })
    );
    assert!(error.is_client_error());
    // Transparent: the inner message is shown as-is
    assert_eq!(error.to_string(), "Invalid length (expected: 6, actual: 0)");
}

#[test]
fn test_internal_error() {
    let error = DomainError::internal("verifier poisoned");
    assert!(!error.is_client_error());
    assert_eq!(error.to_string(), "Internal error: verifier poisoned");
}
