//! The form's view of the verification service

use async_trait::async_trait;
use thiserror::Error;
use vc_shared::messages;
use vc_shared::types::VerifyResponse;

use crate::domain::entities::VerificationCode;

/// Faults that prevented a verdict from arriving
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout and the like
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A response arrived but its body is not a verdict
    #[error("Malformed response (status {status}): {message}")]
    MalformedResponse { status: u16, message: String },
}

/// Sends a well-formed code to the verification service
#[async_trait]
pub trait VerificationClientTrait: Send + Sync {
    /// Any parsed verdict is `Ok`, including rejections
    async fn verify(&self, code: &VerificationCode) -> Result<VerifyResponse, ClientError>;
}

/// How one submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service accepted the code
    Verified,
    /// The service answered with `success: false`
    Rejected { message: Option<String> },
    /// No verdict could be obtained
    TransportFailed { reason: String },
}

impl SubmitOutcome {
    /// The message the form shows for this outcome. The service's own
    /// rejection reason is not surfaced.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitOutcome::Verified => messages::FORM_VERIFIED,
            SubmitOutcome::Rejected { .. } => messages::FORM_REJECTED,
            SubmitOutcome::TransportFailed { .. } => messages::FORM_TRANSPORT_ERROR,
        }
    }
}

impl From<Result<VerifyResponse, ClientError>> for SubmitOutcome {
    fn from(result: Result<VerifyResponse, ClientError>) -> Self {
        match result {
            Ok(response) if response.success => SubmitOutcome::Verified,
            Ok(response) => SubmitOutcome::Rejected {
                message: response.message,
            },
            Err(error) => SubmitOutcome::TransportFailed {
                reason: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_success() {
        let outcome = SubmitOutcome::from(Ok(VerifyResponse::success()));
        assert_eq!(outcome, SubmitOutcome::Verified);
        assert_eq!(outcome.user_message(), "Verification successful!");
    }

    #[test]
    fn test_outcome_from_rejection_hides_server_message() {
        let outcome = SubmitOutcome::from(Ok(VerifyResponse::failure(
            messages::CODE_ENDS_IN_SEVEN,
        )));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: Some(messages::CODE_ENDS_IN_SEVEN.to_string())
            }
        );
        assert_eq!(outcome.user_message(), "Verification failed.");
    }

    #[test]
    fn test_outcome_from_transport_error() {
        let outcome = SubmitOutcome::from(Err(ClientError::Transport {
            message: "connection refused".to_string(),
        }));
        assert_eq!(outcome.user_message(), "Verification error.");
        match outcome {
            SubmitOutcome::TransportFailed { reason } => assert!(reason.contains("refused")),
            other => panic!("Expected transport failure, got {:?}", other),
        }
    }
}
