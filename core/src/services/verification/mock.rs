//! Mock verifier for exercising callers of `CodeVerifierTrait`

use std::sync::{Arc, Mutex};

use crate::errors::{DomainError, DomainResult};

use super::traits::CodeVerifierTrait;

/// Records every code it sees and answers with a fixed result
#[derive(Clone)]
pub struct MockCodeVerifier {
    pub received: Arc<Mutex<Vec<Option<String>>>>,
    outcome: DomainResult<()>,
}

impl MockCodeVerifier {
    /// Accepts every code
    pub fn accepting() -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            outcome: Ok(()),
        }
    }

    /// Answers every call with `error`
    pub fn failing(error: DomainError) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            outcome: Err(error),
        }
    }

    pub fn call_count(&self) -> usize {
        self.received.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    pub fn last_code(&self) -> Option<String> {
        self.received
            .lock()
            .ok()
            .and_then(|calls| calls.last().cloned().flatten())
    }
}

impl CodeVerifierTrait for MockCodeVerifier {
    fn verify(&self, code: Option<&str>) -> DomainResult<()> {
        if let Ok(mut calls) = self.received.lock() {
            calls.push(code.map(String::from));
        }
        self.outcome.clone()
    }
}
