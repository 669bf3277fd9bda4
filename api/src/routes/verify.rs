use actix_web::{web, HttpResponse};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use vc_core::errors::DomainError;
use vc_core::services::verification::CodeVerifierTrait;
use vc_shared::types::{VerifyRequest, VerifyResponse};

use crate::handlers::error::handle_domain_error;

/// Application state shared across handlers
pub struct AppState<V>
where
    V: CodeVerifierTrait,
{
    pub verifier: Arc<V>,
}

impl<V: CodeVerifierTrait> AppState<V> {
    pub fn new(verifier: V) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }
}

/// Handler for POST /api/verify
///
/// Judges a six-character code.
///
/// # Request Body
///
/// ```json
/// { "code": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true }
/// ```
///
/// ## Errors
/// - 400 Bad Request: code missing or not 6 characters long
/// - 400 Bad Request: code ends in 7
/// - 500 Internal Server Error: the verifier failed unexpectedly
pub async fn verify<V>(
    state: web::Data<AppState<V>>,
    request: web::Json<VerifyRequest>,
) -> HttpResponse
where
    V: CodeVerifierTrait + 'static,
{
    let code = request.code.as_deref();

    // A panicking verifier is answered like any other internal fault
    let result = panic::catch_unwind(AssertUnwindSafe(|| state.verifier.verify(code)))
        .unwrap_or_else(|_| Err(DomainError::internal("verifier panicked")));

    match result {
        Ok(()) => HttpResponse::Ok().json(VerifyResponse::success()),
        Err(error) => handle_domain_error(error),
    }
}
