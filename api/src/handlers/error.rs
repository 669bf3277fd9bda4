use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};

use vc_core::errors::{DomainError, VerificationError};
use vc_shared::messages;
use vc_shared::types::VerifyResponse;

use crate::middleware::request_id::RequestIdExt;

/// Map a domain error to the HTTP response the verification endpoint returns.
///
/// Every body has the `{ "success": false, "message": ... }` shape so clients
/// can render `message` verbatim.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    if error.is_client_error() {
        log::info!("Rejected verification code: {}", error);
    } else {
        log::error!("Verification failed on the server: {}", error);
    }

    match error {
        DomainError::Verification(verification_error) => {
            match verification_error {
                VerificationError::InvalidLength { .. } | VerificationError::NonDigit { .. } => {
                    HttpResponse::BadRequest()
                        .json(VerifyResponse::failure(messages::INVALID_CODE_LENGTH))
                }
                VerificationError::EndsInForbiddenDigit { .. } => HttpResponse::BadRequest()
                    .json(VerifyResponse::failure(messages::CODE_ENDS_IN_SEVEN)),
            }
        }
        DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(VerifyResponse::failure(messages::SERVER_ERROR))
        }
    }
}

/// Body extraction failures are answered like a missing code.
pub fn json_error_handler(error: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!(
        "Unreadable verification request body (request {}): {}",
        req.request_id().unwrap_or_default(),
        error
    );
    let response =
        HttpResponse::BadRequest().json(VerifyResponse::failure(messages::INVALID_CODE_LENGTH));
    actix_web::error::InternalError::from_response(error, response).into()
}

/// Default 404 handler
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    log::debug!(
        "No route for {} {} (request {})",
        req.method(),
        req.path(),
        req.request_id().unwrap_or_default()
    );
    HttpResponse::NotFound().json(VerifyResponse::failure(messages::NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    async fn body_of(response: HttpResponse) -> VerifyResponse {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_invalid_length_maps_to_bad_request() {
        let response = handle_domain_error(VerificationError::InvalidLength { actual: 3 }.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some(messages::INVALID_CODE_LENGTH));
    }

    #[actix_web::test]
    async fn test_non_digit_shares_the_length_message() {
        let response = handle_domain_error(VerificationError::NonDigit { position: 2 }.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await.message.as_deref(),
            Some(messages::INVALID_CODE_LENGTH)
        );
    }

    #[actix_web::test]
    async fn test_forbidden_digit_maps_to_bad_request() {
        let response =
            handle_domain_error(VerificationError::EndsInForbiddenDigit { digit: '7' }.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await.message.as_deref(),
            Some(messages::CODE_ENDS_IN_SEVEN)
        );
    }

    #[actix_web::test]
    async fn test_internal_error_maps_to_server_error() {
        let error = DomainError::internal("boom");
        assert!(!error.is_client_error());
        let response = handle_domain_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(response).await;
        assert!(!body.success);
        assert_eq!(body.message.as_deref(), Some(messages::SERVER_ERROR));
    }

    #[actix_web::test]
    async fn test_not_found_body() {
        let req = actix_web::test::TestRequest::get().uri("/nowhere").to_http_request();
        let response = not_found(req).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await.message.as_deref(), Some(messages::NOT_FOUND));
    }
}
