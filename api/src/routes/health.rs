use actix_web::HttpResponse;
use vc_shared::types::HealthResponse;

/// Service name reported by the health check
pub const SERVICE_NAME: &str = "verify-code-api";

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
