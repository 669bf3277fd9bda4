//! CORS middleware configuration for cross-origin requests.
//!
//! The code entry form is served from a different origin than the API, so
//! browsers need CORS headers on `/api/verify`. With no origins configured
//! every origin is accepted and answered with `Access-Control-Allow-Origin: *`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use vc_shared::CorsConfig;

use super::request_id::REQUEST_ID_HEADER;

/// Creates a CORS middleware instance from the loaded configuration.
///
/// # Configuration
/// - `allowed_origins`: empty or `*` allows any origin, otherwise only the
///   listed origins are allowed
/// - `max_age`: max age for the preflight cache in seconds
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers(vec![header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        log::info!("Configuring CORS for any origin");
        return cors.allow_any_origin().allow_any_header().send_wildcard();
    }

    let mut cors = cors.allowed_headers(vec![
        header::ACCEPT,
        header::CONTENT_TYPE,
        header::HeaderName::from_static(REQUEST_ID_HEADER),
    ]);
    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }
    cors
}
