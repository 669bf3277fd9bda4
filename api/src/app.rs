//! Application factory
//!
//! Builds the Actix-web application around a verifier so the binary and
//! the integration tests serve exactly the same routes and middleware.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use vc_core::services::verification::CodeVerifierTrait;
use vc_shared::CorsConfig;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::{cors::create_cors, request_id::RequestIdMiddleware};
use crate::routes::{health::health_check, verify::verify, AppState};

/// Access log format; the trailing field is the response's request id
pub const LOG_FORMAT: &str = r#"%a "%r" %s %b %Dms %{x-request-id}o"#;

/// Create and configure the application with all dependencies
pub fn create_app<V>(
    app_state: web::Data<AppState<V>>,
    cors_config: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    V: CodeVerifierTrait + 'static,
{
    let cors = create_cors(cors_config);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Innermost first: request id, then CORS, then the access log
        .wrap(RequestIdMiddleware)
        .wrap(cors)
        .wrap(Logger::new(LOG_FORMAT))
        .route("/health", web::get().to(health_check))
        .route("/api/verify", web::post().to(verify::<V>))
        .default_service(web::route().to(not_found))
}
