//! Application factory
//!
//! Builds the Actix-web application around shared state. Request logging
//! middleware is attached by the binary so tests can use the bare app.

use actix_web::{web, App, HttpResponse};

use otp_core::Notifier;
use otp_shared::ApiResponse;

use crate::handlers::json_error_handler;
use crate::routes::otp::{send_otp::send_otp, verify_otp::verify_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<N>(
    app_state: web::Data<AppState<N>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    N: Notifier + ?Sized + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health_check))
        .route("/send-otp", web::post().to(send_otp::<N>))
        .route("/verify-otp", web::post().to(verify_otp::<N>))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "mail-otp-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
