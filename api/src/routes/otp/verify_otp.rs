use actix_web::{web, HttpResponse};
use validator::Validate;

use otp_core::errors::DomainError;
use otp_core::Notifier;
use otp_shared::{mask_email, ApiResponse};

use super::AppState;
use crate::dto::VerifyOtpRequest;
use crate::handlers::error::{bad_request, handle_domain_error};

/// Handler for POST /verify-otp
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "otp": "042013" }
/// ```
///
/// A correct code consumes it; a second verification with the same code
/// fails. Wrong and unknown codes both answer `Invalid OTP!`.
pub async fn verify_otp<N>(
    state: web::Data<AppState<N>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    N: Notifier + ?Sized + 'static,
{
    let request = request.into_inner();

    if request.validate().is_err() {
        tracing::warn!(
            event = "validation_failed",
            "verify-otp request with missing fields"
        );
        return bad_request("MISSING_FIELDS", "Email and OTP are required!");
    }

    tracing::info!(
        email = %mask_email(&request.email),
        event = "otp_verification_requested",
        "Processing verify-otp request"
    );

    match state
        .otp_manager
        .verify_code(&request.email, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success("OTP verified!")),
        Err(error) => handle_domain_error(&DomainError::from(error)),
    }
}
