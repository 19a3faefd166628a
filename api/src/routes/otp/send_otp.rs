use actix_web::{web, HttpResponse};
use validator::Validate;

use otp_core::errors::DomainError;
use otp_core::Notifier;
use otp_shared::{mask_email, ApiResponse};

use super::AppState;
use crate::dto::SendOtpRequest;
use crate::handlers::error::{bad_request, handle_domain_error, MSG_EMAIL_REQUIRED};

/// Handler for POST /send-otp
///
/// Issues a new code for the email address and sends it.
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "OTP sent successfully!",
///     "resend_after": 60,
///     "timestamp": "2025-08-14T10:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 when the email is missing or malformed
/// - 429 with `Retry-After` while the previous code is in its cooldown
/// - 500 when the email could not be sent
pub async fn send_otp<N>(
    state: web::Data<AppState<N>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    N: Notifier + ?Sized + 'static,
{
    let request = request.into_inner();

    if request.email.trim().is_empty() {
        tracing::warn!(
            event = "validation_failed",
            "send-otp request without email"
        );
        return bad_request("EMAIL_REQUIRED", MSG_EMAIL_REQUIRED);
    }

    if let Err(errors) = request.validate() {
        tracing::warn!(
            email = %mask_email(&request.email),
            errors = %errors,
            event = "validation_failed",
            "send-otp request with malformed email"
        );
        return bad_request("INVALID_EMAIL", "Invalid email address!");
    }

    tracing::info!(
        email = %mask_email(&request.email),
        event = "otp_requested",
        "Processing send-otp request"
    );

    match state.otp_manager.request_code(&request.email).await {
        Ok(issued) => {
            let body = ApiResponse::success("OTP sent successfully!")
                .with_resend_after(issued.resend_after_seconds);
            HttpResponse::Ok().json(body)
        }
        Err(error) => handle_domain_error(&DomainError::from(error)),
    }
}
