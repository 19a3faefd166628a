//! Mapping from domain errors to HTTP responses

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};

use otp_core::errors::{DomainError, RequestError, VerifyError};
use otp_shared::ApiResponse;

pub const MSG_EMAIL_REQUIRED: &str = "Email is required!";
pub const MSG_SEND_FAILED: &str = "Failed to send OTP!";
pub const MSG_OTP_EXPIRED: &str = "OTP expired!";
pub const MSG_OTP_INVALID: &str = "Invalid OTP!";

/// Build a 400 response with the standard envelope
pub fn bad_request(error_code: &str, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error(error_code, message))
}

/// Build a 429 response carrying `Retry-After`
fn too_many_requests(error_code: &str, retry_after_seconds: i64) -> HttpResponse {
    let message = format!(
        "Wait {} seconds before requesting a new OTP!",
        retry_after_seconds
    );
    let body = ApiResponse::error(error_code, message).with_retry_after(retry_after_seconds);
    HttpResponse::TooManyRequests()
        .insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()))
        .json(body)
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Not-found and mismatch share one client-facing message; `error_code`
/// still tells them apart.
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let code = error.error_code();

    match error {
        DomainError::Request(request_error) => match request_error {
            RequestError::InvalidIdentity => bad_request(code, MSG_EMAIL_REQUIRED),
            RequestError::Throttled {
                retry_after_seconds,
            } => too_many_requests(code, *retry_after_seconds),
            RequestError::DeliveryFailed { .. } => {
                let body = ApiResponse::error(code, MSG_SEND_FAILED);
                HttpResponse::InternalServerError().json(body)
            }
        },
        DomainError::Verify(verify_error) => match verify_error {
            VerifyError::Expired => bad_request(code, MSG_OTP_EXPIRED),
            VerifyError::NotFound | VerifyError::Mismatch => bad_request(code, MSG_OTP_INVALID),
        },
    }
}

/// Turn JSON extractor failures into the standard 400 envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        error = %err,
        event = "invalid_request_body",
        "Rejected request body"
    );
    let response = bad_request("INVALID_REQUEST", "Invalid request body!");
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(DomainError, StatusCode)> = vec![
            (RequestError::InvalidIdentity.into(), StatusCode::BAD_REQUEST),
            (
                RequestError::Throttled {
                    retry_after_seconds: 5,
                }
                .into(),
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                RequestError::DeliveryFailed {
                    reason: "down".to_string(),
                }
                .into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (VerifyError::NotFound.into(), StatusCode::BAD_REQUEST),
            (VerifyError::Expired.into(), StatusCode::BAD_REQUEST),
            (VerifyError::Mismatch.into(), StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(handle_domain_error(&error).status(), status, "{:?}", error);
        }
    }

    #[test]
    fn test_throttled_sets_retry_after_header() {
        let error: DomainError = RequestError::Throttled {
            retry_after_seconds: 42,
        }
        .into();
        let response = handle_domain_error(&error);

        let retry_after = response.headers().get(header::RETRY_AFTER).unwrap();
        assert_eq!(retry_after, "42");
    }
}
