use crate::errors::{DeliveryError, DomainError, RequestError, VerifyError};

#[test]
fn test_request_error_display() {
    let err = RequestError::Throttled {
        retry_after_seconds: 42,
    };
    assert_eq!(
        err.to_string(),
        "Please wait 42 seconds before requesting a new code"
    );
    assert_eq!(
        RequestError::InvalidIdentity.to_string(),
        "Identity must not be empty"
    );
}

#[test]
fn test_delivery_error_converts_to_request_error() {
    let err: RequestError = DeliveryError::new("connection refused").into();
    assert_eq!(
        err,
        RequestError::DeliveryFailed {
            reason: "connection refused".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "Failed to deliver verification code: connection refused"
    );
}

#[test]
fn test_error_codes_are_distinct() {
    let codes = [
        RequestError::InvalidIdentity.error_code(),
        RequestError::Throttled {
            retry_after_seconds: 1,
        }
        .error_code(),
        RequestError::DeliveryFailed {
            reason: String::new(),
        }
        .error_code(),
        VerifyError::NotFound.error_code(),
        VerifyError::Expired.error_code(),
        VerifyError::Mismatch.error_code(),
    ];
    let unique: std::collections::HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), codes.len());
}

#[test]
fn test_domain_error_is_transparent() {
    let err: DomainError = VerifyError::Expired.into();
    assert_eq!(err.to_string(), "Verification code expired");
    assert_eq!(err.error_code(), "OTP_EXPIRED");

    let err: DomainError = RequestError::InvalidIdentity.into();
    assert_eq!(err.error_code(), "INVALID_IDENTITY");
    assert!(matches!(err, DomainError::Request(_)));
}
