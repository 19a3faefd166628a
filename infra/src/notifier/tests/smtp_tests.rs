//! Unit tests for SMTP notifier (no network access)

use otp_core::Notifier;
use otp_shared::SmtpConfig;

use crate::notifier::smtp::{uses_implicit_tls, SmtpNotifier, OTP_EMAIL_SUBJECT};
use crate::InfrastructureError;

fn config() -> SmtpConfig {
    SmtpConfig {
        username: "sender@example.com".to_string(),
        password: "app-password".to_string(),
        ..SmtpConfig::default()
    }
}

#[tokio::test]
async fn test_message_contains_code_and_expiry() {
    let notifier = SmtpNotifier::new(&config(), 5).unwrap();
    let message = notifier.build_message("user@example.com", "042013").unwrap();

    let formatted = String::from_utf8(message.formatted()).unwrap();
    assert!(formatted.contains(&format!("Subject: {}", OTP_EMAIL_SUBJECT)));
    assert!(formatted.contains("From: sender@example.com"));
    assert!(formatted.contains("To: user@example.com"));
    assert!(formatted.contains("Your OTP code is: 042013. It is valid for 5 minutes."));

    let envelope = message.envelope();
    assert_eq!(envelope.to().len(), 1);
    assert_eq!(envelope.to()[0].to_string(), "user@example.com");
}

#[tokio::test]
async fn test_body_uses_configured_expiry() {
    let notifier = SmtpNotifier::new(&config(), 10).unwrap();
    assert_eq!(
        notifier.format_body("000001"),
        "Your OTP code is: 000001. It is valid for 10 minutes."
    );
}

#[tokio::test]
async fn test_invalid_recipient_is_rejected() {
    let notifier = SmtpNotifier::new(&config(), 5).unwrap();

    let result = notifier.build_message("not-an-email", "123456");
    assert!(matches!(result, Err(InfrastructureError::Address(_))));
}

#[tokio::test]
async fn test_invalid_recipient_surfaces_as_delivery_error() {
    let notifier = SmtpNotifier::new(&config(), 5).unwrap();

    let err = notifier.deliver("not-an-email", "123456").await.unwrap_err();
    assert!(err.message.starts_with("Invalid email address"));
}

#[tokio::test]
async fn test_missing_credentials() {
    let config = SmtpConfig::default();

    match SmtpNotifier::new(&config, 5) {
        Err(InfrastructureError::Config(e)) => {
            assert!(e.to_string().contains("EMAIL_ADDRESS"));
        }
        _ => panic!("Expected configuration error"),
    }
}

#[tokio::test]
async fn test_invalid_sender_address() {
    let config = SmtpConfig {
        username: "not an address".to_string(),
        ..config()
    };

    assert!(matches!(
        SmtpNotifier::new(&config, 5),
        Err(InfrastructureError::Address(_))
    ));
}

#[tokio::test]
async fn test_provider_name() {
    let notifier = SmtpNotifier::new(&config(), 5).unwrap();
    assert_eq!(notifier.provider_name(), "smtp");
}

#[test]
fn test_tls_mode_follows_port() {
    assert!(uses_implicit_tls(465));
    assert!(!uses_implicit_tls(587));
    assert!(!uses_implicit_tls(25));
}

#[tokio::test]
async fn test_submission_port_builds_starttls_transport() {
    let config = SmtpConfig {
        port: 587,
        ..config()
    };

    let notifier = SmtpNotifier::new(&config, 5).unwrap();
    assert!(notifier.build_message("user@example.com", "123456").is_ok());
}
