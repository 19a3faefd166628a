//! SMTP Notifier Implementation
//!
//! Sends verification codes as plain-text email through an authenticated
//! SMTP relay. Port 465 uses implicit TLS, any other port STARTTLS.

use async_trait::async_trait;
use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use otp_core::{DeliveryError, Notifier};
use otp_shared::{mask_email, SmtpConfig};

use crate::InfrastructureError;

/// Subject line of every verification email
pub const OTP_EMAIL_SUBJECT: &str = "Your OTP Verification Code";

/// SMTPS port; the connection is TLS-wrapped from the first byte
pub const IMPLICIT_TLS_PORT: u16 = 465;

/// Whether `port` expects implicit TLS rather than a STARTTLS upgrade
pub fn uses_implicit_tls(port: u16) -> bool {
    port == IMPLICIT_TLS_PORT
}

/// Email notifier backed by an async SMTP transport
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    expiry_minutes: i64,
    send_timeout: Duration,
}

impl SmtpNotifier {
    /// Create a new SMTP notifier
    ///
    /// The login user doubles as the From address. Nothing is sent and no
    /// connection is opened until the first delivery.
    pub fn new(config: &SmtpConfig, expiry_minutes: i64) -> Result<Self, InfrastructureError> {
        config.require_credentials()?;

        let sender: Mailbox = config.username.parse()?;
        let send_timeout = Duration::from_secs(config.timeout_seconds);

        let implicit_tls = uses_implicit_tls(config.port);
        let builder = if implicit_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        };
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = builder
            .port(config.port)
            .credentials(credentials)
            .timeout(Some(send_timeout))
            .build();

        info!(
            sender = %mask_email(&config.username),
            host = %config.host,
            port = config.port,
            tls = if implicit_tls { "implicit" } else { "starttls" },
            "SMTP notifier initialized"
        );

        Ok(Self {
            transport,
            sender,
            expiry_minutes,
            send_timeout,
        })
    }

    /// Body text for `code`
    pub fn format_body(&self, code: &str) -> String {
        format!(
            "Your OTP code is: {}. It is valid for {} minutes.",
            code, self.expiry_minutes
        )
    }

    /// Assemble the email carrying `code` to `recipient`
    pub fn build_message(
        &self,
        recipient: &str,
        code: &str,
    ) -> Result<Message, InfrastructureError> {
        let to: Mailbox = recipient.parse()?;
        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(OTP_EMAIL_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(self.format_body(code))?;
        Ok(message)
    }

    async fn send(&self, recipient: &str, code: &str) -> Result<(), InfrastructureError> {
        let message = self.build_message(recipient, code)?;

        match tokio::time::timeout(self.send_timeout, self.transport.send(message)).await {
            Ok(result) => {
                result?;
                Ok(())
            }
            Err(_) => Err(InfrastructureError::Timeout(self.send_timeout.as_secs())),
        }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn deliver(&self, identity: &str, code: &str) -> Result<(), DeliveryError> {
        match self.send(identity, code).await {
            Ok(()) => {
                info!(
                    target: "email_service",
                    provider = "smtp",
                    recipient = %mask_email(identity),
                    event = "email_sent",
                    "Verification email sent"
                );
                Ok(())
            }
            Err(e) => {
                error!(
                    target: "email_service",
                    provider = "smtp",
                    recipient = %mask_email(identity),
                    error = %e,
                    event = "email_failed",
                    "Failed to send verification email"
                );
                Err(e.into())
            }
        }
    }

    fn provider_name(&self) -> &str {
        "smtp"
    }
}
