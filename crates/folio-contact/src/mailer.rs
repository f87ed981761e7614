//! Mail transport.

use lettre::address::AddressError;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::{MailerConfig, SENDER_EMAIL_VAR, SENDER_PASSWORD_VAR};

/// A plain-text message ready for delivery.
///
/// The sender identity is owned by the transport, so only the recipient and
/// content travel with the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Errors from a single delivery attempt.
///
/// The `Display` text is what ends up in front of the visitor.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("{0} is not set")]
    MissingCredential(&'static str),

    #[error("invalid address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error(transparent)]
    Message(#[from] lettre::error::Error),

    #[error(transparent)]
    Transport(#[from] lettre::transport::smtp::Error),

    /// Failure reported by a transport without a structured error.
    #[error("{0}")]
    Other(String),
}

/// Something that can deliver one email.
pub trait Mailer: Send + Sync {
    /// Make exactly one delivery attempt.
    fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;
}

/// Delivers over implicit-TLS SMTP with login authentication.
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: MailerConfig,
}

impl SmtpMailer {
    /// Create a transport for the given configuration.
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    /// The configuration this transport sends with.
    pub fn config(&self) -> &MailerConfig {
        &self.config
    }

    /// Build the wire message from `sender` to the email's recipient.
    fn build_message(sender: &str, email: &OutgoingEmail) -> Result<Message, DeliveryError> {
        let message = Message::builder()
            .from(parse_mailbox(sender)?)
            .to(parse_mailbox(&email.to)?)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())?;

        Ok(message)
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let sender = self
            .config
            .sender
            .as_deref()
            .ok_or(DeliveryError::MissingCredential(SENDER_EMAIL_VAR))?;
        let password = self
            .config
            .password
            .as_ref()
            .ok_or(DeliveryError::MissingCredential(SENDER_PASSWORD_VAR))?;

        let message = Self::build_message(sender, email)?;

        // `relay` wraps the connection in TLS from the first byte (SMTPS).
        let transport = SmtpTransport::relay(&self.config.relay)?
            .port(self.config.port)
            .credentials(Credentials::new(
                sender.to_string(),
                password.expose().to_string(),
            ))
            .build();

        tracing::debug!(
            "Sending via {}:{} as {}",
            self.config.relay,
            self.config.port,
            sender
        );

        transport.send(&message)?;

        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| DeliveryError::Address {
            address: address.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SecretString;

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            subject: "Hello".to_string(),
            body: "Name: Jo".to_string(),
        }
    }

    fn configured() -> MailerConfig {
        MailerConfig {
            sender: Some("site@example.com".to_string()),
            password: Some(SecretString::new("secret")),
            ..Default::default()
        }
    }

    #[test]
    fn missing_sender_fails_before_connecting() {
        let mailer = SmtpMailer::new(MailerConfig::default());

        let err = mailer.send(&email("jo@example.com")).unwrap_err();

        assert!(matches!(
            err,
            DeliveryError::MissingCredential("SENDER_EMAIL")
        ));
        assert_eq!(err.to_string(), "SENDER_EMAIL is not set");
    }

    #[test]
    fn missing_password_fails_before_connecting() {
        let mailer = SmtpMailer::new(MailerConfig {
            sender: Some("site@example.com".to_string()),
            ..Default::default()
        });

        let err = mailer.send(&email("jo@example.com")).unwrap_err();

        assert!(matches!(
            err,
            DeliveryError::MissingCredential("SENDER_PASSWORD")
        ));
    }

    #[test]
    fn unparseable_recipient_is_an_address_error() {
        let mailer = SmtpMailer::new(configured());

        let err = mailer.send(&email("no-at-sign")).unwrap_err();

        assert!(matches!(err, DeliveryError::Address { .. }));
        assert!(err.to_string().contains("no-at-sign"));
    }

    #[test]
    fn builds_plain_text_message() {
        let message =
            SmtpMailer::build_message("site@example.com", &email("jo@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: site@example.com"));
        assert!(raw.contains("To: jo@example.com"));
        assert!(raw.contains("Subject: Hello"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("Name: Jo"));
    }

    #[test]
    fn exposes_its_configuration() {
        let mailer = SmtpMailer::new(configured());

        assert!(mailer.config().has_credentials());
        assert_eq!(mailer.config().port, 465);
        assert_eq!(mailer.config().relay, "smtp.gmail.com");
    }

    #[test]
    fn other_errors_display_verbatim() {
        let err = DeliveryError::Other("auth failed".to_string());
        assert_eq!(err.to_string(), "auth failed");
    }
}
