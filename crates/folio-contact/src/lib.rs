//! Contact form handling for the portfolio site.
//!
//! Validates a visitor's submission, hands a plain-text message to a
//! [`Mailer`] for exactly one delivery attempt, and maps the result back to
//! an outcome plus the next values of the form fields.

pub mod config;
pub mod mailer;
pub mod submission;
pub mod validate;

pub use config::{MailerConfig, SecretString};
pub use mailer::{DeliveryError, Mailer, OutgoingEmail, SmtpMailer};
pub use submission::{submit, ContactSubmission, FieldUpdate, SubmissionOutcome, SubmitReply};
pub use validate::is_valid_email;
