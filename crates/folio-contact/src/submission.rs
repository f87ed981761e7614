//! Contact form submission handling.

use serde::{Deserialize, Serialize};

use crate::mailer::{Mailer, OutgoingEmail};
use crate::validate::is_valid_email;

/// Subject line of the outgoing message.
pub const SUBJECT: &str = "Portfolio Contact Form Submission";

/// Shown when the email field does not look like an address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Shown after a successful send.
pub const SUCCESS_MESSAGE: &str = "Thank you for reaching out! An email has been sent to you.";

/// The three contact form fields. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    /// Visitor name (free text)
    pub name: String,
    /// Visitor email address
    pub email: String,
    /// Message body (free text)
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Plain-text rendering of the submission.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

/// Result of a triggered submission, with the text shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The email went out; the form is cleared.
    Success(String),
    /// The email address was rejected; the form keeps its values.
    ValidationFailure(String),
    /// The send attempt failed; the form keeps its values.
    DeliveryFailure(String),
}

impl SubmissionOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message)
            | Self::ValidationFailure(message)
            | Self::DeliveryFailure(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// What the caller should do with its form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum FieldUpdate {
    /// Leave the fields as they are.
    NoUpdate,
    /// Replace the fields with these values.
    Set(ContactSubmission),
}

/// Reply to one call of [`submit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReply {
    /// `None` when nothing was triggered
    pub outcome: Option<SubmissionOutcome>,
    /// Next values of the form fields
    pub fields: FieldUpdate,
}

impl SubmitReply {
    fn no_action() -> Self {
        Self {
            outcome: None,
            fields: FieldUpdate::NoUpdate,
        }
    }

    /// The fields a form showing `current` should display next.
    pub fn next_fields(&self, current: &ContactSubmission) -> ContactSubmission {
        match &self.fields {
            FieldUpdate::NoUpdate => current.clone(),
            FieldUpdate::Set(fields) => fields.clone(),
        }
    }
}

/// Handle one press of the contact form's send button.
///
/// `trigger` is the button's activation count; `None` or zero means the
/// button was not pressed and nothing happens. Otherwise the email is
/// validated and, if it passes, exactly one delivery attempt is made through
/// `mailer`. Failures never escape: they come back as an outcome with the
/// fields preserved.
pub fn submit(
    trigger: Option<u32>,
    submission: ContactSubmission,
    mailer: &dyn Mailer,
) -> SubmitReply {
    if !trigger.is_some_and(|clicks| clicks > 0) {
        return SubmitReply::no_action();
    }

    if !is_valid_email(&submission.email) {
        tracing::info!("Contact submission rejected: invalid email address");
        return SubmitReply {
            outcome: Some(SubmissionOutcome::ValidationFailure(
                INVALID_EMAIL_MESSAGE.to_string(),
            )),
            fields: FieldUpdate::Set(submission),
        };
    }

    // NOTE: the message goes to the visitor's own address, not to the site
    // owner. Whether the owner should be the recipient is still undecided.
    let email = OutgoingEmail {
        to: submission.email.clone(),
        subject: SUBJECT.to_string(),
        body: submission.body(),
    };

    match mailer.send(&email) {
        Ok(()) => {
            tracing::info!("Contact email sent");
            SubmitReply {
                outcome: Some(SubmissionOutcome::Success(SUCCESS_MESSAGE.to_string())),
                fields: FieldUpdate::Set(ContactSubmission::default()),
            }
        }
        Err(e) => {
            tracing::warn!("Contact email delivery failed: {}", e);
            SubmitReply {
                outcome: Some(SubmissionOutcome::DeliveryFailure(format!(
                    "Failed to send email: {}",
                    e
                ))),
                fields: FieldUpdate::Set(submission),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::DeliveryError;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every message and answers with a fixed result.
    struct StubMailer {
        failure: Option<String>,
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    impl StubMailer {
        fn succeeding() -> Self {
            Self {
                failure: None,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                failure: Some(reason.to_string()),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Mailer for StubMailer {
        fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(email.clone());
            match &self.failure {
                Some(reason) => Err(DeliveryError::Other(reason.clone())),
                None => Ok(()),
            }
        }
    }

    #[test]
    fn invalid_email_preserves_fields() {
        let mailer = StubMailer::succeeding();
        let input = ContactSubmission::new("Jo", "not-an-email", "hi");

        let reply = submit(Some(1), input.clone(), &mailer);

        assert_eq!(
            reply,
            SubmitReply {
                outcome: Some(SubmissionOutcome::ValidationFailure(
                    "Please enter a valid email address.".to_string()
                )),
                fields: FieldUpdate::Set(input),
            }
        );
        assert!(mailer.sent().is_empty());
    }

    #[test]
    fn empty_email_is_a_validation_failure() {
        let mailer = StubMailer::succeeding();

        let reply = submit(Some(1), ContactSubmission::new("Jo", "", "hi"), &mailer);

        assert!(matches!(
            reply.outcome,
            Some(SubmissionOutcome::ValidationFailure(_))
        ));
        assert!(mailer.sent().is_empty());
    }

    #[test]
    fn email_without_dot_after_at_is_rejected() {
        let mailer = StubMailer::succeeding();
        let input = ContactSubmission::new("Jo", "jo@localhost", "hi");

        let reply = submit(Some(3), input.clone(), &mailer);

        assert_eq!(reply.fields, FieldUpdate::Set(input));
        assert!(!reply.outcome.unwrap().is_success());
    }

    #[test]
    fn successful_send_clears_fields() {
        let mailer = StubMailer::succeeding();

        let reply = submit(
            Some(1),
            ContactSubmission::new("Jo", "jo@example.com", "hi"),
            &mailer,
        );

        assert_eq!(
            reply,
            SubmitReply {
                outcome: Some(SubmissionOutcome::Success(
                    "Thank you for reaching out! An email has been sent to you.".to_string()
                )),
                fields: FieldUpdate::Set(ContactSubmission::new("", "", "")),
            }
        );
    }

    #[test]
    fn sends_exactly_one_message_to_the_submitter() {
        let mailer = StubMailer::succeeding();

        submit(
            Some(1),
            ContactSubmission::new("Jo", "jo@example.com", "hi"),
            &mailer,
        );

        assert_eq!(
            mailer.sent(),
            vec![OutgoingEmail {
                to: "jo@example.com".to_string(),
                subject: "Portfolio Contact Form Submission".to_string(),
                body: "Name: Jo\nEmail: jo@example.com\nMessage: hi".to_string(),
            }]
        );
    }

    #[test]
    fn delivery_failure_preserves_fields() {
        let mailer = StubMailer::failing("auth failed");
        let input = ContactSubmission::new("Jo", "jo@example.com", "hi");

        let reply = submit(Some(1), input.clone(), &mailer);

        assert_eq!(
            reply,
            SubmitReply {
                outcome: Some(SubmissionOutcome::DeliveryFailure(
                    "Failed to send email: auth failed".to_string()
                )),
                fields: FieldUpdate::Set(input),
            }
        );
        assert_eq!(mailer.sent().len(), 1);
    }

    #[test]
    fn no_trigger_is_a_no_op() {
        let mailer = StubMailer::succeeding();
        let input = ContactSubmission::new("Jo", "jo@example.com", "hi");

        for trigger in [None, Some(0)] {
            let reply = submit(trigger, input.clone(), &mailer);

            assert_eq!(reply.outcome, None);
            assert_eq!(reply.fields, FieldUpdate::NoUpdate);
        }
        assert!(mailer.sent().is_empty());
    }

    #[test]
    fn next_fields_applies_update() {
        let current = ContactSubmission::new("Jo", "jo@example.com", "hi");

        let untouched = SubmitReply::no_action().next_fields(&current);
        let cleared = SubmitReply {
            outcome: None,
            fields: FieldUpdate::Set(ContactSubmission::default()),
        }
        .next_fields(&current);

        assert_eq!(untouched, current);
        assert_eq!(cleared, ContactSubmission::default());
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let parsed: ContactSubmission =
            serde_json::from_str(r#"{"email":"jo@example.com"}"#).unwrap();

        assert_eq!(parsed, ContactSubmission::new("", "jo@example.com", ""));
    }

    #[test]
    fn serializes_reply() {
        let reply = SubmitReply {
            outcome: Some(SubmissionOutcome::DeliveryFailure(
                "Failed to send email: auth failed".to_string(),
            )),
            fields: FieldUpdate::NoUpdate,
        };

        let json = serde_json::to_string(&reply).unwrap();

        assert!(json.contains(r#""status":"delivery_failure""#));
        assert!(json.contains(r#""kind":"no_update""#));
    }
}
