//! Outbound mail configuration.

use std::fmt;

/// Environment variable holding the sending account's address.
pub const SENDER_EMAIL_VAR: &str = "SENDER_EMAIL";

/// Environment variable holding the sending account's secret.
pub const SENDER_PASSWORD_VAR: &str = "SENDER_PASSWORD";

/// Default relay host.
pub const DEFAULT_RELAY: &str = "smtp.gmail.com";

/// Implicit TLS (SMTPS) port.
pub const DEFAULT_PORT: u16 = 465;

/// Wrapper for the sender secret that never shows up in logs.
///
/// `Debug` and `Display` are redacted. Use [`SecretString::expose`] only when
/// handing the value to the transport.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString(••••••••)")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "••••••••")
    }
}

/// Everything the SMTP transport needs to deliver a message.
///
/// Built once at process start and shared read-only. Credentials are
/// optional here: a missing one is reported when a send is attempted, not
/// when the configuration is built.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Relay host name
    pub relay: String,

    /// Relay port (implicit TLS)
    pub port: u16,

    /// Sending account address
    pub sender: Option<String>,

    /// Sending account secret
    pub password: Option<SecretString>,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            relay: DEFAULT_RELAY.to_string(),
            port: DEFAULT_PORT,
            sender: None,
            password: None,
        }
    }
}

impl MailerConfig {
    /// Build a configuration with credentials taken from the process
    /// environment (`SENDER_EMAIL`, `SENDER_PASSWORD`).
    pub fn from_env(relay: impl Into<String>, port: u16) -> Self {
        Self::from_lookup(relay, port, |key| std::env::var(key).ok())
    }

    /// Build a configuration with credentials resolved through `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(relay: impl Into<String>, port: u16, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            relay: relay.into(),
            port,
            sender: read(SENDER_EMAIL_VAR),
            password: read(SENDER_PASSWORD_VAR).map(SecretString::new),
        }
    }

    /// Whether both credentials are present.
    pub fn has_credentials(&self) -> bool {
        self.sender.is_some() && self.password.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_credentials_from_lookup() {
        let config = MailerConfig::from_lookup(
            "smtp.example.com",
            465,
            lookup_from(&[
                ("SENDER_EMAIL", "site@example.com"),
                ("SENDER_PASSWORD", "hunter2"),
            ]),
        );

        assert_eq!(config.relay, "smtp.example.com");
        assert_eq!(config.port, 465);
        assert_eq!(config.sender.as_deref(), Some("site@example.com"));
        assert_eq!(
            config.password.as_ref().map(|p| p.expose()),
            Some("hunter2")
        );
        assert!(config.has_credentials());
    }

    #[test]
    fn missing_and_empty_values_are_unset() {
        let config = MailerConfig::from_lookup(
            DEFAULT_RELAY,
            DEFAULT_PORT,
            lookup_from(&[("SENDER_EMAIL", "")]),
        );

        assert!(config.sender.is_none());
        assert!(config.password.is_none());
        assert!(!config.has_credentials());
    }

    #[test]
    fn secret_is_redacted() {
        let secret = SecretString::new("hunter2");

        assert!(!format!("{:?}", secret).contains("hunter2"));
        assert!(!secret.to_string().contains("hunter2"));
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn config_debug_hides_password() {
        let config = MailerConfig {
            sender: Some("site@example.com".to_string()),
            password: Some(SecretString::new("hunter2")),
            ..Default::default()
        };

        let debug = format!("{:?}", config);
        assert!(debug.contains("site@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
