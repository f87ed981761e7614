//! Configuration file (folio.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub mail: MailSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Resume document offered for download
    #[serde(default = "default_resume")]
    pub resume: String,
    #[serde(default = "default_true")]
    pub minify: bool,
}

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct MailSettings {
    /// SMTP relay reached over implicit TLS
    #[serde(default = "default_relay")]
    pub relay: String,
    #[serde(default = "default_mail_port")]
    pub port: u16,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            assets_dir: default_assets_dir(),
            resume: default_resume(),
            minify: default_true(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            relay: default_relay(),
            port: default_mail_port(),
        }
    }
}

fn default_title() -> String {
    "Portfolio".to_string()
}
fn default_assets_dir() -> String {
    "assets".to_string()
}
fn default_resume() -> String {
    "assets/F2_Resume.pdf".to_string()
}
fn default_true() -> bool {
    true
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8050
}
fn default_relay() -> String {
    folio_contact::config::DEFAULT_RELAY.to_string()
}
fn default_mail_port() -> u16 {
    folio_contact::config::DEFAULT_PORT
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

pub const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
# Browser tab title
title = "Portfolio"

# Directory served under /assets (profile.jpg lives here)
assets_dir = "assets"

# Resume offered by the "Download My Resume" button
resume = "assets/F2_Resume.pdf"

# Minify the generated stylesheet
minify = true

[server]
host = "127.0.0.1"
port = 8050

[mail]
# Contact form mail goes out through this relay over implicit TLS.
# Credentials come from SENDER_EMAIL and SENDER_PASSWORD.
relay = "smtp.gmail.com"
port = 465
"#;
