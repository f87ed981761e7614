//! Site server command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use folio_contact::{MailerConfig, SmtpMailer};
use folio_server::{ServerConfig, SiteServer};

use crate::config::{load_config, ConfigFile};

/// Run the serve command.
pub async fn run(
    config_path: &Path,
    port: Option<u16>,
    host: Option<String>,
    open: bool,
) -> Result<()> {
    let file_config = load_config(config_path)?;

    let mailer = SmtpMailer::new(MailerConfig::from_env(
        &file_config.mail.relay,
        file_config.mail.port,
    ));
    if !mailer.config().has_credentials() {
        tracing::warn!(
            "SENDER_EMAIL or SENDER_PASSWORD is not set; contact form emails will fail to send"
        );
    }

    let config = server_config(file_config, port, host, open);

    if !config.resume.exists() {
        tracing::warn!("Resume not found at {}", config.resume.display());
    }

    SiteServer::new(config, Arc::new(mailer))
        .start()
        .await?;

    Ok(())
}

/// Merge command line overrides into the file configuration.
fn server_config(
    file_config: ConfigFile,
    port: Option<u16>,
    host: Option<String>,
    open: bool,
) -> ServerConfig {
    ServerConfig {
        host: host.unwrap_or(file_config.server.host),
        port: port.unwrap_or(file_config.server.port),
        site_title: file_config.site.title,
        assets_dir: PathBuf::from(file_config.site.assets_dir),
        resume: PathBuf::from(file_config.site.resume),
        minify: file_config.site.minify,
        open,
    }
}
