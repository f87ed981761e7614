//! Server setup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use folio_contact::Mailer;
use folio_site::{AssetError, AssetPipeline, SiteContent, TemplateEngine};

use crate::handlers;

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Title shown in the browser tab
    pub site_title: String,

    /// Directory served under `/assets`
    pub assets_dir: PathBuf,

    /// Resume document offered by `/resume`
    pub resume: PathBuf,

    /// Minify the generated stylesheet
    pub minify: bool,

    /// Open browser on start
    pub open: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            site_title: "Portfolio".to_string(),
            assets_dir: PathBuf::from("assets"),
            resume: PathBuf::from("assets/F2_Resume.pdf"),
            minify: true,
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Failed to prepare assets: {0}")]
    Asset(#[from] AssetError),
}

/// Shared, read-only server state.
pub struct AppState {
    pub config: ServerConfig,
    pub templates: TemplateEngine,
    pub mailer: Arc<dyn Mailer>,
    pub stylesheet: String,
}

/// The portfolio site server.
pub struct SiteServer {
    config: ServerConfig,
    mailer: Arc<dyn Mailer>,
}

impl SiteServer {
    /// Create a server that delivers contact mail through `mailer`.
    pub fn new(config: ServerConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    /// Build the application router.
    pub fn router(&self) -> Result<Router, ServerError> {
        let state = Arc::new(AppState {
            config: self.config.clone(),
            templates: TemplateEngine::new(&SiteContent::default()),
            mailer: Arc::clone(&self.mailer),
            stylesheet: AssetPipeline::stylesheet(self.config.minify)?,
        });

        let app = Router::new()
            .route(
                "/contact",
                get(handlers::page_handler).post(handlers::contact_form_handler),
            )
            .route("/api/contact", post(handlers::contact_api_handler))
            .route("/resume", get(handlers::resume_handler))
            .route("/static/site.css", get(handlers::stylesheet_handler))
            .route("/static/site.js", get(handlers::script_handler))
            .nest_service("/assets", ServeDir::new(&self.config.assets_dir))
            .fallback(handlers::page_handler)
            .with_state(state);

        Ok(app)
    }

    /// Start serving until the process is stopped.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = resolve_addr(&self.config.host, self.config.port).await?;

        let app = self.router()?;

        tracing::info!("Serving portfolio at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Resolve `host` (an IP literal or a name such as `localhost`) to the
/// address to bind.
async fn resolve_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let target = format!("{}:{}", host, port);

    let addr = tokio::net::lookup_host(target.as_str())
        .await
        .map_err(|e| ServerError::InvalidAddress(target.clone(), e.to_string()))?
        .next();
    addr.ok_or_else(|| ServerError::InvalidAddress(target, "no address found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_contact::{DeliveryError, OutgoingEmail};

    struct NullMailer;

    impl Mailer for NullMailer {
        fn send(&self, _email: &OutgoingEmail) -> Result<(), DeliveryError> {
            Ok(())
        }
    }

    #[test]
    fn default_config_serves_assets_dir() {
        let config = ServerConfig::default();

        assert_eq!(config.port, 8050);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.resume.starts_with(&config.assets_dir));
    }

    #[test]
    fn builds_router() {
        let server = SiteServer::new(ServerConfig::default(), Arc::new(NullMailer));
        assert!(server.router().is_ok());
    }

    #[tokio::test]
    async fn resolves_host_names() {
        let addr = resolve_addr("localhost", 8050).await.unwrap();

        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8050);
    }

    #[tokio::test]
    async fn resolves_ip_literals() {
        let addr = resolve_addr("127.0.0.1", 9000).await.unwrap();
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
    }

    #[tokio::test]
    async fn rejects_invalid_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };

        let result = SiteServer::new(config, Arc::new(NullMailer)).start().await;

        assert!(matches!(result, Err(ServerError::InvalidAddress(_, _))));
    }
}
