//! HTTP server for the portfolio site.
//!
//! Serves the four pages, the contact form endpoints, the resume download
//! and static assets.

pub mod handlers;
pub mod server;

pub use handlers::{ContactForm, ContactRequest};
pub use server::{AppState, ServerConfig, ServerError, SiteServer};
