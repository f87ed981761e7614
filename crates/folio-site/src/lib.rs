//! Pages of the portfolio site.
//!
//! Resolves request paths to one of four views and renders them through
//! minijinja templates, along with the generated stylesheet and script.

pub mod assets;
pub mod content;
pub mod routes;
pub mod templates;

pub use assets::{AssetError, AssetPipeline};
pub use content::SiteContent;
pub use routes::{resolve, RouteView};
pub use templates::{Alert, Context, NavItem, RenderError, TemplateEngine};
