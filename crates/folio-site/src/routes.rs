//! Path to view routing.

use serde::Serialize;

/// One of the four pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteView {
    Home,
    About,
    Projects,
    Contact,
}

impl RouteView {
    /// All views, in navigation order.
    pub const ALL: [RouteView; 4] = [
        RouteView::Home,
        RouteView::About,
        RouteView::Projects,
        RouteView::Contact,
    ];

    /// Canonical URL path.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Contact => "/contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Template used to render the view.
    pub fn template(self) -> &'static str {
        match self {
            Self::Home => "home.html",
            Self::About => "about.html",
            Self::Projects => "projects.html",
            Self::Contact => "contact.html",
        }
    }

    /// CSS background of the page section.
    pub fn background(self) -> &'static str {
        match self {
            Self::Home => "linear-gradient(135deg, #111 0%, #444 100%)",
            Self::About => "linear-gradient(135deg, #800000 0%, #a0522d 100%)",
            Self::Projects => "linear-gradient(135deg, #a0522d 0%, #f5f5dc 100%)",
            Self::Contact => "#f5f5dc",
        }
    }
}

/// Map a request path to a view.
///
/// Matches are exact and case-sensitive. Every other path, `/` included,
/// shows the home page rather than a 404.
pub fn resolve(path: &str) -> RouteView {
    match path {
        "/about" => RouteView::About,
        "/projects" => RouteView::Projects,
        "/contact" => RouteView::Contact,
        _ => RouteView::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_named_routes() {
        assert_eq!(resolve("/about"), RouteView::About);
        assert_eq!(resolve("/projects"), RouteView::Projects);
        assert_eq!(resolve("/contact"), RouteView::Contact);
    }

    #[test]
    fn falls_back_to_home() {
        for path in ["/", "", "/xyz", "/about/", "/contact/me", "about"] {
            assert_eq!(resolve(path), RouteView::Home, "path {:?}", path);
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(resolve("/About"), RouteView::Home);
        assert_eq!(resolve("/PROJECTS"), RouteView::Home);
    }

    #[test]
    fn resolving_is_idempotent() {
        for path in ["/", "/about", "/projects", "/contact", "/nope"] {
            assert_eq!(resolve(path), resolve(path));
        }
    }

    #[test]
    fn canonical_paths_resolve_to_themselves() {
        for view in RouteView::ALL {
            assert_eq!(resolve(view.path()), view);
        }
    }
}
