//! Generated stylesheet and script.

/// Errors from processing the generated assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("CSS parse error: {0}")]
    Parse(String),

    #[error("CSS minify error: {0}")]
    Minify(String),
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The site stylesheet, minified when `minify` is set.
    pub fn stylesheet(minify: bool) -> Result<String, AssetError> {
        if minify {
            Self::minify_css(SITE_CSS)
        } else {
            Ok(SITE_CSS.to_string())
        }
    }

    /// The site script.
    pub fn script() -> &'static str {
        SITE_JS
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, AssetError> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| AssetError::Parse(e.to_string()))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| AssetError::Minify(e.to_string()))?;

        Ok(minified.code)
    }
}

// Palette: maroon #800000, sienna #a0522d, beige #f5f5dc
const SITE_CSS: &str = r#"body {
  font-family: 'Poppins', sans-serif;
  min-height: 100vh;
}

html {
  scroll-behavior: smooth;
}

.navbar-brand {
  font-size: 2rem !important;
  letter-spacing: 2px;
  color: #f5f5dc !important;
}

.nav-link {
  font-size: 1.1rem !important;
  margin-right: 10px;
  color: #f5f5dc !important;
}

.nav-link.active {
  text-decoration: underline;
}

.profile-img {
  width: 200px;
  height: 200px;
  border-radius: 50%;
  margin-bottom: 20px;
  border: 4px solid #800000;
  box-shadow: 0 4px 16px rgba(128, 0, 0, 0.2);
}

.home-title {
  color: #f5f5dc;
  font-weight: bold;
  text-shadow: 2px 2px #800000;
}

.home-greeting {
  font-size: 1.3rem;
  color: #f5f5dc;
}

.home-bio {
  color: #ccc;
}

.page-title-light {
  color: #f5f5dc;
  font-weight: bold;
}

.page-title-dark {
  color: #800000;
  font-weight: bold;
}

.card-title-accent {
  color: #800000;
}

.card-text-muted {
  color: #a0522d;
}

.custom-card {
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.10);
  border-radius: 18px;
  background: #f5f5dc;
  border: 1px solid #a0522d;
  transition: transform 0.2s, box-shadow 0.2s;
}

.custom-card:hover {
  transform: translateY(-8px) scale(1.03);
  box-shadow: 0 16px 32px rgba(64, 0, 0, 0.15);
  border-color: #800000;
}

.project-card .card-img-top {
  border-radius: 18px 18px 0 0;
}

.project-card:hover {
  transform: scale(1.05);
  box-shadow: 0 12px 24px rgba(64, 0, 0, 0.18);
  cursor: pointer;
}

.contact-form {
  background: rgba(255, 255, 255, 0.7);
  padding: 2rem;
  border-radius: 18px;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.08);
}

.contact-form .form-control {
  border-radius: 12px;
}

.footer-link:hover {
  color: #a0522d !important;
}

.btn-custom {
  background: linear-gradient(90deg, #800000 0%, #a0522d 100%);
  color: #f5f5dc;
  border: none;
  font-weight: bold;
  border-radius: 25px;
  padding: 0.75rem 2rem;
  box-shadow: 0 2px 8px rgba(128, 0, 0, 0.12);
}

.btn-custom:hover {
  background: linear-gradient(90deg, #a0522d 0%, #800000 100%);
  color: #f5f5dc;
}

.scroll-top-btn {
  position: fixed;
  bottom: 30px;
  right: 30px;
  z-index: 999;
  background: #800000;
  color: #f5f5dc;
  border: none;
  border-radius: 50%;
  width: 48px;
  height: 48px;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.12);
  font-size: 1.5rem;
  display: none;
  align-items: center;
  justify-content: center;
}

.scroll-top-btn.show {
  display: flex;
}
"#;

const SITE_JS: &str = r#"(function() {
  'use strict';

  const btn = document.getElementById('scroll-top-btn');
  if (!btn) return;

  // Show the back-to-top button once the page has scrolled a bit
  window.addEventListener('scroll', () => {
    const offset = document.body.scrollTop || document.documentElement.scrollTop;
    btn.classList.toggle('show', offset > 200);
  });

  btn.addEventListener('click', () => {
    window.scrollTo({ top: 0, behavior: 'smooth' });
  });
})();
"#;
