//! Template engine for rendering the site pages.

use minijinja::{context, Environment, Value};

use folio_contact::{ContactSubmission, SubmissionOutcome};

use crate::content::SiteContent;
use crate::routes::RouteView;

/// A navbar entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub path: String,
    /// Whether this is the current page
    pub active: bool,
}

impl NavItem {
    /// Navbar entries for every view, marking `current` active.
    pub fn for_view(current: RouteView) -> Vec<NavItem> {
        RouteView::ALL
            .iter()
            .map(|view| NavItem {
                title: view.label().to_string(),
                path: view.path().to_string(),
                active: *view == current,
            })
            .collect()
    }
}

/// Inline message shown under the contact form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Alert {
    /// Bootstrap contextual class suffix (`success`, `danger`)
    pub level: &'static str,
    pub message: String,
}

impl From<&SubmissionOutcome> for Alert {
    fn from(outcome: &SubmissionOutcome) -> Self {
        let level = if outcome.is_success() {
            "success"
        } else {
            "danger"
        };

        Self {
            level,
            message: outcome.message().to_string(),
        }
    }
}

/// Per-request values for rendering a page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Site title shown in the browser tab
    pub site_title: String,
    /// Contact form field values
    pub form: ContactSubmission,
    /// Contact form outcome, if any
    pub alert: Option<Alert>,
}

impl Context {
    pub fn new(site_title: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            form: ContactSubmission::default(),
            alert: None,
        }
    }
}

/// Errors that can occur while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render {template}: {source}")]
    Template {
        template: &'static str,
        #[source]
        source: minijinja::Error,
    },
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine showing `content`.
    pub fn new(content: &SiteContent) -> Self {
        let mut env = Environment::new();

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .expect("Failed to add built-in template");
        }

        env.add_global("site", Value::from_serialize(content));

        Self { env }
    }

    /// Render one view.
    pub fn render_page(&self, view: RouteView, context: &Context) -> Result<String, RenderError> {
        let template = view.template();
        let wrap = |source: minijinja::Error| RenderError::Template { template, source };

        let tmpl = self.env.get_template(template).map_err(wrap)?;

        tmpl.render(context! {
            site_title => &context.site_title,
            view => view,
            background => view.background(),
            nav => NavItem::for_view(view),
            form => &context.form,
            alert => &context.alert,
        })
        .map_err(wrap)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(&SiteContent::default())
    }
}

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", BASE_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("about.html", ABOUT_TEMPLATE),
    ("projects.html", PROJECTS_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
];

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ site_title }}</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
  <link rel="stylesheet" href="https://use.fontawesome.com/releases/v5.15.4/css/all.css">
  <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Poppins:wght@700&display=swap">
  <link rel="stylesheet" href="/static/site.css">
</head>
<body>
  {% include "nav.html" %}
  <section class="py-5" style="background: {{ background }}; min-height: 100vh;">
    <div class="container" style="margin-top: 5.5rem;">
      {% block content %}{% endblock %}
    </div>
  </section>
  {% include "footer.html" %}
  <button id="scroll-top-btn" class="scroll-top-btn" type="button" aria-label="Back to top">
    <i class="fas fa-arrow-up"></i>
  </button>
  <script src="/static/site.js"></script>
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<nav class="navbar navbar-expand navbar-dark fixed-top" style="background: #222; box-shadow: 0 4px 16px rgba(0,0,0,0.18);">
  <div class="container">
    <a class="navbar-brand fw-bold" href="/"></a>
    <ul class="navbar-nav">
    {% for item in nav %}
      <li class="nav-item">
        <a class="nav-link{% if item.active %} active{% endif %}" href="{{ item.path|safe }}"{% if item.active %} aria-current="page"{% endif %}>{{ item.title }}</a>
      </li>
    {% endfor %}
    </ul>
  </div>
</nav>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="py-2 text-center footer" style="background: #222;">
  <div class="container">
    <div>
      <i class="fas fa-envelope me-2"></i>
      <a href="mailto:{{ site.profile.email }}" class="text-light footer-link">{{ site.profile.email }}</a>
    </div>
    <div class="mt-2">
    {% for link in site.social %}
      <a href="{{ link.href|safe }}" class="text-light footer-link"><i class="{{ link.icon }} fa-2x mx-2"></i></a>
    {% endfor %}
    </div>
  </div>
</footer>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="d-flex flex-column align-items-center">
  <img src="{{ site.profile.image|safe }}" alt="{{ site.profile.name }}" class="profile-img">
  <h1 class="text-center mb-3 home-title">{{ site.profile.name }}</h1>
  <p class="text-center lead home-greeting">{{ site.profile.greeting }}</p>
  <p class="text-center home-bio">{{ site.profile.bio }}</p>
</div>
{% endblock %}"##;

const ABOUT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<h2 class="text-center mb-4 page-title-light">About Me</h2>
<div class="row">
  <div class="col-md-6 col-lg-4">
    <div class="card custom-card">
      <div class="card-header"><h3 class="card-title-accent">Skills</h3></div>
      <div class="card-body">
        <ul class="list-group">
        {% for skill in site.skills %}
          <li class="list-group-item bg-transparent text-dark"><i class="{{ skill.icon }}"></i>{{ skill.label }}</li>
        {% endfor %}
        </ul>
      </div>
    </div>
  </div>
  <div class="col-md-6 col-lg-8">
    <div class="card custom-card mb-3">
      <div class="card-header"><h4 class="card-title-accent">Resume</h4></div>
      <div class="card-body">
      {% for line in site.resume_blurb %}
        <p class="card-text-muted">{{ line }}</p>
      {% endfor %}
        <a href="/resume" class="btn btn-custom" id="resume-download-btn" download>Download My Resume</a>
      </div>
    </div>
  {% for group in site.tools %}
    <div class="card custom-card{% if not loop.last %} mb-3{% endif %}">
      <div class="card-header"><h4 class="card-title-accent">{{ group.title }}</h4></div>
      <div class="card-body">
        <ul class="card-text-muted">
        {% for item in group.items %}
          <li>{{ item }}</li>
        {% endfor %}
        </ul>
      </div>
    </div>
  {% endfor %}
  </div>
</div>
{% endblock %}"##;

const PROJECTS_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<h2 class="text-center mb-4 page-title-dark">Projects</h2>
<div class="row gy-4">
{% for project in site.projects %}
  <div class="col-md-6 col-lg-3">
    <div class="card custom-card project-card">
      <img src="{{ project.image|safe }}" class="card-img-top" alt="{{ project.title }}">
      <div class="card-body">
        <i class="{{ project.icon }}"></i>
        <h4 class="card-title-accent">{{ project.title }}</h4>
        <p class="card-text-muted">{{ project.description }}</p>
      </div>
    </div>
  </div>
{% endfor %}
</div>
{% endblock %}"##;

const CONTACT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<h2 class="text-center mb-4 page-title-dark">Contact Me</h2>
<form method="post" action="/contact" class="contact-form">
  <div class="row mb-3"><div class="col">
    <label for="contact-name" class="form-label text-dark">Name</label>
    <input type="text" class="form-control" id="contact-name" name="name" placeholder="Your Name" value="{{ form.name }}">
  </div></div>
  <div class="row mb-3"><div class="col">
    <label for="contact-email" class="form-label text-dark">Email</label>
    <input type="email" class="form-control" id="contact-email" name="email" placeholder="Your Email" value="{{ form.email }}">
  </div></div>
  <div class="row mb-3"><div class="col">
    <label for="contact-message" class="form-label text-dark">Message</label>
    <textarea class="form-control" id="contact-message" name="message" placeholder="Your Message">{{ form.message }}</textarea>
  </div></div>
  <button type="submit" id="send-message-btn" name="send" value="1" class="btn btn-info btn-custom mt-3">Send Message</button>
  <div id="contact-response" class="mt-3">
  {% if alert %}
    <div class="alert alert-{{ alert.level }}" role="alert">{{ alert.message }}</div>
  {% endif %}
  </div>
</form>
{% endblock %}"##;
