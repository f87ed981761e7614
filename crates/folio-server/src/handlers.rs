//! Request handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use folio_contact::{submit, ContactSubmission, FieldUpdate, SubmissionOutcome, SubmitReply};
use folio_site::{resolve, Alert, AssetPipeline, Context, RouteView};

use crate::server::AppState;

/// Contact form as posted by the browser.
///
/// `send` is the value of the submit button and is absent when the form was
/// posted some other way. A value that is not a count means no press.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub send: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactForm {
    fn into_parts(self) -> (Option<u32>, ContactSubmission) {
        let trigger = self.send.and_then(|send| send.trim().parse().ok());
        (
            trigger,
            ContactSubmission::new(
                self.name.unwrap_or_default(),
                self.email.unwrap_or_default(),
                self.message.unwrap_or_default(),
            ),
        )
    }
}

/// JSON body of `POST /api/contact`.
///
/// Missing and `null` fields both read as empty text.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    /// Activation count of the send button
    pub clicks: Option<u32>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    fn into_parts(self) -> (Option<u32>, ContactSubmission) {
        (
            self.clicks,
            ContactSubmission::new(
                self.name.unwrap_or_default(),
                self.email.unwrap_or_default(),
                self.message.unwrap_or_default(),
            ),
        )
    }
}

/// Render whichever view the request path resolves to.
pub async fn page_handler(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    let view = resolve(uri.path());
    tracing::debug!("{} -> {:?}", uri.path(), view);

    render(&state, view, &Context::new(&state.config.site_title))
}

/// Handle a browser post of the contact form.
pub async fn contact_form_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Response {
    let (trigger, submission) = form.into_parts();
    let reply = run_submit(&state, trigger, submission.clone()).await;

    let mut context = Context::new(&state.config.site_title);
    context.form = reply.next_fields(&submission);
    context.alert = reply.outcome.as_ref().map(Alert::from);

    render(&state, RouteView::Contact, &context)
}

/// Handle a JSON contact submission.
pub async fn contact_api_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> Json<SubmitReply> {
    let (trigger, submission) = request.into_parts();
    Json(run_submit(&state, trigger, submission).await)
}

/// Send the resume document as a download.
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Response {
    let path = &state.config.resume;

    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("resume.pdf");

            (
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Resume not available at {}: {}", path.display(), e);
            (StatusCode::NOT_FOUND, "Resume not found").into_response()
        }
    }
}

/// Handler for the generated stylesheet.
pub async fn stylesheet_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.stylesheet.clone(),
    )
}

/// Handler for the generated script.
pub async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::script(),
    )
}

/// Run the blocking submission off the async workers.
async fn run_submit(
    state: &Arc<AppState>,
    trigger: Option<u32>,
    submission: ContactSubmission,
) -> SubmitReply {
    let mailer = Arc::clone(&state.mailer);
    let fallback = submission.clone();

    let task = tokio::task::spawn_blocking(move || submit(trigger, submission, mailer.as_ref()));

    match task.await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Contact submission task failed: {}", e);
            SubmitReply {
                outcome: Some(SubmissionOutcome::DeliveryFailure(format!(
                    "Failed to send email: {}",
                    e
                ))),
                fields: FieldUpdate::Set(fallback),
            }
        }
    }
}

fn render(state: &AppState, view: RouteView, context: &Context) -> Response {
    match state.templates.render_page(view, context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
