//! Axum route handlers for the resume builder.

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::builder::validation::{validate_document, FieldIssue};
use crate::builder::wizard::{ResumeWizard, WizardStep};
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::{render_resume, RenderedResume, PDF_MIME};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStatus {
    pub step: u8,
    pub title: &'static str,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeValidationResponse {
    pub steps: Vec<StepStatus>,
    pub total_steps: u8,
    /// Furthest step the wizard reaches by advancing from step 1.
    pub reached_step: u8,
    pub progress_percent: f32,
    pub complete: bool,
    pub skill_tags: Vec<String>,
    pub issues: Vec<FieldIssue>,
}

/// Loads the document into a fresh wizard and advances as far as validity allows.
pub fn assess_document(doc: ResumeDocument) -> ResumeValidationResponse {
    let report = validate_document(&doc);
    let skill_tags = doc.skill_tags().into_iter().map(str::to_string).collect();
    let mut wizard = ResumeWizard::with_document(doc);

    let steps = WizardStep::ALL
        .iter()
        .map(|step| StepStatus {
            step: step.index(),
            title: step.title(),
            valid: wizard.is_step_valid(step.index()),
        })
        .collect();

    while wizard.advance() {}

    ResumeValidationResponse {
        steps,
        total_steps: wizard.total_steps(),
        reached_step: wizard.current_step_index(),
        progress_percent: wizard.progress_percent(),
        complete: wizard.is_complete(),
        skill_tags,
        issues: report.issues,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/validate
pub async fn handle_validate_resume(Json(doc): Json<ResumeDocument>) -> Json<ResumeValidationResponse> {
    Json(assess_document(doc))
}

/// POST /api/resume/pdf
///
/// 400 when required fields are missing or malformed, 422 when the renderer
/// cannot draw the document.
pub async fn handle_render_pdf(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDocument>,
) -> Result<Response, AppError> {
    let report = validate_document(&doc);
    if !report.passed {
        return Err(AppError::Validation(report.summary()));
    }

    let config = state.page_config.clone();
    let rendered = tokio::task::spawn_blocking(move || render_resume(&doc, &config))
        .await
        .context("Resume render task failed to complete")??;

    info!(
        file_name = %rendered.file_name,
        pages = rendered.page_count,
        "Resume PDF generated"
    );
    pdf_download(rendered)
}

fn pdf_download(rendered: RenderedResume) -> Result<Response, AppError> {
    let disposition = HeaderValue::from_str(&content_disposition(&rendered.file_name))
        .context("Invalid Content-Disposition header")?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(PDF_MIME)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        rendered.bytes,
    )
        .into_response())
}

/// `attachment` with a quoted ASCII fallback plus the exact UTF-8 name (RFC 5987).
fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() && c != '"' && c != '\\') || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
        urlencoding::encode(file_name)
    )
}
