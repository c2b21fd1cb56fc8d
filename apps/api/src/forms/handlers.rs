//! Axum route handlers for the public forms and job listings.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::forms::jobs::JOB_LISTINGS;
use crate::forms::uploads::{content_type_for, load_cv, save_cv, CvUpload};
use crate::forms::validation::{
    validate_contact_message, validate_hiring_request, validate_job_application,
};
use crate::models::job::JobListing;
use crate::models::submission::{
    ContactMessage, HiringRequest, JobApplication, NewContactMessage, NewHiringRequest,
    NewJobApplication,
};
use crate::state::AppState;

/// POST /api/job-applications (multipart, optional `cv` file)
pub async fn handle_create_job_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<JobApplication>, AppError> {
    let mut form = NewJobApplication::default();
    let mut cv: Option<CvUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "cv" => {
                let original_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await?;
                // An empty file input still sends the part; treat it as no CV.
                if !bytes.is_empty() {
                    cv = Some(CvUpload {
                        original_name,
                        content_type,
                        bytes,
                    });
                }
            }
            "fullName" => form.full_name = field.text().await?,
            "email" => form.email = field.text().await?,
            "phone" => form.phone = field.text().await?,
            "role" => form.role = field.text().await?,
            "experience" => form.experience = Some(field.text().await?),
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    validate_job_application(&form)?;

    if let Some(cv) = &cv {
        let stored = save_cv(&state.config.upload_dir, cv, state.config.cv_max_bytes).await?;
        form.cv_file_path = Some(stored);
    }

    let application = state.store.create_job_application(form).await?;
    Ok(Json(application))
}

/// GET /api/job-applications
pub async fn handle_list_job_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    Ok(Json(state.store.list_job_applications().await?))
}

/// POST /api/hiring-requests
pub async fn handle_create_hiring_request(
    State(state): State<AppState>,
    Json(req): Json<NewHiringRequest>,
) -> Result<Json<HiringRequest>, AppError> {
    validate_hiring_request(&req)?;
    let request = state.store.create_hiring_request(req).await?;
    Ok(Json(request))
}

/// GET /api/hiring-requests
pub async fn handle_list_hiring_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<HiringRequest>>, AppError> {
    Ok(Json(state.store.list_hiring_requests().await?))
}

/// POST /api/contact-messages
pub async fn handle_create_contact_message(
    State(state): State<AppState>,
    Json(req): Json<NewContactMessage>,
) -> Result<Json<ContactMessage>, AppError> {
    validate_contact_message(&req)?;
    let message = state.store.create_contact_message(req).await?;
    Ok(Json(message))
}

/// GET /api/contact-messages
pub async fn handle_list_contact_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    Ok(Json(state.store.list_contact_messages().await?))
}

/// GET /api/jobs
pub async fn handle_list_jobs() -> Json<&'static [JobListing]> {
    Json(&JOB_LISTINGS[..])
}

/// GET /uploads/:filename
pub async fn handle_get_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = load_cv(&state.config.upload_dir, &filename).await?;
    info!(file = %filename, "Serving CV");
    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(content_type_for(&filename)),
        )],
        bytes,
    ))
}
