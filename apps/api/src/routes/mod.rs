pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::builder::handlers as resume;
use crate::forms::handlers as forms;
use crate::state::AppState;

/// Headroom for the text fields and multipart framing around a CV.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.cv_max_bytes + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Public site
        .route("/api/jobs", get(forms::handle_list_jobs))
        .route(
            "/api/job-applications",
            get(forms::handle_list_job_applications)
                .post(forms::handle_create_job_application)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/hiring-requests",
            get(forms::handle_list_hiring_requests).post(forms::handle_create_hiring_request),
        )
        .route(
            "/api/contact-messages",
            get(forms::handle_list_contact_messages).post(forms::handle_create_contact_message),
        )
        .route("/uploads/:filename", get(forms::handle_get_upload))
        // Resume builder
        .route("/api/resume/validate", post(resume::handle_validate_resume))
        .route("/api/resume/pdf", post(resume::handle_render_pdf))
        .with_state(state)
}
