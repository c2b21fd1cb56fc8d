use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageConfig;
use crate::store::SubmissionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Form submissions. Default: in-memory `MemStore`.
    pub store: Arc<dyn SubmissionStore>,
    /// Page model for resume rendering, derived from `RESUME_PAPER`.
    pub page_config: PageConfig,
}

#[cfg(test)]
pub fn test_state(upload_dir: std::path::PathBuf) -> AppState {
    use crate::layout::{default_page_config, PaperSize};
    use crate::store::MemStore;

    AppState {
        config: Config {
            port: 0,
            rust_log: "debug".to_string(),
            upload_dir,
            cv_max_bytes: 1024,
            resume_paper: PaperSize::A4,
        },
        store: Arc::new(MemStore::new()),
        page_config: default_page_config(PaperSize::A4),
    }
}
