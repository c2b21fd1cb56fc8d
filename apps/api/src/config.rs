use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::layout::PaperSize;

const DEFAULT_CV_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory CV uploads are written to and served from.
    pub upload_dir: PathBuf,
    pub cv_max_bytes: usize,
    pub resume_paper: PaperSize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            upload_dir: PathBuf::from(env_or("CV_UPLOAD_DIR", "cv_uploads")),
            cv_max_bytes: env_or("CV_MAX_BYTES", &DEFAULT_CV_MAX_BYTES.to_string())
                .parse::<usize>()
                .context("CV_MAX_BYTES must be a byte count")?,
            resume_paper: env_or("RESUME_PAPER", "a4")
                .parse::<PaperSize>()
                .map_err(anyhow::Error::msg)
                .context("RESUME_PAPER must be a4 or letter")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
