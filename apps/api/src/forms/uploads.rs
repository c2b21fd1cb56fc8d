//! CV upload policy and storage on local disk.

use std::path::Path;

use anyhow::Context;
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

pub const ALLOWED_CV_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone)]
pub struct CvUpload {
    pub original_name: Option<String>,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Checks type and size before anything touches the disk.
pub fn check_cv(upload: &CvUpload, max_bytes: usize) -> Result<(), AppError> {
    if !ALLOWED_CV_TYPES.contains(&upload.content_type.as_str()) {
        return Err(AppError::UnsupportedMediaType(
            "Invalid file type. Only PDF, DOC, and DOCX files are allowed.".to_string(),
        ));
    }
    if upload.bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "CV exceeds the {max_bytes} byte limit"
        )));
    }
    Ok(())
}

/// `cv-{uuid}{.ext}`, keeping a short alphanumeric extension from the client's name.
pub fn stored_name(original_name: Option<&str>) -> String {
    let ext = original_name
        .and_then(|n| Path::new(n).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default();
    format!("cv-{}{ext}", Uuid::new_v4())
}

/// A bare file name: no separators, no parent references.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && !name.contains('/') && !name.contains('\\')
}

pub fn content_type_for(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("pdf") => ALLOWED_CV_TYPES[0],
        Some("doc") => ALLOWED_CV_TYPES[1],
        Some("docx") => ALLOWED_CV_TYPES[2],
        _ => "application/octet-stream",
    }
}

/// Validates and writes the CV. Returns the stored file name.
pub async fn save_cv(dir: &Path, upload: &CvUpload, max_bytes: usize) -> Result<String, AppError> {
    check_cv(upload, max_bytes)?;

    let name = stored_name(upload.original_name.as_deref());
    let path = dir.join(&name);
    tokio::fs::write(&path, &upload.bytes)
        .await
        .with_context(|| format!("Failed to write CV to {}", path.display()))?;

    info!(file = %name, size = upload.bytes.len(), "CV stored");
    Ok(name)
}

/// Reads a previously stored CV.
pub async fn load_cv(dir: &Path, name: &str) -> Result<Vec<u8>, AppError> {
    if !is_safe_file_name(name) {
        return Err(AppError::Validation("Invalid file path".to_string()));
    }
    match tokio::fs::read(dir.join(name)).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::NotFound(format!("File {name} not found")))
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("Failed to read CV {name}"))
            .into()),
    }
}
