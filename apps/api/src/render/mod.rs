// Resume PDF rendering.
// `composer` turns a document into positioned draw operations with manual
// pagination; `pdf` serialises them. Each call starts from a blank first page.

pub mod composer;
pub mod pdf;

use thiserror::Error;
use tracing::{debug, warn};

use crate::layout::page::PageConfig;
use crate::models::resume::ResumeDocument;

pub use composer::compose;

pub const PDF_EXTENSION: &str = "pdf";
pub const PDF_MIME: &str = "application/pdf";

/// Failure inside the drawing primitives. Distinct from missing or malformed
/// form fields, which the builder reports before rendering is attempted.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot draw {character:?} in \"{text}\": the resume font only covers Latin characters")]
    UnsupportedCharacter { character: char, text: String },
}

#[derive(Debug, Clone)]
pub struct RenderedResume {
    pub file_name: String,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

/// `{firstName}_{lastName}_Resume.pdf`
pub fn output_filename(doc: &ResumeDocument) -> String {
    format!(
        "{}_{}_Resume.{PDF_EXTENSION}",
        doc.personal_info.first_name.trim(),
        doc.personal_info.last_name.trim()
    )
}

/// Lays out and writes the resume. Either the complete file is produced or an
/// error is returned; there is no partial output.
pub fn render_resume(
    doc: &ResumeDocument,
    config: &PageConfig,
) -> Result<RenderedResume, RenderError> {
    let layout = compose(doc, config);
    let page_count = layout.pages.len();

    let bytes = pdf::write_pdf(&layout).inspect_err(|e| warn!("Resume render failed: {e}"))?;

    let file_name = output_filename(doc);
    debug!(
        file_name = %file_name,
        pages = page_count,
        size = bytes.len(),
        "Resume rendered"
    );

    Ok(RenderedResume {
        file_name,
        page_count,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::page::{default_page_config, PaperSize};
    use crate::models::resume::{ExperienceEntry, PersonalInfo};

    fn make_document() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@doe.com".to_string(),
                phone: "555-0100".to_string(),
                ..Default::default()
            },
            summary: "Backend engineer with a focus on reliability.".to_string(),
            experience_entries: vec![ExperienceEntry {
                job_title: "Engineer".to_string(),
                company_name: "Acme".to_string(),
                start_date: "2020-01".to_string(),
                ..Default::default()
            }],
            skills: "Rust, SQL".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename(&make_document()), "Jane_Doe_Resume.pdf");
    }

    #[test]
    fn test_render_produces_pdf() {
        let out = render_resume(&make_document(), &default_page_config(PaperSize::A4)).unwrap();
        assert_eq!(out.file_name, "Jane_Doe_Resume.pdf");
        assert_eq!(out.page_count, 1);
        assert!(out.bytes.starts_with(b"%PDF-"));
        assert!(out.bytes.windows(19).any(|w| w == b"(2020-01 - Present)"));
    }

    #[test]
    fn test_render_twice_is_identical() {
        let config = default_page_config(PaperSize::A4);
        let doc = make_document();
        let a = render_resume(&doc, &config).unwrap();
        let b = render_resume(&doc, &config).unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[test]
    fn test_render_error_is_reported() {
        let mut doc = make_document();
        doc.summary = "Speaks 日本語".to_string();
        let err = render_resume(&doc, &default_page_config(PaperSize::A4)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Speaks 日本語"), "{message}");
    }
}
