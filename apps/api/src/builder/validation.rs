//! Field checks for the resume builder.
//!
//! The wizard only needs the boolean predicates here. `validate_document`
//! collects every problem into a report the API can show next to the form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{non_blank, PersonalInfo, ResumeDocument};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#@]+(?:[/?#]\S*)?$")
        .expect("url pattern is a valid regex")
});

/// `local@domain.tld`, no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// `scheme://host[/path]`.
pub fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Wizard step the field is edited on.
    pub step: u8,
    pub field: String,
    pub reason: String,
}

impl FieldIssue {
    fn new(step: u8, field: &str, reason: &str) -> Self {
        Self {
            step,
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentValidationResult {
    pub passed: bool,
    pub issues: Vec<FieldIssue>,
}

impl DocumentValidationResult {
    /// `"field: reason; field: reason"`.
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Required fields on step 1 are present and the email is well formed.
pub fn personal_info_complete(info: &PersonalInfo) -> bool {
    non_blank(&info.first_name).is_some()
        && non_blank(&info.last_name).is_some()
        && non_blank(&info.email).is_some()
        && non_blank(&info.phone).is_some()
        && is_valid_email(&info.email)
}

/// An empty history is fine; otherwise at least one entry must be complete.
/// Incomplete entries next to a complete one are tolerated.
pub fn experience_acceptable(doc: &ResumeDocument) -> bool {
    doc.experience_entries.is_empty() || doc.experience_entries.iter().any(|e| e.is_complete())
}

fn check_personal_info(info: &PersonalInfo, issues: &mut Vec<FieldIssue>) {
    let required = [
        ("personalInfo.firstName", &info.first_name, "First name is required"),
        ("personalInfo.lastName", &info.last_name, "Last name is required"),
        ("personalInfo.email", &info.email, "Email is required"),
        ("personalInfo.phone", &info.phone, "Phone number is required"),
    ];
    for (field, value, reason) in required {
        if non_blank(value).is_none() {
            issues.push(FieldIssue::new(1, field, reason));
        }
    }

    if non_blank(&info.email).is_some() && !is_valid_email(&info.email) {
        issues.push(FieldIssue::new(
            1,
            "personalInfo.email",
            "Valid email is required",
        ));
    }

    let links = [
        ("personalInfo.linkedinUrl", &info.linkedin_url),
        ("personalInfo.portfolioUrl", &info.portfolio_url),
    ];
    for (field, value) in links {
        if let Some(url) = non_blank(value) {
            if !is_valid_url(url) {
                issues.push(FieldIssue::new(1, field, "Must be a valid URL"));
            }
        }
    }
}

/// Collects every problem in the document. Never fails.
pub fn validate_document(doc: &ResumeDocument) -> DocumentValidationResult {
    let mut issues = Vec::new();

    check_personal_info(&doc.personal_info, &mut issues);

    if !experience_acceptable(doc) {
        issues.push(FieldIssue::new(
            3,
            "experienceEntries",
            "At least one position needs a job title, company name and start date",
        ));
    }

    DocumentValidationResult {
        passed: issues.is_empty(),
        issues,
    }
}
