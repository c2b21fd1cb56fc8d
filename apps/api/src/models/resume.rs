//! Resume document edited by the builder wizard and consumed by the renderer.
#![allow(dead_code)]
//!
//! Every text field is a plain string; an empty or whitespace-only value means
//! "not provided". Use [`non_blank`] when a field is optional.

use serde::{Deserialize, Serialize};

/// Returns the trimmed value if it carries any non-whitespace text.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(alias = "linkedin")]
    pub linkedin_url: String,
    #[serde(alias = "portfolio")]
    pub portfolio_url: String,
}

impl PersonalInfo {
    /// First and last name, trimmed. Blank when neither is given.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// One position in the work history. Dates are `YYYY-MM`; a blank end date
/// means the position is current.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company_name: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    /// Title, company and start date are all present.
    pub fn is_complete(&self) -> bool {
        non_blank(&self.job_title).is_some()
            && non_blank(&self.company_name).is_some()
            && non_blank(&self.start_date).is_some()
    }

    /// Title and company are present. Entries failing this are left out of the PDF.
    pub fn is_renderable(&self) -> bool {
        non_blank(&self.job_title).is_some() && non_blank(&self.company_name).is_some()
    }

    /// `"2020-01 - 2022-06"`, or `"2020-01 - Present"` when there is no end date.
    /// `None` without a start date.
    pub fn date_range(&self) -> Option<String> {
        let start = non_blank(&self.start_date)?;
        Some(match non_blank(&self.end_date) {
            Some(end) => format!("{start} - {end}"),
            None => format!("{start} - Present"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    #[serde(alias = "experience")]
    pub experience_entries: Vec<ExperienceEntry>,
    pub education: Education,
    /// Comma-separated skill list, kept as typed.
    pub skills: String,
}

impl ResumeDocument {
    /// Skills split on commas, trimmed, empty tokens dropped.
    pub fn skill_tags(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Applies a partial update. Only supplied fields change; `personalInfo` and
    /// `education` are merged field by field.
    pub fn apply(&mut self, patch: ResumeDocumentPatch) {
        if let Some(info) = patch.personal_info {
            info.apply_to(&mut self.personal_info);
        }
        if let Some(summary) = patch.summary {
            self.summary = summary;
        }
        if let Some(entries) = patch.experience_entries {
            self.experience_entries = entries;
        }
        if let Some(education) = patch.education {
            education.apply_to(&mut self.education);
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Partial updates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(alias = "linkedin")]
    pub linkedin_url: Option<String>,
    #[serde(alias = "portfolio")]
    pub portfolio_url: Option<String>,
}

impl PersonalInfoPatch {
    fn apply_to(self, info: &mut PersonalInfo) {
        let fields = [
            (self.first_name, &mut info.first_name),
            (self.last_name, &mut info.last_name),
            (self.email, &mut info.email),
            (self.phone, &mut info.phone),
            (self.address, &mut info.address),
            (self.linkedin_url, &mut info.linkedin_url),
            (self.portfolio_url, &mut info.portfolio_url),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<String>,
    pub gpa: Option<String>,
}

impl EducationPatch {
    fn apply_to(self, education: &mut Education) {
        let fields = [
            (self.degree, &mut education.degree),
            (self.institution, &mut education.institution),
            (self.graduation_year, &mut education.graduation_year),
            (self.gpa, &mut education.gpa),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocumentPatch {
    pub personal_info: Option<PersonalInfoPatch>,
    pub summary: Option<String>,
    #[serde(alias = "experience")]
    pub experience_entries: Option<Vec<ExperienceEntry>>,
    pub education: Option<EducationPatch>,
    pub skills: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_document() -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@doe.com".to_string(),
                phone: "+92 300 1234567".to_string(),
                address: "Islamabad".to_string(),
                linkedin_url: String::new(),
                portfolio_url: String::new(),
            },
            education: Education {
                degree: "BSc".to_string(),
                institution: "NUST".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_patch_first_name_keeps_siblings() {
        let mut doc = make_document();
        let patch: ResumeDocumentPatch =
            serde_json::from_str(r#"{"personalInfo": {"firstName": "X"}}"#).unwrap();
        doc.apply(patch);

        assert_eq!(doc.personal_info.first_name, "X");
        assert_eq!(doc.personal_info.last_name, "Doe");
        assert_eq!(doc.personal_info.email, "jane@doe.com");
        assert_eq!(doc.personal_info.phone, "+92 300 1234567");
        assert_eq!(doc.personal_info.address, "Islamabad");
    }

    #[test]
    fn test_patch_education_merges_sub_fields() {
        let mut doc = make_document();
        doc.apply(ResumeDocumentPatch {
            education: Some(EducationPatch {
                gpa: Some("3.8".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(doc.education.degree, "BSc");
        assert_eq!(doc.education.institution, "NUST");
        assert_eq!(doc.education.gpa, "3.8");
    }

    #[test]
    fn test_patch_summary_leaves_other_sections() {
        let mut doc = make_document();
        doc.apply(ResumeDocumentPatch {
            summary: Some("Hands-on engineer".to_string()),
            ..Default::default()
        });
        assert_eq!(doc.summary, "Hands-on engineer");
        assert_eq!(doc.personal_info.first_name, "Jane");
        assert_eq!(doc.education.degree, "BSc");
    }

    #[test]
    fn test_date_range_present_when_end_blank() {
        let entry = ExperienceEntry {
            job_title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            end_date: String::new(),
            description: String::new(),
        };
        assert_eq!(entry.date_range().as_deref(), Some("2020-01 - Present"));
    }

    #[test]
    fn test_date_range_with_end_date() {
        let entry = ExperienceEntry {
            start_date: "2019-03".to_string(),
            end_date: "2021-11".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.date_range().as_deref(), Some("2019-03 - 2021-11"));
    }

    #[test]
    fn test_date_range_none_without_start() {
        assert_eq!(ExperienceEntry::default().date_range(), None);
    }

    #[test]
    fn test_skill_tags_trim_and_drop_empty() {
        let doc = ResumeDocument {
            skills: " Rust, SQL ,, Leadership ,".to_string(),
            ..Default::default()
        };
        assert_eq!(doc.skill_tags(), vec!["Rust", "SQL", "Leadership"]);
    }

    #[test]
    fn test_full_name_trims_parts() {
        let info = PersonalInfo {
            first_name: " Jane ".to_string(),
            last_name: "Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(info.full_name(), "Jane Doe");
        assert_eq!(PersonalInfo::default().full_name(), "");
    }

    #[test]
    fn test_deserialize_accepts_legacy_field_names() {
        let doc: ResumeDocument = serde_json::from_str(
            r#"{
                "personalInfo": {"firstName": "Jane", "linkedin": "https://linkedin.com/in/jane"},
                "experience": [{"jobTitle": "Engineer", "companyName": "Acme", "startDate": "2020-01"}]
            }"#,
        )
        .unwrap();
        assert_eq!(doc.personal_info.linkedin_url, "https://linkedin.com/in/jane");
        assert_eq!(doc.experience_entries.len(), 1);
        assert!(doc.experience_entries[0].is_complete());
        assert!(doc.summary.is_empty());
    }
}
