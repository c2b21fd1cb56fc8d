use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Candidate application from the talent-pool form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    /// Stored file name under the upload directory.
    pub cv_file_path: Option<String>,
    pub experience: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    #[serde(default)]
    pub cv_file_path: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// 4-6 weeks.
    #[default]
    Standard,
    /// 2-3 weeks.
    Urgent,
    /// 1 week.
    Immediate,
}

/// Employer request from the hire-talent form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringRequest {
    pub id: u64,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub role_needed: String,
    pub urgency: Urgency,
    pub positions: u32,
    pub job_description: String,
    pub additional_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_positions() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHiringRequest {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub role_needed: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default = "default_positions")]
    pub positions: u32,
    pub job_description: String,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}
