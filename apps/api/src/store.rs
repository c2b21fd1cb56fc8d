//! Submission storage.
//!
//! `AppState` holds an `Arc<dyn SubmissionStore>`. The only backend is
//! `MemStore`: three maps keyed by auto-incrementing ids, lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::non_blank;
use crate::models::submission::{
    ContactMessage, HiringRequest, JobApplication, NewContactMessage, NewHiringRequest,
    NewJobApplication,
};

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn create_job_application(
        &self,
        application: NewJobApplication,
    ) -> Result<JobApplication, AppError>;
    async fn list_job_applications(&self) -> Result<Vec<JobApplication>, AppError>;

    async fn create_hiring_request(
        &self,
        request: NewHiringRequest,
    ) -> Result<HiringRequest, AppError>;
    async fn list_hiring_requests(&self) -> Result<Vec<HiringRequest>, AppError>;

    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
}

/// One collection with its own id sequence starting at 1.
struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

struct Tables {
    job_applications: Table<JobApplication>,
    hiring_requests: Table<HiringRequest>,
    contact_messages: Table<ContactMessage>,
}

pub struct MemStore {
    tables: Mutex<Tables>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                job_applications: Table::new(),
                hiring_requests: Table::new(),
                contact_messages: Table::new(),
            }),
        }
    }
}

/// Blank optional text is stored as `None`.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| non_blank(v).is_some())
}

#[async_trait]
impl SubmissionStore for MemStore {
    async fn create_job_application(
        &self,
        application: NewJobApplication,
    ) -> Result<JobApplication, AppError> {
        let row = self.tables.lock().job_applications.insert_with(|id| JobApplication {
            id,
            full_name: application.full_name,
            email: application.email,
            phone: application.phone,
            role: application.role,
            cv_file_path: optional(application.cv_file_path),
            experience: optional(application.experience),
            created_at: Utc::now(),
        });
        info!(id = row.id, role = %row.role, "Job application stored");
        Ok(row)
    }

    async fn list_job_applications(&self) -> Result<Vec<JobApplication>, AppError> {
        Ok(self.tables.lock().job_applications.all())
    }

    async fn create_hiring_request(
        &self,
        request: NewHiringRequest,
    ) -> Result<HiringRequest, AppError> {
        let row = self.tables.lock().hiring_requests.insert_with(|id| HiringRequest {
            id,
            company_name: request.company_name,
            contact_person: request.contact_person,
            email: request.email,
            phone: request.phone,
            role_needed: request.role_needed,
            urgency: request.urgency,
            positions: request.positions,
            job_description: request.job_description,
            additional_notes: optional(request.additional_notes),
            created_at: Utc::now(),
        });
        info!(id = row.id, company = %row.company_name, "Hiring request stored");
        Ok(row)
    }

    async fn list_hiring_requests(&self) -> Result<Vec<HiringRequest>, AppError> {
        Ok(self.tables.lock().hiring_requests.all())
    }

    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, AppError> {
        let row = self.tables.lock().contact_messages.insert_with(|id| ContactMessage {
            id,
            name: message.name,
            email: message.email,
            phone: optional(message.phone),
            subject: message.subject,
            message: message.message,
            created_at: Utc::now(),
        });
        info!(id = row.id, subject = %row.subject, "Contact message stored");
        Ok(row)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        Ok(self.tables.lock().contact_messages.all())
    }
}
