//! Required-field checks for the public forms. All problems are collected and
//! returned together as one `AppError::Validation`.

use crate::builder::validation::is_valid_email;
use crate::errors::AppError;
use crate::models::resume::non_blank;
use crate::models::submission::{NewContactMessage, NewHiringRequest, NewJobApplication};

#[derive(Default)]
struct Problems(Vec<String>);

impl Problems {
    fn require(&mut self, field: &str, value: &str) {
        if non_blank(value).is_none() {
            self.0.push(format!("{field} is required"));
        }
    }

    fn email(&mut self, field: &str, value: &str) {
        if non_blank(value).is_some() && !is_valid_email(value) {
            self.0.push(format!("{field} must be a valid email address"));
        }
    }

    fn into_result(self) -> Result<(), AppError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.0.join("; ")))
        }
    }
}

pub fn validate_job_application(form: &NewJobApplication) -> Result<(), AppError> {
    let mut p = Problems::default();
    p.require("fullName", &form.full_name);
    p.require("email", &form.email);
    p.email("email", &form.email);
    p.require("phone", &form.phone);
    p.require("role", &form.role);
    p.into_result()
}

pub fn validate_hiring_request(form: &NewHiringRequest) -> Result<(), AppError> {
    let mut p = Problems::default();
    p.require("companyName", &form.company_name);
    p.require("contactPerson", &form.contact_person);
    p.require("email", &form.email);
    p.email("email", &form.email);
    p.require("phone", &form.phone);
    p.require("roleNeeded", &form.role_needed);
    p.require("jobDescription", &form.job_description);
    if form.positions == 0 {
        p.0.push("positions must be at least 1".to_string());
    }
    p.into_result()
}

pub fn validate_contact_message(form: &NewContactMessage) -> Result<(), AppError> {
    let mut p = Problems::default();
    p.require("name", &form.name);
    p.require("email", &form.email);
    p.email("email", &form.email);
    p.require("subject", &form.subject);
    p.require("message", &form.message);
    p.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::Urgency;

    fn message_of(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_job_application_lists_every_missing_field() {
        let msg = message_of(validate_job_application(&NewJobApplication::default()));
        assert_eq!(
            msg,
            "fullName is required; email is required; phone is required; role is required"
        );
    }

    #[test]
    fn test_job_application_bad_email() {
        let form = NewJobApplication {
            full_name: "Ali Khan".to_string(),
            email: "ali-at-example".to_string(),
            phone: "555".to_string(),
            role: "sales".to_string(),
            ..Default::default()
        };
        assert_eq!(
            message_of(validate_job_application(&form)),
            "email must be a valid email address"
        );
    }

    #[test]
    fn test_hiring_request_rejects_zero_positions() {
        let form = NewHiringRequest {
            company_name: "Acme".to_string(),
            contact_person: "Sam".to_string(),
            email: "sam@acme.com".to_string(),
            phone: "555".to_string(),
            role_needed: "designer".to_string(),
            urgency: Urgency::Standard,
            positions: 0,
            job_description: "Design".to_string(),
            additional_notes: None,
        };
        assert_eq!(
            message_of(validate_hiring_request(&form)),
            "positions must be at least 1"
        );
    }

    #[test]
    fn test_contact_message_ok() {
        let form = NewContactMessage {
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            phone: None,
            subject: "general".to_string(),
            message: "Hi".to_string(),
        };
        assert!(validate_contact_message(&form).is_ok());
    }
}
