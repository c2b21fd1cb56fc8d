pub mod handlers;
pub mod jobs;
pub mod uploads;
pub mod validation;
