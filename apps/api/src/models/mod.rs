pub mod job;
pub mod resume;
pub mod submission;
