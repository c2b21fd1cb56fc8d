use serde::Serialize;

/// A public job listing shown on the jobs page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    #[serde(rename = "type")]
    pub employment_type: &'static str,
    pub posted_date: &'static str,
    pub description: &'static str,
}
