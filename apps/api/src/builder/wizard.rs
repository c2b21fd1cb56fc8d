//! Five-step resume builder state machine.
#![allow(dead_code)]
//!
//! The wizard owns the document while it is being edited. Forward navigation is
//! gated on the current step being valid; invalid data never raises an error,
//! the transition is simply refused and the caller re-checks `is_step_valid`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::validation::{experience_acceptable, personal_info_complete};
use crate::models::resume::{ExperienceEntry, ResumeDocument, ResumeDocumentPatch};

pub const TOTAL_STEPS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo = 1,
    Summary = 2,
    Experience = 3,
    EducationSkills = 4,
    Review = 5,
}

impl WizardStep {
    pub const ALL: [WizardStep; TOTAL_STEPS as usize] = [
        WizardStep::PersonalInfo,
        WizardStep::Summary,
        WizardStep::Experience,
        WizardStep::EducationSkills,
        WizardStep::Review,
    ];

    /// 1-based step number to step. `None` outside `1..=TOTAL_STEPS`.
    pub fn from_index(index: u8) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize))
            .copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Information",
            WizardStep::Summary => "Professional Summary",
            WizardStep::Experience => "Work Experience",
            WizardStep::EducationSkills => "Education & Skills",
            WizardStep::Review => "Review & Download",
        }
    }
}

/// Editable fields of one experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    JobTitle,
    CompanyName,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone)]
pub struct ResumeWizard {
    current: WizardStep,
    document: ResumeDocument,
}

impl Default for ResumeWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeWizard {
    /// Step 1 with the empty template.
    pub fn new() -> Self {
        Self::with_document(ResumeDocument::default())
    }

    /// Step 1 with an existing document loaded.
    pub fn with_document(document: ResumeDocument) -> Self {
        Self {
            current: WizardStep::PersonalInfo,
            document,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current
    }

    pub fn current_step_index(&self) -> u8 {
        self.current.index()
    }

    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    pub fn step_title(&self) -> &'static str {
        self.current.title()
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    // ── navigation ──────────────────────────────────────────────────────────

    /// Moves forward one step if the current step is valid. Returns whether it moved.
    pub fn advance(&mut self) -> bool {
        let from = self.current.index();
        if !self.is_step_valid(from) {
            debug!(step = from, "advance refused, step invalid");
            return false;
        }
        match WizardStep::from_index(from + 1) {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Moves back one step. No-op on step 1.
    pub fn retreat(&mut self) -> bool {
        match self.current.index().checked_sub(1).and_then(WizardStep::from_index) {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Jumps to any step in `1..=TOTAL_STEPS`; other values are ignored.
    pub fn jump_to(&mut self, step: u8) -> bool {
        match WizardStep::from_index(step) {
            Some(target) => {
                self.current = target;
                true
            }
            None => false,
        }
    }

    /// Back to step 1 with the empty template.
    pub fn reset(&mut self) {
        self.current = WizardStep::PersonalInfo;
        self.document = ResumeDocument::default();
    }

    /// Hands the document over for rendering and starts a fresh session.
    pub fn take_document(&mut self) -> ResumeDocument {
        let document = std::mem::take(&mut self.document);
        self.current = WizardStep::PersonalInfo;
        document
    }

    // ── validity ────────────────────────────────────────────────────────────

    pub fn is_step_valid(&self, step: u8) -> bool {
        match WizardStep::from_index(step) {
            Some(WizardStep::PersonalInfo) => personal_info_complete(&self.document.personal_info),
            Some(WizardStep::Experience) => experience_acceptable(&self.document),
            Some(WizardStep::Summary | WizardStep::EducationSkills | WizardStep::Review) => true,
            None => false,
        }
    }

    pub fn is_current_step_valid(&self) -> bool {
        self.is_step_valid(self.current.index())
    }

    pub fn progress_percent(&self) -> f32 {
        self.current.index() as f32 / TOTAL_STEPS as f32 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.current.index() == TOTAL_STEPS && self.is_step_valid(TOTAL_STEPS)
    }

    // ── editing ─────────────────────────────────────────────────────────────

    pub fn update_document(&mut self, patch: ResumeDocumentPatch) {
        self.document.apply(patch);
    }

    /// Appends a blank entry.
    pub fn add_experience(&mut self) {
        self.document
            .experience_entries
            .push(ExperienceEntry::default());
    }

    /// Removes the entry at `index`, keeping the order of the rest. The last
    /// entry can be removed too.
    pub fn remove_experience(&mut self, index: usize) -> Option<ExperienceEntry> {
        let entries = &mut self.document.experience_entries;
        (index < entries.len()).then(|| entries.remove(index))
    }

    pub fn update_experience(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        let Some(entry) = self.document.experience_entries.get_mut(index) else {
            return false;
        };
        let slot = match field {
            ExperienceField::JobTitle => &mut entry.job_title,
            ExperienceField::CompanyName => &mut entry.company_name,
            ExperienceField::StartDate => &mut entry.start_date,
            ExperienceField::EndDate => &mut entry.end_date,
            ExperienceField::Description => &mut entry.description,
        };
        *slot = value.into();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::PersonalInfoPatch;

    fn fill_personal_info(wizard: &mut ResumeWizard, email: &str) {
        wizard.update_document(ResumeDocumentPatch {
            personal_info: Some(PersonalInfoPatch {
                first_name: Some("Jane".to_string()),
                last_name: Some("Doe".to_string()),
                email: Some(email.to_string()),
                phone: Some("555-0100".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
    }

    fn entry(title: &str, company: &str, start: &str) -> ExperienceEntry {
        ExperienceEntry {
            job_title: title.to_string(),
            company_name: company.to_string(),
            start_date: start.to_string(),
            ..Default::default()
        }
    }

    fn wizard_with_entries(entries: Vec<ExperienceEntry>) -> ResumeWizard {
        ResumeWizard::with_document(ResumeDocument {
            experience_entries: entries,
            ..Default::default()
        })
    }

    // ── step validity ───────────────────────────────────────────────────────

    #[test]
    fn test_step1_rejects_bad_email() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "not-an-email");
        assert!(!w.is_step_valid(1));
        fill_personal_info(&mut w, "jane@doe.com");
        assert!(w.is_step_valid(1));
    }

    #[test]
    fn test_step1_requires_all_four_fields() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "jane@doe.com");
        w.update_document(ResumeDocumentPatch {
            personal_info: Some(PersonalInfoPatch {
                last_name: Some(" ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(!w.is_step_valid(1));
    }

    #[test]
    fn test_step1_ignores_malformed_links() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "jane@doe.com");
        w.update_document(ResumeDocumentPatch {
            personal_info: Some(PersonalInfoPatch {
                linkedin_url: Some("not a url".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert!(w.is_step_valid(1));
    }

    #[test]
    fn test_step3_empty_history_is_valid() {
        assert!(wizard_with_entries(vec![]).is_step_valid(3));
    }

    #[test]
    fn test_step3_all_incomplete_is_invalid() {
        let w = wizard_with_entries(vec![
            entry("Engineer", "", "2020-01"),
            entry("", "Acme", "2020-01"),
            ExperienceEntry::default(),
        ]);
        assert!(!w.is_step_valid(3));
    }

    #[test]
    fn test_step3_missing_start_date_is_invalid() {
        let w = wizard_with_entries(vec![entry("Engineer", "Acme", "")]);
        assert!(!w.is_step_valid(3));
    }

    #[test]
    fn test_step3_one_complete_entry_tolerates_incomplete_ones() {
        let w = wizard_with_entries(vec![
            ExperienceEntry::default(),
            entry("Engineer", "Acme", "2020-01"),
            entry("Intern", "", ""),
        ]);
        assert!(w.is_step_valid(3));
    }

    #[test]
    fn test_optional_steps_always_valid() {
        let w = ResumeWizard::new();
        assert!(w.is_step_valid(2));
        assert!(w.is_step_valid(4));
        assert!(w.is_step_valid(5));
    }

    #[test]
    fn test_out_of_range_step_is_invalid() {
        let w = ResumeWizard::new();
        assert!(!w.is_step_valid(0));
        assert!(!w.is_step_valid(6));
    }

    // ── navigation ──────────────────────────────────────────────────────────

    #[test]
    fn test_advance_refused_when_step_invalid() {
        let mut w = ResumeWizard::new();
        assert_eq!(w.total_steps(), 5);
        assert!(!w.is_current_step_valid());
        assert!(!w.advance());
        assert_eq!(w.current_step(), WizardStep::PersonalInfo);
        fill_personal_info(&mut w, "jane@doe.com");
        assert!(w.is_current_step_valid());
    }

    #[test]
    fn test_walk_to_review_and_complete() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "jane@doe.com");
        for expected in 2..=5 {
            assert!(w.advance());
            assert_eq!(w.current_step_index(), expected);
        }
        assert!(!w.advance(), "no step after review");
        assert_eq!(w.current_step(), WizardStep::Review);
        assert!(w.is_complete());
        assert_eq!(w.step_title(), "Review & Download");
        assert!((w.progress_percent() - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_advance_blocked_on_incomplete_history() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "jane@doe.com");
        w.add_experience();
        assert!(w.jump_to(3));
        assert!(!w.advance());
        assert_eq!(w.current_step(), WizardStep::Experience);
    }

    #[test]
    fn test_retreat_is_noop_at_first_step() {
        let mut w = ResumeWizard::new();
        assert!(!w.retreat());
        assert_eq!(w.current_step_index(), 1);
        assert!(w.jump_to(4));
        assert!(w.retreat());
        assert_eq!(w.current_step(), WizardStep::Experience);
    }

    #[test]
    fn test_jump_to_out_of_range_is_noop() {
        let mut w = ResumeWizard::new();
        assert!(w.jump_to(3));
        assert!(!w.jump_to(0));
        assert!(!w.jump_to(6));
        assert_eq!(w.current_step_index(), 3);
    }

    #[test]
    fn test_progress_percent() {
        let mut w = ResumeWizard::new();
        assert!((w.progress_percent() - 20.0).abs() < 1e-4);
        w.jump_to(3);
        assert!((w.progress_percent() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_not_complete_before_review() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "jane@doe.com");
        w.jump_to(4);
        assert!(!w.is_complete());
    }

    #[test]
    fn test_reset_restores_template() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "jane@doe.com");
        w.add_experience();
        w.jump_to(4);
        w.reset();
        assert_eq!(w.current_step(), WizardStep::PersonalInfo);
        assert_eq!(w.document(), &ResumeDocument::default());
    }

    #[test]
    fn test_take_document_hands_over_and_resets() {
        let mut w = ResumeWizard::new();
        fill_personal_info(&mut w, "jane@doe.com");
        w.jump_to(5);
        let doc = w.take_document();
        assert_eq!(doc.personal_info.first_name, "Jane");
        assert_eq!(w.current_step_index(), 1);
        assert_eq!(w.document(), &ResumeDocument::default());
    }

    // ── experience editing ──────────────────────────────────────────────────

    #[test]
    fn test_add_experience_appends_blank_entry() {
        let mut w = ResumeWizard::new();
        w.add_experience();
        w.add_experience();
        assert_eq!(w.document().experience_entries.len(), 2);
        assert_eq!(w.document().experience_entries[1], ExperienceEntry::default());
    }

    #[test]
    fn test_remove_experience_preserves_order() {
        let titles = ["A", "B", "C", "D"];
        for i in 0..titles.len() {
            let mut w = wizard_with_entries(titles.iter().map(|t| entry(t, "Co", "2020-01")).collect());
            let removed = w.remove_experience(i).unwrap();
            assert_eq!(removed.job_title, titles[i]);

            let remaining: Vec<&str> = w
                .document()
                .experience_entries
                .iter()
                .map(|e| e.job_title.as_str())
                .collect();
            let expected: Vec<&str> = titles
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, t)| *t)
                .collect();
            assert_eq!(remaining, expected);
        }
    }

    #[test]
    fn test_remove_experience_down_to_zero() {
        let mut w = wizard_with_entries(vec![entry("A", "Co", "2020-01")]);
        assert!(w.remove_experience(0).is_some());
        assert!(w.document().experience_entries.is_empty());
        assert!(w.remove_experience(0).is_none());
    }

    #[test]
    fn test_update_experience_touches_one_field() {
        let mut w = wizard_with_entries(vec![
            entry("A", "Co", "2020-01"),
            entry("B", "Other", "2021-02"),
        ]);
        assert!(w.update_experience(1, ExperienceField::EndDate, "2023-05"));
        let entries = &w.document().experience_entries;
        assert_eq!(entries[1].end_date, "2023-05");
        assert_eq!(entries[1].job_title, "B");
        assert_eq!(entries[1].start_date, "2021-02");
        assert_eq!(entries[0], entry("A", "Co", "2020-01"));
    }

    #[test]
    fn test_update_experience_out_of_range() {
        let mut w = ResumeWizard::new();
        assert!(!w.update_experience(0, ExperienceField::JobTitle, "Engineer"));
    }

    #[test]
    fn test_step_from_index_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
        assert_eq!(WizardStep::from_index(0), None);
    }
}
