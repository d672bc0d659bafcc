//! Case report shown at the end of an intake session
//!
//! Combines the stored identity record with the diagnosis for the result panel.

use crate::use_cases::diagnose::Diagnosis;
use chrono::NaiveDate;
use serde::Serialize;
use triage_domain::IntakeRecord;

/// Everything the result panel displays for one cow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub date: NaiveDate,
    pub intake: IntakeRecord,
    pub diagnosis: Diagnosis,
}

impl CaseReport {
    /// Build a report dated by the intake's creation time (UTC)
    pub fn new(intake: IntakeRecord, diagnosis: Diagnosis) -> Self {
        Self {
            date: intake.created_at.date_naive(),
            intake,
            diagnosis,
        }
    }

    /// `USER : name / contact` line of the result panel
    pub fn user_line(&self) -> String {
        format!(
            "{} / {}",
            self.intake.intake.username, self.intake.intake.user_contact
        )
    }
}
