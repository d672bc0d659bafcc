//! Output formatter trait

use triage_application::{CaseReport, Diagnosis};
use triage_domain::{ConfigIssue, IntakeRecord, Questionnaire, TableIssue};

/// Renders command results for the terminal
pub trait OutputFormatter {
    fn diagnosis(&self, diagnosis: &Diagnosis) -> String;

    /// Result panel at the end of an intake session
    fn case_report(&self, report: &CaseReport) -> String;

    fn questionnaire(&self, questionnaire: &Questionnaire) -> String;

    fn intakes(&self, records: &[IntakeRecord]) -> String;

    fn table_issues(&self, issues: &[TableIssue]) -> String;

    fn config_issues(&self, issues: &[ConfigIssue]) -> String;
}
