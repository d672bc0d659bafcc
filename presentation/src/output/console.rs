//! Console output formatters

use crate::config::OutputConfig;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use triage_application::{CaseReport, Diagnosis};
use triage_domain::{
    ConfigIssue, DiagnosisRecord, IntakeRecord, Questionnaire, Severity, TableIssue,
};

const WIDTH: usize = 60;

/// Pick the formatter for the configured output format
pub fn formatter_for(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    if config.is_json() {
        Box::new(JsonFormatter)
    } else {
        Box::new(ConsoleFormatter)
    }
}

/// Formats results as colored text
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(WIDTH).cyan())
    }

    fn record(record: &DiagnosisRecord) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "DIAGNOSIS :-".green().bold(),
            record.name.bold()
        ));
        output.push_str(&Self::section_header("Injections"));
        output.push_str(&Self::bullets(&record.injections));
        output.push_str(&Self::section_header("Medicines"));
        output.push_str(&Self::bullets(&record.medicines));
        output
    }

    fn bullets(lines: &[String]) -> String {
        if lines.is_empty() {
            return format!("  {}\n", "(none)".dimmed());
        }
        lines.iter().map(|line| format!("  * {}\n", line)).collect()
    }

    fn matched_line(diagnosis: &Diagnosis) -> String {
        match &diagnosis.matched_rule {
            Some(rule) => format!("{} {}\n", "Matched rule:".dimmed(), rule),
            None => format!("{}\n", "No rule matched; showing the default record".yellow()),
        }
    }

    fn severity(severity: Severity) -> String {
        match severity {
            Severity::Error => "error".red().bold().to_string(),
            Severity::Warning => "warning".yellow().bold().to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn diagnosis(&self, diagnosis: &Diagnosis) -> String {
        let mut output = Self::header("Diagnosis");
        output.push_str(&format!(
            "{} {}\n\n",
            "Answers:".cyan().bold(),
            diagnosis.answers
        ));
        output.push_str(&Self::record(&diagnosis.record));
        output.push('\n');
        output.push_str(&Self::matched_line(diagnosis));
        output.push_str(&Self::footer());
        output
    }

    fn case_report(&self, report: &CaseReport) -> String {
        let intake = &report.intake.intake;
        let mut output = Self::header("Case Report");
        output.push_str(&format!("{}\n", report.date.format("%a %b %d %Y")));
        output.push_str(&format!("USER :  {}\n", report.user_line()));
        output.push_str(&format!("NAME :- {}\n", intake.cow_name));
        output.push_str(&format!("AGE :- {}\n", intake.cow_age));
        output.push_str(&format!("BREED :- {}\n\n", intake.cow_breed));
        output.push_str(&Self::record(&report.diagnosis.record));
        output.push_str(&Self::footer());
        output
    }

    fn questionnaire(&self, questionnaire: &Questionnaire) -> String {
        let mut output = Self::header("Symptom Checklist");
        for (position, question) in questionnaire.iter() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("{}.", position).cyan().bold(),
                question.prompt.bold()
            ));
            for option in &question.options {
                output.push_str(&format!("   {:<18} {}\n", option.code, option.label.dimmed()));
            }
        }
        output.push_str(&Self::footer());
        output
    }

    fn intakes(&self, records: &[IntakeRecord]) -> String {
        if records.is_empty() {
            return "No intake records.\n".to_string();
        }
        records
            .iter()
            .map(|record| {
                format!(
                    "#{:<4} {}  {} / {}  {} ({}y, {})\n",
                    record.id.0,
                    record.created_at.format("%Y-%m-%d %H:%M"),
                    record.intake.username,
                    record.intake.user_contact,
                    record.intake.cow_name.bold(),
                    record.intake.cow_age,
                    record.intake.cow_breed
                )
            })
            .collect()
    }

    fn table_issues(&self, issues: &[TableIssue]) -> String {
        if issues.is_empty() {
            return format!("{}\n", "Decision table OK".green());
        }
        issues
            .iter()
            .map(|issue| format!("{}: {}\n", Self::severity(issue.severity), issue.message))
            .collect()
    }

    fn config_issues(&self, issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| format!("{}: {}\n", Self::severity(issue.severity), issue.message))
            .collect()
    }
}

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn pretty(value: &impl Serialize) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn issues<'a>(issues: impl Iterator<Item = (Severity, &'a str)>) -> String {
        let list: Vec<_> = issues
            .map(|(severity, message)| {
                json!({ "severity": severity.to_string(), "message": message })
            })
            .collect();
        Self::pretty(&list)
    }
}

impl OutputFormatter for JsonFormatter {
    fn diagnosis(&self, diagnosis: &Diagnosis) -> String {
        Self::pretty(diagnosis)
    }

    fn case_report(&self, report: &CaseReport) -> String {
        Self::pretty(report)
    }

    fn questionnaire(&self, questionnaire: &Questionnaire) -> String {
        Self::pretty(questionnaire)
    }

    fn intakes(&self, records: &[IntakeRecord]) -> String {
        Self::pretty(&records)
    }

    fn table_issues(&self, issues: &[TableIssue]) -> String {
        Self::issues(issues.iter().map(|i| (i.severity, i.message.as_str())))
    }

    fn config_issues(&self, issues: &[ConfigIssue]) -> String {
        Self::issues(issues.iter().map(|i| (i.severity, i.message.as_str())))
    }
}
