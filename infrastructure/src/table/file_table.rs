//! Raw TOML decision table types
//!
//! These structs mirror the table file exactly. Records are declared once
//! under `[records.<key>]` and referenced by key from rules and `fallback`.
//!
//! ```toml
//! fallback = "healthy"
//!
//! [[questions]]
//! name = "samesame1"
//! prompt = "Appetite"
//! options = ["firstoption1", { code = "firstoption2", label = "Reduced" }]
//!
//! [records.healthy]
//! name = "No diagnosis"
//!
//! [[rules]]
//! id = "reduced-appetite"
//! record = "healthy"
//! when = ["firstoption2", "*", "*", "*", "*", "*", "*", "*"]
//! ```

use super::loader::TableLoadError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use triage_domain::{
    AnswerOption, DecisionTable, DiagnosisRecord, Pattern, Question, Questionnaire, Rule,
};

/// Complete table file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileTable {
    /// Key of the record returned when no rule matches
    pub fallback: String,
    #[serde(default)]
    pub questions: Vec<FileQuestion>,
    #[serde(default)]
    pub records: BTreeMap<String, DiagnosisRecord>,
    /// Rules in priority order
    #[serde(default)]
    pub rules: Vec<FileRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileQuestion {
    pub name: String,
    pub prompt: Option<String>,
    pub options: Vec<FileOption>,
}

/// An option given either as a bare code or with a display label
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileOption {
    Code(String),
    Labeled { code: String, label: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRule {
    pub id: String,
    /// Key into `records`
    pub record: String,
    /// One entry per question; `*` means "don't care"
    pub when: Vec<String>,
}

impl FileQuestion {
    fn to_question(&self, position: usize) -> Question {
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| match option {
                FileOption::Code(code) => AnswerOption::new(code, format!("Option {}", i + 1)),
                FileOption::Labeled { code, label } => AnswerOption::new(code, label),
            })
            .collect();

        let prompt = self
            .prompt
            .clone()
            .unwrap_or_else(|| format!("Question {}", position));

        Question::new(&self.name, prompt, options)
    }
}

impl FileTable {
    /// Resolve record references and build a validated [`DecisionTable`]
    pub fn into_table(self) -> Result<DecisionTable, TableLoadError> {
        let questions = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| q.to_question(i + 1))
            .collect();
        let questionnaire = Questionnaire::new(questions)?;

        let lookup = |key: &str| self.records.get(key).cloned();

        let rules = self
            .rules
            .iter()
            .map(|rule| {
                let record = lookup(&rule.record).ok_or_else(|| TableLoadError::UnknownRecord {
                    rule: rule.id.clone(),
                    record: rule.record.clone(),
                })?;
                Ok(Rule::new(
                    &rule.id,
                    Pattern::from_codes(rule.when.iter().map(String::as_str)),
                    record,
                ))
            })
            .collect::<Result<Vec<_>, TableLoadError>>()?;

        let fallback = lookup(&self.fallback)
            .ok_or_else(|| TableLoadError::UnknownFallback(self.fallback.clone()))?;

        Ok(DecisionTable::new(questionnaire, rules, fallback)?)
    }
}
