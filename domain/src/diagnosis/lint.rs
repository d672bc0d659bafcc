//! Static analysis of a decision table.
//!
//! Detects rules that can never fire and a fallback that duplicates a rule.
//! A rule is reported as shadowed only when a single earlier rule covers it;
//! coverage by a union of earlier rules is not detected.

use super::table::DecisionTable;
use crate::core::validation::Severity;

/// Identifies a specific table issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssueCode {
    /// Every vector matching `rule` also matches the earlier rule `by`.
    ShadowedRule { rule: String, by: String },
    /// The fallback record is identical to the record of `rule`.
    FallbackMatchesRule { rule: String },
}

/// A detected issue in a decision table.
#[derive(Debug, Clone)]
pub struct TableIssue {
    pub severity: Severity,
    pub code: TableIssueCode,
    pub message: String,
}

impl DecisionTable {
    /// Report unreachable rules and a fallback that duplicates a rule.
    pub fn lint(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        let rules = self.rules();

        for (j, later) in rules.iter().enumerate() {
            if let Some(earlier) = rules[..j]
                .iter()
                .find(|earlier| earlier.pattern().subsumes(later.pattern()))
            {
                issues.push(TableIssue {
                    severity: Severity::Warning,
                    code: TableIssueCode::ShadowedRule {
                        rule: later.id().to_string(),
                        by: earlier.id().to_string(),
                    },
                    message: format!(
                        "rule '{}' (priority {}) can never match: rule '{}' always matches first",
                        later.id(),
                        j + 1,
                        earlier.id()
                    ),
                });
            }
        }

        if let Some(rule) = rules.iter().find(|r| r.record() == self.fallback()) {
            issues.push(TableIssue {
                severity: Severity::Warning,
                code: TableIssueCode::FallbackMatchesRule {
                    rule: rule.id().to_string(),
                },
                message: format!(
                    "fallback record '{}' is identical to the record of rule '{}'",
                    self.fallback().name,
                    rule.id()
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{AnswerOption, Question, Questionnaire};
    use crate::diagnosis::{DiagnosisRecord, Pattern, Rule};

    fn questionnaire() -> Questionnaire {
        let questions = (1..=8)
            .map(|i| {
                Question::new(
                    format!("q{}", i),
                    "?",
                    vec![AnswerOption::new("a", "A"), AnswerOption::new("b", "B")],
                )
            })
            .collect();
        Questionnaire::new(questions).unwrap()
    }

    #[test]
    fn test_clean_table_has_no_issues() {
        let rules = vec![
            Rule::new("one", Pattern::from_codes(["a"; 8]), DiagnosisRecord::new("One")),
            Rule::new("two", Pattern::from_codes(["b"; 8]), DiagnosisRecord::new("Two")),
        ];
        let table =
            DecisionTable::new(questionnaire(), rules, DiagnosisRecord::new("None")).unwrap();
        assert!(table.lint().is_empty());
    }

    #[test]
    fn test_detects_shadowed_rule() {
        let rules = vec![
            Rule::new(
                "broad",
                Pattern::from_codes(["a", "*", "*", "*", "*", "*", "*", "*"]),
                DiagnosisRecord::new("Broad"),
            ),
            Rule::new(
                "narrow",
                Pattern::from_codes(["a", "b", "*", "*", "*", "*", "*", "*"]),
                DiagnosisRecord::new("Narrow"),
            ),
        ];
        let table =
            DecisionTable::new(questionnaire(), rules, DiagnosisRecord::new("None")).unwrap();

        let issues = table.lint();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            TableIssueCode::ShadowedRule {
                rule: "narrow".to_string(),
                by: "broad".to_string()
            }
        );
    }

    #[test]
    fn test_detects_fallback_duplicate() {
        let record = DiagnosisRecord::new("Same").with_medicines(["x"]);
        let rules = vec![Rule::new(
            "first",
            Pattern::from_codes(["a"; 8]),
            record.clone(),
        )];
        let table = DecisionTable::new(questionnaire(), rules, record).unwrap();

        let issues = table.lint();
        assert_eq!(
            issues[0].code,
            TableIssueCode::FallbackMatchesRule {
                rule: "first".to_string()
            }
        );
        assert!(issues[0].message.contains("Same"));
    }
}
