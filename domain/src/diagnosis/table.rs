//! Decision table and first-match resolution

use super::error::TableError;
use super::record::DiagnosisRecord;
use super::rule::{Condition, Rule};
use crate::checklist::{AnswerVector, MalformedInputError, Questionnaire};
use std::collections::HashSet;

/// Which entry of the table produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matched<'t> {
    /// A rule matched; `priority` is its 1-based position in the table
    Rule { id: &'t str, priority: usize },
    /// No rule matched
    Fallback,
}

impl Matched<'_> {
    pub fn rule_id(&self) -> Option<&str> {
        match self {
            Matched::Rule { id, .. } => Some(id),
            Matched::Fallback => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Matched::Fallback)
    }
}

/// Outcome of [`DecisionTable::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'t> {
    pub record: &'t DiagnosisRecord,
    pub matched: Matched<'t>,
}

/// An ordered, immutable set of rules over a questionnaire.
///
/// Resolution scans rules in priority order and returns the first match, or
/// the fallback record when nothing matches. The table is read-only once
/// built, so it can be shared across threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use triage_domain::checklist::{AnswerOption, AnswerVector, Question, Questionnaire};
/// use triage_domain::diagnosis::{DecisionTable, DiagnosisRecord, Pattern, Rule};
///
/// let questions = (1..=8)
///     .map(|i| Question::new(format!("q{i}"), "?", vec![AnswerOption::new("yes", "Yes")]))
///     .collect();
/// let questionnaire = Questionnaire::new(questions).unwrap();
///
/// let fever = Rule::new(
///     "fever",
///     Pattern::from_codes(["yes", "*", "*", "*", "*", "*", "*", "*"]),
///     DiagnosisRecord::new("Fever"),
/// );
/// let table = DecisionTable::new(questionnaire, vec![fever], DiagnosisRecord::new("Healthy")).unwrap();
///
/// let vector = AnswerVector::from_codes(["yes", "-", "-", "-", "-", "-", "-", "-"]).unwrap();
/// assert_eq!(table.resolve(&vector).unwrap().record.name, "Fever");
///
/// let nothing = AnswerVector::unanswered();
/// assert_eq!(table.resolve(&nothing).unwrap().record.name, "Healthy");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTable {
    questionnaire: Questionnaire,
    rules: Vec<Rule>,
    fallback: DiagnosisRecord,
}

impl DecisionTable {
    pub fn new(
        questionnaire: Questionnaire,
        rules: Vec<Rule>,
        fallback: DiagnosisRecord,
    ) -> Result<Self, TableError> {
        let expected = questionnaire.questions().len();
        let mut ids = HashSet::new();

        for (i, rule) in rules.iter().enumerate() {
            if rule.id().trim().is_empty() {
                return Err(TableError::EmptyRuleId { priority: i + 1 });
            }
            if !ids.insert(rule.id()) {
                return Err(TableError::DuplicateRuleId(rule.id().to_string()));
            }

            let pattern = rule.pattern();
            if pattern.len() != expected {
                return Err(TableError::PatternLength {
                    rule: rule.id().to_string(),
                    expected,
                    actual: pattern.len(),
                });
            }

            for ((position, question), condition) in
                questionnaire.iter().zip(pattern.conditions())
            {
                if let Condition::Is(code) = condition {
                    if !question.accepts(code) {
                        return Err(TableError::UnknownCode {
                            rule: rule.id().to_string(),
                            position,
                            code: code.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            questionnaire,
            rules,
            fallback,
        })
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &DiagnosisRecord {
        &self.fallback
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == id)
    }

    /// Map an answer vector to exactly one diagnosis record.
    ///
    /// Fails only when the vector does not fit the questionnaire; a vector
    /// that matches no rule resolves to the fallback record.
    pub fn resolve(&self, vector: &AnswerVector) -> Result<Resolution<'_>, MalformedInputError> {
        self.questionnaire.check(vector)?;

        let resolution = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(vector))
            .map(|(i, rule)| Resolution {
                record: rule.record(),
                matched: Matched::Rule {
                    id: rule.id(),
                    priority: i + 1,
                },
            })
            .unwrap_or(Resolution {
                record: &self.fallback,
                matched: Matched::Fallback,
            });

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{AnswerOption, Question};
    use crate::diagnosis::rule::Pattern;

    fn questionnaire() -> Questionnaire {
        let questions = (1..=8)
            .map(|i| {
                Question::new(
                    format!("q{}", i),
                    format!("Question {}", i),
                    vec![AnswerOption::new("a", "A"), AnswerOption::new("b", "B")],
                )
            })
            .collect();
        Questionnaire::new(questions).unwrap()
    }

    fn rule(id: &str, codes: [&str; 8]) -> Rule {
        Rule::new(
            id,
            Pattern::from_codes(codes),
            DiagnosisRecord::new(format!("record {}", id)),
        )
    }

    /// Seven rules; rule 3 and rule 7 both match `a a * ...`.
    fn table() -> DecisionTable {
        let rules = vec![
            rule("r1", ["b", "b", "b", "b", "b", "b", "b", "b"]),
            rule("r2", ["b", "a", "*", "*", "*", "*", "*", "*"]),
            rule("r3", ["a", "a", "*", "*", "*", "*", "*", "*"]),
            rule("r4", ["a", "b", "a", "*", "*", "*", "*", "*"]),
            rule("r5", ["b", "b", "a", "*", "*", "*", "*", "*"]),
            rule("r6", ["*", "*", "*", "*", "*", "*", "*", "a"]),
            rule("r7", ["a", "a", "a", "a", "*", "*", "*", "*"]),
        ];
        DecisionTable::new(questionnaire(), rules, DiagnosisRecord::new("fallback")).unwrap()
    }

    #[test]
    fn test_earlier_rule_wins() {
        let table = table();
        let vector = AnswerVector::from_codes(["a", "a", "a", "a", "b", "b", "b", "b"]).unwrap();

        assert!(table.rule("r7").unwrap().matches(&vector));
        let resolution = table.resolve(&vector).unwrap();
        assert_eq!(resolution.record.name, "record r3");
        assert_eq!(
            resolution.matched,
            Matched::Rule {
                id: "r3",
                priority: 3
            }
        );
    }

    #[test]
    fn test_all_unanswered_resolves_to_fallback() {
        let table = table();
        let resolution = table.resolve(&AnswerVector::unanswered()).unwrap();
        assert_eq!(resolution.record, table.fallback());
        assert!(resolution.matched.is_fallback());
        assert_eq!(resolution.matched.rule_id(), None);
    }

    #[test]
    fn test_every_complete_vector_resolves() {
        let table = table();
        for bits in 0u32..256 {
            let codes: Vec<&str> = (0..8)
                .map(|i| if bits & (1 << i) == 0 { "a" } else { "b" })
                .collect();
            let vector = AnswerVector::from_codes(codes).unwrap();
            assert!(table.resolve(&vector).is_ok());
        }
    }

    #[test]
    fn test_resolve_rejects_unknown_code() {
        let table = table();
        let vector = AnswerVector::from_codes(["a", "z", "a", "a", "a", "a", "a", "a"]).unwrap();
        assert_eq!(
            table.resolve(&vector),
            Err(MalformedInputError::UnknownCode {
                position: 2,
                code: "z".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_does_not_mutate_vector() {
        let table = table();
        let vector = AnswerVector::from_codes(["a", "a", "-", "-", "-", "-", "-", "-"]).unwrap();
        let before = vector.clone();
        let _ = table.resolve(&vector).unwrap();
        assert_eq!(vector, before);
    }

    #[test]
    fn test_new_rejects_bad_rules() {
        let duplicate = vec![
            rule("r1", ["a"; 8]),
            rule("r1", ["b"; 8]),
        ];
        assert_eq!(
            DecisionTable::new(questionnaire(), duplicate, DiagnosisRecord::new("f")).unwrap_err(),
            TableError::DuplicateRuleId("r1".to_string())
        );

        let short = vec![Rule::new(
            "short",
            Pattern::from_codes(["a", "b"]),
            DiagnosisRecord::new("x"),
        )];
        assert!(matches!(
            DecisionTable::new(questionnaire(), short, DiagnosisRecord::new("f")),
            Err(TableError::PatternLength { actual: 2, .. })
        ));

        let unknown = vec![rule("r1", ["a", "a", "a", "c", "a", "a", "a", "a"])];
        assert!(matches!(
            DecisionTable::new(questionnaire(), unknown, DiagnosisRecord::new("f")),
            Err(TableError::UnknownCode { position: 4, .. })
        ));

        let unnamed = vec![rule(" ", ["a"; 8])];
        assert_eq!(
            DecisionTable::new(questionnaire(), unnamed, DiagnosisRecord::new("f")).unwrap_err(),
            TableError::EmptyRuleId { priority: 1 }
        );
    }

    #[test]
    fn test_empty_rule_list_always_falls_back() {
        let table =
            DecisionTable::new(questionnaire(), vec![], DiagnosisRecord::new("only")).unwrap();
        let vector = AnswerVector::from_codes(["a"; 8]).unwrap();
        assert_eq!(table.resolve(&vector).unwrap().record.name, "only");
    }
}
