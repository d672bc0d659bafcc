//! Decision rules
//!
//! A [`Rule`] pairs a [`Pattern`] over the eight checklist positions with the
//! [`DiagnosisRecord`] it selects.

use super::record::DiagnosisRecord;
use crate::checklist::{Answer, AnswerVector};
use serde::{Deserialize, Serialize};

/// Condition on a single checklist position.
///
/// Serialized as the required code, or `*` for "don't care".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    /// Any answer, including unanswered
    Any,
    /// The answer must be exactly this code
    Is(String),
}

impl Condition {
    pub const ANY_MARKER: &'static str = "*";

    pub fn matches(&self, answer: &Answer) -> bool {
        match self {
            Condition::Any => true,
            Condition::Is(code) => answer.code() == Some(code.as_str()),
        }
    }

    /// True if every answer matched by `other` is also matched by `self`.
    pub fn covers(&self, other: &Condition) -> bool {
        match (self, other) {
            (Condition::Any, _) => true,
            (Condition::Is(a), Condition::Is(b)) => a == b,
            (Condition::Is(_), Condition::Any) => false,
        }
    }
}

impl From<String> for Condition {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed == Self::ANY_MARKER {
            Condition::Any
        } else {
            Condition::Is(trimmed.to_string())
        }
    }
}

impl From<&str> for Condition {
    fn from(raw: &str) -> Self {
        Condition::from(raw.to_string())
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::Any => Condition::ANY_MARKER.to_string(),
            Condition::Is(code) => code,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Any => write!(f, "{}", Self::ANY_MARKER),
            Condition::Is(code) => write!(f, "{}", code),
        }
    }
}

/// A partial answer vector: one [`Condition`] per question position.
///
/// Length is checked when the rule enters a [`DecisionTable`](super::DecisionTable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    conditions: Vec<Condition>,
}

impl Pattern {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Build a pattern from codes, `*` meaning "don't care".
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            codes
                .into_iter()
                .map(|c| Condition::from(c.into()))
                .collect(),
        )
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, vector: &AnswerVector) -> bool {
        let answers = vector.answers();
        self.conditions.len() == answers.len()
            && self
                .conditions
                .iter()
                .zip(answers)
                .all(|(condition, answer)| condition.matches(answer))
    }

    /// True if every vector matched by `other` is also matched by `self`.
    pub fn subsumes(&self, other: &Pattern) -> bool {
        self.conditions.len() == other.conditions.len()
            && self
                .conditions
                .iter()
                .zip(&other.conditions)
                .all(|(a, b)| a.covers(b))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.conditions.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// A single entry of the decision table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    id: String,
    pattern: Pattern,
    record: DiagnosisRecord,
}

impl Rule {
    pub fn new(id: impl Into<String>, pattern: Pattern, record: DiagnosisRecord) -> Self {
        Self {
            id: id.into(),
            pattern,
            record,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn record(&self) -> &DiagnosisRecord {
        &self.record
    }

    pub fn matches(&self, vector: &AnswerVector) -> bool {
        self.pattern.matches(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(codes: [&str; 8]) -> AnswerVector {
        AnswerVector::from_codes(codes).unwrap()
    }

    #[test]
    fn test_condition_parse() {
        assert_eq!(Condition::from("*"), Condition::Any);
        assert_eq!(Condition::from(" * "), Condition::Any);
        assert_eq!(
            Condition::from("firstoption1"),
            Condition::Is("firstoption1".to_string())
        );
    }

    #[test]
    fn test_is_never_matches_unanswered() {
        let condition = Condition::Is("a".to_string());
        assert!(!condition.matches(&Answer::Unanswered));
        assert!(Condition::Any.matches(&Answer::Unanswered));
    }

    #[test]
    fn test_pattern_matches_with_wildcards() {
        let pattern = Pattern::from_codes(["a", "*", "c", "*", "*", "*", "*", "h"]);
        assert!(pattern.matches(&vector(["a", "b", "c", "d", "e", "f", "g", "h"])));
        assert!(pattern.matches(&vector(["a", "-", "c", "-", "-", "-", "-", "h"])));
        assert!(!pattern.matches(&vector(["a", "b", "x", "d", "e", "f", "g", "h"])));
    }

    #[test]
    fn test_short_pattern_never_matches() {
        let pattern = Pattern::from_codes(["*", "*"]);
        assert!(!pattern.matches(&AnswerVector::unanswered()));
    }

    #[test]
    fn test_subsumes() {
        let broad = Pattern::from_codes(["a", "*", "*", "*", "*", "*", "*", "*"]);
        let narrow = Pattern::from_codes(["a", "b", "*", "*", "*", "*", "*", "*"]);
        let other = Pattern::from_codes(["x", "b", "*", "*", "*", "*", "*", "*"]);

        assert!(broad.subsumes(&narrow));
        assert!(!narrow.subsumes(&broad));
        assert!(!broad.subsumes(&other));
        assert!(narrow.subsumes(&narrow));
    }

    #[test]
    fn test_pattern_serializes_as_code_list() {
        let pattern = Pattern::from_codes(["a", "*"]);
        let json = serde_json::to_string(&pattern).unwrap();
        assert_eq!(json, r#"["a","*"]"#);

        let parsed: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, pattern);
    }
}
