//! Questionnaire definition

use super::answer::{Answer, AnswerPolicy, AnswerVector};
use super::error::{ChecklistError, MalformedInputError};
use crate::diagnosis::error::TableError;
use crate::diagnosis::rule::Condition;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of questions in the symptom checklist.
pub const QUESTION_COUNT: usize = 8;

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub code: String,
    pub label: String,
}

impl AnswerOption {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// A checklist question and the answer codes valid for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Form field name (e.g. `samesame1`)
    pub name: String,
    /// Text shown to the submitter
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            options,
        }
    }

    pub fn accepts(&self, code: &str) -> bool {
        self.options.iter().any(|o| o.code == code)
    }

    /// Look up an option by its 1-based index in the option list.
    pub fn option_at(&self, index: usize) -> Option<&AnswerOption> {
        index.checked_sub(1).and_then(|i| self.options.get(i))
    }
}

/// The ordered set of checklist questions.
///
/// Construction guarantees exactly [`QUESTION_COUNT`] questions, each with at
/// least one option and no duplicate or reserved codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Result<Self, TableError> {
        if questions.len() != QUESTION_COUNT {
            return Err(TableError::QuestionCount {
                expected: QUESTION_COUNT,
                actual: questions.len(),
            });
        }

        for (i, question) in questions.iter().enumerate() {
            let position = i + 1;
            if question.options.is_empty() {
                return Err(TableError::NoOptions { position });
            }

            let mut seen = HashSet::new();
            for option in &question.options {
                let code = option.code.as_str();
                if is_reserved_code(code) {
                    return Err(TableError::InvalidCode {
                        position,
                        code: code.to_string(),
                    });
                }
                if !seen.insert(code) {
                    return Err(TableError::DuplicateCode {
                        position,
                        code: code.to_string(),
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&Question> {
        position.checked_sub(1).and_then(|i| self.questions.get(i))
    }

    /// Iterate `(position, question)` pairs, positions starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Question)> {
        self.questions.iter().enumerate().map(|(i, q)| (i + 1, q))
    }

    /// Check that every answered position holds a code valid for it.
    pub fn check(&self, vector: &AnswerVector) -> Result<(), MalformedInputError> {
        let answers = vector.answers();
        if answers.len() != self.questions.len() {
            return Err(MalformedInputError::WrongLength {
                expected: self.questions.len(),
                actual: answers.len(),
            });
        }

        for ((position, question), answer) in self.iter().zip(answers) {
            if let Answer::Code(code) = answer {
                if !question.accepts(code) {
                    return Err(MalformedInputError::UnknownCode {
                        position,
                        code: code.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Turn raw form answers into an [`AnswerVector`].
    ///
    /// Missing or blank entries become [`Answer::Unanswered`]. Under
    /// [`AnswerPolicy::Strict`] any unanswered position rejects the input.
    pub fn validate<S: AsRef<str>>(
        &self,
        raw: &[Option<S>],
        policy: AnswerPolicy,
    ) -> Result<AnswerVector, ChecklistError> {
        let answers = raw
            .iter()
            .map(|value| match value {
                Some(v) => Answer::parse(v.as_ref()),
                None => Answer::Unanswered,
            })
            .collect();

        let vector = AnswerVector::new(answers)?;
        self.check(&vector)?;

        if policy == AnswerPolicy::Strict && !vector.is_complete() {
            return Err(ChecklistError::Incomplete {
                positions: vector.unanswered_positions(),
            });
        }

        Ok(vector)
    }
}

/// Codes that collide with the unanswered marker or the don't-care wildcard.
fn is_reserved_code(code: &str) -> bool {
    let trimmed = code.trim();
    trimmed.is_empty()
        || trimmed != code
        || code == Answer::UNANSWERED_MARKER
        || code == Condition::ANY_MARKER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(name: &str, codes: &[&str]) -> Question {
        Question::new(
            name,
            format!("Prompt for {}", name),
            codes.iter().map(|c| AnswerOption::new(*c, *c)).collect(),
        )
    }

    fn questionnaire() -> Questionnaire {
        let questions = (1..=QUESTION_COUNT)
            .map(|i| {
                let (a, b) = (format!("q{}a", i), format!("q{}b", i));
                question(&format!("q{}", i), &[a.as_str(), b.as_str()])
            })
            .collect();
        Questionnaire::new(questions).unwrap()
    }

    #[test]
    fn test_rejects_wrong_question_count() {
        let result = Questionnaire::new(vec![question("q1", &["a"])]);
        assert_eq!(
            result,
            Err(TableError::QuestionCount {
                expected: 8,
                actual: 1
            })
        );
    }

    #[test]
    fn test_rejects_reserved_and_duplicate_codes() {
        let mut questions: Vec<Question> = (1..=QUESTION_COUNT)
            .map(|i| question(&format!("q{}", i), &["x"]))
            .collect();

        questions[2] = question("q3", &["x", "*"]);
        assert!(matches!(
            Questionnaire::new(questions.clone()),
            Err(TableError::InvalidCode { position: 3, .. })
        ));

        questions[2] = question("q3", &["x", "x"]);
        assert!(matches!(
            Questionnaire::new(questions.clone()),
            Err(TableError::DuplicateCode { position: 3, .. })
        ));

        questions[2] = question("q3", &[]);
        assert_eq!(
            Questionnaire::new(questions),
            Err(TableError::NoOptions { position: 3 })
        );
    }

    #[test]
    fn test_validate_lenient_substitutes_sentinel() {
        let q = questionnaire();
        let raw = vec![
            Some("q1a"),
            None,
            Some(""),
            Some("q4b"),
            Some("q5a"),
            Some("q6a"),
            Some("q7a"),
            Some("q8b"),
        ];

        let vector = q.validate(&raw, AnswerPolicy::Lenient).unwrap();
        assert_eq!(vector.unanswered_positions(), vec![2, 3]);
    }

    #[test]
    fn test_validate_strict_rejects_unanswered() {
        let q = questionnaire();
        let raw: Vec<Option<&str>> = vec![None; QUESTION_COUNT];

        let err = q.validate(&raw, AnswerPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            ChecklistError::Incomplete {
                positions: (1..=8).collect()
            }
        );
    }

    #[test]
    fn test_validate_rejects_unknown_code() {
        let q = questionnaire();
        let mut raw: Vec<Option<&str>> = vec![None; QUESTION_COUNT];
        raw[4] = Some("q1a");

        let err = q.validate(&raw, AnswerPolicy::Lenient).unwrap_err();
        assert_eq!(
            err,
            ChecklistError::Malformed(MalformedInputError::UnknownCode {
                position: 5,
                code: "q1a".to_string()
            })
        );
    }

    #[test]
    fn test_validate_rejects_wrong_length_before_policy() {
        let q = questionnaire();
        let raw: Vec<Option<&str>> = vec![None; 7];

        let err = q.validate(&raw, AnswerPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            ChecklistError::Malformed(MalformedInputError::WrongLength { actual: 7, .. })
        ));
    }

    #[test]
    fn test_option_at_is_one_based() {
        let q = questionnaire();
        let first = q.get(1).unwrap();
        assert_eq!(first.option_at(1).unwrap().code, "q1a");
        assert!(first.option_at(0).is_none());
        assert!(first.option_at(3).is_none());
    }
}
