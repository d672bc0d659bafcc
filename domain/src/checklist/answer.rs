//! Answer value objects

use super::error::MalformedInputError;
use super::question::QUESTION_COUNT;
use serde::{Deserialize, Serialize};

/// A single checklist answer.
///
/// Serialized as the option code, or `null` when unanswered. Blank strings
/// deserialize to [`Answer::Unanswered`]; they never become a code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Answer {
    /// An option code selected by the submitter
    Code(String),
    /// No option was selected for this question
    Unanswered,
}

impl Answer {
    /// Textual marker for an unanswered question on the command line.
    pub const UNANSWERED_MARKER: &'static str = "-";

    /// Parse a raw form value.
    ///
    /// Empty, whitespace-only and `-` all mean "unanswered".
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == Self::UNANSWERED_MARKER {
            Answer::Unanswered
        } else {
            Answer::Code(trimmed.to_string())
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Answer::Code(code) => Some(code),
            Answer::Unanswered => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Answer::Code(_))
    }
}

impl From<Option<String>> for Answer {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(raw) => Answer::parse(&raw),
            None => Answer::Unanswered,
        }
    }
}

impl From<Answer> for Option<String> {
    fn from(answer: Answer) -> Self {
        match answer {
            Answer::Code(code) => Some(code),
            Answer::Unanswered => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(raw: &str) -> Self {
        Answer::parse(raw)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Code(code) => write!(f, "{}", code),
            Answer::Unanswered => write!(f, "{}", Self::UNANSWERED_MARKER),
        }
    }
}

/// The full set of checklist answers for one submission (Value Object).
///
/// Always holds exactly [`QUESTION_COUNT`] answers. Whether each code is
/// valid for its question is checked against a questionnaire, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnswerVector {
    answers: Vec<Answer>,
}

impl AnswerVector {
    pub fn new(answers: Vec<Answer>) -> Result<Self, MalformedInputError> {
        if answers.len() != QUESTION_COUNT {
            return Err(MalformedInputError::WrongLength {
                expected: QUESTION_COUNT,
                actual: answers.len(),
            });
        }
        Ok(Self { answers })
    }

    /// Build a vector from raw codes, using [`Answer::parse`] on each.
    pub fn from_codes<I, S>(codes: I) -> Result<Self, MalformedInputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(codes.into_iter().map(|c| Answer::parse(c.as_ref())).collect())
    }

    /// A vector with every question unanswered.
    pub fn unanswered() -> Self {
        Self {
            answers: vec![Answer::Unanswered; QUESTION_COUNT],
        }
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Answer at a 1-based question position.
    pub fn get(&self, position: usize) -> Option<&Answer> {
        position.checked_sub(1).and_then(|i| self.answers.get(i))
    }

    /// 1-based positions that hold the unanswered sentinel.
    pub fn unanswered_positions(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.is_answered())
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Answer::is_answered)
    }
}

impl std::fmt::Display for AnswerVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: Vec<String> = self.answers.iter().map(|a| a.to_string()).collect();
        write!(f, "[{}]", codes.join(", "))
    }
}

/// How unanswered questions are treated during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerPolicy {
    /// Unanswered questions become the sentinel and resolution continues
    #[default]
    Lenient,
    /// Any unanswered question rejects the submission
    Strict,
}

impl AnswerPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerPolicy::Lenient => "lenient",
            AnswerPolicy::Strict => "strict",
        }
    }
}

impl std::fmt::Display for AnswerPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(AnswerPolicy::Lenient),
            "strict" => Ok(AnswerPolicy::Strict),
            other => Err(format!(
                "Unknown answer policy: {}. Valid: lenient, strict",
                other
            )),
        }
    }
}
