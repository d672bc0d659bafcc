//! Decision table construction errors

use thiserror::Error;

/// A questionnaire or rule set that cannot form a valid decision table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Questionnaire must have {expected} questions, found {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("Question {position} has no answer options")]
    NoOptions { position: usize },

    #[error("Question {position}: invalid option code '{code}'")]
    InvalidCode { position: usize, code: String },

    #[error("Question {position}: duplicate option code '{code}'")]
    DuplicateCode { position: usize, code: String },

    #[error("Rule at priority {priority} has an empty id")]
    EmptyRuleId { priority: usize },

    #[error("Duplicate rule id '{0}'")]
    DuplicateRuleId(String),

    #[error("Rule '{rule}': pattern has {actual} conditions, expected {expected}")]
    PatternLength {
        rule: String,
        expected: usize,
        actual: usize,
    },

    #[error("Rule '{rule}': '{code}' is not a valid option for question {position}")]
    UnknownCode {
        rule: String,
        position: usize,
        code: String,
    },
}
