//! Checklist input errors

use thiserror::Error;

/// The answer input cannot be matched against the table at all.
///
/// Raised before any rule is evaluated; no partial match is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInputError {
    #[error("Expected {expected} answers, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("'{code}' is not a valid answer for question {position}")]
    UnknownCode { position: usize, code: String },
}

/// Errors produced while turning raw form answers into an [`AnswerVector`].
///
/// [`AnswerVector`]: super::AnswerVector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecklistError {
    #[error(transparent)]
    Malformed(#[from] MalformedInputError),

    /// Only produced under [`AnswerPolicy::Strict`](super::AnswerPolicy::Strict).
    #[error("Unanswered questions: {positions:?}")]
    Incomplete { positions: Vec<usize> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_length_display() {
        let error = MalformedInputError::WrongLength {
            expected: 8,
            actual: 7,
        };
        assert_eq!(error.to_string(), "Expected 8 answers, got 7");
    }

    #[test]
    fn test_malformed_is_transparent() {
        let error: ChecklistError = MalformedInputError::UnknownCode {
            position: 2,
            code: "bogus".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "'bogus' is not a valid answer for question 2"
        );
    }

    #[test]
    fn test_incomplete_lists_positions() {
        let error = ChecklistError::Incomplete {
            positions: vec![3, 8],
        };
        assert_eq!(error.to_string(), "Unanswered questions: [3, 8]");
    }
}
