//! Symptom checklist: questions, answers and answer validation.
//!
//! - [`question::Questionnaire`]: the eight questions and their valid codes
//! - [`answer::AnswerVector`]: one submission's answers, fixed length
//! - [`answer::AnswerPolicy`]: lenient or strict handling of unanswered questions

pub mod answer;
pub mod error;
pub mod question;

pub use answer::{Answer, AnswerPolicy, AnswerVector};
pub use error::{ChecklistError, MalformedInputError};
pub use question::{AnswerOption, QUESTION_COUNT, Question, Questionnaire};
