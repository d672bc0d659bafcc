//! Domain layer for bovine-triage
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Checklist
//!
//! Eight symptom questions, each with a fixed set of answer codes. A
//! submission becomes an [`AnswerVector`] once validated; unanswered
//! questions are an explicit sentinel, never an empty string.
//!
//! ## Decision Table
//!
//! An ordered list of rules resolved by first match. Every vector resolves to
//! exactly one [`DiagnosisRecord`]: a rule's record, or the table's fallback.
//!
//! ## Intake
//!
//! Farmer and cow identity, validated for presence and a numeric age before
//! it reaches storage.

pub mod checklist;
pub mod config;
pub mod core;
pub mod diagnosis;
pub mod intake;

// Re-export commonly used types
pub use checklist::{
    Answer, AnswerOption, AnswerPolicy, AnswerVector, ChecklistError, MalformedInputError,
    QUESTION_COUNT, Question, Questionnaire,
};
pub use config::OutputFormat;
pub use self::core::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use diagnosis::{
    Condition, DecisionTable, DiagnosisRecord, Matched, Pattern, Resolution, Rule, TableError,
    TableIssue, TableIssueCode,
};
pub use intake::{
    AgeField, IntakeForm, IntakeId, IntakeRecord, NewIntake, ValidationError, sort_newest_first,
};
