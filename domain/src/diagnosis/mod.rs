//! Diagnosis decision table
//!
//! The resolver at the heart of the intake flow: an ordered list of
//! [`Rule`]s, each a [`Pattern`] over the eight checklist answers, resolved by
//! first match with a configurable fallback record.
//!
//! ```text
//! AnswerVector ──► rule 1 ─no─► rule 2 ─no─► ... ─no─► fallback
//!                    │yes         │yes
//!                    ▼            ▼
//!              DiagnosisRecord  DiagnosisRecord
//! ```

pub mod error;
pub mod lint;
pub mod record;
pub mod rule;
pub mod table;

pub use error::TableError;
pub use lint::{TableIssue, TableIssueCode};
pub use record::DiagnosisRecord;
pub use rule::{Condition, Pattern, Rule};
pub use table::{DecisionTable, Matched, Resolution};
