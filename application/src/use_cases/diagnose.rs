//! Diagnose use case
//!
//! Validates checklist answers and resolves them against the decision table.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use triage_domain::{
    AnswerPolicy, AnswerVector, ChecklistError, DecisionTable, DiagnosisRecord,
    MalformedInputError, Matched,
};

/// Errors that can occur while diagnosing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnoseError {
    #[error("Invalid answers: {0}")]
    InvalidAnswers(#[from] ChecklistError),
}

impl From<MalformedInputError> for DiagnoseError {
    fn from(error: MalformedInputError) -> Self {
        DiagnoseError::InvalidAnswers(error.into())
    }
}

/// Result of a diagnosis: the validated answers and the selected record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub answers: AnswerVector,
    pub record: DiagnosisRecord,
    /// Id of the matching rule, `None` when the fallback was used
    pub matched_rule: Option<String>,
}

impl Diagnosis {
    pub fn is_fallback(&self) -> bool {
        self.matched_rule.is_none()
    }
}

/// Use case for resolving a checklist submission
pub struct DiagnoseUseCase {
    table: Arc<DecisionTable>,
    policy: AnswerPolicy,
}

impl DiagnoseUseCase {
    pub fn new(table: Arc<DecisionTable>) -> Self {
        Self {
            table,
            policy: AnswerPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AnswerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn table(&self) -> &DecisionTable {
        &self.table
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    /// Validate raw answers with the configured policy, then resolve
    pub fn execute<S: AsRef<str>>(&self, raw: &[Option<S>]) -> Result<Diagnosis, DiagnoseError> {
        let vector = self.table.questionnaire().validate(raw, self.policy)?;
        self.execute_vector(vector)
    }

    /// Resolve an already-built answer vector
    pub fn execute_vector(&self, vector: AnswerVector) -> Result<Diagnosis, DiagnoseError> {
        let resolution = self.table.resolve(&vector)?;

        match resolution.matched {
            Matched::Rule { id, priority } => {
                info!(
                    "Resolved {} to '{}' via rule {} (priority {})",
                    vector, resolution.record.name, id, priority
                );
            }
            Matched::Fallback => {
                info!(
                    "No rule matched {}, using fallback '{}'",
                    vector, resolution.record.name
                );
            }
        }
        debug!(
            "{} of {} questions unanswered",
            vector.unanswered_positions().len(),
            vector.answers().len()
        );

        Ok(Diagnosis {
            record: resolution.record.clone(),
            matched_rule: resolution.matched.rule_id().map(str::to_string),
            answers: vector,
        })
    }
}
