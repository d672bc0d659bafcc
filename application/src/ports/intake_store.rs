//! Intake store port
//!
//! Defines how identity records are persisted and listed.

use async_trait::async_trait;
use triage_domain::{IntakeRecord, NewIntake};
use thiserror::Error;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for intake identity records
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait IntakeStore: Send + Sync {
    /// Persist a validated intake and return it with its generated id
    async fn create(&self, intake: NewIntake) -> Result<IntakeRecord, StoreError>;

    /// All stored records, most recently created first
    async fn list_recent(&self) -> Result<Vec<IntakeRecord>, StoreError>;
}
