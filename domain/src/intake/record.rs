//! Stored intake record

use super::form::NewIntake;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier generated by the store on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntakeId(pub u64);

impl std::fmt::Display for IntakeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted intake (Entity).
///
/// Serialized flat: `id`, the identity fields and `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    pub id: IntakeId,
    #[serde(flatten)]
    pub intake: NewIntake,
    pub created_at: DateTime<Utc>,
}

impl IntakeRecord {
    pub fn new(id: IntakeId, intake: NewIntake, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            intake,
            created_at,
        }
    }
}

/// Order records newest first (highest id first).
pub fn sort_newest_first(records: &mut [IntakeRecord]) {
    records.sort_by(|a, b| b.id.cmp(&a.id));
}
