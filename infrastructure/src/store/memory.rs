//! Process-local intake store

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use triage_application::{IntakeStore, StoreError};
use triage_domain::{IntakeId, IntakeRecord, NewIntake, sort_newest_first};

/// Keeps intake records in memory; everything is lost on exit.
#[derive(Default)]
pub struct InMemoryIntakeStore {
    records: Mutex<Vec<IntakeRecord>>,
}

impl InMemoryIntakeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IntakeStore for InMemoryIntakeStore {
    async fn create(&self, intake: NewIntake) -> Result<IntakeRecord, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("intake store lock poisoned".to_string()))?;

        let id = IntakeId(records.len() as u64 + 1);
        let record = IntakeRecord::new(id, intake, Utc::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn list_recent(&self) -> Result<Vec<IntakeRecord>, StoreError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("intake store lock poisoned".to_string()))?
            .clone();
        sort_newest_first(&mut records);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intake(cow: &str) -> NewIntake {
        NewIntake {
            username: "Meena".to_string(),
            user_contact: "meena@example.com".to_string(),
            cow_name: cow.to_string(),
            cow_age: 6,
            cow_breed: "Sahiwal".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = InMemoryIntakeStore::new();
        let first = store.create(intake("Lakshmi")).await.unwrap();
        let second = store.create(intake("Kamdhenu")).await.unwrap();
        assert_eq!(first.id, IntakeId(1));
        assert_eq!(second.id, IntakeId(2));
    }

    #[tokio::test]
    async fn test_list_recent_is_newest_first() {
        let store = InMemoryIntakeStore::new();
        store.create(intake("Lakshmi")).await.unwrap();
        store.create(intake("Kamdhenu")).await.unwrap();

        let records = store.list_recent().await.unwrap();
        let names: Vec<_> = records.iter().map(|r| r.intake.cow_name.as_str()).collect();
        assert_eq!(names, vec!["Kamdhenu", "Lakshmi"]);
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = InMemoryIntakeStore::new();
        assert!(store.list_recent().await.unwrap().is_empty());
    }
}
