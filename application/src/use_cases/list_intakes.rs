//! List Intakes use case

use crate::ports::intake_store::{IntakeStore, StoreError};
use std::sync::Arc;
use tracing::debug;
use triage_domain::IntakeRecord;

/// Use case for reading back stored intake records
pub struct ListIntakesUseCase {
    store: Arc<dyn IntakeStore>,
}

impl ListIntakesUseCase {
    pub fn new(store: Arc<dyn IntakeStore>) -> Self {
        Self { store }
    }

    /// All records, most recently created first
    pub async fn execute(&self) -> Result<Vec<IntakeRecord>, StoreError> {
        let records = self.store.list_recent().await?;
        debug!("Listed {} intake records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::register_intake::RegisterIntakeUseCase;
    use crate::use_cases::test_support::RecordingStore;
    use triage_domain::IntakeForm;

    #[tokio::test]
    async fn test_lists_newest_first() {
        let store: Arc<dyn IntakeStore> = Arc::new(RecordingStore::default());
        let register = RegisterIntakeUseCase::new(store.clone());

        for name in ["Gauri", "Kamdhenu", "Lakshmi"] {
            let form = IntakeForm {
                username: Some("Ravi".to_string()),
                user_contact: Some("98765".to_string()),
                cow_name: Some(name.to_string()),
                cow_age: Some("3".into()),
                cow_breed: Some("Sahiwal".to_string()),
            };
            register.execute(&form).await.unwrap();
        }

        let records = ListIntakesUseCase::new(store).execute().await.unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.intake.cow_name.as_str()).collect();
        assert_eq!(names, vec!["Lakshmi", "Kamdhenu", "Gauri"]);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces() {
        let store = Arc::new(RecordingStore::failing());
        let result = ListIntakesUseCase::new(store).execute().await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
