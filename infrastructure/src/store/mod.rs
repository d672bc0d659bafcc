//! Intake store adapters
//!
//! Implementations of the [`IntakeStore`] port selected by `[storage]`.

mod jsonl;
mod memory;

pub use jsonl::JsonlIntakeStore;
pub use memory::InMemoryIntakeStore;

use crate::config::StorageBackend;
use std::sync::Arc;
use tracing::info;
use triage_application::{IntakeStore, StoreError};

/// Open the store for the configured backend
pub fn open_store(backend: &StorageBackend) -> Result<Arc<dyn IntakeStore>, StoreError> {
    match backend {
        StorageBackend::Memory => {
            info!("Using in-memory intake store");
            Ok(Arc::new(InMemoryIntakeStore::new()))
        }
        StorageBackend::Jsonl(path) => Ok(Arc::new(JsonlIntakeStore::open(path)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::NewIntake;

    #[tokio::test]
    async fn test_open_store_for_each_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intakes.jsonl");

        for backend in [StorageBackend::Memory, StorageBackend::Jsonl(path.clone())] {
            let store = open_store(&backend).unwrap();
            let record = store
                .create(NewIntake {
                    username: "Asha".to_string(),
                    user_contact: "555-0101".to_string(),
                    cow_name: "Tara".to_string(),
                    cow_age: 0,
                    cow_breed: "Jersey".to_string(),
                })
                .await
                .unwrap();
            assert_eq!(record.id.0, 1);
        }
        assert!(path.exists());
    }
}
