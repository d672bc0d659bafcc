//! Infrastructure layer for bovine-triage
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and decision table loading.

pub mod config;
pub mod store;
pub mod table;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileChecklistConfig, FileConfig, FileOutputConfig, FileServerConfig,
    FileStorageConfig, FileTableConfig, StorageBackend,
};
pub use store::{InMemoryIntakeStore, JsonlIntakeStore, open_store};
pub use table::{TableLoadError, TableLoader};
