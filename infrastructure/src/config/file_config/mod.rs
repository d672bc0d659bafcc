//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod checklist;
mod output;
mod server;
mod storage;
mod table;

pub use checklist::FileChecklistConfig;
pub use output::FileOutputConfig;
pub use server::FileServerConfig;
pub use storage::{FileStorageConfig, StorageBackend};
pub use table::FileTableConfig;

use serde::{Deserialize, Serialize};
use triage_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listen address
    pub server: FileServerConfig,
    /// Intake record persistence
    pub storage: FileStorageConfig,
    /// Answer handling
    pub checklist: FileChecklistConfig,
    /// Decision table source
    pub table: FileTableConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.server.parse_addr().1);
        issues.extend(self.storage.parse_backend().1);
        issues.extend(self.checklist.parse_policy().1);
        issues.extend(self.output.parse_format().1);
        issues
    }
}
