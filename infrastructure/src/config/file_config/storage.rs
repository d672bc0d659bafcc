//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use triage_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Where intake records are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local, lost on exit
    Memory,
    /// Append-only JSON Lines file
    Jsonl(PathBuf),
}

/// Raw storage configuration from TOML
///
/// ```toml
/// [storage]
/// backend = "jsonl"                  # "memory" or "jsonl"
/// path = "~/.local/share/bovine-triage/intakes.jsonl"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub backend: String,
    /// File path for the jsonl backend
    pub path: Option<PathBuf>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            path: None,
        }
    }
}

impl FileStorageConfig {
    /// Parse the backend selection.
    ///
    /// An unknown backend falls back to memory with a warning. A jsonl
    /// backend without a path is an error and also falls back to memory.
    pub fn parse_backend(&self) -> (StorageBackend, Vec<ConfigIssue>) {
        match self.backend.to_lowercase().as_str() {
            "memory" | "mem" => (StorageBackend::Memory, vec![]),
            "jsonl" => match &self.path {
                Some(path) => (StorageBackend::Jsonl(expand_home(path)), vec![]),
                None => {
                    let issue = ConfigIssue {
                        severity: Severity::Error,
                        code: ConfigIssueCode::MissingValue {
                            field: "storage.path".to_string(),
                        },
                        message: "storage.path: required when storage.backend = \"jsonl\""
                            .to_string(),
                    };
                    (StorageBackend::Memory, vec![issue])
                }
            },
            _ => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "storage.backend".to_string(),
                        value: self.backend.clone(),
                        valid_values: vec!["memory".to_string(), "jsonl".to_string()],
                    },
                    message: format!(
                        "storage.backend: unknown value '{}', falling back to 'memory'",
                        self.backend
                    ),
                };
                (StorageBackend::Memory, vec![issue])
            }
        }
    }
}

/// Expand a leading `~/` using the home directory
pub(crate) fn expand_home(path: &std::path::Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
