//! Decision table configuration from TOML (`[table]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw table configuration from TOML
///
/// ```toml
/// [table]
/// path = "./herd-table.toml"    # omit to use the built-in table
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTableConfig {
    pub path: Option<PathBuf>,
}

impl FileTableConfig {
    /// Table file path with `~` expanded
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(super::storage::expand_home)
    }
}
