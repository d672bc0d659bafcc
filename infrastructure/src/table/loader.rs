//! Decision table loading

use super::file_table::FileTable;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use triage_domain::{DecisionTable, TableError};

/// Table shipped with the binary
const BUILTIN_TABLE: &str = include_str!("../../assets/default_table.toml");

/// Errors raised while reading or assembling a table file
#[derive(Error, Debug)]
pub enum TableLoadError {
    #[error("Failed to read table file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse table file {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("Rule '{rule}' references unknown record '{record}'")]
    UnknownRecord { rule: String, record: String },

    #[error("Fallback references unknown record '{0}'")]
    UnknownFallback(String),

    #[error("Invalid decision table: {0}")]
    Invalid(#[from] TableError),
}

/// Loads decision tables from TOML
pub struct TableLoader;

impl TableLoader {
    /// Load the table at `path`, or the built-in table when `None`
    pub fn load(path: Option<&Path>) -> Result<DecisionTable, TableLoadError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// The built-in checklist table
    pub fn builtin() -> Result<DecisionTable, TableLoadError> {
        debug!("Loading built-in decision table");
        Self::parse(BUILTIN_TABLE, "<builtin>")
    }

    pub fn from_file(path: &Path) -> Result<DecisionTable, TableLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| TableLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&content, &path.display().to_string())?;
        info!(
            "Loaded decision table from {} ({} rules)",
            path.display(),
            table.rules().len()
        );
        Ok(table)
    }

    /// Parse table TOML; `origin` names the source in error messages
    pub fn parse(content: &str, origin: &str) -> Result<DecisionTable, TableLoadError> {
        let file: FileTable = toml::from_str(content).map_err(|e| TableLoadError::Parse {
            origin: origin.to_string(),
            source: Box::new(e),
        })?;
        file.into_table()
    }
}
