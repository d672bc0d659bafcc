//! Diagnosis record value object

use serde::{Deserialize, Serialize};

/// A named diagnosis with its treatment protocol (Value Object).
///
/// Injection and medicine lines are kept in order and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub name: String,
    #[serde(default)]
    pub injections: Vec<String>,
    #[serde(default)]
    pub medicines: Vec<String>,
}

impl DiagnosisRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            injections: Vec::new(),
            medicines: Vec::new(),
        }
    }

    pub fn with_injections<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.injections = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_medicines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.medicines = lines.into_iter().map(Into::into).collect();
        self
    }
}

impl std::fmt::Display for DiagnosisRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
