//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};

/// Raw output configuration from TOML
///
/// ```toml
/// [output]
/// format = "json"    # "text" or "json"
/// color = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Unset means text, unless `--output` says otherwise
    pub format: Option<String>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parse `format`. An unknown value is a warning and counts as unset.
    pub fn parse_format(&self) -> (Option<OutputFormat>, Vec<ConfigIssue>) {
        let Some(raw) = &self.format else {
            return (None, vec![]);
        };
        match raw.parse::<OutputFormat>() {
            Ok(format) => (Some(format), vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: raw.clone(),
                        valid_values: vec!["text".to_string(), "json".to_string()],
                    },
                    message: format!("output.format: unknown value '{}', ignoring it", raw),
                };
                (None, vec![issue])
            }
        }
    }

    /// Pick the format: command line first, then this section, then text.
    pub fn resolve_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.or(self.parse_format().0).unwrap_or_default()
    }
}
