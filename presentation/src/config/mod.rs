//! Presentation-level configuration
//!
//! Configuration for output formatting.

use triage_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting to the terminal
    pub fn apply(&self) {
        colored::control::set_override(self.color);
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
