//! Presentation layer for bovine-triage
//!
//! This crate contains CLI definitions, output formatters,
//! the interactive intake session and the REST API.

pub mod cli;
pub mod config;
pub mod http;
pub mod intake;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use http::{AppState, router, serve};
pub use intake::IntakeSession;
pub use output::console::{ConsoleFormatter, JsonFormatter, formatter_for};
pub use output::formatter::OutputFormatter;
