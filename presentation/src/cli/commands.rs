//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for triage_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => triage_domain::OutputFormat::Text,
            OutputFormat::Json => triage_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for bovine-triage
#[derive(Parser, Debug)]
#[command(name = "bovine-triage")]
#[command(author, version, about = "Cattle symptom checklist triage")]
#[command(long_about = r#"
bovine-triage maps an 8-question cattle symptom checklist to a diagnosis
with its injections and medicines.

Configuration files are loaded from (in priority order):
1. TRIAGE_* environment variables (and PORT)
2. --config <path>     Explicit config file
3. ./triage.toml       Project-level config
4. ~/.config/bovine-triage/config.toml   Global config

Example:
  bovine-triage intake
  bovine-triage intakes -o json
  bovine-triage diagnose firstoption1 secondoption1 thirdoption2 fourthoption3 fifthoption3 sixthoption2 seventhoption4 eighthoption2
  bovine-triage serve --port 5000
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Decision table file (defaults to the built-in table)
    #[arg(long, value_name = "PATH", global = true)]
    pub table: Option<PathBuf>,

    /// Reject checklists with unanswered questions
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the REST service
    Serve {
        /// Listen address (overrides [server] host)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (overrides [server] port and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Diagnose one checklist given as 8 answer codes (`-` = unanswered)
    Diagnose {
        #[arg(value_name = "CODE", num_args = 1.., allow_hyphen_values = true)]
        answers: Vec<String>,
    },
    /// Interactive session: identity form, then the checklist
    Intake,
    /// List stored intake records, newest first
    Intakes,
    /// Print the questionnaire and its answer codes
    Questions,
    /// Check the decision table for unreachable rules
    CheckTable,
}
