//! CLI entrypoint for bovine-triage
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triage_application::{
    DiagnoseUseCase, IntakeStore, ListIntakesUseCase, RegisterIntakeUseCase,
};
use triage_domain::{AnswerPolicy, ConfigIssue, DecisionTable};
use triage_infrastructure::{ConfigLoader, FileConfig, TableLoader, open_store};
use triage_presentation::{
    AppState, Cli, Command, IntakeSession, OutputConfig, OutputFormatter, formatter_for, serve,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let output = OutputConfig {
        format: config.output.resolve_format(cli.output.map(Into::into)),
        color: config.output.color,
    };
    output.apply();
    let formatter = formatter_for(&output);

    report_config_issues(&config.validate(), formatter.as_ref())?;

    let policy = if cli.strict {
        AnswerPolicy::Strict
    } else {
        config.checklist.parse_policy().0
    };
    info!("Checklist policy: {}", policy);

    let table_path = cli.table.clone().or_else(|| config.table.resolved_path());
    let table = Arc::new(TableLoader::load(table_path.as_deref())?);
    let diagnose = DiagnoseUseCase::new(table.clone()).with_policy(policy);

    match cli.command.unwrap_or(Command::Intake) {
        Command::Questions => {
            println!("{}", formatter.questionnaire(table.questionnaire()));
        }
        Command::CheckTable => return Ok(check_table(&table, formatter.as_ref())),
        Command::Diagnose { answers } => {
            let raw: Vec<Option<String>> = answers.into_iter().map(Some).collect();
            let diagnosis = diagnose.execute(raw.as_slice())?;
            println!("{}", formatter.diagnosis(&diagnosis));
        }
        Command::Intake => {
            let store = open_configured_store(&config)?;
            let session = IntakeSession::new(
                RegisterIntakeUseCase::new(store),
                diagnose,
                formatter,
            );
            session.run().await?;
        }
        Command::Intakes => {
            let store = open_configured_store(&config)?;
            let records = ListIntakesUseCase::new(store).execute().await?;
            println!("{}", formatter.intakes(&records).trim_end());
        }
        Command::Serve { host, port } => {
            let (addr, issues) = config.server.listen_addr(host, port);
            report_config_issues(&issues, formatter.as_ref())?;

            let store = open_configured_store(&config)?;
            let state = AppState {
                diagnose,
                register: RegisterIntakeUseCase::new(store.clone()),
                list: ListIntakesUseCase::new(store),
            };
            info!("Starting bovine-triage API ({} rules)", table.rules().len());
            serve(addr, Arc::new(state)).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Print issues to stderr; fail when any is an error
fn report_config_issues(issues: &[ConfigIssue], formatter: &dyn OutputFormatter) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    eprint!("{}", formatter.config_issues(issues));

    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn check_table(table: &DecisionTable, formatter: &dyn OutputFormatter) -> ExitCode {
    let issues = table.lint();
    println!("{}", formatter.table_issues(&issues));
    if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn open_configured_store(config: &FileConfig) -> Result<Arc<dyn IntakeStore>> {
    let (backend, _) = config.storage.parse_backend();
    Ok(open_store(&backend)?)
}
