//! Application layer for bovine-triage
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::intake_store::{IntakeStore, StoreError};
pub use use_cases::case_report::CaseReport;
pub use use_cases::diagnose::{DiagnoseError, DiagnoseUseCase, Diagnosis};
pub use use_cases::list_intakes::ListIntakesUseCase;
pub use use_cases::register_intake::{RegisterIntakeError, RegisterIntakeUseCase};
