//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod case_report;
pub mod diagnose;
pub mod list_intakes;
pub mod register_intake;

#[cfg(test)]
pub(crate) mod test_support;
