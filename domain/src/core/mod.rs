//! Core domain concepts shared across all subdomains.
//!
//! - [`validation::ConfigIssue`]: structured configuration problems with a [`validation::Severity`]

pub mod validation;
