//! Farmer and cow identity collected before the checklist.

pub mod form;
pub mod record;

pub use form::{AgeField, IntakeForm, NewIntake, ValidationError};
pub use record::{IntakeId, IntakeRecord, sort_newest_first};
