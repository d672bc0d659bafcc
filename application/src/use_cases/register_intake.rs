//! Register Intake use case
//!
//! Validates the identity form and persists it through the [`IntakeStore`] port.

use crate::ports::intake_store::{IntakeStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use triage_domain::{IntakeForm, IntakeRecord, ValidationError};

/// Errors that can occur while registering an intake
#[derive(Error, Debug)]
pub enum RegisterIntakeError {
    #[error("Invalid intake: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Use case for saving a farmer/cow identity record
pub struct RegisterIntakeUseCase {
    store: Arc<dyn IntakeStore>,
}

impl RegisterIntakeUseCase {
    pub fn new(store: Arc<dyn IntakeStore>) -> Self {
        Self { store }
    }

    /// Validate the form, then store it. Invalid forms never reach the store.
    pub async fn execute(&self, form: &IntakeForm) -> Result<IntakeRecord, RegisterIntakeError> {
        let intake = form.validate().inspect_err(|e| {
            warn!("Rejected intake form: {}", e);
        })?;

        let record = self.store.create(intake).await?;
        info!(
            "Saved intake {} for {} ({})",
            record.id, record.intake.cow_name, record.intake.username
        );
        Ok(record)
    }
}
