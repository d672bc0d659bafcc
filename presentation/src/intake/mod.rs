//! Interactive intake module
//!
//! Provides a readline-based identity form and checklist session.

mod session;

pub(crate) use session::validation_message;
pub use session::IntakeSession;
