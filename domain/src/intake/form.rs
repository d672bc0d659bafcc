//! Identity form submitted before the checklist

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating an [`IntakeForm`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("cowAge must be a non-negative integer, got '{0}'")]
    InvalidAge(String),
}

/// Cow age as submitted: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeField {
    Number(i64),
    Text(String),
}

impl AgeField {
    fn is_blank(&self) -> bool {
        match self {
            AgeField::Number(_) => false,
            AgeField::Text(s) => s.trim().is_empty(),
        }
    }

    fn parse(&self) -> Result<u32, ValidationError> {
        match self {
            AgeField::Number(n) => {
                u32::try_from(*n).map_err(|_| ValidationError::InvalidAge(n.to_string()))
            }
            AgeField::Text(s) => s
                .trim()
                .parse::<u32>()
                .map_err(|_| ValidationError::InvalidAge(s.clone())),
        }
    }
}

impl From<&str> for AgeField {
    fn from(s: &str) -> Self {
        AgeField::Text(s.to_string())
    }
}

/// Raw identity form (farmer and cow).
///
/// Field names on the wire follow the web form: `username`, `userContact`,
/// `cowName`, `cowAge`, `cowBreed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeForm {
    pub username: Option<String>,
    pub user_contact: Option<String>,
    pub cow_name: Option<String>,
    pub cow_age: Option<AgeField>,
    pub cow_breed: Option<String>,
}

/// Validated identity data, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIntake {
    pub username: String,
    pub user_contact: String,
    pub cow_name: String,
    pub cow_age: u32,
    pub cow_breed: String,
}

impl IntakeForm {
    /// Check presence of every field, then the age.
    ///
    /// Text fields are trimmed. All missing fields are reported together.
    pub fn validate(&self) -> Result<NewIntake, ValidationError> {
        let mut missing = Vec::new();

        let username = required(&self.username, "username", &mut missing);
        let user_contact = required(&self.user_contact, "userContact", &mut missing);
        let cow_name = required(&self.cow_name, "cowName", &mut missing);
        let cow_breed = required(&self.cow_breed, "cowBreed", &mut missing);
        let cow_age = match &self.cow_age {
            Some(age) if !age.is_blank() => Some(age),
            _ => {
                missing.push("cowAge");
                None
            }
        };

        // Keep the form's field order in the report
        missing.sort_by_key(|field| FIELD_ORDER.iter().position(|f| f == field));

        match (username, user_contact, cow_name, cow_age, cow_breed) {
            (Some(username), Some(user_contact), Some(cow_name), Some(age), Some(cow_breed)) => {
                Ok(NewIntake {
                    username,
                    user_contact,
                    cow_name,
                    cow_age: age.parse()?,
                    cow_breed,
                })
            }
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }
}

const FIELD_ORDER: [&str; 5] = ["username", "userContact", "cowName", "cowAge", "cowBreed"];

fn required(
    value: &Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            missing.push(field);
            None
        }
    }
}
