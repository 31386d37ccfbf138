use crate::core::number::is_valid_number_default;
use crate::domain::model::{
    SubmissionPayload, DESTNUMBER_FIELD, MESSAGE_FIELD, PASSWORD_FIELD, USERNAME_FIELD,
};
use crate::utils::error::{Result, SenderError};
use serde::{Deserialize, Serialize};

/// How much checking happens between parsing the destination and sending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Only the destination has to parse.
    #[default]
    Lenient,
    /// `username` and `destnumber` must be nine-digit numbers and
    /// `password`/`msg` must be present.
    Strict,
}

pub fn validate_payload(payload: &SubmissionPayload) -> Result<()> {
    for field in [USERNAME_FIELD, DESTNUMBER_FIELD] {
        let valid = payload.get(field).is_some_and(is_valid_number_default);
        if !valid {
            return Err(SenderError::ValidationError {
                message: format!("'{}' must be a nine-digit number", field),
            });
        }
    }

    for field in [PASSWORD_FIELD, MESSAGE_FIELD] {
        if payload.get(field).is_none() {
            return Err(SenderError::ValidationError {
                message: format!("'{}' is missing", field),
            });
        }
    }

    Ok(())
}

impl ValidationPolicy {
    pub fn check(&self, payload: &SubmissionPayload) -> Result<()> {
        match self {
            ValidationPolicy::Lenient => Ok(()),
            ValidationPolicy::Strict => validate_payload(payload),
        }
    }
}
