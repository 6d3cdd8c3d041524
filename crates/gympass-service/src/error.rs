//! Service error types.
//!
//! Domain rejections each get their own variant so callers must handle them
//! explicitly. Storage failures pass through unchanged in `Storage`.

use chrono::NaiveDate;
use thiserror::Error;

use gympass_core::errors::CoreError;
use gympass_db::error::DatabaseError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced gym or check-in does not exist.
    #[error("Resource not found: {entity} {id}")]
    ResourceNotFound { entity: &'static str, id: String },

    /// The user is farther from the gym than the check-in radius.
    #[error(
        "Max distance reached: user is {distance_km:.3} km from gym {gym_id} (limit {max_distance_km} km)"
    )]
    MaxDistance {
        gym_id: String,
        distance_km: f64,
        max_distance_km: f64,
    },

    /// The user already checked in on this calendar day.
    #[error("Max number of check-ins reached: user {user_id} already checked in on {day}")]
    MaxNumberOfCheckIns { user_id: String, day: NaiveDate },

    /// Validation attempted after the window closed.
    #[error(
        "Check-in {check_in_id} can only be validated within {window_minutes} minutes of its creation"
    )]
    LateCheckInValidation {
        check_in_id: String,
        window_minutes: i64,
    },

    /// The check-in already carries a validation timestamp.
    #[error("Check-in {check_in_id} is already validated")]
    AlreadyValidated { check_in_id: String },

    /// Caller-supplied data failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Repository failure, propagated as-is.
    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

impl ServiceError {
    /// Whether this is a client-facing domain rejection rather than an
    /// infrastructure failure.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

impl From<CoreError> for ServiceError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(reason) => Self::InvalidInput(reason),
            other @ CoreError::Other(_) => Self::Storage(DatabaseError::Core(other)),
        }
    }
}
