use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user's check-in at a gym.
///
/// `check_in_day` is the calendar day of `created_at` in the service's
/// reference offset and is the deduplication key: one check-in per
/// (`user_id`, `check_in_day`). `validated_at` is `None` until an
/// administrator validates the check-in, and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckIn {
    pub id: String,
    pub user_id: String,
    pub gym_id: String,
    pub check_in_day: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

impl CheckIn {
    #[must_use]
    pub const fn is_validated(&self) -> bool {
        self.validated_at.is_some()
    }
}

/// Input for recording a check-in. Validation state always starts pending.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewCheckIn {
    pub user_id: String,
    pub gym_id: String,
    pub check_in_day: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl NewCheckIn {
    /// Materialize the record under `id`.
    #[must_use]
    pub fn into_check_in(self, id: String) -> CheckIn {
        CheckIn {
            id,
            user_id: self.user_id,
            gym_id: self.gym_id,
            check_in_day: self.check_in_day,
            created_at: self.created_at,
            validated_at: None,
        }
    }
}
