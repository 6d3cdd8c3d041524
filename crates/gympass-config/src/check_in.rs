//! Check-in gate configuration.

use chrono::{FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Users must be within 100 meters of the gym.
const fn default_max_distance_km() -> f64 {
    0.1
}

const fn default_validation_window_minutes() -> i64 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckInConfig {
    /// Maximum distance between the user and the gym, in kilometers.
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,

    /// How long after creation a check-in can still be validated.
    #[serde(default = "default_validation_window_minutes")]
    pub validation_window_minutes: i64,

    /// Fixed offset from UTC, in minutes, that defines calendar days for the
    /// one-check-in-per-day rule.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            max_distance_km: default_max_distance_km(),
            validation_window_minutes: default_validation_window_minutes(),
            utc_offset_minutes: 0,
        }
    }
}

impl CheckInConfig {
    /// The validation window as a duration. Saturates on overflow; `validate`
    /// rejects such values at load time.
    #[must_use]
    pub fn validation_window(&self) -> TimeDelta {
        TimeDelta::try_minutes(self.validation_window_minutes).unwrap_or(TimeDelta::MAX)
    }

    /// The reference offset for calendar days.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the offset is a day or more.
    pub fn day_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "check_in.utc_offset_minutes".into(),
                reason: format!(
                    "{} is outside the open range (-1440, 1440)",
                    self.utc_offset_minutes
                ),
            })
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_distance_km.is_finite() && self.max_distance_km > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "check_in.max_distance_km".into(),
                reason: format!("must be a positive number, got {}", self.max_distance_km),
            });
        }
        if self.validation_window_minutes <= 0
            || TimeDelta::try_minutes(self.validation_window_minutes).is_none()
        {
            return Err(ConfigError::InvalidValue {
                field: "check_in.validation_window_minutes".into(),
                reason: format!(
                    "must be positive, got {}",
                    self.validation_window_minutes
                ),
            });
        }
        self.day_offset().map(|_| ())
    }
}
