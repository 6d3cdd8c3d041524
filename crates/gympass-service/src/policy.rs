//! Gate parameters for check-in and validation.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeDelta, Utc};

use gympass_config::{ConfigError, GymPassConfig};

/// Users must be within 100 meters of the gym.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 0.1;
/// Check-ins can be validated up to 20 minutes after creation.
pub const DEFAULT_VALIDATION_WINDOW_MINUTES: i64 = 20;
/// Radius of the nearby-gyms search.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInPolicy {
    pub max_distance_km: f64,
    pub validation_window: TimeDelta,
    /// Offset whose local date is the calendar day of a check-in.
    pub day_offset: FixedOffset,
    pub nearby_radius_km: f64,
}

impl Default for CheckInPolicy {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            validation_window: TimeDelta::minutes(DEFAULT_VALIDATION_WINDOW_MINUTES),
            day_offset: Utc.fix(),
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
        }
    }
}

impl CheckInPolicy {
    /// Build the policy from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the day offset is out of range.
    pub fn from_config(config: &GymPassConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            max_distance_km: config.check_in.max_distance_km,
            validation_window: config.check_in.validation_window(),
            day_offset: config.check_in.day_offset()?,
            nearby_radius_km: config.gyms.nearby_radius_km,
        })
    }

    /// The calendar day `at` falls on, in the policy's reference offset.
    #[must_use]
    pub fn calendar_day(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.day_offset).date_naive()
    }

    /// Whether a check-in created at `created_at` may still be validated at `now`.
    ///
    /// The window is inclusive: exactly `validation_window` after creation is
    /// still on time.
    #[must_use]
    pub fn within_validation_window(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(created_at) <= self.validation_window
    }
}
