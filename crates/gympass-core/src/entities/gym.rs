use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::geo::Coordinate;

/// A gym users can check in at. Immutable once registered.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Gym {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl Gym {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Input for registering a gym.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewGym {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewGym {
    #[must_use]
    pub fn new(title: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            title: title.into(),
            description: None,
            phone: None,
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Check the title is non-empty and the coordinates are finite.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` describing the first violated rule.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("gym title must not be empty".into()));
        }
        if !self.coordinate().is_finite() {
            return Err(CoreError::Validation(format!(
                "gym coordinates must be finite, got ({}, {})",
                self.latitude, self.longitude
            )));
        }
        Ok(())
    }
}
