//! Gym directory configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_nearby_radius_km() -> f64 {
    10.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GymsConfig {
    /// Radius, in kilometers, for nearby gym searches.
    #[serde(default = "default_nearby_radius_km")]
    pub nearby_radius_km: f64,
}

impl Default for GymsConfig {
    fn default() -> Self {
        Self {
            nearby_radius_km: default_nearby_radius_km(),
        }
    }
}

impl GymsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.nearby_radius_km.is_finite() && self.nearby_radius_km > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "gyms.nearby_radius_km".into(),
                reason: format!("must be a positive number, got {}", self.nearby_radius_km),
            })
        }
    }
}
