//! Gym directory use cases: registration, title search, nearby search.

use gympass_core::entities::{Gym, NewGym};
use gympass_core::geo::Coordinate;

use crate::error::ServiceError;
use crate::service::GymPassService;

impl GymPassService {
    /// Register a gym.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidInput` for a blank title or non-finite
    /// coordinates, `ServiceError::Storage` if the directory write fails.
    #[tracing::instrument(level = "debug", skip(self, gym), fields(title = %gym.title))]
    pub async fn create_gym(&self, gym: NewGym) -> Result<Gym, ServiceError> {
        gym.validate()?;
        Ok(self.gyms().create(gym).await?)
    }

    /// Gyms whose title contains `query`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the directory query fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn search_gyms(&self, query: &str, page: u32) -> Result<Vec<Gym>, ServiceError> {
        Ok(self.gyms().search_many(query, page).await?)
    }

    /// Gyms within the policy's nearby radius of `user_location`, nearest first.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::InvalidInput` for a non-finite location,
    /// `ServiceError::Storage` if the directory query fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_nearby_gyms(
        &self,
        user_location: Coordinate,
    ) -> Result<Vec<Gym>, ServiceError> {
        if !user_location.is_finite() {
            return Err(ServiceError::InvalidInput(
                "user location must be a finite coordinate".into(),
            ));
        }
        Ok(self
            .gyms()
            .find_many_nearby(user_location, self.policy().nearby_radius_km)
            .await?)
    }
}
