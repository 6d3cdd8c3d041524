//! Check-in history and per-user metrics.

use gympass_core::entities::{CheckIn, UserMetrics};

use crate::error::ServiceError;
use crate::service::GymPassService;

impl GymPassService {
    /// One page of a user's check-ins, newest first.
    ///
    /// Pages are 1-indexed and hold [`gympass_core::PAGE_SIZE`] records; page
    /// `0` is treated as page `1`. A page past the end is empty.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the ledger query fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check_in_history(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<CheckIn>, ServiceError> {
        Ok(self.check_ins().find_many_by_user(user_id, page).await?)
    }

    /// Total check-ins ever recorded for a user, validated or not.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the ledger query fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn user_metrics(&self, user_id: &str) -> Result<UserMetrics, ServiceError> {
        let check_ins_count = self.check_ins().count_by_user(user_id).await?;
        Ok(UserMetrics { check_ins_count })
    }
}
