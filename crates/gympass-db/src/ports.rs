//! Repository ports consumed by the gympass service layer.
//!
//! Two adapters implement both traits: the in-memory stores in
//! [`crate::memory`] and the libSQL-backed [`crate::GymDb`]. Services hold
//! them as `Arc<dyn GymDirectory>` / `Arc<dyn CheckInLedger>`.

use async_trait::async_trait;
use chrono::NaiveDate;

use gympass_core::entities::{CheckIn, Gym, NewCheckIn, NewGym};
use gympass_core::geo::Coordinate;

use crate::error::DatabaseError;

/// Gym records: lookup, title search, proximity search, registration.
#[async_trait]
pub trait GymDirectory: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, DatabaseError>;

    /// Case-insensitive title substring search, 1-indexed pages of
    /// [`gympass_core::PAGE_SIZE`], in registration order.
    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>, DatabaseError>;

    /// Every gym within `radius_km` of `origin`, nearest first.
    async fn find_many_nearby(
        &self,
        origin: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Gym>, DatabaseError>;

    async fn create(&self, gym: NewGym) -> Result<Gym, DatabaseError>;
}

/// Check-in records. The ledger owns uniqueness of (`user_id`, `check_in_day`).
#[async_trait]
pub trait CheckInLedger: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<CheckIn>, DatabaseError>;

    async fn find_by_user_on_date(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> Result<Option<CheckIn>, DatabaseError>;

    /// 1-indexed pages of [`gympass_core::PAGE_SIZE`], newest first.
    async fn find_many_by_user(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<CheckIn>, DatabaseError>;

    async fn count_by_user(&self, user_id: &str) -> Result<u64, DatabaseError>;

    /// Persist a new pending check-in.
    ///
    /// Must fail with `DatabaseError::Conflict` when the user already has a
    /// check-in on `check_in_day`, atomically with respect to concurrent calls.
    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, DatabaseError>;

    /// Update a check-in in place by id. Only `validated_at` is mutable, and
    /// only from `None` to `Some`.
    ///
    /// Fails with `DatabaseError::NoResult` for an unknown id and
    /// `DatabaseError::Conflict` if the stored record was already validated
    /// with a different timestamp.
    async fn save(&self, check_in: &CheckIn) -> Result<CheckIn, DatabaseError>;
}
