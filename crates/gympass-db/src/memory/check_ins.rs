use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use gympass_core::entities::{CheckIn, NewCheckIn};
use gympass_core::ids::{PREFIX_CHECK_IN, generate_id};

use crate::error::DatabaseError;
use crate::ports::CheckInLedger;

use super::{page_slice, unused_id};

#[derive(Debug, Default)]
pub struct InMemoryCheckInLedger {
    items: Mutex<Vec<CheckIn>>,
}

impl InMemoryCheckInLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully-formed check-in as-is, bypassing the uniqueness rule.
    pub async fn insert(&self, check_in: CheckIn) {
        self.items.lock().await.push(check_in);
    }

    /// Snapshot of every stored check-in, in insertion order.
    pub async fn items(&self) -> Vec<CheckIn> {
        self.items.lock().await.clone()
    }
}

#[async_trait]
impl CheckInLedger for InMemoryCheckInLedger {
    async fn find_by_id(&self, id: &str) -> Result<Option<CheckIn>, DatabaseError> {
        let items = self.items.lock().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn find_by_user_on_date(
        &self,
        user_id: &str,
        day: NaiveDate,
    ) -> Result<Option<CheckIn>, DatabaseError> {
        let items = self.items.lock().await;
        Ok(items
            .iter()
            .find(|item| item.user_id == user_id && item.check_in_day == day)
            .cloned())
    }

    async fn find_many_by_user(
        &self,
        user_id: &str,
        page: u32,
    ) -> Result<Vec<CheckIn>, DatabaseError> {
        let mut mine: Vec<CheckIn> = {
            let items = self.items.lock().await;
            items
                .iter()
                .filter(|item| item.user_id == user_id)
                .cloned()
                .collect()
        };
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(page_slice(&mine, page))
    }

    async fn count_by_user(&self, user_id: &str) -> Result<u64, DatabaseError> {
        let items = self.items.lock().await;
        Ok(items.iter().filter(|item| item.user_id == user_id).count() as u64)
    }

    async fn create(&self, check_in: NewCheckIn) -> Result<CheckIn, DatabaseError> {
        // Check and push under one guard so concurrent creates cannot both pass.
        let mut items = self.items.lock().await;
        if items
            .iter()
            .any(|item| item.user_id == check_in.user_id && item.check_in_day == check_in.check_in_day)
        {
            return Err(DatabaseError::Conflict(format!(
                "user {} already checked in on {}",
                check_in.user_id, check_in.check_in_day
            )));
        }
        let id = unused_id(items.as_slice(), |item| item.id.as_str(), || generate_id(PREFIX_CHECK_IN))?;
        let check_in = check_in.into_check_in(id);
        items.push(check_in.clone());
        Ok(check_in)
    }

    async fn save(&self, check_in: &CheckIn) -> Result<CheckIn, DatabaseError> {
        let mut items = self.items.lock().await;
        let stored = items
            .iter_mut()
            .find(|item| item.id == check_in.id)
            .ok_or(DatabaseError::NoResult)?;

        match (stored.validated_at, check_in.validated_at) {
            (None, validated_at) => stored.validated_at = validated_at,
            (Some(current), Some(requested)) if current == requested => {}
            (Some(current), _) => {
                return Err(DatabaseError::Conflict(format!(
                    "check-in {} was already validated at {current}",
                    check_in.id
                )));
            }
        }
        Ok(stored.clone())
    }
}
