use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use gympass_core::entities::{Gym, NewGym};
use gympass_core::geo::Coordinate;
use gympass_core::ids::{PREFIX_GYM, generate_id};

use crate::error::DatabaseError;
use crate::ports::GymDirectory;

use super::{page_slice, unused_id};

#[derive(Debug, Default)]
pub struct InMemoryGymDirectory {
    items: Mutex<Vec<Gym>>,
}

impl InMemoryGymDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fully-formed gym as-is (fixed ids for fixtures).
    pub async fn insert(&self, gym: Gym) {
        self.items.lock().await.push(gym);
    }
}

#[async_trait]
impl GymDirectory for InMemoryGymDirectory {
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, DatabaseError> {
        let items = self.items.lock().await;
        Ok(items.iter().find(|gym| gym.id == id).cloned())
    }

    async fn search_many(&self, query: &str, page: u32) -> Result<Vec<Gym>, DatabaseError> {
        let needle = query.to_lowercase();
        let items = self.items.lock().await;
        let matches: Vec<Gym> = items
            .iter()
            .filter(|gym| gym.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(page_slice(&matches, page))
    }

    async fn find_many_nearby(
        &self,
        origin: Coordinate,
        radius_km: f64,
    ) -> Result<Vec<Gym>, DatabaseError> {
        let items = self.items.lock().await;
        let mut nearby: Vec<(f64, Gym)> = items
            .iter()
            .map(|gym| (origin.distance_to(gym.coordinate()), gym))
            .filter(|(distance, _)| *distance <= radius_km)
            .map(|(distance, gym)| (distance, gym.clone()))
            .collect();
        nearby.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(nearby.into_iter().map(|(_, gym)| gym).collect())
    }

    async fn create(&self, gym: NewGym) -> Result<Gym, DatabaseError> {
        let mut items = self.items.lock().await;
        let gym = Gym {
            id: unused_id(items.as_slice(), |item| item.id.as_str(), || generate_id(PREFIX_GYM))?,
            title: gym.title,
            description: gym.description,
            phone: gym.phone,
            latitude: gym.latitude,
            longitude: gym.longitude,
            created_at: Utc::now(),
        };
        items.push(gym.clone());
        Ok(gym)
    }
}
