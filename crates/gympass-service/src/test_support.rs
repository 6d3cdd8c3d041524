//! Shared fixtures for service unit tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use gympass_core::entities::Gym;
use gympass_core::geo::Coordinate;
use gympass_db::memory::{InMemoryCheckInLedger, InMemoryGymDirectory};

use crate::{CheckInPolicy, GymPassService};

pub const GYM_ID: &str = "gym-01";
pub const DISTANT_GYM_ID: &str = "gym-02";
pub const USER_ID: &str = "user-01";

pub const AT_GYM: Coordinate = Coordinate::new(-23.280_504_5, -45.894_463_8);
/// About 20 km east of [`AT_GYM`].
pub const TWENTY_KM_AWAY: Coordinate = Coordinate::new(-23.213_451_3, -45.673_399_8);

pub fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, hour, minute, 0).unwrap()
}

fn gym(id: &str, title: &str, location: Coordinate) -> Gym {
    Gym {
        id: id.into(),
        title: title.into(),
        description: None,
        phone: None,
        latitude: location.latitude,
        longitude: location.longitude,
        created_at: at(7, 1, 0, 0),
    }
}

/// In-memory service seeded with `gym-01` at [`AT_GYM`] and `gym-02` at
/// [`TWENTY_KM_AWAY`]. The ledger handle is returned for inspection.
pub async fn seeded_service() -> (GymPassService, Arc<InMemoryCheckInLedger>) {
    let gyms = Arc::new(InMemoryGymDirectory::new());
    gyms.insert(gym(GYM_ID, "Gym Russel", AT_GYM)).await;
    gyms.insert(gym(DISTANT_GYM_ID, "Gym Jeje", TWENTY_KM_AWAY)).await;

    let ledger = Arc::new(InMemoryCheckInLedger::new());
    let service = GymPassService::new(gyms, ledger.clone(), CheckInPolicy::default());
    (service, ledger)
}
