//! Service handle wiring the repository ports to the gate policy.
//!
//! `GymPassService` holds the injected `GymDirectory` and `CheckInLedger`
//! plus a `CheckInPolicy`. Operations are implemented as `impl GymPassService`
//! blocks in the sibling modules.

use std::sync::Arc;

use gympass_db::GymDb;
use gympass_db::error::DatabaseError;
use gympass_db::memory::{InMemoryCheckInLedger, InMemoryGymDirectory};
use gympass_db::ports::{CheckInLedger, GymDirectory};

/// Stateless façade over the gym directory and check-in ledger.
#[derive(Clone)]
pub struct GymPassService {
    gyms: Arc<dyn GymDirectory>,
    check_ins: Arc<dyn CheckInLedger>,
    policy: crate::CheckInPolicy,
}

impl GymPassService {
    /// Create a service over explicitly provided stores.
    #[must_use]
    pub fn new(
        gyms: Arc<dyn GymDirectory>,
        check_ins: Arc<dyn CheckInLedger>,
        policy: crate::CheckInPolicy,
    ) -> Self {
        Self {
            gyms,
            check_ins,
            policy,
        }
    }

    /// Create a service backed by fresh in-memory stores.
    #[must_use]
    pub fn in_memory(policy: crate::CheckInPolicy) -> Self {
        Self::new(
            Arc::new(InMemoryGymDirectory::new()),
            Arc::new(InMemoryCheckInLedger::new()),
            policy,
        )
    }

    /// Create a service backed by a local libSQL database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn open_local(
        db_path: &str,
        policy: crate::CheckInPolicy,
    ) -> Result<Self, DatabaseError> {
        let db = Arc::new(GymDb::open_local(db_path).await?);
        Ok(Self::new(db.clone(), db, policy))
    }

    /// Access the gym directory.
    #[must_use]
    pub fn gyms(&self) -> &dyn GymDirectory {
        self.gyms.as_ref()
    }

    /// Access the check-in ledger.
    #[must_use]
    pub fn check_ins(&self) -> &dyn CheckInLedger {
        self.check_ins.as_ref()
    }

    /// Access the gate policy.
    #[must_use]
    pub const fn policy(&self) -> &crate::CheckInPolicy {
        &self.policy
    }
}
