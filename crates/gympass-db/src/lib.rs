//! # gympass-db
//!
//! Repository ports and their adapters for gympass.
//!
//! - [`ports`]: the `GymDirectory` and `CheckInLedger` traits the service
//!   layer depends on.
//! - [`memory`]: in-memory adapters (tests, ephemeral runs).
//! - [`GymDb`]: libSQL adapter. Enforces one check-in per user per calendar
//!   day with a unique index, so concurrent check-ins cannot slip past the
//!   service-level duplicate check.

pub mod error;
pub mod helpers;
pub mod memory;
mod migrations;
pub mod ports;
pub mod repos;

use error::DatabaseError;
use libsql::Builder;

/// How many fresh ids a create tries before giving up on a collision streak.
pub(crate) const MAX_ID_ATTEMPTS: usize = 8;

/// libSQL-backed store for gyms and check-ins.
///
/// Constructed explicitly and injected into the service; there is no
/// process-wide connection.
pub struct GymDb {
    /// Owns the database handle; must outlive `conn`.
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl GymDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let gym_db = Self { db, conn };
        gym_db.run_migrations().await?;
        tracing::debug!(path, "opened gympass database");
        Ok(gym_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"chk-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
